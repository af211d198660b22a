use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Item customization engine: configure menu items and preview ingredient stock
#[derive(Parser)]
#[command(name = "sufra", version, about)]
pub struct Cli {
    /// Catalog snapshot (JSON with menuItems, modifiers, inventory)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a customization session, apply actions and print the result
    Configure {
        /// Menu item id
        #[arg(long)]
        item: String,

        /// Tap an option, applied in the order given
        #[arg(long = "toggle", value_name = "MODIFIER:OPTION")]
        toggles: Vec<String>,

        /// Clear an option without choosing a replacement, applied after toggles
        #[arg(long = "deselect", value_name = "MODIFIER:OPTION")]
        deselects: Vec<String>,

        /// Quantity for the committed line
        #[arg(long, default_value_t = 1)]
        quantity: i64,

        /// Commit the configuration into an order line
        #[arg(long)]
        commit: bool,
    },

    /// Resolve a menu item's ingredient links and preview stock deduction
    Stock {
        /// Menu item id
        #[arg(long)]
        item: String,

        /// Units of the menu item to preview
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },

    /// Report catalog data-quality issues
    Audit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_configure_collects_actions_in_order() {
        let cli = Cli::parse_from([
            "sufra",
            "--catalog",
            "menu.json",
            "configure",
            "--item",
            "burger",
            "--toggle",
            "size:large",
            "--toggle",
            "extras:cheese",
            "--deselect",
            "bread:saj",
            "--commit",
        ]);

        assert_eq!(cli.catalog, Some(PathBuf::from("menu.json")));
        match cli.command {
            Commands::Configure {
                item,
                toggles,
                deselects,
                quantity,
                commit,
            } => {
                assert_eq!(item, "burger");
                assert_eq!(toggles, vec!["size:large", "extras:cheese"]);
                assert_eq!(deselects, vec!["bread:saj"]);
                assert_eq!(quantity, 1);
                assert!(commit);
            }
            _ => panic!("expected configure"),
        }
    }
}
