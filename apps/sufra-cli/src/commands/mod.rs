//! Subcommand handlers. Each one reads the loaded catalog and writes a JSON
//! document to stdout.

pub mod audit;
pub mod configure;
pub mod stock;

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use sufra_core::Catalog;

use crate::error::AppResult;

/// Reads and parses a catalog snapshot.
pub fn load_catalog(path: &Path) -> AppResult<Catalog> {
    let contents = std::fs::read_to_string(path)?;
    Ok(Catalog::from_json(&contents)?)
}

/// Writes `value` to stdout as JSON.
pub fn emit<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::path::PathBuf;

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog(&PathBuf::from("/nonexistent/sufra/menu.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
