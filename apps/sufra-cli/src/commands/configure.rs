//! `sufra configure`: one customization session driven from the command line.

use serde::Serialize;
use sufra_core::{Catalog, CustomizationSession, PricedSelection};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::CustomizerConfig;
use crate::error::{AppError, AppResult};

pub struct Args {
    pub item: String,
    pub toggles: Vec<String>,
    pub deselects: Vec<String>,
    pub quantity: i64,
    pub commit: bool,
}

/// An action that left the selection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoredAction {
    pub action: &'static str,
    pub modifier_id: String,
    pub option_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport {
    session_id: Uuid,
    #[serde(flatten)]
    priced: PricedSelection,
    ignored_actions: Vec<IgnoredAction>,
}

/// Splits `MODIFIER:OPTION`. Both halves must be non-empty.
pub fn parse_action(raw: &str) -> AppResult<(String, String)> {
    match raw.split_once(':') {
        Some((modifier, option)) if !modifier.trim().is_empty() && !option.trim().is_empty() => {
            Ok((modifier.trim().to_string(), option.trim().to_string()))
        }
        _ => Err(AppError::InvalidAction(raw.to_string())),
    }
}

/// Applies toggles in order, then deselects, and returns the actions that
/// changed nothing.
pub fn apply_actions(
    session: &mut CustomizationSession,
    toggles: &[String],
    deselects: &[String],
) -> AppResult<Vec<IgnoredAction>> {
    let mut ignored = Vec::new();

    for raw in toggles {
        let (modifier_id, option_id) = parse_action(raw)?;
        if !session.toggle(&modifier_id, &option_id) {
            ignored.push(IgnoredAction {
                action: "toggle",
                modifier_id,
                option_id,
            });
        }
    }

    for raw in deselects {
        let (modifier_id, option_id) = parse_action(raw)?;
        if !session.deselect(&modifier_id, &option_id) {
            ignored.push(IgnoredAction {
                action: "deselect",
                modifier_id,
                option_id,
            });
        }
    }

    Ok(ignored)
}

pub fn run(catalog: &Catalog, config: &CustomizerConfig, args: Args) -> AppResult<()> {
    let item = catalog.menu_item(&args.item)?;
    let mut session = CustomizationSession::for_menu_item(item, catalog, config.initializer_policy());

    let ignored = apply_actions(&mut session, &args.toggles, &args.deselects)?;
    if !ignored.is_empty() {
        warn!(session_id = %session.id(), count = ignored.len(), "Some actions left the selection unchanged");
    }

    if args.commit {
        let line = session.commit(item, args.quantity, config.order.max_quantity)?;
        info!(line_id = %line.id, menu_item_id = %line.menu_item_id, line_total = %line.line_total, "Order line committed");
        return super::emit(&line, config.output.pretty);
    }

    let report = SessionReport {
        session_id: session.id(),
        priced: session.priced_selection(),
        ignored_actions: ignored,
    };
    super::emit(&report, config.output.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sufra_core::InitializerPolicy;

    const CATALOG: &str = r#"{
        "menuItems": [
            { "id": "shawarma", "name": "شاورما دجاج", "price": 18, "modifiers": ["size", "extras"] }
        ],
        "modifiers": [
            {
                "id": "size", "name": "الحجم", "type": "single", "required": true,
                "options": [
                    { "id": "regular", "name": "عادي", "price": 0 },
                    { "id": "large", "name": "كبير", "price": 4 }
                ]
            },
            {
                "id": "extras", "name": "إضافات", "type": "multiple", "maxSelections": 2,
                "options": [
                    { "id": "cheese", "name": "جبنة", "price": 2.5 },
                    { "id": "garlic", "name": "ثوم", "price": 1 },
                    { "id": "fries", "name": "بطاطا", "price": 3 }
                ]
            }
        ]
    }"#;

    fn session() -> (Catalog, CustomizationSession) {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let item = catalog.menu_item("shawarma").unwrap().clone();
        let session = CustomizationSession::for_menu_item(&item, &catalog, InitializerPolicy::default());
        (catalog, session)
    }

    fn actions(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(
            parse_action("size:large").unwrap(),
            ("size".to_string(), "large".to_string())
        );
        assert_eq!(
            parse_action(" extras : cheese ").unwrap(),
            ("extras".to_string(), "cheese".to_string())
        );
        assert!(matches!(parse_action("size"), Err(AppError::InvalidAction(_))));
        assert!(matches!(parse_action(":large"), Err(AppError::InvalidAction(_))));
        assert!(matches!(parse_action("size:"), Err(AppError::InvalidAction(_))));
    }

    #[test]
    fn test_apply_actions_prices_selection() {
        let (_, mut session) = session();
        let ignored = apply_actions(
            &mut session,
            &actions(&["size:large", "extras:cheese", "extras:garlic"]),
            &[],
        )
        .unwrap();

        assert!(ignored.is_empty());
        assert_eq!(session.total_price().cents(), 1800 + 400 + 250 + 100);
    }

    #[test]
    fn test_apply_actions_reports_noops() {
        let (_, mut session) = session();
        let ignored = apply_actions(
            &mut session,
            &actions(&["extras:cheese", "extras:garlic", "extras:fries", "size:huge"]),
            &actions(&["size:regular", "extras:garlic"]),
        )
        .unwrap();

        // fries is over maxSelections, huge is unknown, size is required
        assert_eq!(ignored.len(), 3);
        assert_eq!(ignored[0].option_id, "fries");
        assert_eq!(ignored[1].option_id, "huge");
        assert_eq!(ignored[2].action, "deselect");
        assert!(!session.state().is_selected("extras", "garlic"));
    }

    #[test]
    fn test_report_json_shape() {
        let (_, mut session) = session();
        let ignored = apply_actions(&mut session, &actions(&["extras:cheese"]), &[]).unwrap();

        let report = SessionReport {
            session_id: session.id(),
            priced: session.priced_selection(),
            ignored_actions: ignored,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalPrice"], 20.5);
        assert_eq!(json["canCheckout"], true);
        assert!(json["sessionId"].is_string());
        assert!(json["ignoredActions"].as_array().unwrap().is_empty());
        assert_eq!(json["selectedModifiers"][0]["modifierId"], "size");
    }

    #[test]
    fn test_malformed_action_aborts() {
        let (_, mut session) = session();
        let result = apply_actions(&mut session, &actions(&["size-large"]), &[]);
        assert!(matches!(result, Err(AppError::InvalidAction(_))));
    }
}
