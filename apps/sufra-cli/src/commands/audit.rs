//! `sufra audit`: catalog data-quality report.

use serde::Serialize;
use sufra_core::validation::{audit_modifier, CatalogIssue};
use sufra_core::Catalog;
use tracing::info;

use crate::config::CustomizerConfig;
use crate::error::AppResult;

/// Something a menu item points at that the snapshot does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DanglingReference {
    pub menu_item_id: String,
    /// `modifier` or `inventory_item`.
    pub kind: &'static str,
    pub target_id: String,
    pub required: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub modifier_issues: Vec<CatalogIssue>,
    pub dangling_references: Vec<DanglingReference>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.modifier_issues.is_empty() && self.dangling_references.is_empty()
    }
}

pub fn build_report(catalog: &Catalog) -> AuditReport {
    let modifier_issues = catalog.modifiers.iter().flat_map(audit_modifier).collect();

    let mut dangling_references = Vec::new();
    for item in &catalog.menu_items {
        for modifier_id in &item.modifier_ids {
            if !catalog.modifiers.iter().any(|m| &m.id == modifier_id) {
                dangling_references.push(DanglingReference {
                    menu_item_id: item.id.clone(),
                    kind: "modifier",
                    target_id: modifier_id.clone(),
                    required: false,
                });
            }
        }
        for link in &item.inventory_items {
            if !catalog.inventory.iter().any(|i| i.id == link.inventory_item_id) {
                dangling_references.push(DanglingReference {
                    menu_item_id: item.id.clone(),
                    kind: "inventory_item",
                    target_id: link.inventory_item_id.clone(),
                    required: link.required,
                });
            }
        }
    }

    AuditReport {
        modifier_issues,
        dangling_references,
    }
}

pub fn run(catalog: &Catalog, config: &CustomizerConfig) -> AppResult<()> {
    let report = build_report(catalog);
    for issue in &report.modifier_issues {
        info!(%issue, "Catalog issue");
    }
    info!(
        issues = report.modifier_issues.len(),
        dangling = report.dangling_references.len(),
        "Catalog audit finished"
    );
    super::emit(&report, config.output.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_catalog() {
        let catalog = Catalog::from_json(
            r#"{
                "menuItems": [{ "id": "hummus", "name": "حمص", "price": 6, "modifiers": ["oil"] }],
                "modifiers": [{
                    "id": "oil", "name": "زيت", "type": "single",
                    "options": [{ "id": "olive", "name": "زيت زيتون", "price": 0, "isDefault": true }]
                }]
            }"#,
        )
        .unwrap();
        assert!(build_report(&catalog).is_clean());
    }

    #[test]
    fn test_reports_issues_and_dangling_references() {
        let catalog = Catalog::from_json(
            r#"{
                "menuItems": [{
                    "id": "mansaf", "name": "منسف", "price": 25,
                    "modifiers": ["rice", "sauce"],
                    "inventoryItems": [{ "inventoryItemId": "jameed", "portion": 0.2, "required": true }]
                }],
                "modifiers": [{
                    "id": "rice", "name": "الأرز", "type": "single", "required": true, "options": []
                }]
            }"#,
        )
        .unwrap();

        let report = build_report(&catalog);
        assert_eq!(report.modifier_issues.len(), 1);
        assert_eq!(report.modifier_issues[0].modifier_id, "rice");

        assert_eq!(report.dangling_references.len(), 2);
        assert_eq!(report.dangling_references[0].target_id, "sauce");
        assert_eq!(report.dangling_references[1].kind, "inventory_item");
        assert!(report.dangling_references[1].required);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["modifierIssues"][0]["issue"], "required_without_options");
        assert_eq!(json["danglingReferences"][0]["menuItemId"], "mansaf");
    }
}
