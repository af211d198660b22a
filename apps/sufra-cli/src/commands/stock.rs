//! `sufra stock`: ingredient links and deduction preview for one menu item.

use serde::Serialize;
use sufra_core::{deduction_preview, required_links_resolved, resolve_links, Catalog, ResolvedLink, StockDeduction};
use tracing::warn;

use crate::config::CustomizerConfig;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    pub menu_item_id: String,
    pub quantity: u32,
    pub links: Vec<ResolvedLink>,
    pub required_links_resolved: bool,
    pub deductions: Vec<StockDeduction>,
}

pub fn build_report(catalog: &Catalog, item_id: &str, quantity: u32) -> AppResult<StockReport> {
    let item = catalog.menu_item(item_id)?;
    let links = &item.inventory_items;

    Ok(StockReport {
        menu_item_id: item.id.clone(),
        quantity,
        links: resolve_links(links, &catalog.inventory),
        required_links_resolved: required_links_resolved(links, &catalog.inventory),
        deductions: deduction_preview(links, &catalog.inventory, quantity),
    })
}

pub fn run(catalog: &Catalog, config: &CustomizerConfig, item_id: &str, quantity: u32) -> AppResult<()> {
    let report = build_report(catalog, item_id, quantity)?;

    let short = report.deductions.iter().filter(|d| !d.sufficient).count();
    if short > 0 {
        warn!(menu_item_id = %report.menu_item_id, quantity, short, "Stock does not cover every ingredient");
    }

    super::emit(&report, config.output.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sufra_core::LinkStockStatus;

    const CATALOG: &str = r#"{
        "menuItems": [{
            "id": "falafel", "name": "فلافل", "price": 8,
            "inventoryItems": [
                { "inventoryItemId": "chickpeas", "portion": 0.15, "required": true },
                { "inventoryItemId": "tahini", "portion": 0.03 }
            ]
        }],
        "inventory": [
            { "id": "chickpeas", "name": "حمص", "currentStock": 1.5, "unit": "kg", "minStockLevel": 1 }
        ]
    }"#;

    #[test]
    fn test_stock_report() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let report = build_report(&catalog, "falafel", 4).unwrap();

        assert!(report.required_links_resolved);
        assert_eq!(report.links[0].stock_status, LinkStockStatus::InStock);
        assert_eq!(report.links[1].stock_status, LinkStockStatus::Unknown);

        assert!((report.deductions[0].required_quantity - 0.6).abs() < 1e-9);
        assert_eq!(report.deductions[0].status_after, LinkStockStatus::LowStock);
        assert!(report.deductions[0].sufficient);
        assert!(!report.deductions[1].sufficient);
    }

    #[test]
    fn test_unknown_item() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert!(build_report(&catalog, "kunafa", 1).is_err());
    }
}
