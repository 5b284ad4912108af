use chrono::NaiveDate;
use serde::Serialize;

labeled_enum! {
    pub enum StockStatus {
        Low => "Low Stock",
        Normal => "In Stock",
    }
    default = Normal;
}

/// Raw material held at the plant (cement, aggregates, admixtures, water).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InventoryItem {
    pub id: i32,
    pub name: String,
    pub supplier_id: Option<i32>,
    pub current_stock: f64,
    pub unit: String,
    /// Reorder level; stock at or below it is reported as low.
    pub threshold: f64,
    pub last_updated: NaiveDate,
}

impl InventoryItem {
    pub fn stock_status(&self) -> StockStatus {
        if self.current_stock <= self.threshold {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Stock relative to the threshold; lower means more urgent.
    pub fn stock_ratio(&self) -> f64 {
        if self.threshold > 0.0 {
            self.current_stock / self.threshold
        } else {
            self.current_stock
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InventoryView {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub supplier_name: Option<String>,
    pub stock_status: StockStatus,
}

impl InventoryView {
    pub fn new(item: InventoryItem, supplier_name: Option<String>) -> Self {
        let stock_status = item.stock_status();
        Self {
            item,
            supplier_name,
            stock_status,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryItem {
    pub name: String,
    pub supplier_id: Option<i32>,
    pub current_stock: f64,
    pub unit: String,
    pub threshold: f64,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInventoryItem {
    pub name: String,
    pub supplier_id: Option<i32>,
    pub current_stock: f64,
    pub unit: String,
    pub threshold: f64,
    pub last_updated: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: f64, threshold: f64) -> InventoryItem {
        InventoryItem {
            id: 1,
            name: "Cement OPC 53".to_string(),
            supplier_id: None,
            current_stock: stock,
            unit: "t".to_string(),
            threshold,
            last_updated: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
        }
    }

    #[test]
    fn stock_at_threshold_is_low() {
        assert_eq!(item(10.0, 10.0).stock_status(), StockStatus::Low);
        assert_eq!(item(10.5, 10.0).stock_status(), StockStatus::Normal);
    }

    #[test]
    fn stock_ratio_handles_zero_threshold() {
        assert_eq!(item(5.0, 0.0).stock_ratio(), 5.0);
        assert_eq!(item(5.0, 10.0).stock_ratio(), 0.5);
    }

    #[test]
    fn view_serializes_stock_status_label() {
        let view = InventoryView::new(item(1.0, 4.0), Some("UltraTech".to_string()));
        let value = serde_json::to_value(&view).expect("serialize");

        assert_eq!(value["stock_status"], "Low Stock");
        assert_eq!(value["name"], "Cement OPC 53");
        assert_eq!(value["supplier_name"], "UltraTech");
    }
}
