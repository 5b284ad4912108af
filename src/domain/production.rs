use chrono::NaiveDateTime;
use serde::Serialize;

labeled_enum! {
    pub enum BatchStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Rejected => "Rejected",
    }
    default = Scheduled;
}

labeled_enum! {
    /// Outcome of a slump, cube or temperature test.
    pub enum QcResult {
        Pass => "Pass",
        Fail => "Fail",
        Pending => "Pending",
    }
    default = Pending;
}

/// One batching run at a plant location, optionally tied to an order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductionBatch {
    pub id: i32,
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: f64,
    pub location_id: Option<i32>,
    pub batch_time: NaiveDateTime,
    pub status: BatchStatus,
    /// User account that scheduled the batch.
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchView {
    #[serde(flatten)]
    pub batch: ProductionBatch,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
    pub location_name: Option<String>,
    pub created_by_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProductionBatch {
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: f64,
    pub location_id: Option<i32>,
    pub batch_time: NaiveDateTime,
    pub status: BatchStatus,
    pub created_by: Option<i32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualityCheck {
    pub id: i32,
    pub batch_id: i32,
    pub test_type: String,
    pub test_date: NaiveDateTime,
    pub result: QcResult,
    /// Employee who ran the test.
    pub tested_by: Option<i32>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QualityCheckView {
    #[serde(flatten)]
    pub check: QualityCheck,
    pub tester_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewQualityCheck {
    pub batch_id: i32,
    pub test_type: String,
    pub test_date: NaiveDateTime,
    pub result: QcResult,
    pub tested_by: Option<i32>,
    pub remarks: Option<String>,
}
