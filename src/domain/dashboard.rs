use serde::Serialize;

use crate::domain::inventory::InventoryItem;
use crate::domain::job_card::JobCardView;
use crate::domain::order::OrderView;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_orders: i64,
    /// Orders that are `Confirmed` or `Pending`.
    pub pending_orders: i64,
    /// Job cards that are `Open` or `In Progress`.
    pub active_jobs: i64,
    pub total_vehicles: i64,
    pub available_vehicles: i64,
    /// Materials at or below their reorder threshold.
    pub low_inventory: i64,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_orders: Vec<OrderView>,
    pub recent_jobs: Vec<JobCardView>,
    /// Low-stock materials, most urgent first.
    pub low_stock: Vec<InventoryItem>,
}
