use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::job_card::MaterialUsage;

pub const ORDER_CREATED_DETAILS: &str = "Order created, awaiting job card generation";
pub const AUTO_JOB_DETAILS: &str = "Job card automatically created from confirmed order";

labeled_enum! {
    /// Kind of hand-off recorded between the ERP and the Job Kart.
    pub enum IntegrationEventType {
        OrderCreated => "OrderCreated",
        AutoJobCreation => "AutoJobCreation",
        InventorySync => "InventorySync",
    }
    default = OrderCreated;
}

/// Append-only record linking orders, job cards and stock movements.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntegrationEvent {
    pub id: i32,
    pub related_order_id: Option<i32>,
    pub job_card_id: Option<i32>,
    pub event_type: IntegrationEventType,
    pub event_time: NaiveDateTime,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IntegrationEventView {
    #[serde(flatten)]
    pub event: IntegrationEvent,
    pub customer_name: Option<String>,
    pub job_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewIntegrationEvent {
    pub related_order_id: Option<i32>,
    pub job_card_id: Option<i32>,
    pub event_type: IntegrationEventType,
    pub details: Option<String>,
}

impl NewIntegrationEvent {
    pub fn new(event_type: IntegrationEventType) -> Self {
        Self {
            related_order_id: None,
            job_card_id: None,
            event_type,
            details: None,
        }
    }

    pub fn order(mut self, order_id: i32) -> Self {
        self.related_order_id = Some(order_id);
        self
    }

    pub fn job_card(mut self, job_card_id: i32) -> Self {
        self.job_card_id = Some(job_card_id);
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Stock to deduct for one completed job, summed per material.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStockDeduction {
    pub job_card_id: i32,
    /// `(material_id, total quantity used)` ordered by material id.
    pub materials: Vec<(i32, f64)>,
}

impl JobStockDeduction {
    pub fn details(&self) -> String {
        format!(
            "Inventory deducted for {} material(s) used on job #{}",
            self.materials.len(),
            self.job_card_id
        )
    }
}

/// Group usage rows by job and material, skipping jobs already synced.
///
/// Jobs come back ordered by id so repeated runs touch rows in a stable
/// order.
pub fn pending_stock_deductions(
    usage: &[MaterialUsage],
    already_synced: &HashSet<i32>,
) -> Vec<JobStockDeduction> {
    let mut grouped: BTreeMap<i32, BTreeMap<i32, f64>> = BTreeMap::new();

    for row in usage {
        if already_synced.contains(&row.job_card_id) {
            continue;
        }
        *grouped
            .entry(row.job_card_id)
            .or_default()
            .entry(row.material_id)
            .or_default() += row.quantity_used;
    }

    grouped
        .into_iter()
        .map(|(job_card_id, materials)| JobStockDeduction {
            job_card_id,
            materials: materials.into_iter().collect(),
        })
        .collect()
}
