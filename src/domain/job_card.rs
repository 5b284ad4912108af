use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::domain::Priority;
use crate::domain::assignment::AssignmentView;
use crate::domain::order::Order;

/// Job type given to cards generated from confirmed orders.
pub const DELIVERY_JOB_TYPE: &str = "Delivery";

labeled_enum! {
    pub enum JobStatus {
        Open => "Open",
        InProgress => "In Progress",
        OnHold => "On Hold",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
    default = Open;
}

impl JobStatus {
    /// Statuses counted as active work on the dashboard and fleet pages.
    pub const ACTIVE: &'static [JobStatus] = &[JobStatus::Open, JobStatus::InProgress];

    pub fn is_active(&self) -> bool {
        Self::ACTIVE.contains(self)
    }
}

/// A unit of work such as a delivery, pump job or maintenance task.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobCard {
    pub id: i32,
    pub related_order_id: Option<i32>,
    pub job_type: String,
    pub description: String,
    /// Employee responsible for the job.
    pub assigned_to: Option<i32>,
    pub status: JobStatus,
    pub priority: Priority,
    pub scheduled_start: Option<NaiveDateTime>,
    pub scheduled_end: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobCardView {
    #[serde(flatten)]
    pub job: JobCard,
    pub assigned_to_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressLog {
    pub id: i32,
    pub job_card_id: i32,
    pub updated_by: Option<i32>,
    pub update_time: NaiveDateTime,
    pub status: JobStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgressLogView {
    #[serde(flatten)]
    pub log: ProgressLog,
    pub updated_by_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MaterialUsage {
    pub id: i32,
    pub job_card_id: i32,
    pub material_id: i32,
    pub quantity_used: f64,
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MaterialUsageView {
    #[serde(flatten)]
    pub usage: MaterialUsage,
    pub material_name: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMaterialUsage {
    pub job_card_id: i32,
    pub material_id: i32,
    pub quantity_used: f64,
}

/// Everything shown on the job card detail page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobCardDetails {
    #[serde(flatten)]
    pub job: JobCardView,
    pub customer_name: Option<String>,
    pub delivery_site: Option<String>,
    pub assignments: Vec<AssignmentView>,
    pub progress_logs: Vec<ProgressLogView>,
    pub material_usage: Vec<MaterialUsageView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewJobCard {
    pub related_order_id: Option<i32>,
    pub job_type: String,
    pub description: String,
    pub assigned_to: Option<i32>,
    pub status: JobStatus,
    pub priority: Priority,
    pub scheduled_start: Option<NaiveDateTime>,
    pub scheduled_end: Option<NaiveDateTime>,
}

impl NewJobCard {
    /// Delivery job generated for a confirmed order, scheduled over the
    /// working day of the order's delivery date.
    pub fn delivery_for_order(order: &Order, assignee: Option<i32>) -> Self {
        let (start, end) = delivery_window(order.scheduled_date);
        Self {
            related_order_id: Some(order.id),
            job_type: DELIVERY_JOB_TYPE.to_string(),
            description: format!(
                "Deliver {} units to {}",
                order.quantity, order.delivery_site
            ),
            assigned_to: assignee,
            status: JobStatus::Open,
            priority: Priority::Medium,
            scheduled_start: Some(start),
            scheduled_end: Some(end),
        }
    }
}

/// 08:00 to 17:00 on the given day.
pub fn delivery_window(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN);
    let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN);
    (day.and_time(start), day.and_time(end))
}

/// Status change submitted from the job detail page or the JSON API.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStatusChange {
    pub job_id: i32,
    pub status: JobStatus,
    pub notes: Option<String>,
    /// Employee recorded on the progress log.
    pub updated_by: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct JobCardListQuery {
    pub status: Option<JobStatus>,
    pub priority: Option<Priority>,
}

impl JobCardListQuery {
    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    fn order() -> Order {
        let date = NaiveDate::from_ymd_opt(2025, 6, 14).expect("valid date");
        let now = date.and_hms_opt(9, 30, 0).expect("valid time");
        Order {
            id: 42,
            customer_id: 1,
            product_id: 2,
            quantity: 8.5,
            order_date: date,
            delivery_site: "Riverside Tower, Block C".to_string(),
            scheduled_date: date,
            status: OrderStatus::Confirmed,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn delivery_job_covers_the_working_day() {
        let job = NewJobCard::delivery_for_order(&order(), Some(5));

        assert_eq!(job.related_order_id, Some(42));
        assert_eq!(job.job_type, "Delivery");
        assert_eq!(job.description, "Deliver 8.5 units to Riverside Tower, Block C");
        assert_eq!(job.assigned_to, Some(5));
        assert_eq!(job.status, JobStatus::Open);
        assert_eq!(job.priority, Priority::Medium);
        assert_eq!(
            job.scheduled_start.map(|value| value.to_string()),
            Some("2025-06-14 08:00:00".to_string())
        );
        assert_eq!(
            job.scheduled_end.map(|value| value.to_string()),
            Some("2025-06-14 17:00:00".to_string())
        );
    }

    #[test]
    fn whole_quantities_render_without_fraction() {
        let mut order = order();
        order.quantity = 12.0;

        let job = NewJobCard::delivery_for_order(&order, None);

        assert_eq!(job.description, "Deliver 12 units to Riverside Tower, Block C");
        assert_eq!(job.assigned_to, None);
    }

    #[test]
    fn only_open_and_in_progress_are_active() {
        assert!(JobStatus::Open.is_active());
        assert!(JobStatus::InProgress.is_active());
        assert!(!JobStatus::OnHold.is_active());
        assert!(!JobStatus::Completed.is_active());
    }
}
