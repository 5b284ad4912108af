use crate::domain::dashboard::DashboardData;
use crate::domain::order::OrderListQuery;
use crate::repository::{DashboardReader, InventoryReader, JobCardReader, OrderReader};
use crate::services::{ServiceError, ServiceResult};

/// Number of orders and job cards shown in the dashboard's recent lists.
pub const RECENT_ITEMS: usize = 5;

/// Collects counters and recent activity for the landing page.
pub fn load_dashboard<R>(repo: &R) -> ServiceResult<DashboardData>
where
    R: DashboardReader + OrderReader + JobCardReader + InventoryReader + ?Sized,
{
    let stats = repo.dashboard_stats().map_err(ServiceError::from)?;
    let (_, recent_orders) = repo
        .list_orders(OrderListQuery::new().paginate(1, RECENT_ITEMS))
        .map_err(ServiceError::from)?;
    let recent_jobs = repo
        .list_recent_job_cards(RECENT_ITEMS as i64)
        .map_err(ServiceError::from)?;
    let low_stock = repo.list_low_stock().map_err(ServiceError::from)?;

    Ok(DashboardData {
        stats,
        recent_orders,
        recent_jobs,
        low_stock,
    })
}
