use diesel::prelude::*;

use crate::{
    domain::{
        dashboard::DashboardStats, job_card::JobStatus, order::OrderStatus,
        vehicle::VehicleStatus,
    },
    repository::{DashboardReader, DieselRepository, errors::RepositoryResult},
};

impl DashboardReader for DieselRepository {
    fn dashboard_stats(&self) -> RepositoryResult<DashboardStats> {
        use crate::schema::{inventory_items, job_cards, orders, vehicles};

        let pending: Vec<&str> = OrderStatus::PENDING
            .iter()
            .map(|status| status.as_str())
            .collect();
        let active: Vec<&str> = JobStatus::ACTIVE.iter().map(|status| status.as_str()).collect();

        let mut conn = self.conn()?;

        let total_orders = orders::table.count().get_result::<i64>(&mut conn)?;
        let pending_orders = orders::table
            .filter(orders::status.eq_any(&pending))
            .count()
            .get_result::<i64>(&mut conn)?;
        let active_jobs = job_cards::table
            .filter(job_cards::status.eq_any(&active))
            .count()
            .get_result::<i64>(&mut conn)?;
        let total_vehicles = vehicles::table.count().get_result::<i64>(&mut conn)?;
        let available_vehicles = vehicles::table
            .filter(vehicles::status.eq(VehicleStatus::Available.as_str()))
            .count()
            .get_result::<i64>(&mut conn)?;
        let low_inventory = inventory_items::table
            .filter(inventory_items::current_stock.le(inventory_items::threshold))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(DashboardStats {
            total_orders,
            pending_orders,
            active_jobs,
            total_vehicles,
            available_vehicles,
            low_inventory,
        })
    }
}
