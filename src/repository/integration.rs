use std::collections::{HashMap, HashSet};

use diesel::prelude::*;

use crate::{
    domain::{
        integration::{
            AUTO_JOB_DETAILS, IntegrationEventType, IntegrationEventView, NewIntegrationEvent,
            pending_stock_deductions,
        },
        job_card::{JobStatus, MaterialUsage as DomainMaterialUsage, NewJobCard},
        order::{Order as DomainOrder, OrderStatus},
    },
    models::{
        integration::{
            IntegrationEvent as DbIntegrationEvent,
            NewIntegrationEvent as DbNewIntegrationEvent,
        },
        job_card::{MaterialUsage as DbMaterialUsage, NewJobCard as DbNewJobCard},
        order::Order as DbOrder,
    },
    repository::{
        DieselRepository, IntegrationReader, IntegrationWriter,
        errors::{RepositoryError, RepositoryResult},
        now, today,
    },
};

/// Append an integration event on the caller's connection.
pub(crate) fn append_event(
    conn: &mut SqliteConnection,
    event: &NewIntegrationEvent,
) -> QueryResult<()> {
    use crate::schema::integration_events;

    diesel::insert_into(integration_events::table)
        .values(DbNewIntegrationEvent::new(event, now()))
        .execute(conn)?;
    Ok(())
}

impl IntegrationReader for DieselRepository {
    fn list_recent_events(&self, limit: i64) -> RepositoryResult<Vec<IntegrationEventView>> {
        use crate::schema::{customers, integration_events, job_cards, orders};

        let mut conn = self.conn()?;
        let rows = integration_events::table
            .left_join(job_cards::table)
            .order((integration_events::event_time.desc(), integration_events::id.desc()))
            .limit(limit)
            .select((DbIntegrationEvent::as_select(), job_cards::job_type.nullable()))
            .load::<(DbIntegrationEvent, Option<String>)>(&mut conn)?;

        let order_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(event, _)| event.related_order_id)
            .collect();
        let customers: HashMap<i32, String> = orders::table
            .inner_join(customers::table)
            .filter(orders::id.eq_any(&order_ids))
            .select((orders::id, customers::name))
            .load::<(i32, String)>(&mut conn)?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .map(|(event, job_type)| {
                let customer_name = event
                    .related_order_id
                    .and_then(|id| customers.get(&id).cloned());
                IntegrationEventView {
                    event: event.into(),
                    customer_name,
                    job_type,
                }
            })
            .collect())
    }
}

impl IntegrationWriter for DieselRepository {
    fn auto_create_jobs(&self, assignee: Option<i32>) -> RepositoryResult<usize> {
        use crate::schema::{job_cards, orders};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let confirmed = orders::table
                .filter(orders::status.eq(OrderStatus::Confirmed.as_str()))
                .order(orders::id.asc())
                .select(DbOrder::as_select())
                .load(conn)?;

            let with_jobs: HashSet<i32> = job_cards::table
                .filter(job_cards::related_order_id.is_not_null())
                .select(job_cards::related_order_id)
                .load::<Option<i32>>(conn)?
                .into_iter()
                .flatten()
                .collect();

            let mut created = 0;
            for order in confirmed
                .into_iter()
                .map(DomainOrder::from)
                .filter(|order| !with_jobs.contains(&order.id))
            {
                let new_job = NewJobCard::delivery_for_order(&order, assignee);
                let job_id = diesel::insert_into(job_cards::table)
                    .values(DbNewJobCard::from(&new_job))
                    .returning(job_cards::id)
                    .get_result::<i32>(conn)?;

                append_event(
                    conn,
                    &NewIntegrationEvent::new(IntegrationEventType::AutoJobCreation)
                        .order(order.id)
                        .job_card(job_id)
                        .details(AUTO_JOB_DETAILS),
                )?;
                created += 1;
            }

            Ok(created)
        })
    }

    fn sync_inventory(&self) -> RepositoryResult<usize> {
        use crate::schema::{integration_events, inventory_items, job_cards, job_material_usage};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let usage: Vec<DomainMaterialUsage> = job_material_usage::table
                .inner_join(job_cards::table)
                .filter(job_cards::status.eq(JobStatus::Completed.as_str()))
                .select(DbMaterialUsage::as_select())
                .load(conn)?
                .into_iter()
                .map(Into::into)
                .collect();

            let synced: HashSet<i32> = integration_events::table
                .filter(
                    integration_events::event_type.eq(IntegrationEventType::InventorySync.as_str()),
                )
                .filter(integration_events::job_card_id.is_not_null())
                .select(integration_events::job_card_id)
                .load::<Option<i32>>(conn)?
                .into_iter()
                .flatten()
                .collect();

            let deductions = pending_stock_deductions(&usage, &synced);
            let day = today();

            for deduction in &deductions {
                for &(material_id, quantity) in &deduction.materials {
                    diesel::update(
                        inventory_items::table.filter(inventory_items::id.eq(material_id)),
                    )
                    .set((
                        inventory_items::current_stock
                            .eq(inventory_items::current_stock - quantity),
                        inventory_items::last_updated.eq(day),
                    ))
                    .execute(conn)?;
                }

                append_event(
                    conn,
                    &NewIntegrationEvent::new(IntegrationEventType::InventorySync)
                        .job_card(deduction.job_card_id)
                        .details(deduction.details()),
                )?;
            }

            Ok(deductions.len())
        })
    }
}
