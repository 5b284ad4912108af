use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        job_card::{
            JobCard as DomainJobCard, JobCardDetails, JobCardListQuery, JobCardView, JobStatus,
            JobStatusChange, MaterialUsage as DomainMaterialUsage, MaterialUsageView,
            NewJobCard as DomainNewJobCard, NewMaterialUsage as DomainNewMaterialUsage,
            ProgressLogView,
        },
        order::OrderStatus,
    },
    models::job_card::{
        JobCard as DbJobCard, MaterialUsage as DbMaterialUsage, NewJobCard as DbNewJobCard,
        NewMaterialUsage as DbNewMaterialUsage, NewProgressLog, ProgressLog as DbProgressLog,
    },
    repository::{
        DieselRepository, JobCardReader, JobCardWriter, append_audit,
        assignment::assignment_views,
        ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
        now,
    },
};

fn into_view((job, assigned_to_name): (DbJobCard, Option<String>)) -> JobCardView {
    JobCardView {
        job: job.into(),
        assigned_to_name,
    }
}

impl JobCardReader for DieselRepository {
    fn get_job_card(&self, id: i32) -> RepositoryResult<Option<DomainJobCard>> {
        use crate::schema::job_cards;

        let mut conn = self.conn()?;
        let job = job_cards::table
            .filter(job_cards::id.eq(id))
            .select(DbJobCard::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(job.map(Into::into))
    }

    fn get_job_card_details(&self, id: i32) -> RepositoryResult<Option<JobCardDetails>> {
        use crate::schema::{
            customers, employees, inventory_items, job_cards, job_material_usage,
            job_progress_logs, orders,
        };

        let mut conn = self.conn()?;

        let Some(row) = job_cards::table
            .left_join(employees::table)
            .filter(job_cards::id.eq(id))
            .select((DbJobCard::as_select(), employees::name.nullable()))
            .first::<(DbJobCard, Option<String>)>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let order = match row.0.related_order_id {
            Some(order_id) => orders::table
                .inner_join(customers::table)
                .filter(orders::id.eq(order_id))
                .select((customers::name, orders::delivery_site))
                .first::<(String, String)>(&mut conn)
                .optional()?,
            None => None,
        };

        let progress_logs = job_progress_logs::table
            .left_join(employees::table)
            .filter(job_progress_logs::job_card_id.eq(id))
            .order((job_progress_logs::update_time.desc(), job_progress_logs::id.desc()))
            .select((DbProgressLog::as_select(), employees::name.nullable()))
            .load::<(DbProgressLog, Option<String>)>(&mut conn)?
            .into_iter()
            .map(|(log, updated_by_name)| ProgressLogView {
                log: log.into(),
                updated_by_name,
            })
            .collect();

        let material_usage = job_material_usage::table
            .inner_join(inventory_items::table)
            .filter(job_material_usage::job_card_id.eq(id))
            .order(job_material_usage::recorded_at.desc())
            .select((
                DbMaterialUsage::as_select(),
                inventory_items::name,
                inventory_items::unit,
            ))
            .load::<(DbMaterialUsage, String, String)>(&mut conn)?
            .into_iter()
            .map(|(usage, material_name, unit)| MaterialUsageView {
                usage: usage.into(),
                material_name,
                unit,
            })
            .collect();

        let assignments = assignment_views(&mut conn, Some(id))?;

        let (customer_name, delivery_site) = match order {
            Some((customer_name, delivery_site)) => (Some(customer_name), Some(delivery_site)),
            None => (None, None),
        };

        Ok(Some(JobCardDetails {
            job: into_view(row),
            customer_name,
            delivery_site,
            assignments,
            progress_logs,
            material_usage,
        }))
    }

    fn list_job_cards(&self, query: JobCardListQuery) -> RepositoryResult<Vec<JobCardView>> {
        use crate::schema::{employees, job_cards};

        let mut conn = self.conn()?;

        let mut items = job_cards::table
            .left_join(employees::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = query.status {
            items = items.filter(job_cards::status.eq(status.as_str()));
        }

        if let Some(priority) = query.priority {
            items = items.filter(job_cards::priority.eq(priority.as_str()));
        }

        let rows = items
            .order((job_cards::scheduled_start.desc(), job_cards::id.desc()))
            .select((DbJobCard::as_select(), employees::name.nullable()))
            .load::<(DbJobCard, Option<String>)>(&mut conn)?;

        Ok(rows.into_iter().map(into_view).collect())
    }

    fn list_recent_job_cards(&self, limit: i64) -> RepositoryResult<Vec<JobCardView>> {
        use crate::schema::{employees, job_cards};

        let mut conn = self.conn()?;
        let rows = job_cards::table
            .left_join(employees::table)
            .order(job_cards::id.desc())
            .limit(limit)
            .select((DbJobCard::as_select(), employees::name.nullable()))
            .load::<(DbJobCard, Option<String>)>(&mut conn)?;

        Ok(rows.into_iter().map(into_view).collect())
    }
}

impl JobCardWriter for DieselRepository {
    fn create_job_card(
        &self,
        new_job: &DomainNewJobCard,
        actor_id: i32,
    ) -> RepositoryResult<DomainJobCard> {
        use crate::schema::job_cards;

        let mut conn = self.conn()?;
        let db_new = DbNewJobCard::from(new_job);

        let created = conn.transaction::<_, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(job_cards::table)
                .values(&db_new)
                .returning(DbJobCard::as_returning())
                .get_result(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::JobCard, created.id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("New job card created: {}", created.job_type)),
            )?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn delete_job_card(&self, job_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::job_cards;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(job_cards::table.filter(job_cards::id.eq(job_id)))
                .execute(conn)
                .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::JobCard, job_id, AuditAction::Delete)
                    .by(actor_id)
                    .details(format!("Job card #{job_id} deleted.")),
            )?;

            Ok(())
        })
    }

    fn update_job_status(
        &self,
        change: &JobStatusChange,
        actor_id: i32,
    ) -> RepositoryResult<DomainJobCard> {
        use crate::schema::{job_cards, job_progress_logs, orders};

        let mut conn = self.conn()?;

        let updated = conn.transaction::<_, RepositoryError, _>(|conn| {
            let timestamp = now();

            let updated = diesel::update(job_cards::table.filter(job_cards::id.eq(change.job_id)))
                .set((
                    job_cards::status.eq(change.status.as_str()),
                    job_cards::updated_at.eq(timestamp),
                ))
                .returning(DbJobCard::as_returning())
                .get_result(conn)?;

            diesel::insert_into(job_progress_logs::table)
                .values(NewProgressLog {
                    job_card_id: change.job_id,
                    updated_by: change.updated_by,
                    update_time: timestamp,
                    status: change.status.as_str(),
                    notes: change.notes.as_deref(),
                })
                .execute(conn)?;

            let delivered_order = match change.status {
                JobStatus::Completed => updated.related_order_id,
                _ => None,
            };
            if let Some(order_id) = delivered_order {
                diesel::update(orders::table.filter(orders::id.eq(order_id)))
                    .set((
                        orders::status.eq(OrderStatus::Delivered.as_str()),
                        orders::updated_at.eq(timestamp),
                    ))
                    .execute(conn)?;
            }

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::JobCard, change.job_id, AuditAction::StatusUpdate)
                    .by(actor_id)
                    .details(format!("Status updated to {}", change.status)),
            )?;

            Ok(updated)
        })?;

        Ok(updated.into())
    }

    fn record_material_usage(
        &self,
        usage: &DomainNewMaterialUsage,
    ) -> RepositoryResult<DomainMaterialUsage> {
        use crate::schema::job_material_usage;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(job_material_usage::table)
            .values(DbNewMaterialUsage::from(usage))
            .returning(DbMaterialUsage::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }
}
