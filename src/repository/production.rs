use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::production::{
        BatchView, NewProductionBatch as DomainNewBatch, NewQualityCheck as DomainNewQualityCheck,
        ProductionBatch as DomainBatch, QualityCheck as DomainQualityCheck, QualityCheckView,
    },
    models::production::{
        NewProductionBatch as DbNewBatch, NewQualityCheck as DbNewQualityCheck,
        ProductionBatch as DbBatch, QualityCheck as DbQualityCheck,
    },
    repository::{
        DieselRepository, ProductionReader, ProductionWriter, customer::customer_names,
        employee::employee_names, errors::RepositoryResult,
    },
};

/// Resolve customer, product, location and creator names for batch rows.
fn batch_views(conn: &mut SqliteConnection, batches: Vec<DbBatch>) -> QueryResult<Vec<BatchView>> {
    use crate::schema::{locations, orders, products, users};

    if batches.is_empty() {
        return Ok(Vec::new());
    }

    let order_ids: Vec<i32> = batches.iter().filter_map(|batch| batch.order_id).collect();
    let order_customers: HashMap<i32, i32> = orders::table
        .filter(orders::id.eq_any(&order_ids))
        .select((orders::id, orders::customer_id))
        .load::<(i32, i32)>(conn)?
        .into_iter()
        .collect();
    let customers = customer_names(conn, order_customers.values().copied())?;

    let product_ids: Vec<i32> = batches.iter().filter_map(|batch| batch.product_id).collect();
    let products: HashMap<i32, String> = products::table
        .filter(products::id.eq_any(&product_ids))
        .select((products::id, products::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    let locations: HashMap<i32, String> = locations::table
        .select((locations::id, locations::name))
        .load::<(i32, String)>(conn)?
        .into_iter()
        .collect();

    let user_ids: Vec<i32> = batches.iter().filter_map(|batch| batch.created_by).collect();
    let user_employees: HashMap<i32, i32> = users::table
        .filter(users::id.eq_any(&user_ids))
        .select((users::id, users::employee_id))
        .load::<(i32, i32)>(conn)?
        .into_iter()
        .collect();
    let employees = employee_names(conn, user_employees.values().copied())?;

    Ok(batches
        .into_iter()
        .map(|batch| {
            let customer_name = batch
                .order_id
                .and_then(|id| order_customers.get(&id))
                .and_then(|customer_id| customers.get(customer_id).cloned());
            let product_name = batch.product_id.and_then(|id| products.get(&id).cloned());
            let location_name = batch.location_id.and_then(|id| locations.get(&id).cloned());
            let created_by_name = batch
                .created_by
                .and_then(|id| user_employees.get(&id))
                .and_then(|employee_id| employees.get(employee_id).cloned());
            BatchView {
                batch: batch.into(),
                customer_name,
                product_name,
                location_name,
                created_by_name,
            }
        })
        .collect())
}

impl ProductionReader for DieselRepository {
    fn list_batches(&self) -> RepositoryResult<Vec<BatchView>> {
        use crate::schema::production_batches;

        let mut conn = self.conn()?;
        let rows = production_batches::table
            .order((production_batches::batch_time.desc(), production_batches::id.desc()))
            .select(DbBatch::as_select())
            .load(&mut conn)?;

        Ok(batch_views(&mut conn, rows)?)
    }

    fn get_batch(&self, id: i32) -> RepositoryResult<Option<BatchView>> {
        use crate::schema::production_batches;

        let mut conn = self.conn()?;
        let row = production_batches::table
            .filter(production_batches::id.eq(id))
            .select(DbBatch::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(batch_views(&mut conn, vec![row])?.into_iter().next())
    }

    fn list_quality_checks(&self, batch_id: i32) -> RepositoryResult<Vec<QualityCheckView>> {
        use crate::schema::{employees, quality_checks};

        let mut conn = self.conn()?;
        let rows = quality_checks::table
            .left_join(employees::table)
            .filter(quality_checks::batch_id.eq(batch_id))
            .order((quality_checks::test_date.desc(), quality_checks::id.desc()))
            .select((DbQualityCheck::as_select(), employees::name.nullable()))
            .load::<(DbQualityCheck, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(check, tester_name)| QualityCheckView {
                check: check.into(),
                tester_name,
            })
            .collect())
    }
}

impl ProductionWriter for DieselRepository {
    fn create_batch(&self, new_batch: &DomainNewBatch) -> RepositoryResult<DomainBatch> {
        use crate::schema::production_batches;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(production_batches::table)
            .values(DbNewBatch::from(new_batch))
            .returning(DbBatch::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }

    fn add_quality_check(
        &self,
        new_check: &DomainNewQualityCheck,
    ) -> RepositoryResult<DomainQualityCheck> {
        use crate::schema::quality_checks;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(quality_checks::table)
            .values(DbNewQualityCheck::from(new_check))
            .returning(DbQualityCheck::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }
}
