use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::audit::{AuditEntryView, AuditListQuery, NewAuditEntry},
    models::audit::AuditEntry as DbAuditEntry,
    repository::{
        AuditReader, AuditWriter, DieselRepository, append_audit, errors::RepositoryResult,
    },
};

impl AuditReader for DieselRepository {
    fn list_audit_entries(
        &self,
        query: AuditListQuery,
    ) -> RepositoryResult<(usize, Vec<AuditEntryView>)> {
        use crate::schema::{audit_log, users};

        let mut conn = self.conn()?;

        let entity_filter = query.entity_type.map(|entity| entity.as_str());

        let mut count_query = audit_log::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(entity) = entity_filter {
            count_query = count_query.filter(audit_log::entity_type.eq(entity));
        }
        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = audit_log::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(entity) = entity_filter {
            items = items.filter(audit_log::entity_type.eq(entity));
        }
        items = items.order((audit_log::action_time.desc(), audit_log::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let rows = items.select(DbAuditEntry::as_select()).load(&mut conn)?;
        if rows.is_empty() {
            return Ok((total, Vec::new()));
        }

        let user_ids: Vec<i32> = rows.iter().filter_map(|row| row.performed_by).collect();
        let usernames: HashMap<i32, String> = users::table
            .filter(users::id.eq_any(&user_ids))
            .select((users::id, users::username))
            .load::<(i32, String)>(&mut conn)?
            .into_iter()
            .collect();

        let entries = rows
            .into_iter()
            .map(|row| {
                let performed_by_name = row.performed_by.and_then(|id| usernames.get(&id).cloned());
                AuditEntryView {
                    entry: row.into(),
                    performed_by_name,
                }
            })
            .collect();

        Ok((total, entries))
    }
}

impl AuditWriter for DieselRepository {
    fn record_audit(&self, entry: &NewAuditEntry) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        append_audit(&mut conn, entry)?;
        Ok(())
    }
}
