use chrono::NaiveDate;
use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        compliance::{
            ComplianceView, NewComplianceDocument as DomainNewComplianceDocument,
            UpdateComplianceDocument as DomainUpdateComplianceDocument,
        },
    },
    models::compliance::{
        ComplianceDocument as DbComplianceDocument,
        NewComplianceDocument as DbNewComplianceDocument,
    },
    repository::{
        ComplianceReader, ComplianceWriter, DieselRepository, append_audit, ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
    },
};

impl ComplianceReader for DieselRepository {
    fn list_compliance_documents(&self, today: NaiveDate) -> RepositoryResult<Vec<ComplianceView>> {
        use crate::schema::{compliance_documents, employees, vehicles};

        let mut conn = self.conn()?;
        let rows = compliance_documents::table
            .left_join(vehicles::table)
            .left_join(employees::table)
            .order((
                compliance_documents::expiry_date.asc(),
                compliance_documents::id.asc(),
            ))
            .select((
                DbComplianceDocument::as_select(),
                vehicles::name.nullable(),
                employees::name.nullable(),
            ))
            .load::<(DbComplianceDocument, Option<String>, Option<String>)>(&mut conn)?;

        let mut documents: Vec<ComplianceView> = rows
            .into_iter()
            .map(|(document, vehicle_name, employee_name)| {
                ComplianceView::new(document.into(), vehicle_name, employee_name, today)
            })
            .collect();

        // SQLite sorts NULL first; documents without expiry go last.
        documents.sort_by_key(|view| view.document.expiry_date.is_none());

        Ok(documents)
    }
}

impl ComplianceWriter for DieselRepository {
    fn create_compliance_document(
        &self,
        new_document: &DomainNewComplianceDocument,
        actor_id: i32,
    ) -> RepositoryResult<i32> {
        use crate::schema::compliance_documents;

        let mut conn = self.conn()?;
        let db_new = DbNewComplianceDocument::from(new_document);

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let id = diesel::insert_into(compliance_documents::table)
                .values(&db_new)
                .returning(compliance_documents::id)
                .get_result::<i32>(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::ComplianceDocument, id, AuditAction::Create)
                    .by(actor_id)
                    .details(format!("Compliance document added: {}", new_document.title)),
            )?;

            Ok(id)
        })
    }

    fn update_compliance_document(
        &self,
        document_id: i32,
        updates: &DomainUpdateComplianceDocument,
        actor_id: i32,
    ) -> RepositoryResult<()> {
        use crate::schema::compliance_documents;

        let mut conn = self.conn()?;
        let changes = DbNewComplianceDocument::from(updates);

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let updated = diesel::update(
                compliance_documents::table.filter(compliance_documents::id.eq(document_id)),
            )
            .set(&changes)
            .execute(conn)?;
            ensure_affected(updated)?;

            append_audit(
                conn,
                &NewAuditEntry::new(
                    AuditEntity::ComplianceDocument,
                    document_id,
                    AuditAction::Update,
                )
                .by(actor_id)
                .details(format!("Compliance document #{document_id} updated.")),
            )?;

            Ok(())
        })
    }

    fn delete_compliance_document(&self, document_id: i32, actor_id: i32) -> RepositoryResult<()> {
        use crate::schema::compliance_documents;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let deleted = diesel::delete(
                compliance_documents::table.filter(compliance_documents::id.eq(document_id)),
            )
            .execute(conn)
            .map_err(still_referenced)?;
            ensure_affected(deleted)?;

            append_audit(
                conn,
                &NewAuditEntry::new(
                    AuditEntity::ComplianceDocument,
                    document_id,
                    AuditAction::Delete,
                )
                .by(actor_id)
                .details(format!("Compliance document #{document_id} deleted.")),
            )?;

            Ok(())
        })
    }
}
