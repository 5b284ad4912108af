use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::compliance::{
    ComplianceDocument as DomainComplianceDocument,
    NewComplianceDocument as DomainNewComplianceDocument,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::compliance_documents)]
pub struct ComplianceDocument {
    pub id: i32,
    pub title: String,
    pub document_type: String,
    pub reference_no: Option<String>,
    pub vehicle_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::compliance_documents)]
#[diesel(treat_none_as_null = true)]
pub struct NewComplianceDocument<'a> {
    pub title: &'a str,
    pub document_type: &'a str,
    pub reference_no: Option<&'a str>,
    pub vehicle_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<&'a str>,
}

impl From<ComplianceDocument> for DomainComplianceDocument {
    fn from(value: ComplianceDocument) -> Self {
        Self {
            id: value.id,
            title: value.title,
            document_type: value.document_type,
            reference_no: value.reference_no,
            vehicle_id: value.vehicle_id,
            employee_id: value.employee_id,
            issue_date: value.issue_date,
            expiry_date: value.expiry_date,
            notes: value.notes,
        }
    }
}

impl<'a> From<&'a DomainNewComplianceDocument> for NewComplianceDocument<'a> {
    fn from(value: &'a DomainNewComplianceDocument) -> Self {
        Self {
            title: value.title.as_str(),
            document_type: value.document_type.as_str(),
            reference_no: value.reference_no.as_deref(),
            vehicle_id: value.vehicle_id,
            employee_id: value.employee_id,
            issue_date: value.issue_date,
            expiry_date: value.expiry_date,
            notes: value.notes.as_deref(),
        }
    }
}
