use chrono::NaiveDate;
use serde::Serialize;

/// Documents expiring within this many days are flagged.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

labeled_enum! {
    pub enum ComplianceStatus {
        Valid => "Valid",
        ExpiringSoon => "Expiring Soon",
        Expired => "Expired",
        NoExpiry => "No Expiry",
    }
    default = Valid;
}

impl ComplianceStatus {
    /// Status of a document with the given expiry date as of `today`.
    pub fn for_expiry(expiry_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match expiry_date {
            None => ComplianceStatus::NoExpiry,
            Some(expiry) if expiry < today => ComplianceStatus::Expired,
            Some(expiry) if (expiry - today).num_days() <= EXPIRY_WARNING_DAYS => {
                ComplianceStatus::ExpiringSoon
            }
            Some(_) => ComplianceStatus::Valid,
        }
    }
}

/// Permit, insurance policy, fitness certificate or licence on file.
#[derive(Debug, Clone, Serialize, PartialEq)]
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

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComplianceView {
    #[serde(flatten)]
    pub document: ComplianceDocument,
    pub vehicle_name: Option<String>,
    pub employee_name: Option<String>,
    pub status: ComplianceStatus,
    pub days_remaining: Option<i64>,
}

impl ComplianceView {
    pub fn new(
        document: ComplianceDocument,
        vehicle_name: Option<String>,
        employee_name: Option<String>,
        today: NaiveDate,
    ) -> Self {
        let status = ComplianceStatus::for_expiry(document.expiry_date, today);
        let days_remaining = document
            .expiry_date
            .map(|expiry| (expiry - today).num_days());
        Self {
            document,
            vehicle_name,
            employee_name,
            status,
            days_remaining,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComplianceDocument {
    pub title: String,
    pub document_type: String,
    pub reference_no: Option<String>,
    pub vehicle_id: Option<i32>,
    pub employee_id: Option<i32>,
    pub issue_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

pub type UpdateComplianceDocument = NewComplianceDocument;
