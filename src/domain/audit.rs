use chrono::NaiveDateTime;
use serde::Serialize;

use crate::pagination::Pagination;

labeled_enum! {
    pub enum AuditAction {
        Create => "Create",
        Update => "Update",
        Delete => "Delete",
        Login => "Login",
        Logout => "Logout",
        StatusUpdate => "StatusUpdate",
        Payment => "Payment",
        Receive => "Receive",
        Convert => "Convert",
    }
    default = Update;
}

labeled_enum! {
    /// Entity kinds written to the audit trail.
    pub enum AuditEntity {
        User => "User",
        Order => "Order",
        JobCard => "JobCard",
        Vehicle => "Vehicle",
        Equipment => "Equipment",
        Employee => "Employee",
        Inventory => "Inventory",
        Invoice => "Invoice",
        Customer => "Customer",
        Product => "Product",
        PurchaseOrder => "PurchaseOrder",
        ComplianceDocument => "ComplianceDocument",
        Lead => "Lead",
    }
    default = Order;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuditEntry {
    pub id: i32,
    pub entity_type: String,
    pub entity_id: i32,
    pub action: String,
    /// User account that made the change.
    pub performed_by: Option<i32>,
    pub action_time: NaiveDateTime,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuditEntryView {
    #[serde(flatten)]
    pub entry: AuditEntry,
    pub performed_by_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAuditEntry {
    pub entity_type: AuditEntity,
    pub entity_id: i32,
    pub action: AuditAction,
    pub performed_by: Option<i32>,
    pub details: Option<String>,
}

impl NewAuditEntry {
    pub fn new(entity_type: AuditEntity, entity_id: i32, action: AuditAction) -> Self {
        Self {
            entity_type,
            entity_id,
            action,
            performed_by: None,
            details: None,
        }
    }

    pub fn by(mut self, user_id: i32) -> Self {
        self.performed_by = Some(user_id);
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditListQuery {
    pub entity_type: Option<AuditEntity>,
    pub pagination: Option<Pagination>,
}

impl AuditListQuery {
    pub fn entity_type(mut self, entity_type: AuditEntity) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
