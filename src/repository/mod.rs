use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::db::{DbConnection, DbPool};
use crate::domain::assignment::{AssignmentView, NewAssignment, UpdateAssignment};
use crate::domain::audit::{AuditEntryView, AuditListQuery, NewAuditEntry};
use crate::domain::compliance::{ComplianceView, NewComplianceDocument, UpdateComplianceDocument};
use crate::domain::crm::{
    Lead, NewLead, NewOpportunity, NewTicket, OpportunityView, Ticket, TicketStatus, TicketView,
    UpdateLead, UpdateOpportunity,
};
use crate::domain::customer::{Customer, CustomerListQuery, NewCustomer, UpdateCustomer};
use crate::domain::dashboard::DashboardStats;
use crate::domain::employee::{Employee, EmployeeView, NewEmployee, UpdateEmployee};
use crate::domain::equipment::{
    Equipment, EquipmentStatus, EquipmentView, NewEquipment, UpdateEquipment,
};
use crate::domain::finance::{
    Expense, ExpenseView, Invoice, InvoiceListQuery, InvoiceView, NewExpense, NewInvoice,
};
use crate::domain::integration::IntegrationEventView;
use crate::domain::inventory::{
    InventoryItem, InventoryView, NewInventoryItem, UpdateInventoryItem,
};
use crate::domain::job_card::{
    JobCard, JobCardDetails, JobCardListQuery, JobCardView, JobStatusChange, MaterialUsage,
    NewJobCard, NewMaterialUsage,
};
use crate::domain::order::{
    NewOrder, Order, OrderDetails, OrderListQuery, OrderStatus, OrderView, UpdateOrder,
};
use crate::domain::organization::{Department, Location, Role};
use crate::domain::procurement::{
    NewPurchaseOrder, NewSupplier, PurchaseOrder, PurchaseOrderView, Supplier, UpdateSupplier,
};
use crate::domain::product::{NewProduct, Product, UpdateProduct};
use crate::domain::production::{
    BatchView, NewProductionBatch, NewQualityCheck, ProductionBatch, QualityCheck,
    QualityCheckView,
};
use crate::domain::user::{NewUser, UserAccount, UserCredentials};
use crate::domain::vehicle::{NewVehicle, UpdateVehicle, Vehicle, VehicleStatus, VehicleView};
use crate::models::audit::NewAuditEntry as DbNewAuditEntry;
use crate::repository::errors::RepositoryResult;

pub mod assignment;
pub mod audit;
pub mod compliance;
pub mod crm;
pub mod customer;
pub mod dashboard;
pub mod employee;
pub mod equipment;
pub mod errors;
pub mod finance;
pub mod integration;
pub mod inventory;
pub mod job_card;
pub mod order;
pub mod organization;
pub mod procurement;
pub mod product;
pub mod production;
pub mod user;
pub mod vehicle;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Server local time, stored in timestamp columns.
pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Today's date in server local time.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Append an audit row on the caller's connection so it commits or rolls
/// back with the write it describes.
pub(crate) fn append_audit(conn: &mut SqliteConnection, entry: &NewAuditEntry) -> QueryResult<()> {
    use crate::schema::audit_log;

    diesel::insert_into(audit_log::table)
        .values(DbNewAuditEntry::new(entry, now()))
        .execute(conn)?;
    Ok(())
}

/// Treat a zero-row update or delete as a missing record.
pub(crate) fn ensure_affected(rows: usize) -> RepositoryResult<()> {
    if rows == 0 {
        Err(errors::RepositoryError::NotFound)
    } else {
        Ok(())
    }
}

/// Lookup tables used to fill select boxes.
pub trait OrganizationReader {
    fn list_roles(&self) -> RepositoryResult<Vec<Role>>;
    fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
    fn list_locations(&self) -> RepositoryResult<Vec<Location>>;
}

pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>>;
    fn list_employees(&self) -> RepositoryResult<Vec<EmployeeView>>;
    fn list_active_employees(&self) -> RepositoryResult<Vec<Employee>>;
}

pub trait EmployeeWriter {
    fn create_employee(
        &self,
        new_employee: &NewEmployee,
        actor_id: i32,
    ) -> RepositoryResult<Employee>;
    fn update_employee(
        &self,
        employee_id: i32,
        updates: &UpdateEmployee,
        actor_id: i32,
    ) -> RepositoryResult<Employee>;
    /// Removes the employee together with any login accounts.
    fn delete_employee(&self, employee_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait UserReader {
    fn get_user_credentials(&self, username: &str) -> RepositoryResult<Option<UserCredentials>>;
    fn get_user_account(&self, user_id: i32) -> RepositoryResult<Option<UserAccount>>;
    fn list_user_accounts(&self) -> RepositoryResult<Vec<UserAccount>>;
    fn list_employees_without_account(&self) -> RepositoryResult<Vec<EmployeeView>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser, actor_id: i32) -> RepositoryResult<UserAccount>;
    fn delete_user(&self, user_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait AuditReader {
    fn list_audit_entries(
        &self,
        query: AuditListQuery,
    ) -> RepositoryResult<(usize, Vec<AuditEntryView>)>;
}

pub trait AuditWriter {
    fn record_audit(&self, entry: &NewAuditEntry) -> RepositoryResult<()>;
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customer(
        &self,
        new_customer: &NewCustomer,
        actor_id: i32,
    ) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
        actor_id: i32,
    ) -> RepositoryResult<Customer>;
    fn delete_customer(&self, customer_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
}

pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct, actor_id: i32) -> RepositoryResult<Product>;
    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
        actor_id: i32,
    ) -> RepositoryResult<Product>;
    fn delete_product(&self, product_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn get_order_details(&self, id: i32) -> RepositoryResult<Option<OrderDetails>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<OrderView>)>;
    fn list_orders_with_status(&self, statuses: &[OrderStatus]) -> RepositoryResult<Vec<OrderView>>;
}

pub trait OrderWriter {
    /// Inserts the order with its audit row and `OrderCreated` event.
    fn create_order(&self, new_order: &NewOrder, actor_id: i32) -> RepositoryResult<Order>;
    fn update_order(
        &self,
        order_id: i32,
        updates: &UpdateOrder,
        actor_id: i32,
    ) -> RepositoryResult<Order>;
    fn delete_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait InventoryReader {
    fn get_inventory_item(&self, id: i32) -> RepositoryResult<Option<InventoryItem>>;
    /// Materials ordered by name with supplier names.
    fn list_inventory(&self) -> RepositoryResult<Vec<InventoryView>>;
    /// Materials at or below threshold, lowest stock ratio first.
    fn list_low_stock(&self) -> RepositoryResult<Vec<InventoryItem>>;
}

pub trait InventoryWriter {
    fn create_inventory_item(
        &self,
        new_item: &NewInventoryItem,
        actor_id: i32,
    ) -> RepositoryResult<InventoryItem>;
    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &UpdateInventoryItem,
        actor_id: i32,
    ) -> RepositoryResult<InventoryItem>;
    fn delete_inventory_item(&self, item_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait ProductionReader {
    fn list_batches(&self) -> RepositoryResult<Vec<BatchView>>;
    fn get_batch(&self, id: i32) -> RepositoryResult<Option<BatchView>>;
    fn list_quality_checks(&self, batch_id: i32) -> RepositoryResult<Vec<QualityCheckView>>;
}

pub trait ProductionWriter {
    fn create_batch(&self, new_batch: &NewProductionBatch) -> RepositoryResult<ProductionBatch>;
    fn add_quality_check(&self, new_check: &NewQualityCheck) -> RepositoryResult<QualityCheck>;
}

pub trait VehicleReader {
    fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<Vehicle>>;
    /// Vehicles ordered by name with the open job they are assigned to.
    fn list_vehicles(&self) -> RepositoryResult<Vec<VehicleView>>;
    fn list_vehicles_with_status(&self, status: VehicleStatus) -> RepositoryResult<Vec<Vehicle>>;
}

pub trait VehicleWriter {
    fn create_vehicle(&self, new_vehicle: &NewVehicle, actor_id: i32) -> RepositoryResult<Vehicle>;
    fn update_vehicle(
        &self,
        vehicle_id: i32,
        updates: &UpdateVehicle,
        actor_id: i32,
    ) -> RepositoryResult<Vehicle>;
    fn delete_vehicle(&self, vehicle_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait EquipmentReader {
    fn list_equipment(&self) -> RepositoryResult<Vec<EquipmentView>>;
    fn list_equipment_with_status(
        &self,
        status: EquipmentStatus,
    ) -> RepositoryResult<Vec<Equipment>>;
}

pub trait EquipmentWriter {
    fn create_equipment(
        &self,
        new_equipment: &NewEquipment,
        actor_id: i32,
    ) -> RepositoryResult<Equipment>;
    fn update_equipment(
        &self,
        equipment_id: i32,
        updates: &UpdateEquipment,
        actor_id: i32,
    ) -> RepositoryResult<Equipment>;
    fn delete_equipment(&self, equipment_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait JobCardReader {
    fn get_job_card(&self, id: i32) -> RepositoryResult<Option<JobCard>>;
    fn get_job_card_details(&self, id: i32) -> RepositoryResult<Option<JobCardDetails>>;
    /// Job cards by scheduled start, latest first.
    fn list_job_cards(&self, query: JobCardListQuery) -> RepositoryResult<Vec<JobCardView>>;
    /// The newest job cards by id.
    fn list_recent_job_cards(&self, limit: i64) -> RepositoryResult<Vec<JobCardView>>;
}

pub trait JobCardWriter {
    fn create_job_card(&self, new_job: &NewJobCard, actor_id: i32) -> RepositoryResult<JobCard>;
    fn delete_job_card(&self, job_id: i32, actor_id: i32) -> RepositoryResult<()>;
    /// Applies the status, logs progress and marks the related order
    /// delivered when the job completes.
    fn update_job_status(
        &self,
        change: &JobStatusChange,
        actor_id: i32,
    ) -> RepositoryResult<JobCard>;
    fn record_material_usage(&self, usage: &NewMaterialUsage) -> RepositoryResult<MaterialUsage>;
}

pub trait AssignmentReader {
    fn list_assignments(&self) -> RepositoryResult<Vec<AssignmentView>>;
}

pub trait AssignmentWriter {
    fn create_assignment(&self, new_assignment: &NewAssignment) -> RepositoryResult<i32>;
    fn update_assignment(
        &self,
        assignment_id: i32,
        updates: &UpdateAssignment,
    ) -> RepositoryResult<()>;
    fn delete_assignment(&self, assignment_id: i32) -> RepositoryResult<()>;
}

pub trait IntegrationReader {
    fn list_recent_events(&self, limit: i64) -> RepositoryResult<Vec<IntegrationEventView>>;
}

pub trait IntegrationWriter {
    /// Creates a delivery job for every confirmed order without one and
    /// returns how many were created.
    fn auto_create_jobs(&self, assignee: Option<i32>) -> RepositoryResult<usize>;
    /// Deducts material usage of completed jobs from stock and returns how
    /// many jobs were synced.
    fn sync_inventory(&self) -> RepositoryResult<usize>;
}

pub trait FinanceReader {
    fn list_invoices(&self, query: InvoiceListQuery) -> RepositoryResult<(usize, Vec<InvoiceView>)>;
    /// Sum of unpaid and overdue invoices.
    fn outstanding_total_cents(&self) -> RepositoryResult<i64>;
    fn list_expenses(&self) -> RepositoryResult<Vec<ExpenseView>>;
    /// Sum of expenses dated within `from..=to`.
    fn expenses_total_cents(&self, from: NaiveDate, to: NaiveDate) -> RepositoryResult<i64>;
}

pub trait FinanceWriter {
    fn create_invoice(&self, new_invoice: &NewInvoice, actor_id: i32) -> RepositoryResult<Invoice>;
    fn pay_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<Invoice>;
    fn delete_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<()>;
    fn create_expense(&self, new_expense: &NewExpense) -> RepositoryResult<Expense>;
    fn delete_expense(&self, expense_id: i32) -> RepositoryResult<()>;
}

pub trait CrmReader {
    fn get_lead(&self, id: i32) -> RepositoryResult<Option<Lead>>;
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
    fn list_opportunities(&self) -> RepositoryResult<Vec<OpportunityView>>;
    fn list_tickets(&self) -> RepositoryResult<Vec<TicketView>>;
}

pub trait CrmWriter {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
    fn update_lead(&self, lead_id: i32, updates: &UpdateLead) -> RepositoryResult<Lead>;
    fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()>;
    /// Creates a customer from the lead and marks it converted.
    fn convert_lead(&self, lead_id: i32, actor_id: i32) -> RepositoryResult<Customer>;
    fn create_opportunity(&self, new_opportunity: &NewOpportunity) -> RepositoryResult<i32>;
    fn update_opportunity(
        &self,
        opportunity_id: i32,
        updates: &UpdateOpportunity,
    ) -> RepositoryResult<()>;
    fn delete_opportunity(&self, opportunity_id: i32) -> RepositoryResult<()>;
    fn create_ticket(&self, new_ticket: &NewTicket) -> RepositoryResult<Ticket>;
    fn update_ticket_status(
        &self,
        ticket_id: i32,
        status: TicketStatus,
    ) -> RepositoryResult<Ticket>;
    fn delete_ticket(&self, ticket_id: i32) -> RepositoryResult<()>;
}

pub trait ComplianceReader {
    /// Documents by expiry date with their status as of `today`.
    fn list_compliance_documents(&self, today: NaiveDate) -> RepositoryResult<Vec<ComplianceView>>;
}

pub trait ComplianceWriter {
    fn create_compliance_document(
        &self,
        new_document: &NewComplianceDocument,
        actor_id: i32,
    ) -> RepositoryResult<i32>;
    fn update_compliance_document(
        &self,
        document_id: i32,
        updates: &UpdateComplianceDocument,
        actor_id: i32,
    ) -> RepositoryResult<()>;
    fn delete_compliance_document(&self, document_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait SupplierReader {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
}

pub trait SupplierWriter {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier>;
    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
}

pub trait PurchaseOrderReader {
    fn list_purchase_orders(&self) -> RepositoryResult<Vec<PurchaseOrderView>>;
}

pub trait PurchaseOrderWriter {
    fn create_purchase_order(
        &self,
        new_order: &NewPurchaseOrder,
        actor_id: i32,
    ) -> RepositoryResult<PurchaseOrder>;
    /// Marks the order received and adds its quantity to stock once.
    fn receive_purchase_order(
        &self,
        order_id: i32,
        actor_id: i32,
    ) -> RepositoryResult<PurchaseOrder>;
    fn delete_purchase_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()>;
}

pub trait DashboardReader {
    fn dashboard_stats(&self) -> RepositoryResult<DashboardStats>;
}
