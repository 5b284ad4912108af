use chrono::{NaiveDate, NaiveDateTime};

use crate::ADMIN_ROLE;
use crate::domain::auth::AuthenticatedUser;
use crate::repository::{
    AssignmentReader, AssignmentWriter, AuditReader, AuditWriter, ComplianceReader,
    ComplianceWriter, CrmReader, CrmWriter, CustomerReader, CustomerWriter, DashboardReader,
    EmployeeReader, EmployeeWriter, EquipmentReader, EquipmentWriter, FinanceReader,
    FinanceWriter, IntegrationReader, IntegrationWriter, InventoryReader, InventoryWriter,
    JobCardReader, JobCardWriter, OrderReader, OrderWriter, OrganizationReader, ProductReader,
    ProductWriter, ProductionReader, ProductionWriter, PurchaseOrderReader, PurchaseOrderWriter,
    SupplierReader, SupplierWriter, UserReader, UserWriter, VehicleReader, VehicleWriter,
};
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
use crate::repository::errors::RepositoryResult;
use crate::repository::mock::{
    MockOrganizationReader, MockEmployeeReader, MockEmployeeWriter, MockUserReader, MockUserWriter,
    MockAuditReader, MockAuditWriter, MockCustomerReader, MockCustomerWriter, MockProductReader,
    MockProductWriter, MockOrderReader, MockOrderWriter, MockInventoryReader, MockInventoryWriter,
    MockProductionReader, MockProductionWriter, MockVehicleReader, MockVehicleWriter,
    MockEquipmentReader, MockEquipmentWriter, MockJobCardReader, MockJobCardWriter,
    MockAssignmentReader, MockAssignmentWriter, MockIntegrationReader, MockIntegrationWriter,
    MockFinanceReader, MockFinanceWriter, MockCrmReader, MockCrmWriter, MockComplianceReader,
    MockComplianceWriter, MockSupplierReader, MockSupplierWriter, MockPurchaseOrderReader,
    MockPurchaseOrderWriter, MockDashboardReader,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn datetime() -> NaiveDateTime {
    date(2025, 6, 2).and_hms_opt(9, 30, 0).unwrap_or_default()
}

pub fn user_with_role(role: Option<&str>) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: 7,
        username: "dispatch".to_string(),
        employee_id: 12,
        name: "Ravi Kumar".to_string(),
        role: role.map(str::to_string),
    }
}

pub fn operator() -> AuthenticatedUser {
    user_with_role(Some("Dispatcher"))
}

pub fn admin() -> AuthenticatedUser {
    user_with_role(Some(ADMIN_ROLE))
}

/// Repository double implementing every trait by delegating to per-trait mocks.
#[derive(Default)]
pub struct FakeRepo {
    pub organization_reader: MockOrganizationReader,
    pub employee_reader: MockEmployeeReader,
    pub employee_writer: MockEmployeeWriter,
    pub user_reader: MockUserReader,
    pub user_writer: MockUserWriter,
    pub audit_reader: MockAuditReader,
    pub audit_writer: MockAuditWriter,
    pub customer_reader: MockCustomerReader,
    pub customer_writer: MockCustomerWriter,
    pub product_reader: MockProductReader,
    pub product_writer: MockProductWriter,
    pub order_reader: MockOrderReader,
    pub order_writer: MockOrderWriter,
    pub inventory_reader: MockInventoryReader,
    pub inventory_writer: MockInventoryWriter,
    pub production_reader: MockProductionReader,
    pub production_writer: MockProductionWriter,
    pub vehicle_reader: MockVehicleReader,
    pub vehicle_writer: MockVehicleWriter,
    pub equipment_reader: MockEquipmentReader,
    pub equipment_writer: MockEquipmentWriter,
    pub job_card_reader: MockJobCardReader,
    pub job_card_writer: MockJobCardWriter,
    pub assignment_reader: MockAssignmentReader,
    pub assignment_writer: MockAssignmentWriter,
    pub integration_reader: MockIntegrationReader,
    pub integration_writer: MockIntegrationWriter,
    pub finance_reader: MockFinanceReader,
    pub finance_writer: MockFinanceWriter,
    pub crm_reader: MockCrmReader,
    pub crm_writer: MockCrmWriter,
    pub compliance_reader: MockComplianceReader,
    pub compliance_writer: MockComplianceWriter,
    pub supplier_reader: MockSupplierReader,
    pub supplier_writer: MockSupplierWriter,
    pub purchase_order_reader: MockPurchaseOrderReader,
    pub purchase_order_writer: MockPurchaseOrderWriter,
    pub dashboard_reader: MockDashboardReader,
}

impl OrganizationReader for FakeRepo {
    fn list_roles(&self) -> RepositoryResult<Vec<Role>> {
        self.organization_reader.list_roles()
    }

    fn list_departments(&self) -> RepositoryResult<Vec<Department>> {
        self.organization_reader.list_departments()
    }

    fn list_locations(&self) -> RepositoryResult<Vec<Location>> {
        self.organization_reader.list_locations()
    }
}

impl EmployeeReader for FakeRepo {
    fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>> {
        self.employee_reader.get_employee_by_id(id)
    }

    fn list_employees(&self) -> RepositoryResult<Vec<EmployeeView>> {
        self.employee_reader.list_employees()
    }

    fn list_active_employees(&self) -> RepositoryResult<Vec<Employee>> {
        self.employee_reader.list_active_employees()
    }
}

impl EmployeeWriter for FakeRepo {
    fn create_employee(
        &self,
        new_employee: &NewEmployee,
        actor_id: i32,
    ) -> RepositoryResult<Employee> {
        self.employee_writer.create_employee(new_employee, actor_id)
    }

    fn update_employee(
        &self,
        employee_id: i32,
        updates: &UpdateEmployee,
        actor_id: i32,
    ) -> RepositoryResult<Employee> {
        self.employee_writer.update_employee(employee_id, updates, actor_id)
    }

    fn delete_employee(&self, employee_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.employee_writer.delete_employee(employee_id, actor_id)
    }
}

impl UserReader for FakeRepo {
    fn get_user_credentials(&self, username: &str) -> RepositoryResult<Option<UserCredentials>> {
        self.user_reader.get_user_credentials(username)
    }

    fn get_user_account(&self, user_id: i32) -> RepositoryResult<Option<UserAccount>> {
        self.user_reader.get_user_account(user_id)
    }

    fn list_user_accounts(&self) -> RepositoryResult<Vec<UserAccount>> {
        self.user_reader.list_user_accounts()
    }

    fn list_employees_without_account(&self) -> RepositoryResult<Vec<EmployeeView>> {
        self.user_reader.list_employees_without_account()
    }
}

impl UserWriter for FakeRepo {
    fn create_user(&self, new_user: &NewUser, actor_id: i32) -> RepositoryResult<UserAccount> {
        self.user_writer.create_user(new_user, actor_id)
    }

    fn delete_user(&self, user_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.user_writer.delete_user(user_id, actor_id)
    }
}

impl AuditReader for FakeRepo {
    fn list_audit_entries(
        &self,
        query: AuditListQuery,
    ) -> RepositoryResult<(usize, Vec<AuditEntryView>)> {
        self.audit_reader.list_audit_entries(query)
    }
}

impl AuditWriter for FakeRepo {
    fn record_audit(&self, entry: &NewAuditEntry) -> RepositoryResult<()> {
        self.audit_writer.record_audit(entry)
    }
}

impl CustomerReader for FakeRepo {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        self.customer_reader.get_customer_by_id(id)
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)> {
        self.customer_reader.list_customers(query)
    }
}

impl CustomerWriter for FakeRepo {
    fn create_customer(
        &self,
        new_customer: &NewCustomer,
        actor_id: i32,
    ) -> RepositoryResult<Customer> {
        self.customer_writer.create_customer(new_customer, actor_id)
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
        actor_id: i32,
    ) -> RepositoryResult<Customer> {
        self.customer_writer.update_customer(customer_id, updates, actor_id)
    }

    fn delete_customer(&self, customer_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.customer_writer.delete_customer(customer_id, actor_id)
    }
}

impl ProductReader for FakeRepo {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
        self.product_reader.get_product_by_id(id)
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        self.product_reader.list_products()
    }
}

impl ProductWriter for FakeRepo {
    fn create_product(&self, new_product: &NewProduct, actor_id: i32) -> RepositoryResult<Product> {
        self.product_writer.create_product(new_product, actor_id)
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &UpdateProduct,
        actor_id: i32,
    ) -> RepositoryResult<Product> {
        self.product_writer.update_product(product_id, updates, actor_id)
    }

    fn delete_product(&self, product_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.product_writer.delete_product(product_id, actor_id)
    }
}

impl OrderReader for FakeRepo {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>> {
        self.order_reader.get_order_by_id(id)
    }

    fn get_order_details(&self, id: i32) -> RepositoryResult<Option<OrderDetails>> {
        self.order_reader.get_order_details(id)
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<OrderView>)> {
        self.order_reader.list_orders(query)
    }

    fn list_orders_with_status(
        &self,
        statuses: &[OrderStatus],
    ) -> RepositoryResult<Vec<OrderView>> {
        self.order_reader.list_orders_with_status(statuses)
    }
}

impl OrderWriter for FakeRepo {
    fn create_order(&self, new_order: &NewOrder, actor_id: i32) -> RepositoryResult<Order> {
        self.order_writer.create_order(new_order, actor_id)
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &UpdateOrder,
        actor_id: i32,
    ) -> RepositoryResult<Order> {
        self.order_writer.update_order(order_id, updates, actor_id)
    }

    fn delete_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.order_writer.delete_order(order_id, actor_id)
    }
}

impl InventoryReader for FakeRepo {
    fn get_inventory_item(&self, id: i32) -> RepositoryResult<Option<InventoryItem>> {
        self.inventory_reader.get_inventory_item(id)
    }

    fn list_inventory(&self) -> RepositoryResult<Vec<InventoryView>> {
        self.inventory_reader.list_inventory()
    }

    fn list_low_stock(&self) -> RepositoryResult<Vec<InventoryItem>> {
        self.inventory_reader.list_low_stock()
    }
}

impl InventoryWriter for FakeRepo {
    fn create_inventory_item(
        &self,
        new_item: &NewInventoryItem,
        actor_id: i32,
    ) -> RepositoryResult<InventoryItem> {
        self.inventory_writer.create_inventory_item(new_item, actor_id)
    }

    fn update_inventory_item(
        &self,
        item_id: i32,
        updates: &UpdateInventoryItem,
        actor_id: i32,
    ) -> RepositoryResult<InventoryItem> {
        self.inventory_writer.update_inventory_item(item_id, updates, actor_id)
    }

    fn delete_inventory_item(&self, item_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.inventory_writer.delete_inventory_item(item_id, actor_id)
    }
}

impl ProductionReader for FakeRepo {
    fn list_batches(&self) -> RepositoryResult<Vec<BatchView>> {
        self.production_reader.list_batches()
    }

    fn get_batch(&self, id: i32) -> RepositoryResult<Option<BatchView>> {
        self.production_reader.get_batch(id)
    }

    fn list_quality_checks(&self, batch_id: i32) -> RepositoryResult<Vec<QualityCheckView>> {
        self.production_reader.list_quality_checks(batch_id)
    }
}

impl ProductionWriter for FakeRepo {
    fn create_batch(&self, new_batch: &NewProductionBatch) -> RepositoryResult<ProductionBatch> {
        self.production_writer.create_batch(new_batch)
    }

    fn add_quality_check(&self, new_check: &NewQualityCheck) -> RepositoryResult<QualityCheck> {
        self.production_writer.add_quality_check(new_check)
    }
}

impl VehicleReader for FakeRepo {
    fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<Vehicle>> {
        self.vehicle_reader.get_vehicle_by_id(id)
    }

    fn list_vehicles(&self) -> RepositoryResult<Vec<VehicleView>> {
        self.vehicle_reader.list_vehicles()
    }

    fn list_vehicles_with_status(&self, status: VehicleStatus) -> RepositoryResult<Vec<Vehicle>> {
        self.vehicle_reader.list_vehicles_with_status(status)
    }
}

impl VehicleWriter for FakeRepo {
    fn create_vehicle(&self, new_vehicle: &NewVehicle, actor_id: i32) -> RepositoryResult<Vehicle> {
        self.vehicle_writer.create_vehicle(new_vehicle, actor_id)
    }

    fn update_vehicle(
        &self,
        vehicle_id: i32,
        updates: &UpdateVehicle,
        actor_id: i32,
    ) -> RepositoryResult<Vehicle> {
        self.vehicle_writer.update_vehicle(vehicle_id, updates, actor_id)
    }

    fn delete_vehicle(&self, vehicle_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.vehicle_writer.delete_vehicle(vehicle_id, actor_id)
    }
}

impl EquipmentReader for FakeRepo {
    fn list_equipment(&self) -> RepositoryResult<Vec<EquipmentView>> {
        self.equipment_reader.list_equipment()
    }

    fn list_equipment_with_status(
        &self,
        status: EquipmentStatus,
    ) -> RepositoryResult<Vec<Equipment>> {
        self.equipment_reader.list_equipment_with_status(status)
    }
}

impl EquipmentWriter for FakeRepo {
    fn create_equipment(
        &self,
        new_equipment: &NewEquipment,
        actor_id: i32,
    ) -> RepositoryResult<Equipment> {
        self.equipment_writer.create_equipment(new_equipment, actor_id)
    }

    fn update_equipment(
        &self,
        equipment_id: i32,
        updates: &UpdateEquipment,
        actor_id: i32,
    ) -> RepositoryResult<Equipment> {
        self.equipment_writer.update_equipment(equipment_id, updates, actor_id)
    }

    fn delete_equipment(&self, equipment_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.equipment_writer.delete_equipment(equipment_id, actor_id)
    }
}

impl JobCardReader for FakeRepo {
    fn get_job_card(&self, id: i32) -> RepositoryResult<Option<JobCard>> {
        self.job_card_reader.get_job_card(id)
    }

    fn get_job_card_details(&self, id: i32) -> RepositoryResult<Option<JobCardDetails>> {
        self.job_card_reader.get_job_card_details(id)
    }

    fn list_job_cards(&self, query: JobCardListQuery) -> RepositoryResult<Vec<JobCardView>> {
        self.job_card_reader.list_job_cards(query)
    }

    fn list_recent_job_cards(&self, limit: i64) -> RepositoryResult<Vec<JobCardView>> {
        self.job_card_reader.list_recent_job_cards(limit)
    }
}

impl JobCardWriter for FakeRepo {
    fn create_job_card(&self, new_job: &NewJobCard, actor_id: i32) -> RepositoryResult<JobCard> {
        self.job_card_writer.create_job_card(new_job, actor_id)
    }

    fn delete_job_card(&self, job_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.job_card_writer.delete_job_card(job_id, actor_id)
    }

    fn update_job_status(
        &self,
        change: &JobStatusChange,
        actor_id: i32,
    ) -> RepositoryResult<JobCard> {
        self.job_card_writer.update_job_status(change, actor_id)
    }

    fn record_material_usage(&self, usage: &NewMaterialUsage) -> RepositoryResult<MaterialUsage> {
        self.job_card_writer.record_material_usage(usage)
    }
}

impl AssignmentReader for FakeRepo {
    fn list_assignments(&self) -> RepositoryResult<Vec<AssignmentView>> {
        self.assignment_reader.list_assignments()
    }
}

impl AssignmentWriter for FakeRepo {
    fn create_assignment(&self, new_assignment: &NewAssignment) -> RepositoryResult<i32> {
        self.assignment_writer.create_assignment(new_assignment)
    }

    fn update_assignment(
        &self,
        assignment_id: i32,
        updates: &UpdateAssignment,
    ) -> RepositoryResult<()> {
        self.assignment_writer.update_assignment(assignment_id, updates)
    }

    fn delete_assignment(&self, assignment_id: i32) -> RepositoryResult<()> {
        self.assignment_writer.delete_assignment(assignment_id)
    }
}

impl IntegrationReader for FakeRepo {
    fn list_recent_events(&self, limit: i64) -> RepositoryResult<Vec<IntegrationEventView>> {
        self.integration_reader.list_recent_events(limit)
    }
}

impl IntegrationWriter for FakeRepo {
    fn auto_create_jobs(&self, assignee: Option<i32>) -> RepositoryResult<usize> {
        self.integration_writer.auto_create_jobs(assignee)
    }

    fn sync_inventory(&self) -> RepositoryResult<usize> {
        self.integration_writer.sync_inventory()
    }
}

impl FinanceReader for FakeRepo {
    fn list_invoices(
        &self,
        query: InvoiceListQuery,
    ) -> RepositoryResult<(usize, Vec<InvoiceView>)> {
        self.finance_reader.list_invoices(query)
    }

    fn outstanding_total_cents(&self) -> RepositoryResult<i64> {
        self.finance_reader.outstanding_total_cents()
    }

    fn list_expenses(&self) -> RepositoryResult<Vec<ExpenseView>> {
        self.finance_reader.list_expenses()
    }

    fn expenses_total_cents(&self, from: NaiveDate, to: NaiveDate) -> RepositoryResult<i64> {
        self.finance_reader.expenses_total_cents(from, to)
    }
}

impl FinanceWriter for FakeRepo {
    fn create_invoice(&self, new_invoice: &NewInvoice, actor_id: i32) -> RepositoryResult<Invoice> {
        self.finance_writer.create_invoice(new_invoice, actor_id)
    }

    fn pay_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<Invoice> {
        self.finance_writer.pay_invoice(invoice_id, actor_id)
    }

    fn delete_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.finance_writer.delete_invoice(invoice_id, actor_id)
    }

    fn create_expense(&self, new_expense: &NewExpense) -> RepositoryResult<Expense> {
        self.finance_writer.create_expense(new_expense)
    }

    fn delete_expense(&self, expense_id: i32) -> RepositoryResult<()> {
        self.finance_writer.delete_expense(expense_id)
    }
}

impl CrmReader for FakeRepo {
    fn get_lead(&self, id: i32) -> RepositoryResult<Option<Lead>> {
        self.crm_reader.get_lead(id)
    }

    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        self.crm_reader.list_leads()
    }

    fn list_opportunities(&self) -> RepositoryResult<Vec<OpportunityView>> {
        self.crm_reader.list_opportunities()
    }

    fn list_tickets(&self) -> RepositoryResult<Vec<TicketView>> {
        self.crm_reader.list_tickets()
    }
}

impl CrmWriter for FakeRepo {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead> {
        self.crm_writer.create_lead(new_lead)
    }

    fn update_lead(&self, lead_id: i32, updates: &UpdateLead) -> RepositoryResult<Lead> {
        self.crm_writer.update_lead(lead_id, updates)
    }

    fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()> {
        self.crm_writer.delete_lead(lead_id)
    }

    fn convert_lead(&self, lead_id: i32, actor_id: i32) -> RepositoryResult<Customer> {
        self.crm_writer.convert_lead(lead_id, actor_id)
    }

    fn create_opportunity(&self, new_opportunity: &NewOpportunity) -> RepositoryResult<i32> {
        self.crm_writer.create_opportunity(new_opportunity)
    }

    fn update_opportunity(
        &self,
        opportunity_id: i32,
        updates: &UpdateOpportunity,
    ) -> RepositoryResult<()> {
        self.crm_writer.update_opportunity(opportunity_id, updates)
    }

    fn delete_opportunity(&self, opportunity_id: i32) -> RepositoryResult<()> {
        self.crm_writer.delete_opportunity(opportunity_id)
    }

    fn create_ticket(&self, new_ticket: &NewTicket) -> RepositoryResult<Ticket> {
        self.crm_writer.create_ticket(new_ticket)
    }

    fn update_ticket_status(
        &self,
        ticket_id: i32,
        status: TicketStatus,
    ) -> RepositoryResult<Ticket> {
        self.crm_writer.update_ticket_status(ticket_id, status)
    }

    fn delete_ticket(&self, ticket_id: i32) -> RepositoryResult<()> {
        self.crm_writer.delete_ticket(ticket_id)
    }
}

impl ComplianceReader for FakeRepo {
    fn list_compliance_documents(&self, today: NaiveDate) -> RepositoryResult<Vec<ComplianceView>> {
        self.compliance_reader.list_compliance_documents(today)
    }
}

impl ComplianceWriter for FakeRepo {
    fn create_compliance_document(
        &self,
        new_document: &NewComplianceDocument,
        actor_id: i32,
    ) -> RepositoryResult<i32> {
        self.compliance_writer.create_compliance_document(new_document, actor_id)
    }

    fn update_compliance_document(
        &self,
        document_id: i32,
        updates: &UpdateComplianceDocument,
        actor_id: i32,
    ) -> RepositoryResult<()> {
        self.compliance_writer.update_compliance_document(document_id, updates, actor_id)
    }

    fn delete_compliance_document(&self, document_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.compliance_writer.delete_compliance_document(document_id, actor_id)
    }
}

impl SupplierReader for FakeRepo {
    fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>> {
        self.supplier_reader.list_suppliers()
    }
}

impl SupplierWriter for FakeRepo {
    fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier> {
        self.supplier_writer.create_supplier(new_supplier)
    }

    fn update_supplier(
        &self,
        supplier_id: i32,
        updates: &UpdateSupplier,
    ) -> RepositoryResult<Supplier> {
        self.supplier_writer.update_supplier(supplier_id, updates)
    }

    fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()> {
        self.supplier_writer.delete_supplier(supplier_id)
    }
}

impl PurchaseOrderReader for FakeRepo {
    fn list_purchase_orders(&self) -> RepositoryResult<Vec<PurchaseOrderView>> {
        self.purchase_order_reader.list_purchase_orders()
    }
}

impl PurchaseOrderWriter for FakeRepo {
    fn create_purchase_order(
        &self,
        new_order: &NewPurchaseOrder,
        actor_id: i32,
    ) -> RepositoryResult<PurchaseOrder> {
        self.purchase_order_writer.create_purchase_order(new_order, actor_id)
    }

    fn receive_purchase_order(
        &self,
        order_id: i32,
        actor_id: i32,
    ) -> RepositoryResult<PurchaseOrder> {
        self.purchase_order_writer.receive_purchase_order(order_id, actor_id)
    }

    fn delete_purchase_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()> {
        self.purchase_order_writer.delete_purchase_order(order_id, actor_id)
    }
}

impl DashboardReader for FakeRepo {
    fn dashboard_stats(&self) -> RepositoryResult<DashboardStats> {
        self.dashboard_reader.dashboard_stats()
    }
}
