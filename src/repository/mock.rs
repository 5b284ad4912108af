use chrono::NaiveDate;
use mockall::mock;

use super::{
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

mock! {
    pub OrganizationReader {}

    impl OrganizationReader for OrganizationReader {
        fn list_roles(&self) -> RepositoryResult<Vec<Role>>;
        fn list_departments(&self) -> RepositoryResult<Vec<Department>>;
        fn list_locations(&self) -> RepositoryResult<Vec<Location>>;
    }
}

mock! {
    pub EmployeeReader {}

    impl EmployeeReader for EmployeeReader {
        fn get_employee_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>>;
        fn list_employees(&self) -> RepositoryResult<Vec<EmployeeView>>;
        fn list_active_employees(&self) -> RepositoryResult<Vec<Employee>>;
    }
}

mock! {
    pub EmployeeWriter {}

    impl EmployeeWriter for EmployeeWriter {
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
        fn delete_employee(&self, employee_id: i32, actor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_credentials(&self, username: &str) -> RepositoryResult<Option<UserCredentials>>;
        fn get_user_account(&self, user_id: i32) -> RepositoryResult<Option<UserAccount>>;
        fn list_user_accounts(&self) -> RepositoryResult<Vec<UserAccount>>;
        fn list_employees_without_account(&self) -> RepositoryResult<Vec<EmployeeView>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser, actor_id: i32) -> RepositoryResult<UserAccount>;
        fn delete_user(&self, user_id: i32, actor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub AuditReader {}

    impl AuditReader for AuditReader {
        fn list_audit_entries(
            &self,
            query: AuditListQuery,
        ) -> RepositoryResult<(usize, Vec<AuditEntryView>)>;
    }
}

mock! {
    pub AuditWriter {}

    impl AuditWriter for AuditWriter {
        fn record_audit(&self, entry: &NewAuditEntry) -> RepositoryResult<()>;
    }
}

mock! {
    pub CustomerReader {}

    impl CustomerReader for CustomerReader {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(
            &self,
            query: CustomerListQuery,
        ) -> RepositoryResult<(usize, Vec<Customer>)>;
    }
}

mock! {
    pub CustomerWriter {}

    impl CustomerWriter for CustomerWriter {
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
}

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(
            &self,
            new_product: &NewProduct,
            actor_id: i32,
        ) -> RepositoryResult<Product>;
        fn update_product(
            &self,
            product_id: i32,
            updates: &UpdateProduct,
            actor_id: i32,
        ) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32, actor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn get_order_details(&self, id: i32) -> RepositoryResult<Option<OrderDetails>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<OrderView>)>;
        fn list_orders_with_status(
            &self,
            statuses: &[OrderStatus],
        ) -> RepositoryResult<Vec<OrderView>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder, actor_id: i32) -> RepositoryResult<Order>;
        fn update_order(
            &self,
            order_id: i32,
            updates: &UpdateOrder,
            actor_id: i32,
        ) -> RepositoryResult<Order>;
        fn delete_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub InventoryReader {}

    impl InventoryReader for InventoryReader {
        fn get_inventory_item(&self, id: i32) -> RepositoryResult<Option<InventoryItem>>;
        fn list_inventory(&self) -> RepositoryResult<Vec<InventoryView>>;
        fn list_low_stock(&self) -> RepositoryResult<Vec<InventoryItem>>;
    }
}

mock! {
    pub InventoryWriter {}

    impl InventoryWriter for InventoryWriter {
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
}

mock! {
    pub ProductionReader {}

    impl ProductionReader for ProductionReader {
        fn list_batches(&self) -> RepositoryResult<Vec<BatchView>>;
        fn get_batch(&self, id: i32) -> RepositoryResult<Option<BatchView>>;
        fn list_quality_checks(&self, batch_id: i32) -> RepositoryResult<Vec<QualityCheckView>>;
    }
}

mock! {
    pub ProductionWriter {}

    impl ProductionWriter for ProductionWriter {
        fn create_batch(&self, new_batch: &NewProductionBatch) -> RepositoryResult<ProductionBatch>;
        fn add_quality_check(&self, new_check: &NewQualityCheck) -> RepositoryResult<QualityCheck>;
    }
}

mock! {
    pub VehicleReader {}

    impl VehicleReader for VehicleReader {
        fn get_vehicle_by_id(&self, id: i32) -> RepositoryResult<Option<Vehicle>>;
        fn list_vehicles(&self) -> RepositoryResult<Vec<VehicleView>>;
        fn list_vehicles_with_status(
            &self,
            status: VehicleStatus,
        ) -> RepositoryResult<Vec<Vehicle>>;
    }
}

mock! {
    pub VehicleWriter {}

    impl VehicleWriter for VehicleWriter {
        fn create_vehicle(
            &self,
            new_vehicle: &NewVehicle,
            actor_id: i32,
        ) -> RepositoryResult<Vehicle>;
        fn update_vehicle(
            &self,
            vehicle_id: i32,
            updates: &UpdateVehicle,
            actor_id: i32,
        ) -> RepositoryResult<Vehicle>;
        fn delete_vehicle(&self, vehicle_id: i32, actor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub EquipmentReader {}

    impl EquipmentReader for EquipmentReader {
        fn list_equipment(&self) -> RepositoryResult<Vec<EquipmentView>>;
        fn list_equipment_with_status(
            &self,
            status: EquipmentStatus,
        ) -> RepositoryResult<Vec<Equipment>>;
    }
}

mock! {
    pub EquipmentWriter {}

    impl EquipmentWriter for EquipmentWriter {
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
}

mock! {
    pub JobCardReader {}

    impl JobCardReader for JobCardReader {
        fn get_job_card(&self, id: i32) -> RepositoryResult<Option<JobCard>>;
        fn get_job_card_details(&self, id: i32) -> RepositoryResult<Option<JobCardDetails>>;
        fn list_job_cards(&self, query: JobCardListQuery) -> RepositoryResult<Vec<JobCardView>>;
        fn list_recent_job_cards(&self, limit: i64) -> RepositoryResult<Vec<JobCardView>>;
    }
}

mock! {
    pub JobCardWriter {}

    impl JobCardWriter for JobCardWriter {
        fn create_job_card(&self, new_job: &NewJobCard, actor_id: i32) -> RepositoryResult<JobCard>;
        fn delete_job_card(&self, job_id: i32, actor_id: i32) -> RepositoryResult<()>;
        fn update_job_status(
            &self,
            change: &JobStatusChange,
            actor_id: i32,
        ) -> RepositoryResult<JobCard>;
        fn record_material_usage(
            &self,
            usage: &NewMaterialUsage,
        ) -> RepositoryResult<MaterialUsage>;
    }
}

mock! {
    pub AssignmentReader {}

    impl AssignmentReader for AssignmentReader {
        fn list_assignments(&self) -> RepositoryResult<Vec<AssignmentView>>;
    }
}

mock! {
    pub AssignmentWriter {}

    impl AssignmentWriter for AssignmentWriter {
        fn create_assignment(&self, new_assignment: &NewAssignment) -> RepositoryResult<i32>;
        fn update_assignment(
            &self,
            assignment_id: i32,
            updates: &UpdateAssignment,
        ) -> RepositoryResult<()>;
        fn delete_assignment(&self, assignment_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub IntegrationReader {}

    impl IntegrationReader for IntegrationReader {
        fn list_recent_events(&self, limit: i64) -> RepositoryResult<Vec<IntegrationEventView>>;
    }
}

mock! {
    pub IntegrationWriter {}

    impl IntegrationWriter for IntegrationWriter {
        fn auto_create_jobs(&self, assignee: Option<i32>) -> RepositoryResult<usize>;
        fn sync_inventory(&self) -> RepositoryResult<usize>;
    }
}

mock! {
    pub FinanceReader {}

    impl FinanceReader for FinanceReader {
        fn list_invoices(
            &self,
            query: InvoiceListQuery,
        ) -> RepositoryResult<(usize, Vec<InvoiceView>)>;
        fn outstanding_total_cents(&self) -> RepositoryResult<i64>;
        fn list_expenses(&self) -> RepositoryResult<Vec<ExpenseView>>;
        fn expenses_total_cents(&self, from: NaiveDate, to: NaiveDate) -> RepositoryResult<i64>;
    }
}

mock! {
    pub FinanceWriter {}

    impl FinanceWriter for FinanceWriter {
        fn create_invoice(
            &self,
            new_invoice: &NewInvoice,
            actor_id: i32,
        ) -> RepositoryResult<Invoice>;
        fn pay_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<Invoice>;
        fn delete_invoice(&self, invoice_id: i32, actor_id: i32) -> RepositoryResult<()>;
        fn create_expense(&self, new_expense: &NewExpense) -> RepositoryResult<Expense>;
        fn delete_expense(&self, expense_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CrmReader {}

    impl CrmReader for CrmReader {
        fn get_lead(&self, id: i32) -> RepositoryResult<Option<Lead>>;
        fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
        fn list_opportunities(&self) -> RepositoryResult<Vec<OpportunityView>>;
        fn list_tickets(&self) -> RepositoryResult<Vec<TicketView>>;
    }
}

mock! {
    pub CrmWriter {}

    impl CrmWriter for CrmWriter {
        fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Lead>;
        fn update_lead(&self, lead_id: i32, updates: &UpdateLead) -> RepositoryResult<Lead>;
        fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()>;
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
}

mock! {
    pub ComplianceReader {}

    impl ComplianceReader for ComplianceReader {
        fn list_compliance_documents(
            &self,
            today: NaiveDate,
        ) -> RepositoryResult<Vec<ComplianceView>>;
    }
}

mock! {
    pub ComplianceWriter {}

    impl ComplianceWriter for ComplianceWriter {
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
        fn delete_compliance_document(
            &self,
            document_id: i32,
            actor_id: i32,
        ) -> RepositoryResult<()>;
    }
}

mock! {
    pub SupplierReader {}

    impl SupplierReader for SupplierReader {
        fn list_suppliers(&self) -> RepositoryResult<Vec<Supplier>>;
    }
}

mock! {
    pub SupplierWriter {}

    impl SupplierWriter for SupplierWriter {
        fn create_supplier(&self, new_supplier: &NewSupplier) -> RepositoryResult<Supplier>;
        fn update_supplier(
            &self,
            supplier_id: i32,
            updates: &UpdateSupplier,
        ) -> RepositoryResult<Supplier>;
        fn delete_supplier(&self, supplier_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub PurchaseOrderReader {}

    impl PurchaseOrderReader for PurchaseOrderReader {
        fn list_purchase_orders(&self) -> RepositoryResult<Vec<PurchaseOrderView>>;
    }
}

mock! {
    pub PurchaseOrderWriter {}

    impl PurchaseOrderWriter for PurchaseOrderWriter {
        fn create_purchase_order(
            &self,
            new_order: &NewPurchaseOrder,
            actor_id: i32,
        ) -> RepositoryResult<PurchaseOrder>;
        fn receive_purchase_order(
            &self,
            order_id: i32,
            actor_id: i32,
        ) -> RepositoryResult<PurchaseOrder>;
        fn delete_purchase_order(&self, order_id: i32, actor_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub DashboardReader {}

    impl DashboardReader for DashboardReader {
        fn dashboard_stats(&self) -> RepositoryResult<DashboardStats>;
    }
}
