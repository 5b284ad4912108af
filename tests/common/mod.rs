//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{Local, NaiveDate};
use tempfile::TempDir;

use readymix_erp::db::{DbPool, establish_connection_pool, run_migrations};
use readymix_erp::domain::auth::AuthenticatedUser;
use readymix_erp::domain::customer::{Customer, NewCustomer};
use readymix_erp::domain::employee::{Employee, EmployeeStatus, NewEmployee};
use readymix_erp::domain::inventory::{InventoryItem, NewInventoryItem};
use readymix_erp::domain::order::{NewOrder, Order};
use readymix_erp::domain::product::{NewProduct, Product};
use readymix_erp::repository::{
    CustomerWriter, DieselRepository, EmployeeWriter, InventoryWriter, OrderWriter, ProductWriter,
};

/// Audit actor used by fixtures; the audit log keeps no foreign key on it.
pub const FIXTURE_ACTOR: i32 = 1;

/// Temporary database used in integration tests.
///
/// The file lives in its own temporary directory, so the `-wal` and `-shm`
/// companions are removed together with it.
pub struct TestDb {
    dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb { dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &std::path::Path {
        self.dir.path()
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn seed_employee(repo: &DieselRepository, name: &str) -> Employee {
    let new_employee = NewEmployee {
        name: name.to_string(),
        role_id: None,
        department_id: None,
        phone: None,
        email: None,
        date_of_joining: today(),
        status: EmployeeStatus::Active,
    };
    repo.create_employee(&new_employee, FIXTURE_ACTOR)
        .expect("create employee")
}

pub fn seed_customer(repo: &DieselRepository, name: &str) -> Customer {
    let new_customer = NewCustomer {
        name: name.to_string(),
        address: Some("Plot 12, Ring Road".to_string()),
        phone: None,
        email: None,
    };
    repo.create_customer(&new_customer, FIXTURE_ACTOR)
        .expect("create customer")
}

pub fn seed_product(repo: &DieselRepository, name: &str, unit_price_cents: i64) -> Product {
    let new_product = NewProduct {
        name: name.to_string(),
        mix_design: Some("1:1.5:3".to_string()),
        unit: "m3".to_string(),
        unit_price_cents,
    };
    repo.create_product(&new_product, FIXTURE_ACTOR)
        .expect("create product")
}

pub fn seed_material(repo: &DieselRepository, name: &str, stock: f64) -> InventoryItem {
    let new_item = NewInventoryItem {
        name: name.to_string(),
        supplier_id: None,
        current_stock: stock,
        unit: "t".to_string(),
        threshold: 10.0,
        last_updated: today(),
    };
    repo.create_inventory_item(&new_item, FIXTURE_ACTOR)
        .expect("create inventory item")
}

/// Confirmed order for a fresh customer and product.
pub fn seed_order(repo: &DieselRepository, site: &str) -> Order {
    let customer = seed_customer(repo, &format!("Customer for {site}"));
    let product = seed_product(repo, &format!("M25 for {site}"), 5_500_00);
    repo.create_order(
        &NewOrder::new(customer.id, product.id, 6.0, site, today()),
        FIXTURE_ACTOR,
    )
    .expect("create order")
}

/// Session for an operator backed by a real employee row.
pub fn operator(employee: &Employee, role: Option<&str>) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: FIXTURE_ACTOR,
        username: "operator".to_string(),
        employee_id: employee.id,
        name: employee.name.clone(),
        role: role.map(str::to_string),
    }
}
