//! Bootstrap an administrator: `create_admin <username> <password> [full name]`.

use std::process::ExitCode;

use dotenvy::dotenv;

use readymix_erp::ADMIN_ROLE;
use readymix_erp::db::{establish_connection_pool, run_migrations};
use readymix_erp::domain::employee::{EmployeeStatus, NewEmployee};
use readymix_erp::models::config::ServerConfig;
use readymix_erp::repository::{DieselRepository, OrganizationReader};
use readymix_erp::services::auth::hash_password;

/// Audit actor recorded for changes made outside a login session.
const SYSTEM_ACTOR_ID: i32 = 0;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn run(username: &str, password: &str, name: &str) -> Result<(), BoxError> {
    let config = ServerConfig::from_env();
    let pool = establish_connection_pool(&config.database_url)?;
    run_migrations(&pool)?;
    let repo = DieselRepository::new(pool);

    let role_id = repo
        .list_roles()?
        .into_iter()
        .find(|role| role.name == ADMIN_ROLE)
        .map(|role| role.id);
    if role_id.is_none() {
        log::warn!("Role {ADMIN_ROLE} is missing; the employee will have no role");
    }

    let password_hash = hash_password(password)?;
    let employee = NewEmployee {
        name: name.to_string(),
        role_id,
        department_id: None,
        phone: None,
        email: None,
        date_of_joining: chrono::Local::now().date_naive(),
        status: EmployeeStatus::Active,
    };
    let account =
        repo.create_employee_with_account(&employee, username, password_hash, SYSTEM_ACTOR_ID)?;

    log::info!(
        "Created administrator {} for employee #{}",
        account.username,
        account.employee_id
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (username, password) = match (args.first(), args.get(1)) {
        (Some(username), Some(password)) => (username, password),
        _ => {
            eprintln!("usage: create_admin <username> <password> [full name]");
            return ExitCode::FAILURE;
        }
    };
    let name = args.get(2).map(String::as_str).unwrap_or("Administrator");

    match run(username, password, name) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Failed to create administrator: {err}");
            ExitCode::FAILURE
        }
    }
}
