use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;

use readymix_erp::db::{establish_connection_pool, run_migrations};
use readymix_erp::middleware::redirect_unauthorized;
use readymix_erp::models::config::ServerConfig;
use readymix_erp::repository::DieselRepository;
use readymix_erp::routes::{
    api, assignments, audit, auth, build_tera, compliance, crm, customers, dashboard, employees,
    equipment, finance, integration, inventory, jobs, orders, procurement, production, products,
    users, vehicles,
};

fn session_key(config: &ServerConfig) -> Key {
    match config.secret.as_deref().map(|secret| Key::try_from(secret.as_bytes())) {
        Some(Ok(key)) => key,
        Some(Err(err)) => {
            log::warn!("SECRET_KEY is unusable ({err}); sessions will not survive a restart");
            Key::generate()
        }
        None => {
            log::warn!("SECRET_KEY not set; sessions will not survive a restart");
            Key::generate()
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let server_config = ServerConfig::from_env();
    let secret_key = session_key(&server_config);

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    match run_migrations(&pool) {
        Ok(0) => {}
        Ok(applied) => log::info!("Applied {applied} database migration(s)"),
        Err(e) => {
            log::error!("Failed to run database migrations: {e}");
            std::process::exit(1);
        }
    }
    let repo = DieselRepository::new(pool);

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match build_tera("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::from_fn(redirect_unauthorized))
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(server_config.cookie_secure)
                    .cookie_domain(server_config.domain.as_ref().map(|domain| format!(".{domain}")))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(auth::index)
            .service(auth::show_login)
            .service(auth::login)
            .service(auth::logout)
            .service(dashboard::show_dashboard)
            .service(dashboard::show_erp)
            .service(dashboard::show_jobkart)
            .service(orders::show_orders)
            .service(orders::new_order)
            .service(orders::create_order)
            .service(orders::edit_order)
            .service(orders::update_order)
            .service(orders::delete_order)
            .service(orders::show_order)
            .service(customers::show_customers)
            .service(customers::save_customer)
            .service(customers::delete_customer)
            .service(products::show_products)
            .service(products::save_product)
            .service(products::delete_product)
            .service(inventory::show_inventory)
            .service(inventory::save_inventory_item)
            .service(inventory::delete_inventory_item)
            .service(production::show_batches)
            .service(production::new_batch)
            .service(production::create_batch)
            .service(production::show_batch)
            .service(production::show_quality_checks)
            .service(production::add_quality_check)
            .service(vehicles::show_vehicles)
            .service(vehicles::save_vehicle)
            .service(vehicles::delete_vehicle)
            .service(equipment::show_equipment)
            .service(equipment::save_equipment)
            .service(equipment::delete_equipment)
            .service(employees::show_employees)
            .service(employees::save_employee)
            .service(employees::delete_employee)
            .service(users::show_users)
            .service(users::create_user)
            .service(users::delete_user)
            .service(jobs::show_jobs)
            .service(jobs::new_job)
            .service(jobs::create_job)
            .service(jobs::delete_job)
            .service(jobs::record_material_usage)
            .service(jobs::show_job)
            .service(assignments::show_assignments)
            .service(assignments::create_assignment)
            .service(assignments::update_assignment)
            .service(assignments::delete_assignment)
            .service(integration::show_integration)
            .service(api::update_job_status)
            .service(api::auto_create_jobs)
            .service(api::sync_inventory)
            .service(finance::show_invoices)
            .service(finance::create_invoice)
            .service(finance::pay_invoice)
            .service(finance::delete_invoice)
            .service(finance::show_expenses)
            .service(finance::create_expense)
            .service(finance::delete_expense)
            .service(crm::show_leads)
            .service(crm::save_lead)
            .service(crm::delete_lead)
            .service(crm::convert_lead)
            .service(crm::show_opportunities)
            .service(crm::save_opportunity)
            .service(crm::delete_opportunity)
            .service(crm::show_tickets)
            .service(crm::create_ticket)
            .service(crm::update_ticket_status)
            .service(crm::delete_ticket)
            .service(compliance::show_compliance)
            .service(compliance::save_compliance_document)
            .service(compliance::delete_compliance_document)
            .service(procurement::show_suppliers)
            .service(procurement::save_supplier)
            .service(procurement::delete_supplier)
            .service(procurement::show_purchase_orders)
            .service(procurement::create_purchase_order)
            .service(procurement::receive_purchase_order)
            .service(procurement::delete_purchase_order)
            .service(audit::show_audit_log)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
