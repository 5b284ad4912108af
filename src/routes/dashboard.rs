use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, page_error, render_template};
use crate::services::dashboard;

#[get("/dashboard")]
pub async fn show_dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dashboard::load_dashboard(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "dashboard");
            context.insert("stats", &data.stats);
            context.insert("recent_orders", &data.recent_orders);
            context.insert("recent_jobs", &data.recent_jobs);
            context.insert("low_stock", &data.low_stock);
            render_template(&tera, "dashboard.html", &context)
        }
        Err(err) => page_error(err, "dashboard"),
    }
}

#[get("/erp")]
pub async fn show_erp(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &user, "erp");
    render_template(&tera, "erp.html", &context)
}

#[get("/jobkart")]
pub async fn show_jobkart(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &user, "jobkart");
    render_template(&tera, "jobkart.html", &context)
}
