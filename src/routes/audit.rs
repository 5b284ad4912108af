use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::audit::AuditEntity;
use crate::domain::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, page_error, render_template};
use crate::services::audit;

#[get("/audit")]
pub async fn show_audit_log(
    params: web::Query<audit::AuditQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match audit::load_audit_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "audit");
            context.insert("entries", &data.entries);
            context.insert("entity", &data.entity);
            context.insert("entities", AuditEntity::ALL);
            render_template(&tera, "audit/index.html", &context)
        }
        Err(err) => page_error(err, "audit log"),
    }
}
