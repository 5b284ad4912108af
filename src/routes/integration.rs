use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::{base_context, page_error, render_template};
use crate::services::integration;

#[get("/integration")]
pub async fn show_integration(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match integration::load_integration_page(repo.get_ref()) {
        Ok(events) => {
            let mut context = base_context(&flash_messages, &user, "integration");
            context.insert("events", &events);
            render_template(&tera, "integration/index.html", &context)
        }
        Err(err) => page_error(err, "integration events"),
    }
}
