use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::compliance::ComplianceStatus;
use crate::forms::compliance::ComplianceForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::compliance;

#[get("/compliance")]
pub async fn show_compliance(
    params: web::Query<compliance::ComplianceQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match compliance::load_compliance_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "compliance");
            context.insert("documents", &data.documents);
            context.insert("status", &data.status);
            context.insert("statuses", ComplianceStatus::ALL);
            context.insert("vehicles", &data.vehicles);
            context.insert("employees", &data.employees);
            render_template(&tera, "compliance/index.html", &context)
        }
        Err(err) => page_error(err, "compliance documents"),
    }
}

#[post("/compliance")]
pub async fn save_compliance_document(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ComplianceForm>,
) -> impl Responder {
    match compliance::save_compliance_document(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Document {} successfully.", saved.verb())).send();
            redirect("/compliance")
        }
        Err(err) => flash_error(err, "Document", "/compliance"),
    }
}

#[post("/compliance/delete/{document_id}")]
pub async fn delete_compliance_document(
    document_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match compliance::delete_compliance_document(repo.get_ref(), &user, document_id.into_inner())
    {
        Ok(()) => {
            FlashMessage::success("Document deleted.").send();
            redirect("/compliance")
        }
        Err(err) => flash_error(err, "Document", "/compliance"),
    }
}
