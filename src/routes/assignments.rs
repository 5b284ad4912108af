use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::assignments::{EditAssignmentForm, NewAssignmentForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::assignments;

#[get("/jobkart/assignments")]
pub async fn show_assignments(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match assignments::load_assignments_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "assignments");
            context.insert("assignments", &data.assignments);
            context.insert("jobs", &data.jobs);
            context.insert("employees", &data.employees);
            context.insert("vehicles", &data.vehicles);
            context.insert("equipment", &data.equipment);
            render_template(&tera, "assignments/index.html", &context)
        }
        Err(err) => page_error(err, "assignments"),
    }
}

#[post("/jobkart/assignments/new")]
pub async fn create_assignment(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<NewAssignmentForm>,
) -> impl Responder {
    match assignments::create_assignment(repo.get_ref(), form) {
        Ok(_) => {
            FlashMessage::success("Assignment created.").send();
            redirect("/jobkart/assignments")
        }
        Err(err) => flash_error(err, "Assignment", "/jobkart/assignments"),
    }
}

#[post("/jobkart/assignments/edit/{assignment_id}")]
pub async fn update_assignment(
    assignment_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<EditAssignmentForm>,
) -> impl Responder {
    match assignments::update_assignment(repo.get_ref(), assignment_id.into_inner(), form) {
        Ok(()) => {
            FlashMessage::success("Assignment updated.").send();
            redirect("/jobkart/assignments")
        }
        Err(err) => flash_error(err, "Assignment", "/jobkart/assignments"),
    }
}

#[post("/jobkart/assignments/delete/{assignment_id}")]
pub async fn delete_assignment(
    assignment_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match assignments::delete_assignment(repo.get_ref(), assignment_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Assignment removed.").send();
            redirect("/jobkart/assignments")
        }
        Err(err) => flash_error(err, "Assignment", "/jobkart/assignments"),
    }
}
