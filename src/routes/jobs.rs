use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::Priority;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::job_card::JobStatus;
use crate::forms::jobs::{MaterialUsageForm, NewJobCardForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::{ServiceError, jobs};

#[get("/jobkart/jobs")]
pub async fn show_jobs(
    params: web::Query<jobs::JobsQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match jobs::load_jobs_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "jobs");
            context.insert("jobs", &data.jobs);
            context.insert("status", &data.status);
            context.insert("priority", &data.priority);
            context.insert("statuses", JobStatus::ALL);
            context.insert("priorities", Priority::ALL);
            render_template(&tera, "jobs/index.html", &context)
        }
        Err(err) => page_error(err, "job cards"),
    }
}

#[get("/jobkart/jobs/new")]
pub async fn new_job(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match jobs::load_job_form(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "jobs");
            context.insert("employees", &data.employees);
            context.insert("orders", &data.orders);
            context.insert("priorities", Priority::ALL);
            render_template(&tera, "jobs/form.html", &context)
        }
        Err(err) => page_error(err, "job card form"),
    }
}

#[post("/jobkart/jobs/new")]
pub async fn create_job(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<NewJobCardForm>,
) -> impl Responder {
    match jobs::create_job(repo.get_ref(), &user, form) {
        Ok(job) => {
            FlashMessage::success(format!("Job card #{} created.", job.id)).send();
            redirect("/jobkart/jobs")
        }
        Err(err) => flash_error(err, "Job card", "/jobkart/jobs/new"),
    }
}

#[get("/jobkart/jobs/{job_id}")]
pub async fn show_job(
    job_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match jobs::load_job(repo.get_ref(), job_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "jobs");
            context.insert("job", &data.job);
            context.insert("materials", &data.materials);
            context.insert("statuses", JobStatus::ALL);
            render_template(&tera, "jobs/view.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Job card not found!").send();
            redirect("/jobkart/jobs")
        }
        Err(err) => page_error(err, "job card"),
    }
}

#[post("/jobkart/jobs/delete/{job_id}")]
pub async fn delete_job(
    job_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let job_id = job_id.into_inner();
    match jobs::delete_job(repo.get_ref(), &user, job_id) {
        Ok(()) => {
            FlashMessage::success(format!("Job card #{job_id} deleted.")).send();
            redirect("/jobkart/jobs")
        }
        Err(err) => flash_error(err, "Job card", "/jobkart/jobs"),
    }
}

#[post("/jobkart/jobs/{job_id}/materials")]
pub async fn record_material_usage(
    job_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<MaterialUsageForm>,
) -> impl Responder {
    let job_id = job_id.into_inner();
    let location = format!("/jobkart/jobs/{job_id}");
    match jobs::record_material_usage(repo.get_ref(), job_id, form) {
        Ok(_) => {
            FlashMessage::success("Material usage recorded.").send();
            redirect(&location)
        }
        Err(err) => flash_error(err, "Job card", &location),
    }
}
