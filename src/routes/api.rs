//! JSON endpoints used by the job board and the integration page.

use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::jobs::UpdateJobStatusPayload;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, integration, jobs};

fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": message,
        })),
        ServiceError::NotFound => HttpResponse::NotFound().json(json!({
            "success": false,
            "error": "job card not found",
        })),
        ServiceError::Unauthorized => HttpResponse::Unauthorized().json(json!({
            "success": false,
            "error": "authentication required",
        })),
        err => {
            log::error!("Failed to {action}: {err}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "internal error",
            }))
        }
    }
}

#[post("/api/update_job_status")]
pub async fn update_job_status(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UpdateJobStatusPayload>,
) -> impl Responder {
    match jobs::update_job_status(repo.get_ref(), &user, payload.into_inner()) {
        Ok(_) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(err) => error_response(err, "update job status"),
    }
}

#[post("/api/auto_create_jobs")]
pub async fn auto_create_jobs(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match integration::auto_create_jobs(
        repo.get_ref(),
        server_config.default_delivery_employee_id,
    ) {
        Ok(created) => HttpResponse::Ok().json(json!({
            "success": true,
            "created_jobs": created,
        })),
        Err(err) => error_response(err, "auto-create job cards"),
    }
}

#[post("/api/sync_inventory")]
pub async fn sync_inventory(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match integration::sync_inventory(repo.get_ref()) {
        Ok(synced) => HttpResponse::Ok().json(json!({
            "success": true,
            "synced_jobs": synced,
        })),
        Err(err) => error_response(err, "sync inventory"),
    }
}
