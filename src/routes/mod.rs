use std::collections::HashMap;

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera, Value};

use crate::ADMIN_ROLE;
use crate::domain::auth::AuthenticatedUser;
use crate::services::ServiceError;

pub mod api;
pub mod assignments;
pub mod audit;
pub mod auth;
pub mod compliance;
pub mod crm;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod equipment;
pub mod finance;
pub mod integration;
pub mod inventory;
pub mod jobs;
pub mod orders;
pub mod procurement;
pub mod production;
pub mod products;
pub mod users;
pub mod vehicles;

#[derive(Debug, Serialize)]
struct Alert<'a> {
    level: &'static str,
    message: &'a str,
}

fn alert_level_to_str(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

fn insert_alerts(context: &mut Context, flash_messages: &IncomingFlashMessages) {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_level_to_str(message.level()),
            message: message.content(),
        })
        .collect();
    context.insert("alerts", &alerts);
}

/// Template context shared by every authenticated page.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
) -> Context {
    let mut context = Context::new();
    insert_alerts(&mut context, flash_messages);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context.insert("is_admin", &user.has_role(ADMIN_ROLE));
    context
}

/// Template context for pages rendered before login.
pub fn anonymous_context(flash_messages: &IncomingFlashMessages) -> Context {
    let mut context = Context::new();
    insert_alerts(&mut context, flash_messages);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Redirect used when a non-administrator reaches an admin-only page.
pub fn permission_denied() -> HttpResponse {
    FlashMessage::error("You do not have permission to access this page.").send();
    redirect("/dashboard")
}

/// Log a failure while loading a page and answer with a bare status.
pub fn page_error(err: ServiceError, what: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => permission_denied(),
        err => {
            log::error!("Failed to load {what}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Flash a failed form submission and send the browser to `location`.
///
/// `subject` names the record in the message, e.g. "Customer".
pub fn flash_error(err: ServiceError, subject: &str, location: &str) -> HttpResponse {
    match err {
        ServiceError::Unauthorized => return permission_denied(),
        ServiceError::Form(message) => FlashMessage::error(message).send(),
        ServiceError::NotFound => FlashMessage::error(format!("{subject} not found.")).send(),
        ServiceError::Conflict => FlashMessage::error(format!("{subject} already exists.")).send(),
        ServiceError::InUse => FlashMessage::error(format!(
            "{subject} is still referenced by other records and cannot be deleted."
        ))
        .send(),
        ServiceError::Internal(message) => {
            log::error!("{subject} operation failed: {message}");
            FlashMessage::error("Something went wrong. Please try again.").send();
        }
    }
    redirect(location)
}

/// Render integer cents as a decimal amount, e.g. `123456` -> `1234.56`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

fn money_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let cents = value
        .as_i64()
        .ok_or_else(|| tera::Error::msg("money filter expects an integer amount in cents"))?;
    Ok(Value::String(format_cents(cents)))
}

/// Load every template under `glob` and register the custom filters.
pub fn build_tera(glob: &str) -> tera::Result<Tera> {
    let mut tera = Tera::new(glob)?;
    tera.register_filter("money", money_filter);
    Ok(tera)
}
