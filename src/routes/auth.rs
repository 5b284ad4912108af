use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, Responder, get, post, route, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::{anonymous_context, redirect, render_template};
use crate::services::{ServiceError, auth};

#[get("/")]
pub async fn index(user: Option<AuthenticatedUser>) -> impl Responder {
    match user {
        Some(_) => redirect("/dashboard"),
        None => redirect("/login"),
    }
}

#[get("/login")]
pub async fn show_login(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    if user.is_some() {
        return redirect("/dashboard");
    }
    let context = anonymous_context(&flash_messages);
    render_template(&tera, "login.html", &context)
}

#[post("/login")]
pub async fn login(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    let user = match auth::login(repo.get_ref(), form) {
        Ok(user) => user,
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Invalid username or password").send();
            return redirect("/login");
        }
        Err(err) => {
            log::error!("Login failed: {err}");
            FlashMessage::error("Login is unavailable right now. Please try again.").send();
            return redirect("/login");
        }
    };

    let stored = serde_json::to_string(&user)
        .map_err(|err| err.to_string())
        .and_then(|payload| {
            Identity::login(&request.extensions(), payload).map_err(|err| err.to_string())
        });
    if let Err(err) = stored {
        log::error!("Failed to store session for {}: {err}", user.username);
        FlashMessage::error("Login is unavailable right now. Please try again.").send();
        return redirect("/login");
    }

    FlashMessage::success(format!("Welcome {}!", user.name)).send();
    redirect("/dashboard")
}

#[route("/logout", method = "GET", method = "POST")]
pub async fn logout(
    user: AuthenticatedUser,
    identity: Identity,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(err) = auth::logout(repo.get_ref(), &user) {
        log::error!("Failed to record logout for {}: {err}", user.username);
    }
    identity.logout();
    FlashMessage::info("You have been logged out successfully").send();
    redirect("/login")
}
