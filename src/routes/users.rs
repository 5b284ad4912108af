use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::users::CreateUserForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::{ServiceError, users};

#[get("/erp/users")]
pub async fn show_users(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users::load_users_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "users");
            context.insert("accounts", &data.accounts);
            context.insert("employees", &data.employees);
            render_template(&tera, "users/index.html", &context)
        }
        Err(err) => page_error(err, "users"),
    }
}

#[post("/erp/users")]
pub async fn create_user(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<CreateUserForm>,
) -> impl Responder {
    match users::create_user(repo.get_ref(), &user, form) {
        Ok(account) => {
            FlashMessage::success(format!("User {} created.", account.username)).send();
            redirect("/erp/users")
        }
        Err(ServiceError::Conflict) => {
            FlashMessage::error("Username already exists.").send();
            redirect("/erp/users")
        }
        Err(err) => flash_error(err, "User", "/erp/users"),
    }
}

#[post("/erp/users/delete/{user_id}")]
pub async fn delete_user(
    user_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::delete_user(repo.get_ref(), &user, user_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("User deleted.").send();
            redirect("/erp/users")
        }
        Err(err) => flash_error(err, "User", "/erp/users"),
    }
}
