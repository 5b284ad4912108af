use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::forms::customers::SaveCustomerForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::customers;

#[get("/erp/customers")]
pub async fn show_customers(
    params: web::Query<customers::CustomersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customers::load_customers_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "customers");
            context.insert("customers", &data.customers);
            context.insert("search", &data.search);
            render_template(&tera, "customers/index.html", &context)
        }
        Err(err) => page_error(err, "customers"),
    }
}

#[post("/erp/customers")]
pub async fn save_customer(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveCustomerForm>,
) -> impl Responder {
    match customers::save_customer(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Customer {} successfully.", saved.verb())).send();
            redirect("/erp/customers")
        }
        Err(err) => flash_error(err, "Customer", "/erp/customers"),
    }
}

#[post("/erp/customers/delete/{customer_id}")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers::delete_customer(repo.get_ref(), &user, customer_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Customer deleted.").send();
            redirect("/erp/customers")
        }
        Err(err) => flash_error(err, "Customer", "/erp/customers"),
    }
}
