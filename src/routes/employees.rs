use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::employee::EmployeeStatus;
use crate::forms::employees::SaveEmployeeForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::employees;

#[get("/erp/employees")]
pub async fn show_employees(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match employees::load_employees_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "employees");
            context.insert("employees", &data.employees);
            context.insert("roles", &data.roles);
            context.insert("departments", &data.departments);
            context.insert("statuses", EmployeeStatus::ALL);
            render_template(&tera, "employees/index.html", &context)
        }
        Err(err) => page_error(err, "employees"),
    }
}

#[post("/erp/employees")]
pub async fn save_employee(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<SaveEmployeeForm>,
) -> impl Responder {
    match employees::save_employee(repo.get_ref(), &user, form) {
        Ok(saved) => {
            FlashMessage::success(format!("Employee {} successfully.", saved.verb())).send();
            redirect("/erp/employees")
        }
        Err(err) => flash_error(err, "Employee", "/erp/employees"),
    }
}

#[post("/erp/employees/delete/{employee_id}")]
pub async fn delete_employee(
    employee_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match employees::delete_employee(repo.get_ref(), &user, employee_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Employee deleted.").send();
            redirect("/erp/employees")
        }
        Err(err) => flash_error(err, "Employee", "/erp/employees"),
    }
}
