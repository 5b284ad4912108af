use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::finance::InvoiceStatus;
use crate::forms::finance::{ExpenseForm, InvoiceForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::finance;

#[get("/finance/invoices")]
pub async fn show_invoices(
    params: web::Query<finance::InvoicesQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match finance::load_invoices_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "invoices");
            context.insert("invoices", &data.invoices);
            context.insert("status", &data.status);
            context.insert("statuses", InvoiceStatus::ALL);
            context.insert("outstanding_cents", &data.outstanding_cents);
            context.insert("customers", &data.customers);
            context.insert("orders", &data.orders);
            render_template(&tera, "finance/invoices.html", &context)
        }
        Err(err) => page_error(err, "invoices"),
    }
}

#[post("/finance/invoices")]
pub async fn create_invoice(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<InvoiceForm>,
) -> impl Responder {
    match finance::create_invoice(repo.get_ref(), &user, form) {
        Ok(invoice) => {
            FlashMessage::success(format!("Invoice {} issued.", invoice.invoice_number)).send();
            redirect("/finance/invoices")
        }
        Err(err) => flash_error(err, "Invoice", "/finance/invoices"),
    }
}

#[post("/finance/invoices/{invoice_id}/pay")]
pub async fn pay_invoice(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match finance::pay_invoice(repo.get_ref(), &user, invoice_id.into_inner()) {
        Ok(invoice) => {
            FlashMessage::success(format!("Invoice {} marked as paid.", invoice.invoice_number))
                .send();
            redirect("/finance/invoices")
        }
        Err(err) => flash_error(err, "Invoice", "/finance/invoices"),
    }
}

#[post("/finance/invoices/delete/{invoice_id}")]
pub async fn delete_invoice(
    invoice_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match finance::delete_invoice(repo.get_ref(), &user, invoice_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Invoice deleted.").send();
            redirect("/finance/invoices")
        }
        Err(err) => flash_error(err, "Invoice", "/finance/invoices"),
    }
}

#[get("/finance/expenses")]
pub async fn show_expenses(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match finance::load_expenses_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "expenses");
            context.insert("expenses", &data.expenses);
            context.insert("month_start", &data.month_start);
            context.insert("month_total_cents", &data.month_total_cents);
            render_template(&tera, "finance/expenses.html", &context)
        }
        Err(err) => page_error(err, "expenses"),
    }
}

#[post("/finance/expenses")]
pub async fn create_expense(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<ExpenseForm>,
) -> impl Responder {
    match finance::create_expense(repo.get_ref(), &user, form) {
        Ok(_) => {
            FlashMessage::success("Expense recorded.").send();
            redirect("/finance/expenses")
        }
        Err(err) => flash_error(err, "Expense", "/finance/expenses"),
    }
}

#[post("/finance/expenses/delete/{expense_id}")]
pub async fn delete_expense(
    expense_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match finance::delete_expense(repo.get_ref(), expense_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Expense deleted.").send();
            redirect("/finance/expenses")
        }
        Err(err) => flash_error(err, "Expense", "/finance/expenses"),
    }
}
