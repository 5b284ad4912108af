use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::Priority;
use crate::domain::auth::AuthenticatedUser;
use crate::domain::crm::{LeadStatus, OpportunityStage, TicketStatus};
use crate::forms::crm::{LeadForm, OpportunityForm, TicketForm, TicketStatusForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, flash_error, page_error, redirect, render_template};
use crate::services::crm;

#[get("/crm/leads")]
pub async fn show_leads(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match crm::load_leads(repo.get_ref()) {
        Ok(leads) => {
            let mut context = base_context(&flash_messages, &user, "leads");
            context.insert("leads", &leads);
            context.insert("statuses", LeadStatus::ALL);
            render_template(&tera, "crm/leads.html", &context)
        }
        Err(err) => page_error(err, "leads"),
    }
}

#[post("/crm/leads")]
pub async fn save_lead(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<LeadForm>,
) -> impl Responder {
    match crm::save_lead(repo.get_ref(), form) {
        Ok(saved) => {
            FlashMessage::success(format!("Lead {} successfully.", saved.verb())).send();
            redirect("/crm/leads")
        }
        Err(err) => flash_error(err, "Lead", "/crm/leads"),
    }
}

#[post("/crm/leads/delete/{lead_id}")]
pub async fn delete_lead(
    lead_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match crm::delete_lead(repo.get_ref(), lead_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Lead deleted.").send();
            redirect("/crm/leads")
        }
        Err(err) => flash_error(err, "Lead", "/crm/leads"),
    }
}

#[post("/crm/leads/{lead_id}/convert")]
pub async fn convert_lead(
    lead_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match crm::convert_lead(repo.get_ref(), &user, lead_id.into_inner()) {
        Ok(customer) => {
            FlashMessage::success(format!("Lead converted to customer {}.", customer.name)).send();
            redirect("/crm/leads")
        }
        Err(err) => flash_error(err, "Lead", "/crm/leads"),
    }
}

#[get("/crm/opportunities")]
pub async fn show_opportunities(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match crm::load_opportunities_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "opportunities");
            context.insert("opportunities", &data.opportunities);
            context.insert("pipeline_cents", &data.pipeline_cents);
            context.insert("leads", &data.leads);
            context.insert("customers", &data.customers);
            context.insert("stages", OpportunityStage::ALL);
            render_template(&tera, "crm/opportunities.html", &context)
        }
        Err(err) => page_error(err, "opportunities"),
    }
}

#[post("/crm/opportunities")]
pub async fn save_opportunity(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<OpportunityForm>,
) -> impl Responder {
    match crm::save_opportunity(repo.get_ref(), form) {
        Ok(saved) => {
            FlashMessage::success(format!("Opportunity {} successfully.", saved.verb())).send();
            redirect("/crm/opportunities")
        }
        Err(err) => flash_error(err, "Opportunity", "/crm/opportunities"),
    }
}

#[post("/crm/opportunities/delete/{opportunity_id}")]
pub async fn delete_opportunity(
    opportunity_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match crm::delete_opportunity(repo.get_ref(), opportunity_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Opportunity deleted.").send();
            redirect("/crm/opportunities")
        }
        Err(err) => flash_error(err, "Opportunity", "/crm/opportunities"),
    }
}

#[get("/crm/tickets")]
pub async fn show_tickets(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match crm::load_tickets_page(repo.get_ref()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "tickets");
            context.insert("tickets", &data.tickets);
            context.insert("customers", &data.customers);
            context.insert("statuses", TicketStatus::ALL);
            context.insert("priorities", Priority::ALL);
            render_template(&tera, "crm/tickets.html", &context)
        }
        Err(err) => page_error(err, "tickets"),
    }
}

#[post("/crm/tickets")]
pub async fn create_ticket(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<TicketForm>,
) -> impl Responder {
    match crm::create_ticket(repo.get_ref(), form) {
        Ok(ticket) => {
            FlashMessage::success(format!("Ticket #{} opened.", ticket.id)).send();
            redirect("/crm/tickets")
        }
        Err(err) => flash_error(err, "Ticket", "/crm/tickets"),
    }
}

#[post("/crm/tickets/{ticket_id}/status")]
pub async fn update_ticket_status(
    ticket_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<TicketStatusForm>,
) -> impl Responder {
    match crm::update_ticket_status(repo.get_ref(), ticket_id.into_inner(), form) {
        Ok(ticket) => {
            FlashMessage::success(format!("Ticket #{} is now {}.", ticket.id, ticket.status))
                .send();
            redirect("/crm/tickets")
        }
        Err(err) => flash_error(err, "Ticket", "/crm/tickets"),
    }
}

#[post("/crm/tickets/delete/{ticket_id}")]
pub async fn delete_ticket(
    ticket_id: web::Path<i32>,
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match crm::delete_ticket(repo.get_ref(), ticket_id.into_inner()) {
        Ok(()) => {
            FlashMessage::success("Ticket deleted.").send();
            redirect("/crm/tickets")
        }
        Err(err) => flash_error(err, "Ticket", "/crm/tickets"),
    }
}
