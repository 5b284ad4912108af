use crate::domain::auth::AuthenticatedUser;
use crate::domain::crm::{Lead, OpportunityView, Ticket, TicketView};
use crate::domain::customer::{Customer, CustomerListQuery};
use crate::forms::crm::{LeadForm, OpportunityForm, TicketForm, TicketStatusForm};
use crate::repository::{CrmReader, CrmWriter, CustomerReader};
use crate::services::{Saved, ServiceError, ServiceResult};

pub struct OpportunitiesPageData {
    /// Opportunities with lead and customer names.
    pub opportunities: Vec<OpportunityView>,
    /// Value of opportunities that are neither won nor lost.
    pub pipeline_cents: i64,
    /// Leads offered by the lead select.
    pub leads: Vec<Lead>,
    /// Customers offered by the customer select.
    pub customers: Vec<Customer>,
}

pub struct TicketsPageData {
    /// Tickets, newest first.
    pub tickets: Vec<TicketView>,
    /// Customers offered by the new ticket form.
    pub customers: Vec<Customer>,
}

fn all_customers<R>(repo: &R) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let (_, customers) = repo
        .list_customers(CustomerListQuery::default())
        .map_err(ServiceError::from)?;
    Ok(customers)
}

pub fn load_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: CrmReader + ?Sized,
{
    repo.list_leads().map_err(ServiceError::from)
}

pub fn save_lead<R>(repo: &R, form: LeadForm) -> ServiceResult<Saved>
where
    R: CrmWriter + ?Sized,
{
    let lead_id = form.lead_id;
    let payload = form
        .into_new_lead()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match lead_id {
        Some(lead_id) => {
            repo.update_lead(lead_id, &payload)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_lead(&payload).map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

pub fn delete_lead<R>(repo: &R, lead_id: i32) -> ServiceResult<()>
where
    R: CrmWriter + ?Sized,
{
    repo.delete_lead(lead_id).map_err(ServiceError::from)
}

/// Turns a lead into a customer; converting twice is a form error.
pub fn convert_lead<R>(repo: &R, user: &AuthenticatedUser, lead_id: i32) -> ServiceResult<Customer>
where
    R: CrmWriter + ?Sized,
{
    let customer = repo
        .convert_lead(lead_id, user.user_id)
        .map_err(ServiceError::from)?;
    log::info!("Lead #{lead_id} converted to customer #{}", customer.id);
    Ok(customer)
}

pub fn load_opportunities_page<R>(repo: &R) -> ServiceResult<OpportunitiesPageData>
where
    R: CrmReader + CustomerReader + ?Sized,
{
    let opportunities = repo.list_opportunities().map_err(ServiceError::from)?;
    let pipeline_cents = opportunities
        .iter()
        .filter(|view| view.opportunity.stage.is_open())
        .map(|view| view.opportunity.value_cents)
        .sum();
    let leads = repo.list_leads().map_err(ServiceError::from)?;
    let customers = all_customers(repo)?;

    Ok(OpportunitiesPageData {
        opportunities,
        pipeline_cents,
        leads,
        customers,
    })
}

pub fn save_opportunity<R>(repo: &R, form: OpportunityForm) -> ServiceResult<Saved>
where
    R: CrmWriter + ?Sized,
{
    let opportunity_id = form.opportunity_id;
    let payload = form
        .into_new_opportunity()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match opportunity_id {
        Some(opportunity_id) => {
            repo.update_opportunity(opportunity_id, &payload)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_opportunity(&payload)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

pub fn delete_opportunity<R>(repo: &R, opportunity_id: i32) -> ServiceResult<()>
where
    R: CrmWriter + ?Sized,
{
    repo.delete_opportunity(opportunity_id)
        .map_err(ServiceError::from)
}

pub fn load_tickets_page<R>(repo: &R) -> ServiceResult<TicketsPageData>
where
    R: CrmReader + CustomerReader + ?Sized,
{
    let tickets = repo.list_tickets().map_err(ServiceError::from)?;
    let customers = all_customers(repo)?;
    Ok(TicketsPageData { tickets, customers })
}

pub fn create_ticket<R>(repo: &R, form: TicketForm) -> ServiceResult<Ticket>
where
    R: CrmWriter + ?Sized,
{
    let new_ticket = form
        .into_new_ticket()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_ticket(&new_ticket).map_err(ServiceError::from)
}

/// Resolved and closed tickets get a `resolved_at` stamp.
pub fn update_ticket_status<R>(
    repo: &R,
    ticket_id: i32,
    form: TicketStatusForm,
) -> ServiceResult<Ticket>
where
    R: CrmWriter + ?Sized,
{
    repo.update_ticket_status(ticket_id, form.status)
        .map_err(ServiceError::from)
}

pub fn delete_ticket<R>(repo: &R, ticket_id: i32) -> ServiceResult<()>
where
    R: CrmWriter + ?Sized,
{
    repo.delete_ticket(ticket_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::crm::{LeadStatus, Opportunity, OpportunityStage};
    use crate::repository::errors::RepositoryError;
    use crate::services::test_support::{FakeRepo, datetime, operator};

    fn opportunity(id: i32, stage: OpportunityStage, value_cents: i64) -> OpportunityView {
        OpportunityView {
            opportunity: Opportunity {
                id,
                lead_id: None,
                customer_id: Some(1),
                title: format!("Supply contract {id}"),
                value_cents,
                stage,
                expected_close: None,
                created_at: datetime(),
            },
            lead_name: None,
            customer_name: Some("Skyline Builders".to_string()),
        }
    }

    #[test]
    fn pipeline_counts_only_open_opportunities() {
        let mut repo = FakeRepo::default();
        repo.crm_reader.expect_list_opportunities().returning(|| {
            Ok(vec![
                opportunity(1, OpportunityStage::Proposal, 1_000_000),
                opportunity(2, OpportunityStage::Won, 5_000_000),
                opportunity(3, OpportunityStage::Negotiation, 250_000),
                opportunity(4, OpportunityStage::Lost, 900_000),
            ])
        });
        repo.crm_reader.expect_list_leads().returning(|| Ok(Vec::new()));
        repo.customer_reader
            .expect_list_customers()
            .returning(|_| Ok((0, Vec::new())));

        let data = load_opportunities_page(&repo).expect("page");

        assert_eq!(data.pipeline_cents, 1_250_000);
    }

    #[test]
    fn save_lead_with_id_updates() {
        let mut repo = FakeRepo::default();
        repo.crm_writer
            .expect_update_lead()
            .withf(|id, lead| *id == 2 && lead.status == LeadStatus::Contacted)
            .times(1)
            .returning(|id, lead| {
                Ok(Lead {
                    id,
                    name: lead.name.clone(),
                    company: lead.company.clone(),
                    email: None,
                    phone: None,
                    source: None,
                    status: lead.status,
                    notes: None,
                    created_at: datetime(),
                })
            });

        let form = LeadForm {
            lead_id: Some(2),
            name: "Anita Rao".to_string(),
            company: None,
            email: None,
            phone: None,
            source: None,
            status: LeadStatus::Contacted,
            notes: None,
        };

        assert_eq!(save_lead(&repo, form).expect("saved"), Saved::Updated);
    }

    #[test]
    fn converting_twice_is_a_form_error() {
        let mut repo = FakeRepo::default();
        repo.crm_writer.expect_convert_lead().returning(|_, _| {
            Err(RepositoryError::InvalidState(
                "Lead has already been converted".to_string(),
            ))
        });

        let result = convert_lead(&repo, &operator(), 2);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
