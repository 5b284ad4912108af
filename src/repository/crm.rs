use diesel::prelude::*;

use crate::{
    domain::{
        audit::{AuditAction, AuditEntity, NewAuditEntry},
        crm::{
            Lead as DomainLead, LeadStatus, NewLead as DomainNewLead,
            NewOpportunity as DomainNewOpportunity, NewTicket as DomainNewTicket,
            OpportunityView, Ticket as DomainTicket, TicketStatus, TicketView,
            UpdateLead as DomainUpdateLead, UpdateOpportunity as DomainUpdateOpportunity,
        },
        customer::{Customer as DomainCustomer, NewCustomer},
    },
    models::crm::{
        Lead as DbLead, NewLead as DbNewLead, NewOpportunity as DbNewOpportunity,
        NewTicket as DbNewTicket, Opportunity as DbOpportunity, Ticket as DbTicket,
    },
    repository::{
        CrmReader, CrmWriter, DieselRepository, append_audit,
        customer::insert_customer,
        ensure_affected,
        errors::{RepositoryError, RepositoryResult, still_referenced},
        now,
    },
};

impl CrmReader for DieselRepository {
    fn get_lead(&self, id: i32) -> RepositoryResult<Option<DomainLead>> {
        use crate::schema::crm_leads;

        let mut conn = self.conn()?;
        let lead = crm_leads::table
            .filter(crm_leads::id.eq(id))
            .select(DbLead::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(lead.map(Into::into))
    }

    fn list_leads(&self) -> RepositoryResult<Vec<DomainLead>> {
        use crate::schema::crm_leads;

        let mut conn = self.conn()?;
        let rows = crm_leads::table
            .order((crm_leads::created_at.desc(), crm_leads::id.desc()))
            .select(DbLead::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_opportunities(&self) -> RepositoryResult<Vec<OpportunityView>> {
        use crate::schema::{crm_leads, crm_opportunities, customers};

        let mut conn = self.conn()?;
        let rows = crm_opportunities::table
            .left_join(crm_leads::table)
            .left_join(customers::table)
            .order((crm_opportunities::created_at.desc(), crm_opportunities::id.desc()))
            .select((
                DbOpportunity::as_select(),
                crm_leads::name.nullable(),
                customers::name.nullable(),
            ))
            .load::<(DbOpportunity, Option<String>, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(opportunity, lead_name, customer_name)| OpportunityView {
                opportunity: opportunity.into(),
                lead_name,
                customer_name,
            })
            .collect())
    }

    fn list_tickets(&self) -> RepositoryResult<Vec<TicketView>> {
        use crate::schema::{crm_tickets, customers};

        let mut conn = self.conn()?;
        let rows = crm_tickets::table
            .left_join(customers::table)
            .order((crm_tickets::created_at.desc(), crm_tickets::id.desc()))
            .select((DbTicket::as_select(), customers::name.nullable()))
            .load::<(DbTicket, Option<String>)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(ticket, customer_name)| TicketView {
                ticket: ticket.into(),
                customer_name,
            })
            .collect())
    }
}

impl CrmWriter for DieselRepository {
    fn create_lead(&self, new_lead: &DomainNewLead) -> RepositoryResult<DomainLead> {
        use crate::schema::crm_leads;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(crm_leads::table)
            .values(DbNewLead::from(new_lead))
            .returning(DbLead::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }

    fn update_lead(
        &self,
        lead_id: i32,
        updates: &DomainUpdateLead,
    ) -> RepositoryResult<DomainLead> {
        use crate::schema::crm_leads;

        let mut conn = self.conn()?;
        let updated = diesel::update(crm_leads::table.filter(crm_leads::id.eq(lead_id)))
            .set(DbNewLead::from(updates))
            .returning(DbLead::as_returning())
            .get_result(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_lead(&self, lead_id: i32) -> RepositoryResult<()> {
        use crate::schema::crm_leads;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(crm_leads::table.filter(crm_leads::id.eq(lead_id)))
            .execute(&mut conn)
            .map_err(still_referenced)?;

        ensure_affected(deleted)
    }

    fn convert_lead(&self, lead_id: i32, actor_id: i32) -> RepositoryResult<DomainCustomer> {
        use crate::schema::crm_leads;

        let mut conn = self.conn()?;

        let customer = conn.transaction::<_, RepositoryError, _>(|conn| {
            let lead: DomainLead = crm_leads::table
                .filter(crm_leads::id.eq(lead_id))
                .select(DbLead::as_select())
                .first(conn)?
                .into();

            if lead.status == LeadStatus::Converted {
                return Err(RepositoryError::InvalidState(
                    "Lead has already been converted".to_string(),
                ));
            }

            let customer = insert_customer(
                conn,
                &NewCustomer {
                    name: lead.customer_name().to_string(),
                    address: None,
                    phone: lead.phone.clone(),
                    email: lead.email.clone(),
                },
                actor_id,
            )?;

            diesel::update(crm_leads::table.filter(crm_leads::id.eq(lead_id)))
                .set(crm_leads::status.eq(LeadStatus::Converted.as_str()))
                .execute(conn)?;

            append_audit(
                conn,
                &NewAuditEntry::new(AuditEntity::Lead, lead_id, AuditAction::Convert)
                    .by(actor_id)
                    .details(format!("Lead converted to customer #{}", customer.id)),
            )?;

            Ok(customer)
        })?;

        Ok(customer.into())
    }

    fn create_opportunity(&self, new_opportunity: &DomainNewOpportunity) -> RepositoryResult<i32> {
        use crate::schema::crm_opportunities;

        let mut conn = self.conn()?;
        let id = diesel::insert_into(crm_opportunities::table)
            .values(DbNewOpportunity::from(new_opportunity))
            .returning(crm_opportunities::id)
            .get_result::<i32>(&mut conn)?;

        Ok(id)
    }

    fn update_opportunity(
        &self,
        opportunity_id: i32,
        updates: &DomainUpdateOpportunity,
    ) -> RepositoryResult<()> {
        use crate::schema::crm_opportunities;

        let mut conn = self.conn()?;
        let updated = diesel::update(
            crm_opportunities::table.filter(crm_opportunities::id.eq(opportunity_id)),
        )
        .set(DbNewOpportunity::from(updates))
        .execute(&mut conn)?;

        ensure_affected(updated)
    }

    fn delete_opportunity(&self, opportunity_id: i32) -> RepositoryResult<()> {
        use crate::schema::crm_opportunities;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            crm_opportunities::table.filter(crm_opportunities::id.eq(opportunity_id)),
        )
        .execute(&mut conn)
        .map_err(still_referenced)?;

        ensure_affected(deleted)
    }

    fn create_ticket(&self, new_ticket: &DomainNewTicket) -> RepositoryResult<DomainTicket> {
        use crate::schema::crm_tickets;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(crm_tickets::table)
            .values(DbNewTicket::from(new_ticket))
            .returning(DbTicket::as_returning())
            .get_result(&mut conn)?;

        Ok(created.into())
    }

    fn update_ticket_status(
        &self,
        ticket_id: i32,
        status: TicketStatus,
    ) -> RepositoryResult<DomainTicket> {
        use crate::schema::crm_tickets;

        let resolved_at = status.is_finished().then(now);

        let mut conn = self.conn()?;
        let updated = diesel::update(crm_tickets::table.filter(crm_tickets::id.eq(ticket_id)))
            .set((
                crm_tickets::status.eq(status.as_str()),
                crm_tickets::resolved_at.eq(resolved_at),
            ))
            .returning(DbTicket::as_returning())
            .get_result(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_ticket(&self, ticket_id: i32) -> RepositoryResult<()> {
        use crate::schema::crm_tickets;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(crm_tickets::table.filter(crm_tickets::id.eq(ticket_id)))
            .execute(&mut conn)
            .map_err(still_referenced)?;

        ensure_affected(deleted)
    }
}
