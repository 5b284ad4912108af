use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::customer::{Customer, CustomerListQuery, UpdateCustomer};
use crate::forms::customers::SaveCustomerForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{Saved, ServiceError, ServiceResult, now};

/// Query parameters accepted by the customers page.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersQuery {
    /// Case-insensitive match on name, phone or email.
    pub search: Option<String>,
    /// Page number requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the customers page.
pub struct CustomersPageData {
    /// Paginated customers displayed in the table.
    pub customers: Paginated<Customer>,
    /// Search query echoed back to the template when present.
    pub search: Option<String>,
}

pub fn load_customers_page<R>(repo: &R, query: CustomersQuery) -> ServiceResult<CustomersPageData>
where
    R: CustomerReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let search = query
        .search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty());

    let mut list_query = CustomerListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, customers) = repo.list_customers(list_query).map_err(ServiceError::from)?;

    Ok(CustomersPageData {
        customers: Paginated::from_total(customers, page, total, DEFAULT_ITEMS_PER_PAGE),
        search,
    })
}

/// Creates a customer, or updates the one named by `customer_id`.
pub fn save_customer<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: SaveCustomerForm,
) -> ServiceResult<Saved>
where
    R: CustomerWriter + ?Sized,
{
    let customer_id = form.customer_id;
    let payload = form
        .into_new_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    match customer_id {
        Some(customer_id) => {
            let updates = UpdateCustomer {
                name: payload.name,
                address: payload.address,
                phone: payload.phone,
                email: payload.email,
                updated_at: now(),
            };
            repo.update_customer(customer_id, &updates, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Updated)
        }
        None => {
            repo.create_customer(&payload, user.user_id)
                .map_err(ServiceError::from)?;
            Ok(Saved::Created)
        }
    }
}

/// Fails with `InUse` while orders still reference the customer.
pub fn delete_customer<R>(repo: &R, user: &AuthenticatedUser, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(customer_id, user.user_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::services::test_support::{FakeRepo, datetime, operator};

    fn customer(id: i32, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            address: None,
            phone: None,
            email: None,
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn form(customer_id: Option<i32>) -> SaveCustomerForm {
        SaveCustomerForm {
            customer_id,
            name: "Skyline Builders".to_string(),
            address: None,
            phone: Some("98100 22334".to_string()),
            email: None,
        }
    }

    #[test]
    fn save_without_id_creates() {
        let mut repo = FakeRepo::default();
        repo.customer_writer
            .expect_create_customer()
            .withf(|customer, actor| customer.name == "Skyline Builders" && *actor == 7)
            .times(1)
            .returning(|_, _| Ok(customer(4, "Skyline Builders")));
        repo.customer_writer.expect_update_customer().never();

        let saved = save_customer(&repo, &operator(), form(None)).expect("saved");

        assert_eq!(saved, Saved::Created);
    }

    #[test]
    fn save_with_id_updates() {
        let mut repo = FakeRepo::default();
        repo.customer_writer
            .expect_update_customer()
            .withf(|id, updates, _| *id == 4 && updates.phone.as_deref() == Some("98100 22334"))
            .times(1)
            .returning(|_, _, _| Ok(customer(4, "Skyline Builders")));

        let saved = save_customer(&repo, &operator(), form(Some(4))).expect("saved");

        assert_eq!(saved, Saved::Updated);
    }

    #[test]
    fn referenced_customer_cannot_be_deleted() {
        let mut repo = FakeRepo::default();
        repo.customer_writer
            .expect_delete_customer()
            .returning(|_, _| {
                Err(RepositoryError::ConstraintViolation(
                    "FOREIGN KEY constraint failed".to_string(),
                ))
            });

        let result = delete_customer(&repo, &operator(), 4);

        assert!(matches!(result, Err(ServiceError::InUse)));
    }

    #[test]
    fn customers_page_counts_pages() {
        let mut repo = FakeRepo::default();
        repo.customer_reader
            .expect_list_customers()
            .returning(|_| Ok((21, vec![customer(1, "Acme Infra")])));

        let data = load_customers_page(&repo, CustomersQuery::default()).expect("page");

        assert_eq!(data.customers.total_pages, 2);
        assert_eq!(data.customers.items.len(), 1);
    }
}
