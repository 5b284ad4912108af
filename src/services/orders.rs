use serde::Deserialize;

use crate::domain::auth::AuthenticatedUser;
use crate::domain::customer::{Customer, CustomerListQuery};
use crate::domain::order::{Order, OrderDetails, OrderListQuery, OrderStatus, OrderView};
use crate::domain::product::Product;
use crate::forms::empty_string_as_none;
use crate::forms::orders::OrderForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CustomerReader, OrderReader, OrderWriter, ProductReader};
use crate::services::{ServiceError, ServiceResult, now};

/// Query parameters accepted by the orders list.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Matches the delivery site or customer name.
    pub search: Option<String>,
    /// Shows only orders in this status.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<OrderStatus>,
    /// Page number requested by the UI (1-based).
    pub page: Option<usize>,
}

/// Data required to render the orders list.
pub struct OrdersPageData {
    /// Paginated orders displayed in the table.
    pub orders: Paginated<OrderView>,
    /// Search query echoed back to the template when present.
    pub search: Option<String>,
    /// Status filter echoed back to the template.
    pub status: Option<OrderStatus>,
}

/// Select-box options for the order form.
pub struct OrderFormData {
    /// Customers offered by the customer select.
    pub customers: Vec<Customer>,
    /// Products offered by the mix select.
    pub products: Vec<Product>,
}

pub fn load_orders_page<R>(repo: &R, query: OrdersQuery) -> ServiceResult<OrdersPageData>
where
    R: OrderReader + ?Sized,
{
    let OrdersQuery {
        search,
        status,
        page,
    } = query;

    let page = page.unwrap_or(1);
    let search = search
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty());

    let mut list_query = OrderListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }
    if let Some(status) = status {
        list_query = list_query.status(status);
    }

    let (total, orders) = repo.list_orders(list_query).map_err(ServiceError::from)?;

    Ok(OrdersPageData {
        orders: Paginated::from_total(orders, page, total, DEFAULT_ITEMS_PER_PAGE),
        search,
        status,
    })
}

pub fn load_order_form<R>(repo: &R) -> ServiceResult<OrderFormData>
where
    R: CustomerReader + ProductReader + ?Sized,
{
    let (_, customers) = repo
        .list_customers(CustomerListQuery::default())
        .map_err(ServiceError::from)?;
    let products = repo.list_products().map_err(ServiceError::from)?;

    Ok(OrderFormData {
        customers,
        products,
    })
}

pub fn load_order<R>(repo: &R, order_id: i32) -> ServiceResult<OrderDetails>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_details(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Loads the order being edited together with the form options.
pub fn load_order_edit<R>(repo: &R, order_id: i32) -> ServiceResult<(Order, OrderFormData)>
where
    R: OrderReader + CustomerReader + ProductReader + ?Sized,
{
    let order = repo
        .get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;
    let form_data = load_order_form(repo)?;
    Ok((order, form_data))
}

/// Places a new `Confirmed` order dated today.
pub fn create_order<R>(repo: &R, user: &AuthenticatedUser, form: OrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let new_order = form
        .into_new_order(user.user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let order = repo
        .create_order(&new_order, user.user_id)
        .map_err(ServiceError::from)?;
    log::info!("Order #{} created by {}", order.id, user.username);
    Ok(order)
}

pub fn update_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order_id: i32,
    form: OrderForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    let updates = form
        .into_update_order(now())
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_order(order_id, &updates, user.user_id)
        .map_err(ServiceError::from)
}

pub fn delete_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    repo.delete_order(order_id, user.user_id)
        .map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::services::test_support::{FakeRepo, date, datetime, operator};

    fn sample_order(id: i32) -> Order {
        Order {
            id,
            customer_id: 1,
            product_id: 2,
            quantity: 12.5,
            order_date: date(2025, 6, 2),
            delivery_site: "Tower B, Sector 62".to_string(),
            scheduled_date: date(2025, 6, 4),
            status: OrderStatus::Confirmed,
            created_by: Some(7),
            created_at: datetime(),
            updated_at: datetime(),
        }
    }

    fn form(site: &str) -> OrderForm {
        OrderForm {
            customer_id: 1,
            product_id: 2,
            quantity: 12.5,
            delivery_site: site.to_string(),
            scheduled_date: date(2025, 6, 4),
            status: Some(OrderStatus::InProduction),
        }
    }

    #[test]
    fn orders_page_passes_filters() {
        let mut repo = FakeRepo::default();
        repo.order_reader
            .expect_list_orders()
            .withf(|query| {
                query.search.as_deref() == Some("sector")
                    && query.status == Some(OrderStatus::Delivered)
                    && query.pagination.is_some_and(|page| page.page == 2)
            })
            .times(1)
            .returning(|_| Ok((45, Vec::new())));

        let data = load_orders_page(
            &repo,
            OrdersQuery {
                search: Some("  sector ".to_string()),
                status: Some(OrderStatus::Delivered),
                page: Some(2),
            },
        )
        .expect("page");

        assert_eq!(data.orders.total_pages, 3);
        assert_eq!(data.search.as_deref(), Some("sector"));
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut repo = FakeRepo::default();
        repo.order_reader
            .expect_list_orders()
            .withf(|query| query.search.is_none())
            .returning(|_| Ok((0, Vec::new())));

        let data = load_orders_page(
            &repo,
            OrdersQuery {
                search: Some("   ".to_string()),
                ..OrdersQuery::default()
            },
        )
        .expect("page");

        assert!(data.search.is_none());
    }

    #[test]
    fn create_order_is_confirmed_and_owned_by_user() {
        let mut repo = FakeRepo::default();
        repo.order_writer
            .expect_create_order()
            .withf(|order, actor| {
                order.status == OrderStatus::Confirmed
                    && order.created_by == Some(7)
                    && order.delivery_site == "Tower B, Sector 62"
                    && *actor == 7
            })
            .times(1)
            .returning(|_, _| Ok(sample_order(31)));

        let order = create_order(&repo, &operator(), form(" Tower B,  Sector 62 ")).expect("order");

        assert_eq!(order.id, 31);
    }

    #[test]
    fn invalid_form_never_reaches_repository() {
        let mut repo = FakeRepo::default();
        repo.order_writer.expect_create_order().never();

        let result = create_order(&repo, &operator(), form("   "));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn missing_order_is_not_found() {
        let mut repo = FakeRepo::default();
        repo.order_reader
            .expect_get_order_details()
            .returning(|_| Ok(None));

        assert!(matches!(load_order(&repo, 404), Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_keeps_requested_status() {
        let mut repo = FakeRepo::default();
        repo.order_writer
            .expect_update_order()
            .withf(|id, updates, _| *id == 31 && updates.status == OrderStatus::InProduction)
            .returning(|_, _, _| Ok(sample_order(31)));

        assert!(update_order(&repo, &operator(), 31, form("Tower B")).is_ok());
    }

    #[test]
    fn deleting_missing_order_is_not_found() {
        let mut repo = FakeRepo::default();
        repo.order_writer
            .expect_delete_order()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = delete_order(&repo, &operator(), 99);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
