use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::customer::Customer;
use crate::domain::product::Product;
use crate::pagination::Pagination;

labeled_enum! {
    /// Lifecycle of a concrete order from intake to delivery.
    pub enum OrderStatus {
        Pending => "Pending",
        Confirmed => "Confirmed",
        InProduction => "In Production",
        Dispatched => "Dispatched",
        Delivered => "Delivered",
        Cancelled => "Cancelled",
    }
    default = Confirmed;
}

impl OrderStatus {
    /// Orders that production batches and job cards may still be created for.
    pub const SCHEDULABLE: &'static [OrderStatus] =
        &[OrderStatus::Confirmed, OrderStatus::InProduction];

    /// Orders counted as pending on the dashboard.
    pub const PENDING: &'static [OrderStatus] = &[OrderStatus::Confirmed, OrderStatus::Pending];
}

/// Domain representation of a customer order for a concrete product.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    /// Ordered volume in the product's unit (normally cubic metres).
    pub quantity: f64,
    pub order_date: NaiveDate,
    pub delivery_site: String,
    pub scheduled_date: NaiveDate,
    pub status: OrderStatus,
    /// User account that entered the order.
    pub created_by: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Order row with customer and product names for list pages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub customer_name: String,
    pub product_name: String,
}

/// Order together with the full customer and product records.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub customer: Customer,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: f64,
    pub order_date: NaiveDate,
    pub delivery_site: String,
    pub scheduled_date: NaiveDate,
    pub status: OrderStatus,
    pub created_by: Option<i32>,
}

impl NewOrder {
    /// Build an order placed today with the default `Confirmed` status.
    pub fn new(
        customer_id: i32,
        product_id: i32,
        quantity: f64,
        delivery_site: impl Into<String>,
        scheduled_date: NaiveDate,
    ) -> Self {
        Self {
            customer_id,
            product_id,
            quantity,
            order_date: chrono::Local::now().date_naive(),
            delivery_site: delivery_site.into(),
            scheduled_date,
            status: OrderStatus::default(),
            created_by: None,
        }
    }

    pub fn with_created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    pub fn with_order_date(mut self, order_date: NaiveDate) -> Self {
        self.order_date = order_date;
        self
    }
}

/// Patch data applied when editing an order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrder {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: f64,
    pub delivery_site: String,
    pub scheduled_date: NaiveDate,
    pub status: OrderStatus,
    pub updated_at: NaiveDateTime,
}

/// Query definition used to list orders.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    /// Substring matched against the delivery site and customer name.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
