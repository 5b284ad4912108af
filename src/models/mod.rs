//! Diesel row types and their conversions into domain values.

use std::str::FromStr;

use crate::domain::UnknownVariant;

pub mod assignment;
pub mod audit;
pub mod compliance;
pub mod config;
pub mod crm;
pub mod customer;
pub mod employee;
pub mod equipment;
pub mod finance;
pub mod integration;
pub mod inventory;
pub mod job_card;
pub mod order;
pub mod organization;
pub mod procurement;
pub mod product;
pub mod production;
pub mod user;
pub mod vehicle;

/// Parse a stored status label, falling back to the default variant for
/// values written outside the application.
pub(crate) fn parse_label<T>(value: &str) -> T
where
    T: FromStr<Err = UnknownVariant> + Default,
{
    value.parse().unwrap_or_else(|err: UnknownVariant| {
        log::warn!("{err}; using default");
        T::default()
    })
}
