use crate::ADMIN_ROLE;
use crate::domain::auth::AuthenticatedUser;
pub(crate) use crate::repository::{now, today};

mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod assignments;
pub mod audit;
pub mod auth;
pub mod compliance;
pub mod crm;
pub mod customers;
pub mod dashboard;
pub mod employees;
pub mod equipment;
pub mod finance;
pub mod integration;
pub mod inventory;
pub mod jobs;
pub mod orders;
pub mod procurement;
pub mod production;
pub mod products;
pub mod users;
pub mod vehicles;

#[cfg(test)]
pub(crate) mod test_support;

/// Rejects users without the administrator role.
pub(crate) fn ensure_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if user.has_role(ADMIN_ROLE) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Outcome of a create-or-update form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saved {
    Created,
    Updated,
}

impl Saved {
    pub fn verb(self) -> &'static str {
        match self {
            Saved::Created => "created",
            Saved::Updated => "updated",
        }
    }
}
