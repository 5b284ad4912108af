use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

/// Session payload describing the logged-in operator.
///
/// Stored as JSON inside the signed identity cookie on login and extracted
/// by every protected handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
    pub employee_id: i32,
    pub name: String,
    pub role: Option<String>,
}

impl AuthenticatedUser {
    pub fn has_role(&self, role: &str) -> bool {
        check_role(role, self.role.as_deref())
    }
}

/// Returns `true` when `role` matches the required role name.
pub fn check_role(required: &str, role: Option<&str>) -> bool {
    role.is_some_and(|role| role.eq_ignore_ascii_case(required))
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user = req
            .get_identity()
            .map_err(ErrorUnauthorized)
            .and_then(|identity| identity.id().map_err(ErrorUnauthorized))
            .and_then(|raw| {
                serde_json::from_str::<AuthenticatedUser>(&raw).map_err(ErrorUnauthorized)
            });

        ready(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: 1,
            username: "admin".to_string(),
            employee_id: 1,
            name: "Admin".to_string(),
            role: role.map(str::to_string),
        }
    }

    #[test]
    fn check_role_matches_ignoring_case() {
        assert!(user(Some("administrator")).has_role(crate::ADMIN_ROLE));
        assert!(!user(Some("Driver")).has_role(crate::ADMIN_ROLE));
        assert!(!user(None).has_role(crate::ADMIN_ROLE));
    }

    #[test]
    fn session_payload_round_trips_through_json() {
        let original = user(Some("Dispatcher"));
        let raw = serde_json::to_string(&original).expect("serialize");
        let parsed: AuthenticatedUser = serde_json::from_str(&raw).expect("parse");

        assert_eq!(parsed, original);
    }
}
