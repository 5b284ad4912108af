//! Domain types shared by the services, repositories and templates.

use thiserror::Error;

/// Returned when a stored or submitted label does not match any variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a string-backed enum stored in the database by its display label.
///
/// The generated type serializes to the label, parses from it
/// case-insensitively and exposes `ALL` for rendering select boxes.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let trimmed = value.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::domain::UnknownVariant {
                    kind: stringify!($name),
                    value: value.to_string(),
                })
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

labeled_enum! {
    /// Urgency shared by job cards and support tickets.
    pub enum Priority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Urgent => "Urgent",
    }
    default = Medium;
}

pub mod assignment;
pub mod audit;
pub mod auth;
pub mod compliance;
pub mod crm;
pub mod customer;
pub mod dashboard;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_enum_parses_case_insensitively() {
        assert_eq!("urgent".parse::<Priority>(), Ok(Priority::Urgent));
        assert_eq!(" Medium ".parse::<Priority>(), Ok(Priority::Medium));
    }

    #[test]
    fn labeled_enum_rejects_unknown_labels() {
        let err = "whenever".parse::<Priority>().unwrap_err();

        assert_eq!(err.kind, "Priority");
        assert_eq!(err.value, "whenever");
    }

    #[test]
    fn labeled_enum_serializes_to_label() {
        let value = serde_json::to_value(Priority::High).expect("serialize");
        assert_eq!(value, serde_json::json!("High"));

        let parsed: Priority = serde_json::from_value(serde_json::json!("low")).expect("parse");
        assert_eq!(parsed, Priority::Low);
    }
}
