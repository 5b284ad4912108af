use std::env;

/// Runtime configuration read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub address: String,
    pub port: u16,
    /// Key material for signing the session and flash cookies.
    pub secret: Option<String>,
    pub domain: Option<String>,
    pub cookie_secure: bool,
    /// Employee assigned to delivery jobs created from confirmed orders.
    pub default_delivery_employee_id: Option<i32>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or("rmc_erp.db".to_string());
        let address = lookup("ADDRESS").unwrap_or("127.0.0.1".to_string());
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let secret = lookup("SECRET_KEY").filter(|value| !value.is_empty());
        let domain = lookup("DOMAIN").filter(|value| !value.is_empty());
        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|value| matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let default_delivery_employee_id = lookup("DEFAULT_DELIVERY_EMPLOYEE_ID")
            .and_then(|value| value.parse::<i32>().ok());

        Self {
            database_url,
            address,
            port,
            secret,
            domain,
            cookie_secure,
            default_delivery_employee_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| values.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]);

        assert_eq!(config.database_url, "rmc_erp.db");
        assert_eq!(config.address, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.secret.is_none());
        assert!(!config.cookie_secure);
        assert!(config.default_delivery_employee_id.is_none());
    }

    #[test]
    fn values_are_parsed_from_environment() {
        let config = config_from(&[
            ("DATABASE_URL", "/var/lib/rmc/erp.db"),
            ("PORT", "9000"),
            ("SECRET_KEY", "s3cr3t"),
            ("COOKIE_SECURE", "true"),
            ("DEFAULT_DELIVERY_EMPLOYEE_ID", "5"),
        ]);

        assert_eq!(config.database_url, "/var/lib/rmc/erp.db");
        assert_eq!(config.port, 9000);
        assert_eq!(config.secret.as_deref(), Some("s3cr3t"));
        assert!(config.cookie_secure);
        assert_eq!(config.default_delivery_employee_id, Some(5));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "eighty")]);

        assert_eq!(config.port, 8080);
    }
}
