use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

impl LoginForm {
    /// Usernames are matched case-insensitively.
    pub fn normalized_username(&self) -> String {
        self.username.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed_and_lower_cased() {
        let form = LoginForm {
            username: "  Admin ".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(form.normalized_username(), "admin");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_password_fails_validation() {
        let form = LoginForm {
            username: "admin".to_string(),
            password: String::new(),
        };

        assert!(form.validate().is_err());
    }
}
