//! The membership app's UI contract
//!
//! Routes, labels and selectors the scenario drives against, in one place.
//! The app's forms are Spanish-labeled; the login page is not.

use url::Url;

use crate::core::{Result, SemillaError};

/// Login page path
pub const LOGIN_PATH: &str = "/login";
/// Post-login landing page, the redirect target that proves login worked
pub const HOME_PATH: &str = "/";
/// Combined client + membership creation page
pub const CREATE_MEMBERSHIP_PATH: &str = "/memberships/createMembership";

/// Login form
pub const USERNAME_LABEL: &str = "Username";
pub const PASSWORD_LABEL: &str = "Password";
pub const LOGIN_BUTTON: &str = "Login";

/// Client registration form
pub const FULL_NAME_LABEL: &str = "Nombre Completo *";
pub const PHONE_LABEL: &str = "Teléfono";
pub const EMAIL_LABEL: &str = "Correo Electrónico";
pub const REGISTER_CLIENT_BUTTON: &str = "Registrar Cliente";

/// Membership form
pub const CLIENT_SELECT: &str = "#id_cliente";
pub const MEMBERSHIP_TYPE_SELECT: &str = "#id_tipo_membresia";
pub const START_DATE_INPUT: &str = "#fecha_inicio";
pub const PAYMENT_METHOD_LABEL: &str = "Método de Pago *";
pub const CREATE_MEMBERSHIP_BUTTON: &str = "Crear Membresía";

/// Confirmation dialog action, shared by both create flows
pub const CONFIRM_BUTTON: &str = "Confirmar";

/// Join an app path onto the base URL
pub fn page_url(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| SemillaError::config(format!("Cannot build URL for '{}': {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_joins_paths() {
        let base = Url::parse("http://localhost:3306").unwrap();
        let login = page_url(&base, LOGIN_PATH).unwrap();
        assert_eq!(login.as_str(), "http://localhost:3306/login");

        let create = page_url(&base, CREATE_MEMBERSHIP_PATH).unwrap();
        assert_eq!(
            create.as_str(),
            "http://localhost:3306/memberships/createMembership"
        );
    }

    #[test]
    fn test_home_url_is_the_root() {
        let base = Url::parse("http://localhost:3306").unwrap();
        let home = page_url(&base, HOME_PATH).unwrap();
        assert_eq!(home.as_str(), "http://localhost:3306/");
    }
}
