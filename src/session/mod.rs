use serde::Serialize;

pub mod handler;
pub mod jwt;

/// Which tab of the auth screen is active. Anything other than `signup` in
/// the query string falls back to `login`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn from_query(mode: Option<&str>) -> Self {
        if mode == Some("signup") {
            AuthMode::Signup
        } else {
            AuthMode::Login
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthPage {
    pub mode: AuthMode,
    /// Sign-in is delegated to the session provider; these are the external
    /// OAuth providers the screen offers.
    pub providers: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_login() {
        assert_eq!(AuthMode::from_query(None), AuthMode::Login);
        assert_eq!(AuthMode::from_query(Some("bogus")), AuthMode::Login);
        assert_eq!(AuthMode::from_query(Some("signup")), AuthMode::Signup);
    }
}
