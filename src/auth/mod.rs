pub mod credentials;
pub mod extractors;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use credentials::CredentialStore;
pub use extractors::BearerClaims;
pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

pub const TOKEN_TYPE: &str = "bearer";

/// JSON payload for `POST /register/`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Any string up to 255 characters.
    #[validate(length(max = 255))]
    pub username: String,
    /// Any string up to 1024 characters.
    #[validate(length(max = 1024))]
    pub password: String,
}

/// Form fields for `POST /token/` (OAuth2 password grant style).
///
/// Only presence is checked: any wrong value results in the generic 400.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Body returned by `POST /register/`.
///
/// The token key is spelled `"access token"` (with a space) here, unlike
/// `TokenResponse`.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(rename = "access token")]
    pub access_token: String,
    pub token_type: String,
}

/// Body returned by `POST /token/`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl RegisterResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        for (username, password) in [
            ("test_user-123", "password123"),
            ("alice@example.com", "secret123"),
            ("José", "pw"),
            ("al", ""),
            ("", "x"),
        ] {
            let request = RegisterRequest {
                username: username.to_string(),
                password: password.to_string(),
            };
            assert!(
                request.validate().is_ok(),
                "{:?} / {:?} should be accepted",
                username,
                password
            );
        }

        let long_username = RegisterRequest {
            username: "u".repeat(256),
            password: "password123".to_string(),
        };
        assert!(long_username.validate().is_err());

        let long_password = RegisterRequest {
            username: "test_user".to_string(),
            password: "p".repeat(1025),
        };
        assert!(long_password.validate().is_err());
    }

    #[test]
    fn test_response_field_names() {
        let register = serde_json::to_value(RegisterResponse::bearer("abc".into())).unwrap();
        assert_eq!(register["access token"], "abc");
        assert_eq!(register["token_type"], "bearer");
        assert!(register.get("access_token").is_none());

        let login = serde_json::to_value(TokenResponse::bearer("abc".into())).unwrap();
        assert_eq!(login["access_token"], "abc");
        assert_eq!(login["token_type"], "bearer");
    }
}
