use serde::{Deserialize, Serialize};

/// Optional knobs for an account-creation call.
///
/// `pre_verified` asks the service to mark the account verified on
/// creation. Real sign-up flows never set it; test setups use it to
/// provision an already-verified account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignUpOptions {
    pub pre_verified: bool,
}

fn is_false(v: &bool) -> bool {
    !v
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "preVerified", default, skip_serializing_if = "is_false")]
    pub pre_verified: bool,
}

impl SignUpRequest {
    pub fn new(email: &str, password: &str, options: &SignUpOptions) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            pre_verified: options.pre_verified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub uid: String,
    #[serde(rename = "sessionToken")]
    pub session_token: String,
    /// Whether the account is verified. True means the address belongs
    /// to an account whose owner already confirmed it.
    pub verified: bool,
    /// Whether the account existed before this call. The service sets
    /// it when sign-up hit an unverified account and reset it instead
    /// of creating a new one.
    #[serde(default, skip_serializing_if = "is_false")]
    pub existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_request_wire_format() {
        let request = SignUpRequest::new("a@example.com", "password1", &SignUpOptions::default());
        let serialized = serde_json::to_string(&request).unwrap();
        // preVerified is omitted unless set
        assert_eq!(
            serialized,
            r#"{"email":"a@example.com","password":"password1"}"#
        );

        let request = SignUpRequest::new(
            "a@example.com",
            "password1",
            &SignUpOptions { pre_verified: true },
        );
        let serialized = serde_json::to_string(&request).unwrap();
        assert_eq!(
            serialized,
            r#"{"email":"a@example.com","password":"password1","preVerified":true}"#
        );
    }

    #[test]
    fn sign_up_response_parsing() {
        // Fresh account: no "existing" field in the body
        let raw = r#"{"uid": "0577e7a5fbf448e3bc60dc1f9b1a7d12", "sessionToken": "27cd4f4a4aa03d7d186a2ec81cbf19d5", "verified": false}"#;
        let response: SignUpResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.uid, "0577e7a5fbf448e3bc60dc1f9b1a7d12");
        assert_eq!(response.session_token, "27cd4f4a4aa03d7d186a2ec81cbf19d5");
        assert!(!response.verified);
        assert!(!response.existing);

        // Existing unverified account
        let raw = r#"{"uid": "0577e7a5fbf448e3bc60dc1f9b1a7d12", "sessionToken": "27cd4f4a4aa03d7d186a2ec81cbf19d5", "verified": false, "existing": true}"#;
        let response: SignUpResponse = serde_json::from_str(raw).unwrap();
        assert!(response.existing);
    }
}
