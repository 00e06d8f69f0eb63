//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Sign up response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
    pub user_id: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign in response (tokens travel as cookies, not in the body)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub user_id: String,
}

// ============================================================================
// Email Verification
// ============================================================================

/// Email verification response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailResponse {
    /// The verified address, echoed back
    pub email: String,
}

// ============================================================================
// Refresh
// ============================================================================

/// Refresh response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub user_id: String,
}

// ============================================================================
// User Info
// ============================================================================

/// Current user info response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub joined_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_request_deserialization() {
        let json = r#"{
            "email": "alice@example.com",
            "password": "Secr3t!pass",
            "firstName": "Alice",
            "lastName": "Liddell"
        }"#;
        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.first_name, "Alice");
        assert_eq!(request.last_name, "Liddell");
    }

    #[test]
    fn test_user_info_serialization() {
        let response = UserInfoResponse {
            user_id: "00000000-0000-0000-0000-000000000000".to_string(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            is_active: true,
            is_superuser: false,
            joined_at: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("userId"));
        assert!(json.contains("firstName"));
        assert!(json.contains("isActive"));
        assert!(json.contains("joinedAt"));
    }
}
