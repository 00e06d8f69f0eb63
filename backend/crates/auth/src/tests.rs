//! Unit tests for the auth crate
//!
//! Use-case flows run against in-memory fakes; no database required.

use std::sync::{Arc, Mutex};

use crate::application::config::AuthConfig;
use crate::application::token_sender::TokenSender;
use crate::application::tokens::TokenIssuer;
use crate::application::{
    DeleteUserUseCase, RefreshSessionInput, RefreshSessionUseCase, SignInInput, SignInOutput,
    SignInUseCase, SignOutUseCase, SignUpInput, SignUpOutput, SignUpUseCase, VerifyEmailInput,
    VerifyEmailOutput, VerifyEmailUseCase,
};
use crate::domain::entity::{refresh_token::RefreshToken, user::User};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

const PASSWORD: &str = "Secr3t!pass";

// ============================================================================
// In-memory fakes
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryAuthStore {
    users: Arc<Mutex<Vec<User>>>,
    refresh_tokens: Arc<Mutex<Vec<RefreshToken>>>,
}

impl UserRepository for InMemoryAuthStore {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        // Mirrors the unique index on users.email
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.user_id == *user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == *email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email == *email))
    }

    async fn set_active(&self, user_id: &UserId) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.user_id == *user_id) {
            user.activate();
        }
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
        let mut users = self.users.lock().unwrap();
        users.retain(|u| u.user_id != *user_id);
        Ok(())
    }
}

impl RefreshTokenRepository for InMemoryAuthStore {
    async fn create(&self, token: &RefreshToken) -> AuthResult<()> {
        self.refresh_tokens.lock().unwrap().push(token.clone());
        Ok(())
    }

    async fn exists(&self, token: &str) -> AuthResult<bool> {
        let tokens = self.refresh_tokens.lock().unwrap();
        Ok(tokens.iter().any(|t| t.token == token))
    }

    async fn delete(&self, token: &str) -> AuthResult<()> {
        let mut tokens = self.refresh_tokens.lock().unwrap();
        tokens.retain(|t| t.token != token);
        Ok(())
    }

    async fn delete_all_for_user(&self, user_id: &UserId) -> AuthResult<u64> {
        let mut tokens = self.refresh_tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| t.user_id != *user_id);
        Ok((before - tokens.len()) as u64)
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let mut tokens = self.refresh_tokens.lock().unwrap();
        let before = tokens.len();
        tokens.retain(|t| !t.is_expired());
        Ok((before - tokens.len()) as u64)
    }
}

#[derive(Clone, Default)]
struct RecordingTokenSender {
    sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl TokenSender for RecordingTokenSender {
    async fn send_confirmation(&self, email: &Email, token: &str) -> AuthResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), token.to_string()));
        Ok(())
    }
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    store: Arc<InMemoryAuthStore>,
    sender: Arc<RecordingTokenSender>,
    tokens: Arc<TokenIssuer>,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(AuthConfig::development())
    }

    fn with_config(config: AuthConfig) -> Self {
        Self {
            store: Arc::new(InMemoryAuthStore::default()),
            sender: Arc::new(RecordingTokenSender::default()),
            tokens: Arc::new(TokenIssuer::from_config(&config)),
        }
    }

    async fn sign_up(&self, email: &str) -> AuthResult<SignUpOutput> {
        let use_case = SignUpUseCase::new(
            self.store.clone(),
            self.sender.clone(),
            self.tokens.clone(),
        );
        use_case
            .execute(SignUpInput {
                email: email.to_string(),
                password: PASSWORD.to_string(),
                first_name: "Alice".to_string(),
                last_name: "Liddell".to_string(),
            })
            .await
    }

    fn last_confirmation_token(&self) -> String {
        let sent = self.sender.sent.lock().unwrap();
        sent.last().expect("no confirmation mail queued").1.clone()
    }

    async fn verify(&self, token: &str) -> AuthResult<VerifyEmailOutput> {
        let use_case = VerifyEmailUseCase::new(self.store.clone(), self.tokens.clone());
        use_case
            .execute(VerifyEmailInput {
                token: token.to_string(),
            })
            .await
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<SignInOutput> {
        let use_case = SignInUseCase::new(
            self.store.clone(),
            self.store.clone(),
            self.tokens.clone(),
        );
        use_case
            .execute(SignInInput {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    async fn refresh(&self, token: &str) -> AuthResult<crate::application::RefreshSessionOutput> {
        let use_case = RefreshSessionUseCase::new(self.store.clone(), self.tokens.clone());
        use_case
            .execute(RefreshSessionInput {
                refresh_token: token.to_string(),
            })
            .await
    }

    /// Register and activate in one step
    async fn register_active_user(&self, email: &str) {
        self.sign_up(email).await.expect("sign up failed");
        let token = self.last_confirmation_token();
        self.verify(&token).await.expect("verification failed");
    }

    fn stored_refresh_token_count(&self) -> usize {
        self.store.refresh_tokens.lock().unwrap().len()
    }
}

// ============================================================================
// Sign up
// ============================================================================

#[tokio::test]
async fn sign_up_creates_inactive_user_and_queues_confirmation() {
    let h = Harness::new();

    h.sign_up("alice@example.com").await.unwrap();

    let users = h.store.users.lock().unwrap();
    assert_eq!(users.len(), 1);
    assert!(!users[0].is_active);
    assert!(!users[0].is_superuser);
    assert_eq!(users[0].email.as_str(), "alice@example.com");

    let sent = h.sender.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "alice@example.com");
}

#[tokio::test]
async fn sign_up_never_stores_the_raw_password() {
    let h = Harness::new();

    h.sign_up("alice@example.com").await.unwrap();

    let users = h.store.users.lock().unwrap();
    assert!(!users[0].password_hash.as_phc_string().contains(PASSWORD));
    assert!(users[0].password_hash.as_phc_string().starts_with("$argon2"));
}

#[tokio::test]
async fn sign_up_duplicate_email_conflicts() {
    let h = Harness::new();

    h.sign_up("alice@example.com").await.unwrap();
    let err = h.sign_up("alice@example.com").await.unwrap_err();

    assert!(matches!(err, AuthError::EmailTaken));

    // The first registration is unaffected
    let users = h.store.users.lock().unwrap();
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn sign_up_rejects_weak_password_before_persistence() {
    let h = Harness::new();

    let use_case = SignUpUseCase::new(h.store.clone(), h.sender.clone(), h.tokens.clone());
    let err = use_case
        .execute(SignUpInput {
            email: "alice@example.com".to_string(),
            password: "short".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::PasswordPolicy(_)));
    assert!(h.store.users.lock().unwrap().is_empty());
    assert!(h.sender.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn sign_up_rejects_invalid_email() {
    let h = Harness::new();

    let err = h.sign_up("not-an-email").await.unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert!(h.store.users.lock().unwrap().is_empty());
}

// ============================================================================
// Email verification
// ============================================================================

#[tokio::test]
async fn verify_email_activates_account() {
    let h = Harness::new();

    h.sign_up("alice@example.com").await.unwrap();
    let token = h.last_confirmation_token();

    let output = h.verify(&token).await.unwrap();
    assert_eq!(output.email, "alice@example.com");

    let users = h.store.users.lock().unwrap();
    assert!(users[0].is_active);
}

#[tokio::test]
async fn verify_email_is_idempotent() {
    let h = Harness::new();

    h.sign_up("alice@example.com").await.unwrap();
    let token = h.last_confirmation_token();

    h.verify(&token).await.unwrap();
    // A reused token does not error and does not leak reuse
    let output = h.verify(&token).await.unwrap();
    assert_eq!(output.email, "alice@example.com");
}

#[tokio::test]
async fn verify_email_expired_token_fails() {
    let config = AuthConfig {
        confirmation_token_ttl_secs: -120,
        ..AuthConfig::development()
    };
    let h = Harness::with_config(config);

    h.sign_up("alice@example.com").await.unwrap();
    let token = h.last_confirmation_token();

    let err = h.verify(&token).await.unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));

    let users = h.store.users.lock().unwrap();
    assert!(!users[0].is_active);
}

#[tokio::test]
async fn verify_email_garbage_token_fails() {
    let h = Harness::new();

    let err = h.verify("not-a-token").await.unwrap_err();
    assert!(matches!(err, AuthError::TokenInvalid));
}

// ============================================================================
// Sign in
// ============================================================================

#[tokio::test]
async fn sign_in_requires_verified_account() {
    let h = Harness::new();

    h.sign_up("alice@example.com").await.unwrap();

    let err = h.sign_in("alice@example.com", PASSWORD).await.unwrap_err();
    assert!(matches!(err, AuthError::AccountInactive));
}

#[tokio::test]
async fn sign_in_unknown_email_and_wrong_password_are_indistinguishable() {
    let h = Harness::new();
    h.register_active_user("alice@example.com").await;

    let unknown = h.sign_in("bob@example.com", PASSWORD).await.unwrap_err();
    let wrong = h
        .sign_in("alice@example.com", "Wr0ng!password")
        .await
        .unwrap_err();

    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn sign_in_issues_tokens_and_persists_refresh() {
    let h = Harness::new();
    h.register_active_user("alice@example.com").await;

    let output = h.sign_in("alice@example.com", PASSWORD).await.unwrap();

    // Both tokens decode to the signed-in user
    let from_access = h.tokens.decode_access(&output.access.token).unwrap();
    let from_refresh = h.tokens.decode_refresh(&output.refresh.token).unwrap();
    assert_eq!(from_access.to_string(), output.user_id);
    assert_eq!(from_refresh.to_string(), output.user_id);

    // The refresh token is in the store before the call returned
    let tokens = h.store.refresh_tokens.lock().unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].token, output.refresh.token);
}

// ============================================================================
// Refresh and sign out
// ============================================================================

#[tokio::test]
async fn refresh_rotates_tokens() {
    let h = Harness::new();
    h.register_active_user("alice@example.com").await;

    let signed_in = h.sign_in("alice@example.com", PASSWORD).await.unwrap();
    let refreshed = h.refresh(&signed_in.refresh.token).await.unwrap();

    assert_eq!(refreshed.user_id, signed_in.user_id);
    assert_ne!(refreshed.refresh.token, signed_in.refresh.token);

    // The used token is retired; only the replacement remains
    assert_eq!(h.stored_refresh_token_count(), 1);
    let err = h.refresh(&signed_in.refresh.token).await.unwrap_err();
    assert!(matches!(err, AuthError::RefreshRevoked));

    // The replacement still works
    h.refresh(&refreshed.refresh.token).await.unwrap();
}

#[tokio::test]
async fn refresh_fails_after_sign_out() {
    let h = Harness::new();
    h.register_active_user("alice@example.com").await;

    let first = h.sign_in("alice@example.com", PASSWORD).await.unwrap();
    let second = h.sign_in("alice@example.com", PASSWORD).await.unwrap();
    assert_eq!(h.stored_refresh_token_count(), 2);

    let user_id = h.tokens.decode_access(&first.access.token).unwrap();
    let use_case = SignOutUseCase::new(h.store.clone());
    let revoked = use_case.execute(&user_id).await.unwrap();
    assert_eq!(revoked, 2);

    // Every previously issued refresh token now fails as revoked
    for token in [&first.refresh.token, &second.refresh.token] {
        let err = h.refresh(token).await.unwrap_err();
        assert!(matches!(err, AuthError::RefreshRevoked));
    }
}

#[tokio::test]
async fn refresh_with_garbage_token_is_unauthenticated() {
    let h = Harness::new();

    let err = h.refresh("garbage").await.unwrap_err();
    assert!(matches!(err, AuthError::Unauthenticated));
}

// ============================================================================
// Delete user
// ============================================================================

#[tokio::test]
async fn delete_user_removes_account_and_tokens() {
    let h = Harness::new();
    h.register_active_user("alice@example.com").await;

    let signed_in = h.sign_in("alice@example.com", PASSWORD).await.unwrap();
    let user_id = h.tokens.decode_access(&signed_in.access.token).unwrap();

    let use_case = DeleteUserUseCase::new(h.store.clone(), h.store.clone());
    use_case.execute(&user_id).await.unwrap();

    assert!(h.store.users.lock().unwrap().is_empty());
    assert_eq!(h.stored_refresh_token_count(), 0);

    let err = use_case.execute(&user_id).await.unwrap_err();
    assert!(matches!(err, AuthError::UserNotFound));
}

// ============================================================================
// Full lifecycle
// ============================================================================

#[tokio::test]
async fn full_account_lifecycle() {
    let h = Harness::new();

    // Register: success, user inactive
    h.sign_up("alice@example.com").await.unwrap();
    assert!(!h.store.users.lock().unwrap()[0].is_active);

    // Sign-in before verification is refused
    let err = h.sign_in("alice@example.com", PASSWORD).await.unwrap_err();
    assert!(matches!(err, AuthError::AccountInactive));

    // Verify with the emailed token: account active, email echoed
    let token = h.last_confirmation_token();
    let verified = h.verify(&token).await.unwrap();
    assert_eq!(verified.email, "alice@example.com");

    // Sign-in with the wrong password is refused
    let err = h.sign_in("alice@example.com", "Wr0ng!pass").await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));

    // Correct password yields an access/refresh pair
    let signed_in = h.sign_in("alice@example.com", PASSWORD).await.unwrap();

    // Refresh yields a new access token
    let refreshed = h.refresh(&signed_in.refresh.token).await.unwrap();
    assert!(!refreshed.access.token.is_empty());

    // Sign out, then the rotated token is revoked too
    let user_id = h.tokens.decode_access(&refreshed.access.token).unwrap();
    SignOutUseCase::new(h.store.clone())
        .execute(&user_id)
        .await
        .unwrap();

    let err = h.refresh(&refreshed.refresh.token).await.unwrap_err();
    assert!(matches!(err, AuthError::RefreshRevoked));
}
