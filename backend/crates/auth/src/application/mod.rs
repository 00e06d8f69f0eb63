//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod delete_user;
pub mod get_user;
pub mod refresh_session;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod token_sender;
pub mod tokens;
pub mod verify_email;

// Re-exports
pub use config::AuthConfig;
pub use delete_user::DeleteUserUseCase;
pub use get_user::{GetUserOutput, GetUserUseCase};
pub use refresh_session::{RefreshSessionInput, RefreshSessionOutput, RefreshSessionUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
pub use token_sender::TokenSender;
pub use tokens::TokenIssuer;
pub use verify_email::{VerifyEmailInput, VerifyEmailOutput, VerifyEmailUseCase};
