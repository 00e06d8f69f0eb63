//! User Entity
//!
//! A registered account. Created inactive; the only state transition is
//! activation through email verification, and there is no way back.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, person_name::PersonName, user_id::UserId, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Unique, case-normalized email
    pub email: Email,
    /// Argon2id PHC hash; never the raw password
    pub password_hash: UserPassword,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// False until the confirmation mail is acted on
    pub is_active: bool,
    pub is_superuser: bool,
    /// Registration timestamp
    pub joined_at: DateTime<Utc>,
}

impl User {
    /// Create a new, not-yet-verified user
    pub fn new(
        email: Email,
        password_hash: UserPassword,
        first_name: PersonName,
        last_name: PersonName,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            first_name,
            last_name,
            is_active: false,
            is_superuser: false,
            joined_at: Utc::now(),
        }
    }

    /// Mark the account as verified. Safe to call repeatedly.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Check if the user may sign in
    pub fn can_sign_in(&self) -> bool {
        self.is_active
    }
}
