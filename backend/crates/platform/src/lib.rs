//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed timed tokens (JWT, HS256)
//! - Cookie management
//! - Outbound mail dispatch (SMTP, bounded background workers)

pub mod cookie;
pub mod mail;
pub mod password;
pub mod token;
