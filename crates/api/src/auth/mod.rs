//! Authentication primitives for the single admin account.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`revocation`] -- in-memory list of signed-out token ids.

pub mod jwt;
pub mod password;
pub mod revocation;
