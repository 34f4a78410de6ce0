//! Password hashing and session token handling for lumo.
//!
//! This crate provides:
//! - Argon2id password hashing with the library's recommended parameters
//! - HS256 session token encoding and decoding
//!
//! Token *issuing* (login, registration) lives outside this repository; the
//! profile API only ever decodes tokens minted elsewhere. `encode_token` is
//! still exported so tests and operational tooling can mint tokens against
//! the same secret.

mod claims;
mod error;
mod password;
mod token;

pub use claims::Claims;
pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use token::{decode_token, encode_token};
