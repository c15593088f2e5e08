//! Admin authentication: argon2 password verification and opaque session
//! tokens.

pub mod password;
pub mod session;
