//! Authentication module
//!
//! Username/password login with argon2 password hashing and stateless
//! HS256 bearer tokens.

mod credentials;
mod error;
mod jwt;
mod middleware;
mod password;

pub use credentials::{CredentialRecord, CredentialService, CredentialStore};
pub use error::AuthError;
pub use jwt::{Claims, Identity, TokenService, TOKEN_ALGORITHM};
pub use middleware::{bearer_token, AuthUser};
pub use password::PasswordService;
