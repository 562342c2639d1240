//! Authentication infrastructure library
//!
//! Provides the credential-handling building blocks for the task service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited bearer tokens (JWT, HS256)
//! - Authentication coordination (verify a password, mint a token)
//!
//! The service defines its own user model and storage; this crate only deals
//! with secrets, hashes, and tokens, so it stays free of domain and database
//! concerns.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{JwtHandler, Claims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("user123", "alice".to_string(), 60);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", 60);
//!
//! // Sign-up: hash the password for storage
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Sign-in: verify the password and mint a token
//! let result = auth.authenticate("password123", &hash, "user123", "alice").unwrap();
//!
//! // Guarded request: validate the presented token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
