use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// The plaintext password is hashed before it touches storage. The
    /// store's own unique constraint is the sole arbiter of username/email
    /// uniqueness: there is no pre-insert lookup, so concurrent sign-ups
    /// with the same username cannot race past each other.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Returns
    /// The authenticated user and a signed token carrying
    /// `{sub: user.id, username}`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username OR wrong password,
    ///   indistinguishably
    /// * `DatabaseError` - Database operation failed
    async fn sign_in(&self, command: SignInCommand) -> Result<(User, String), UserError>;

    /// Resolve a user by unique identifier (token subject resolution).
    ///
    /// # Errors
    /// * `NotFound` - User does not exist (e.g. deleted after token issuance)
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// Uniqueness of username and email is enforced by the store's unique
    /// indexes; a rejected insert surfaces as the matching conflict error.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by username (case-sensitive exact match).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
