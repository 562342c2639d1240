use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::SignInCommand;
use crate::domain::user::models::SignUpCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::user::ports::UserRepository;

/// Domain service for sign-up, sign-in, and token-subject resolution.
///
/// Composes the credential store (generic repository) with the auth crate's
/// hashing and token issuance. Argon2 work runs on the blocking pool so the
/// async runtime is never stalled by a hash computation.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, command: SignUpCommand) -> Result<User, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.into_string();

        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
                .map_err(|e| UserError::Hashing(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        // No existence pre-check: the unique index decides, atomically
        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User registered"
        );

        Ok(created_user)
    }

    async fn sign_in(&self, command: SignInCommand) -> Result<(User, String), UserError> {
        let user = match self.repository.find_by_username(&command.username).await? {
            Some(user) => user,
            None => {
                // Logged distinctly, surfaced identically to a wrong password
                tracing::debug!(username = %command.username, "Sign-in failed: unknown username");
                return Err(UserError::InvalidCredentials);
            }
        };

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();
        let user_id = user.id;
        let username = user.username.as_str().to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, user_id, &username)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        match result {
            Ok(authenticated) => Ok((user, authenticated.access_token)),
            Err(auth::AuthenticationError::InvalidCredentials) => {
                tracing::debug!(username = %user.username, "Sign-in failed: wrong password");
                Err(UserError::InvalidCredentials)
            }
            Err(auth::AuthenticationError::PasswordError(e)) => Err(UserError::Hashing(e.to_string())),
            Err(auth::AuthenticationError::JwtError(e)) => {
                Err(UserError::Unknown(format!("Token generation failed: {}", e)))
            }
        }
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }
}
