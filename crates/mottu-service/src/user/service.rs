//! User CRUD with hashed passwords.

use std::sync::Arc;

use tracing::info;

use mottu_auth::PasswordHasher;
use mottu_core::error::AppError;
use mottu_core::result::AppResult;
use mottu_core::traits::Repository;
use mottu_core::types::{PageRequest, PageSlice};
use mottu_entity::user::{User, UserData};

use crate::validation::ReferentialValidator;

/// Username and plaintext password as submitted by a client.
#[derive(Debug, Clone)]
pub struct UserInput {
    /// Login name.
    pub usuario: String,
    /// Plaintext password; hashed before it reaches the repository.
    pub senha: String,
}

/// Creates, lists, updates and removes users.
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn Repository<User>>,
    validator: Arc<ReferentialValidator>,
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn Repository<User>>,
        validator: Arc<ReferentialValidator>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            users,
            validator,
            hasher,
        }
    }

    /// One page of users ordered by id.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageSlice<User>> {
        self.users.find_page(&[], page).await
    }

    /// Gets a single user by ID.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Usuário {id} não encontrado")))
    }

    /// Registers a user under a unique name.
    pub async fn create(&self, input: UserInput) -> AppResult<User> {
        self.validator.check_username(&input.usuario, None).await?;
        let data = self.to_data(input).await?;
        let user = self.users.create(&data).await?;
        info!(user_id = user.id, usuario = %user.usuario, "User created");
        Ok(user)
    }

    /// Replaces a user's name and password.
    pub async fn update(&self, id: i64, input: UserInput) -> AppResult<User> {
        self.get(id).await?;
        self.validator
            .check_username(&input.usuario, Some(id))
            .await?;
        let data = self.to_data(input).await?;
        let user = self
            .users
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Usuário {id} não encontrado")))?;
        info!(user_id = id, usuario = %user.usuario, "User updated");
        Ok(user)
    }

    /// Removes a user. Nothing references users, so there is no guard.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        self.users.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Hashing runs on the blocking pool.
    async fn to_data(&self, input: UserInput) -> AppResult<UserData> {
        let hasher = Arc::clone(&self.hasher);
        let UserInput { usuario, senha } = input;
        let senha_hash = tokio::task::spawn_blocking(move || hasher.hash(&senha))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))??;
        Ok(UserData {
            usuario,
            senha_hash,
        })
    }
}
