use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use sea_orm::{EntityTrait, QuerySelect, Set};
use uuid::Uuid;

use crate::{
    dto::users::NewUser,
    entity::users::{ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
    state::AppState,
};

/// Salted Argon2 hash in PHC string form.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

pub async fn create_user(state: &AppState, payload: NewUser) -> AppResult<User> {
    let NewUser { username, password } = payload;
    let password = hash_password(&password)?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.clone()),
        password: Set(password),
    };
    let inserted = Users::insert(active).exec(&state.orm).await?;

    tracing::debug!(user_id = %inserted.last_insert_id, "user created");
    Ok(User {
        id: inserted.last_insert_id,
        username,
    })
}

pub async fn fetch_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .select_only()
        .column(Column::Id)
        .column(Column::Username)
        .into_model::<User>()
        .all(&state.orm)
        .await?;
    Ok(users)
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};

    use super::*;

    #[test]
    fn hash_is_salted_and_verifiable() {
        let first = hash_password("password123").unwrap();
        let second = hash_password("password123").unwrap();

        assert_ne!(first, "password123");
        assert_ne!(first, second);
        assert!(first.starts_with("$argon2"));
        assert!(first.len() <= 255);

        let parsed = PasswordHash::new(&first).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"password123", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrong", &parsed)
                .is_err()
        );
    }
}
