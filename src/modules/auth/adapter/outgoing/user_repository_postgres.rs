use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::ActiveModel as UserActiveModel;
use super::user_query_postgres::UserQueryPostgres;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            created_at: Set(Utc::now().into()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(UserQueryPostgres::to_domain(inserted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            name: "Luther Stickell".to_string(),
            email: "luther@imf.gov".to_string(),
            password_hash: "hashed_password".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let data = create_test_user_data();
        let user_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![UserModel {
                id: user_id,
                name: data.name.clone(),
                email: data.email.clone(),
                password_hash: data.password_hash.clone(),
                created_at: Utc::now().into(),
            }]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let user = repository.create_user(data).await.unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.name, "Luther Stickell");
        assert_eq!(user.email, "luther@imf.gov");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_key_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom(
                "duplicate key value violates unique constraint".to_string(),
            )])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let result = repository.create_user(create_test_user_data()).await;

        assert!(matches!(result, Err(UserRepositoryError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));
        let result = repository.create_user(create_test_user_data()).await;

        match result {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
