use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    CreateUserData, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
};
use crate::gadget::application::domain::{Gadget, GadgetStatus};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetQueryError, GadgetRepository, GadgetRepositoryError, NewGadget,
};

/// Users table stand-in. Clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<Vec<User>>>,
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let user = User {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            created_at: Utc::now(),
        };
        rows.push(user.clone());
        Ok(user)
    }
}

/// Gadgets table stand-in, enforcing the unique name index.
#[derive(Clone, Default)]
pub struct InMemoryGadgets {
    rows: Arc<Mutex<Vec<Gadget>>>,
}

impl InMemoryGadgets {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl GadgetQuery for InMemoryGadgets {
    async fn list(&self, status: Option<GadgetStatus>) -> Result<Vec<Gadget>, GadgetQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|g| status.map_or(true, |s| g.status == s))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Gadget>, GadgetQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|g| g.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Gadget>, GadgetQueryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|g| g.name == name).cloned())
    }
}

#[async_trait]
impl GadgetRepository for InMemoryGadgets {
    async fn insert(&self, gadget: NewGadget) -> Result<Gadget, GadgetRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|g| g.name == gadget.name) {
            return Err(GadgetRepositoryError::NameAlreadyExists);
        }

        let created = Gadget {
            id: Uuid::new_v4(),
            name: gadget.name,
            status: gadget.status,
            success_probability: gadget.success_probability,
            created_at: Utc::now(),
            decommissioned_at: None,
            destroyed_at: None,
        };
        rows.push(created.clone());
        Ok(created)
    }

    async fn save(&self, gadget: &Gadget) -> Result<Gadget, GadgetRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|g| g.id != gadget.id && g.name == gadget.name)
        {
            return Err(GadgetRepositoryError::NameAlreadyExists);
        }

        let row = rows
            .iter_mut()
            .find(|g| g.id == gadget.id)
            .ok_or(GadgetRepositoryError::NotFound)?;

        // created_at and success_probability are never written back
        row.name = gadget.name.clone();
        row.status = gadget.status;
        row.decommissioned_at = gadget.decommissioned_at;
        row.destroyed_at = gadget.destroyed_at;
        Ok(row.clone())
    }
}
