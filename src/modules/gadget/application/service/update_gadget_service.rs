use async_trait::async_trait;
use tracing::info;

use crate::gadget::application::domain::Gadget;
use crate::gadget::application::ports::incoming::use_cases::{
    UpdateGadgetCommand, UpdateGadgetError, UpdateGadgetUseCase,
};
use crate::gadget::application::ports::outgoing::{
    GadgetQuery, GadgetRepository, GadgetRepositoryError,
};

pub struct UpdateGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    gadget_query: Q,
    gadget_repository: R,
}

impl<Q, R> UpdateGadgetService<Q, R>
where
    Q: GadgetQuery,
    R: GadgetRepository,
{
    pub fn new(gadget_query: Q, gadget_repository: R) -> Self {
        Self {
            gadget_query,
            gadget_repository,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateGadgetUseCase for UpdateGadgetService<Q, R>
where
    Q: GadgetQuery + Send + Sync,
    R: GadgetRepository + Send + Sync,
{
    /// Overwrites name and status as supplied, with no lifecycle guard and no
    /// name pre-check. A duplicate name still trips the unique index.
    async fn execute(&self, command: UpdateGadgetCommand) -> Result<Gadget, UpdateGadgetError> {
        let mut gadget = self
            .gadget_query
            .find_by_id(command.id)
            .await
            .map_err(|e| UpdateGadgetError::RepositoryError(e.to_string()))?
            .ok_or(UpdateGadgetError::NotFound)?;

        gadget.apply_update(command.name, command.status);

        let saved = self
            .gadget_repository
            .save(&gadget)
            .await
            .map_err(|e| match e {
                GadgetRepositoryError::NotFound => UpdateGadgetError::NotFound,
                GadgetRepositoryError::NameAlreadyExists => UpdateGadgetError::NameAlreadyExists,
                GadgetRepositoryError::DatabaseError(msg) => {
                    UpdateGadgetError::RepositoryError(msg)
                }
            })?;

        info!(gadget_id = %saved.id, status = %saved.status, "Gadget updated");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gadget::application::domain::GadgetStatus;
    use crate::gadget::application::ports::outgoing::{GadgetQueryError, NewGadget};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub GadgetQueryMock {}
        #[async_trait]
        impl GadgetQuery for GadgetQueryMock {
            async fn list(&self, status: Option<GadgetStatus>) -> Result<Vec<Gadget>, GadgetQueryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Gadget>, GadgetQueryError>;
            async fn find_by_name(&self, name: &str) -> Result<Option<Gadget>, GadgetQueryError>;
        }
    }

    mock! {
        pub GadgetRepositoryMock {}
        #[async_trait]
        impl GadgetRepository for GadgetRepositoryMock {
            async fn insert(&self, gadget: NewGadget) -> Result<Gadget, GadgetRepositoryError>;
            async fn save(&self, gadget: &Gadget) -> Result<Gadget, GadgetRepositoryError>;
        }
    }

    fn decommissioned_gadget(id: Uuid) -> Gadget {
        let now = Utc::now();
        Gadget {
            id,
            name: "Phantom Viper".to_string(),
            status: GadgetStatus::Decommissioned,
            success_probability: 33.3,
            created_at: now,
            decommissioned_at: Some(now),
            destroyed_at: None,
        }
    }

    fn query_returning(gadget: Option<Gadget>) -> MockGadgetQueryMock {
        let mut query = MockGadgetQueryMock::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(gadget.clone()));
        query.expect_find_by_name().times(0);
        query
    }

    #[tokio::test]
    async fn test_update_can_move_a_terminal_gadget_back() {
        let id = Uuid::new_v4();
        let original = decommissioned_gadget(id);
        let stamped = original.decommissioned_at;

        let mut repository = MockGadgetRepositoryMock::new();
        repository
            .expect_save()
            .withf(|g| g.status == GadgetStatus::Available && g.name == "Phantom Viper")
            .times(1)
            .returning(|g| Ok(g.clone()));

        let service = UpdateGadgetService::new(query_returning(Some(original)), repository);
        let updated = service
            .execute(
                UpdateGadgetCommand::new(
                    id,
                    None,
                    Some(GadgetStatus::Available),
                )
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(updated.status, GadgetStatus::Available);
        assert_eq!(updated.decommissioned_at, stamped);
    }

    #[tokio::test]
    async fn test_rename_keeps_status() {
        let id = Uuid::new_v4();

        let mut repository = MockGadgetRepositoryMock::new();
        repository.expect_save().returning(|g| Ok(g.clone()));

        let service = UpdateGadgetService::new(
            query_returning(Some(decommissioned_gadget(id))),
            repository,
        );
        let updated = service
            .execute(
                UpdateGadgetCommand::new(
                    id,
                    Some("Dark Horizon".to_string()),
                    None,
                )
                .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Dark Horizon");
        assert_eq!(updated.status, GadgetStatus::Decommissioned);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let mut repository = MockGadgetRepositoryMock::new();
        repository.expect_save().times(0);

        let service = UpdateGadgetService::new(query_returning(None), repository);
        let result = service
            .execute(UpdateGadgetCommand::new(Uuid::new_v4(), None, None).unwrap())
            .await;

        assert_eq!(result.unwrap_err(), UpdateGadgetError::NotFound);
    }

    #[tokio::test]
    async fn test_duplicate_rename_surfaces_as_conflict() {
        let id = Uuid::new_v4();

        let mut repository = MockGadgetRepositoryMock::new();
        repository
            .expect_save()
            .returning(|_| Err(GadgetRepositoryError::NameAlreadyExists));

        let service = UpdateGadgetService::new(
            query_returning(Some(decommissioned_gadget(id))),
            repository,
        );
        let result = service
            .execute(
                UpdateGadgetCommand::new(
                    id,
                    Some("The Kraken".to_string()),
                    None,
                )
                .unwrap(),
            )
            .await;

        assert_eq!(result.unwrap_err(), UpdateGadgetError::NameAlreadyExists);
    }
}
