use async_trait::async_trait;

use crate::gadget::application::domain::{Gadget, GadgetStatus};
use crate::gadget::application::ports::incoming::use_cases::{
    ListGadgetsError, ListGadgetsUseCase,
};
use crate::gadget::application::ports::outgoing::GadgetQuery;

pub struct ListGadgetsService<Q>
where
    Q: GadgetQuery,
{
    gadget_query: Q,
}

impl<Q> ListGadgetsService<Q>
where
    Q: GadgetQuery,
{
    pub fn new(gadget_query: Q) -> Self {
        Self { gadget_query }
    }
}

#[async_trait]
impl<Q> ListGadgetsUseCase for ListGadgetsService<Q>
where
    Q: GadgetQuery + Send + Sync,
{
    async fn execute(&self, status: Option<GadgetStatus>) -> Result<Vec<Gadget>, ListGadgetsError> {
        Ok(self.gadget_query.list(status).await?)
    }
}
