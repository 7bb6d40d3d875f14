use sea_orm::entity::prelude::*;

use crate::gadget::application::domain::{Gadget, GadgetStatus, UnknownStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "gadgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub name: String,

    // Text column guarded by a CHECK constraint on the four status names
    pub status: String,

    #[sea_orm(column_type = "Double")]
    pub success_probability: f64,

    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(nullable)]
    pub decommissioned_at: Option<DateTimeWithTimeZone>,

    #[sea_orm(nullable)]
    pub destroyed_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Gadget {
    type Error = UnknownStatus;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Gadget {
            id: model.id,
            status: model.status.parse::<GadgetStatus>()?,
            name: model.name,
            success_probability: model.success_probability,
            created_at: model.created_at.into(),
            decommissioned_at: model.decommissioned_at.map(Into::into),
            destroyed_at: model.destroyed_at.map(Into::into),
        })
    }
}
