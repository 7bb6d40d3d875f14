pub mod gadget_query_postgres;
pub mod gadget_repository_postgres;
pub mod random;
pub mod sea_orm_entity;
