use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gadgets::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Gadgets::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Gadgets::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Gadgets::Status)
                            .string_len(20)
                            .not_null()
                            .default("Available"),
                    )
                    .col(
                        ColumnDef::new(Gadgets::SuccessProbability)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Gadgets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Gadgets::DecommissionedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Gadgets::DestroyedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gadgets_name")
                    .table(Gadgets::Table)
                    .col(Gadgets::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Listing filters on status and orders by creation time
        manager
            .create_index(
                Index::create()
                    .name("idx_gadgets_status_created_at")
                    .table(Gadgets::Table)
                    .col(Gadgets::Status)
                    .col(Gadgets::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // ============================================
        // STATUS CONSTRAINT
        // ============================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE gadgets
                ADD CONSTRAINT chk_gadgets_status
                CHECK (status IN ('Available', 'Deployed', 'Destroyed', 'Decommissioned'));
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE gadgets
                ADD CONSTRAINT chk_gadgets_success_probability
                CHECK (success_probability >= 0 AND success_probability <= 100);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gadgets::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Gadgets {
    Table,
    Id,
    Name,
    Status,
    SuccessProbability,
    CreatedAt,
    DecommissionedAt,
    DestroyedAt,
}
