use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(StageOperations::Table)
                    .add_column(decimal_len_null(StageOperations::OutsourcingCost, 10, 2))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(StageOperations::Table)
                    .drop_column(StageOperations::OutsourcingCost)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum StageOperations {
    Table,
    OutsourcingCost,
}
