use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // comment only renders on backends that support column comments
        manager
            .alter_table(
                Table::alter()
                    .table(StageOperations::Table)
                    .add_column(
                        string_len_null(StageOperations::MachineId, 50)
                            .comment("Machine or equipment used"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(StageOperations::Table)
                    .drop_column(StageOperations::MachineId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum StageOperations {
    Table,
    MachineId,
}
