pub use sea_orm_migration::prelude::*;

mod m20230412_091530_add_outsourcing_cost_to_stage_operations;
mod m20230425_134206_add_machine_id_to_stage_operations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230412_091530_add_outsourcing_cost_to_stage_operations::Migration),
            Box::new(m20230425_134206_add_machine_id_to_stage_operations::Migration),
        ]
    }
}
