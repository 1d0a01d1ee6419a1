pub use sea_orm_migration::prelude::*;

mod m20210219_000001_postboard_user;
mod m20210219_000002_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210219_000001_postboard_user::Migration),
            Box::new(m20210219_000002_message::Migration),
        ]
    }
}
