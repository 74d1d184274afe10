pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_table_projects;
mod m20260801_000002_create_table_technologies;
mod m20260801_000003_create_table_project_technologies;
mod m20260801_000004_create_table_skills;
mod m20260801_000005_create_table_experiences;
mod m20260801_000006_create_table_educations;
mod m20260801_000007_create_table_certifications;
mod m20260801_000008_create_table_testimonials;
mod m20260801_000009_create_table_contact_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_table_projects::Migration),
            Box::new(m20260801_000002_create_table_technologies::Migration),
            Box::new(m20260801_000003_create_table_project_technologies::Migration),
            Box::new(m20260801_000004_create_table_skills::Migration),
            Box::new(m20260801_000005_create_table_experiences::Migration),
            Box::new(m20260801_000006_create_table_educations::Migration),
            Box::new(m20260801_000007_create_table_certifications::Migration),
            Box::new(m20260801_000008_create_table_testimonials::Migration),
            Box::new(m20260801_000009_create_table_contact_messages::Migration),
        ]
    }
}
