use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_technologies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub project_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub technology_id: Uuid,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::project::adapter::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::modules::project::adapter::sea_orm_entity::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Projects,

    #[sea_orm(
        belongs_to = "crate::modules::technology::adapter::sea_orm_entity::Entity",
        from = "Column::TechnologyId",
        to = "crate::modules::technology::adapter::sea_orm_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Technologies,
}

impl Related<crate::modules::project::adapter::sea_orm_entity::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<crate::modules::technology::adapter::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technologies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
