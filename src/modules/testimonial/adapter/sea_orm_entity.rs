use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub client_name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub client_avatar: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    // 1..=5, validated at the API boundary
    pub rating: i16,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub project_id: Option<Uuid>,

    pub is_featured: bool,

    pub is_published: bool,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::project::adapter::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::modules::project::adapter::sea_orm_entity::projects::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Projects,
}

impl Related<crate::modules::project::adapter::sea_orm_entity::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
