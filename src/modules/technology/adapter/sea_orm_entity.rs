use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "technologies")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub slug: String,

    // language / framework / tool / database / other
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub kind: String,

    #[sea_orm(column_type = "Text", string_len = 7, nullable)]
    pub color: Option<String>,

    pub proficiency: i16,

    pub is_featured: bool,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::sea_orm_entity::project_technologies::Entity"
    )]
    ProjectTechnologies,
}

impl Related<crate::modules::project::adapter::sea_orm_entity::project_technologies::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ProjectTechnologies.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let sea_orm::ActiveValue::Set(slug) = &self.slug {
            self.slug = sea_orm::Set(slug.trim().to_lowercase());
        }

        if let sea_orm::ActiveValue::Set(name) = &self.name {
            self.name = sea_orm::Set(name.trim().to_string());
        }

        Ok(self)
    }
}
