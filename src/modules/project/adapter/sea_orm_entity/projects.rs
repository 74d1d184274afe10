use crate::modules::technology::adapter::sea_orm_entity as technologies;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub slug: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub featured_image: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail: Option<String>,

    // Ordered list of storage keys
    #[sea_orm(column_type = "JsonBinary")]
    pub gallery: Json,

    // Ordered list of feature blurbs
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,

    // draft / in_progress / completed / archived
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub status: String,

    pub is_featured: bool,

    pub is_published: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

    pub views_count: i32,

    pub likes_count: i32,

    pub sort_order: i32,

    // Needed for soft_delete
    pub is_deleted: bool,

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

// Many-to-many: projects <-> technologies via project_technologies
impl Related<technologies::Entity> for Entity {
    fn to() -> RelationDef {
        crate::modules::project::adapter::sea_orm_entity::project_technologies::Relation::Technologies
            .def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            crate::modules::project::adapter::sea_orm_entity::project_technologies::Relation::Projects
                .def()
                .rev(),
        )
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
