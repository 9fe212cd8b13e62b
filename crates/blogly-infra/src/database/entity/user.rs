//! User entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogly_core::domain::UserDraft;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub last_name: String,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Copy every field of `draft` onto this model.
    pub fn apply(&mut self, draft: UserDraft) {
        self.first_name = Set(draft.first_name);
        self.last_name = Set(draft.last_name);
        self.image_url = Set(draft.image_url);
    }
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for blogly_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            image_url: model.image_url,
        }
    }
}
