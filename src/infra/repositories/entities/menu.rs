//! Menu database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Menu;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "menus")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub path: String,
    pub permission: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Menu {
    fn from(model: Model) -> Self {
        Menu {
            id: model.id,
            parent_id: model.parent_id,
            name: model.name,
            path: model.path,
            permission: model.permission,
            icon: model.icon,
            sort_order: model.sort_order,
        }
    }
}
