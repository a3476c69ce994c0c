//! Boolean database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Boolean;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booleans")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub key: String,
    pub value: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Boolean {
    fn from(model: Model) -> Self {
        Boolean {
            id: model.id,
            key: model.key,
            value: model.value,
        }
    }
}
