//! TestClass entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_classes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::test_item::Entity")]
    TestItems,
}

impl Related<super::test_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
