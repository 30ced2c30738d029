//! TestItem entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub test_class_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_class::Entity",
        from = "Column::TestClassId",
        to = "super::test_class::Column::Id",
        on_delete = "Cascade"
    )]
    TestClass,
}

impl Related<super::test_class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
