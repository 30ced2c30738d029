//! TestResultItem entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_result_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub test_result_id: Uuid,
    /// Copy of the catalog item name at submission time, not a foreign key.
    pub test_item_name: String,
    /// "Approved" or "Rejected"
    pub status: String,
    pub observation: Option<String>,
    /// Position within the submitted list
    pub sequence: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_result::Entity",
        from = "Column::TestResultId",
        to = "super::test_result::Column::Id",
        on_delete = "Cascade"
    )]
    TestResult,
}

impl Related<super::test_result::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestResult.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
