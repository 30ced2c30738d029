//! TestResult entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_results")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub timestamp: DateTimeUtc,
    pub lote_id: Uuid,
    pub equipment_type: String,
    pub equipment_sku: String,
    pub equipment_barebone: String,
    #[sea_orm(unique)]
    pub equipment_serial: String,
    pub general_observations: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lote::Entity",
        from = "Column::LoteId",
        to = "super::lote::Column::Id",
        on_delete = "Cascade"
    )]
    Lote,
    #[sea_orm(has_many = "super::test_result_item::Entity")]
    TestResultItems,
}

impl Related<super::lote::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lote.def()
    }
}

impl Related<super::test_result_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestResultItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
