//! SeaORM entity definitions.

pub mod lote;
pub mod test_class;
pub mod test_item;
pub mod test_result;
pub mod test_result_item;
