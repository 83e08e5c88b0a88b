pub mod category_table;
pub mod resolver;
pub mod type_table;
