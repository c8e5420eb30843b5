pub mod matrix;
pub mod matrix_tables;
