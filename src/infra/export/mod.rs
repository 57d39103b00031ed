pub mod tsv;
pub mod xlsx;
