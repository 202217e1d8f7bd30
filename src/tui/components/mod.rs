pub mod donor_table;
pub mod header;
pub mod help;
pub mod logs;
pub mod selector;
