pub mod offline;
pub mod remote;
