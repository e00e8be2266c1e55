pub mod accounts;
pub mod balance;
pub mod initdb;
pub mod operations;

pub use initdb::init_database;
