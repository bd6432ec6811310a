pub mod add;
pub mod calculator;
pub mod config;
pub mod filter;
pub mod log;
pub mod query;
