pub mod account;
pub mod repository;
