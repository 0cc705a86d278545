pub mod databases;
pub mod gateways;
pub mod models;
pub mod repositories;
