pub mod cities;
pub mod client;
pub mod config;
pub mod status;
pub mod types;
