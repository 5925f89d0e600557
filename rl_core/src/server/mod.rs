pub mod default_config;
pub mod payload;
pub mod routes;
