pub mod app_state;
pub mod generate;
pub mod http_server;
pub mod ping;
