use env_logger::{Builder, Env};
use log::LevelFilter;
use std::env;

pub fn init_logger() {
    let relay_debug = env::var("RELAY_DEBUG").unwrap_or_else(|_| "false".to_string());

    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    if relay_debug == "true" {
        builder.filter_level(LevelFilter::Debug);
    } else {
        builder.filter_level(LevelFilter::Info);
    }

    builder.init();
}
