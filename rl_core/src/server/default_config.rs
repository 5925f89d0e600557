pub const DEFAULT_SERVER_BACKEND_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";
