use rl_core::logger::init_logger;
use rl_gemini::client::GeminiClient;
use tracing::error;
mod error;
pub mod server;

fn main() {
    init_logger();

    let gemini = match GeminiClient::from_env() {
        Ok(client) => client,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server::http_server::http_server_backend(gemini) {
        error!("{err}");
        std::process::exit(1);
    }
}
