use rl_gemini::client::GeminiClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gemini: GeminiClient,
}
impl AppState {
    pub fn new(gemini: GeminiClient) -> Self {
        AppState { gemini }
    }
}
