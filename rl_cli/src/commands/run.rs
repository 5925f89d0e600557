use crate::client::CliClient;
use crate::error::Result;
use crate::utils::stream_chunks::stream_chunks;
use rl_core::server::payload::generate_text_request::GenerateTextRequest;
use rl_core::types::conversation::Conversation;
use rl_core::types::message::Message;
use std::io::Write;

pub async fn handle(client: &CliClient, prompt: String) -> Result<()> {
    let conversation = Conversation::from_message(Message::user(prompt));
    let request = GenerateTextRequest {
        messages: conversation.to_vec(),
    };

    let response = client.send_prompt(&request).await?;

    let mut rx = stream_chunks(response.bytes_stream());
    let mut stdout = std::io::stdout();
    while let Some(chunk) = rx.recv().await {
        print!("{chunk}");
        stdout.flush().map_err(rl_core::error::ErrorCore::from)?;
    }
    println!();
    Ok(())
}
