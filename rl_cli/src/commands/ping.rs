use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(client: &CliClient) -> Result<()> {
    let body = client.ping().await?;
    println!("{body}");
    Ok(())
}
