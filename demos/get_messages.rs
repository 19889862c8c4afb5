use std::io;

use textmagic::{Credentials, TextMagicClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("TEXTMAGIC_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_USERNAME environment variable is required",
        )
    })?;
    let token = std::env::var("TEXTMAGIC_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_TOKEN environment variable is required",
        )
    })?;

    let client = TextMagicClient::new(Credentials::new(username, token)?);
    let messages = client.get_messages(1, 10).await?;

    println!(
        "page {} of {} (limit {})",
        messages.page, messages.page_count, messages.limit
    );
    for message in messages.resources {
        println!(
            "{} -> {} [{:?}] {:?}",
            message.id, message.receiver, message.status, message.text
        );
    }

    Ok(())
}
