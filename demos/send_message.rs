use std::io;

use textmagic::{
    Credentials, MessageText, RawPhoneNumber, SendMessage, SendOptions, TextMagicClient,
};

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
    let phones_raw = std::env::var("TEXTMAGIC_PHONES").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_PHONES environment variable is required (comma-separated numbers)",
        )
    })?;

    let phones = phones_raw
        .split(',')
        .map(RawPhoneNumber::new)
        .collect::<Result<Vec<_>, _>>()?;
    let request = SendMessage::new(
        phones,
        MessageText::new("Test message from the textmagic crate")?,
        SendOptions::default(),
    )?;

    let client = TextMagicClient::new(Credentials::new(username, token)?);
    let result = client.send_message(&request).await?;

    println!(
        "created {:?} id={} href={} session={:?}",
        result.kind, result.id, result.href, result.session_id
    );

    Ok(())
}
