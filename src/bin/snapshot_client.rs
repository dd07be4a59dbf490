//! Snapshot viewer: fetches game state from a running replication
//! server and prints it.
//!
//! Usage: `snapshot-client [command]` - the command string is opaque to
//! the server; anything but "!disconnect" yields a snapshot.

use anyhow::Result;

use tui_snake::adapter::{GameMessage, ServerConfig, SnapshotClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    let addr = format!("{}:{}", config.host, config.port);
    let command = std::env::args().nth(1).unwrap_or_else(|| "view".to_string());

    let mut client = SnapshotClient::connect(&addr).await?;
    let (ack, message) = client.request(&command).await?;

    println!("[Client] server says: {}", ack);
    println!(
        "[Client] score: {}{}",
        message.score,
        if message.game_over { " (game over)" } else { "" }
    );
    print_grid(&message);

    client.disconnect().await?;
    Ok(())
}

fn print_grid(message: &GameMessage) {
    let snap = message.to_snapshot();
    for y in 0..snap.height {
        let mut line = String::with_capacity(snap.width as usize);
        for x in 0..snap.width {
            let ch = match snap.cell_code(x, y).unwrap_or(0) {
                1 => '#',
                2 => 'o',
                3 => '@',
                _ => '.',
            };
            line.push(ch);
        }
        println!("{}", line);
    }
}
