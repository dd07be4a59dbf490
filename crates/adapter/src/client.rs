//! Snapshot client - fetches game state from a replication server.

use anyhow::{bail, Context, Result};
use tokio::net::TcpStream;

use crate::framing::{read_frame, write_frame};
use crate::wire::{GameMessage, DISCONNECT_MESSAGE, GAME_MESSAGE};

/// A connection to a snapshot replication server.
pub struct SnapshotClient {
    stream: TcpStream,
}

impl SnapshotClient {
    /// Connect to `addr` (e.g. "127.0.0.1:5050").
    pub async fn connect(addr: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .with_context(|| format!("connecting to {}", addr))?;
        Ok(Self { stream })
    }

    /// Send one request and receive the acknowledged snapshot.
    ///
    /// Returns the acknowledgment string and the decoded game message.
    pub async fn request(&mut self, command: &str) -> Result<(String, GameMessage)> {
        write_frame(&mut self.stream, command.as_bytes()).await?;

        let ack = read_frame(&mut self.stream).await.context("reading ack")?;
        let ack = String::from_utf8_lossy(&ack).into_owned();

        let marker = read_frame(&mut self.stream)
            .await
            .context("reading marker")?;
        if marker != GAME_MESSAGE.as_bytes() {
            bail!(
                "unexpected marker {:?}",
                String::from_utf8_lossy(&marker)
            );
        }

        let body = read_frame(&mut self.stream)
            .await
            .context("reading snapshot")?;
        let message: GameMessage =
            serde_json::from_slice(&body).context("decoding snapshot")?;
        Ok((ack, message))
    }

    /// Ask the server to close the connection.
    pub async fn disconnect(mut self) -> Result<()> {
        write_frame(&mut self.stream, DISCONNECT_MESSAGE.as_bytes()).await?;
        Ok(())
    }
}
