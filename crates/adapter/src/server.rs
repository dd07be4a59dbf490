//! TCP server for snapshot replication
//!
//! Accepts concurrent viewer connections; each is handled independently
//! by its own task. A request never reaches the engine: connections are
//! served from the [`SnapshotStore`], a shared copy the driver refreshes
//! after each tick.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, RwLock};

use tui_snake_core::SessionSnapshot;

use crate::framing::{read_frame, write_frame};
use crate::wire::{GameMessage, ACK_MESSAGE, DISCONNECT_MESSAGE, GAME_MESSAGE};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5050,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("SNAKE_NET_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("SNAKE_NET_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5050);

        Self { host, port }
    }

    /// Check if replication is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("SNAKE_NET_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Shared snapshot slot between the game driver and the server tasks.
///
/// The driver publishes a fresh copy after each tick; every request
/// clones the current value under a read lock, so serialization never
/// observes a half-updated state and never aliases live engine
/// structures.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    inner: Arc<RwLock<SessionSnapshot>>,
}

impl SnapshotStore {
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    /// Replace the stored snapshot. Callable from the (synchronous)
    /// game loop thread.
    pub fn publish(&self, snapshot: &SessionSnapshot) {
        let mut slot = self.inner.blocking_write();
        slot.clone_from(snapshot);
    }

    /// Clone the current snapshot.
    pub async fn load(&self) -> SessionSnapshot {
        self.inner.read().await.clone()
    }
}

/// Start the TCP server and serve snapshot requests until the task is
/// dropped. Binds to `config` (port 0 picks an ephemeral port) and
/// reports the bound address through `ready_tx`.
pub async fn run_server(
    config: ServerConfig,
    store: SnapshotStore,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr).await?;
    let bound = listener.local_addr()?;
    println!("[Server] listening on {}", bound);
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id_counter = 0usize;

    loop {
        let (socket, peer) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;
        println!("[Server] client {} connected from {}", client_id, peer);

        let store = store.clone();
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, store).await {
                eprintln!("[Server] client {} error: {}", client_id, e);
            }
            println!("[Server] client {} disconnected", client_id);
        });
    }
}

/// Run the server on a dedicated thread with its own single-threaded
/// runtime, for synchronous drivers (the terminal game loop).
pub fn spawn_server_thread(
    config: ServerConfig,
    store: SnapshotStore,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                eprintln!("[Server] failed to start runtime: {}", e);
                return;
            }
        };
        if let Err(e) = runtime.block_on(run_server(config, store, None)) {
            eprintln!("[Server] stopped: {}", e);
        }
    })
}

/// Serve one connection until disconnect, EOF, or a framing error.
async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    store: SnapshotStore,
) -> anyhow::Result<()> {
    let (mut reader, mut writer) = socket.into_split();
    serve_connection(&mut reader, &mut writer, client_id, &store).await
}

/// Transport-agnostic request loop, shared by the TCP path and the
/// in-memory tests.
pub async fn serve_connection<R, W>(
    reader: &mut R,
    writer: &mut W,
    client_id: usize,
    store: &SnapshotStore,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let payload = match read_frame(reader).await {
            Ok(payload) => payload,
            // Peer hung up between requests.
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let request = String::from_utf8_lossy(&payload);
        println!("[Server] client {} request: {}", client_id, request.trim());

        if request == DISCONNECT_MESSAGE {
            return Ok(());
        }

        write_frame(writer, ACK_MESSAGE.as_bytes()).await?;
        write_frame(writer, GAME_MESSAGE.as_bytes()).await?;

        let snapshot = store.load().await;
        let message = GameMessage::from(&snapshot);
        let json = serde_json::to_vec(&message)?;
        write_frame(writer, &json).await?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_snake_core::{GameConfig, GameSession};

    fn store() -> SnapshotStore {
        let session = GameSession::new(GameConfig::default()).unwrap();
        SnapshotStore::new(session.snapshot())
    }

    #[tokio::test]
    async fn test_serve_connection_replies_with_snapshot() {
        let store = store();
        let (client, server) = tokio::io::duplex(64 * 1024);
        let (mut client_r, mut client_w) = tokio::io::split(client);
        let (mut server_r, mut server_w) = tokio::io::split(server);

        let task = tokio::spawn(async move {
            serve_connection(&mut server_r, &mut server_w, 1, &store).await
        });

        write_frame(&mut client_w, b"view").await.unwrap();
        let ack = read_frame(&mut client_r).await.unwrap();
        assert_eq!(ack, ACK_MESSAGE.as_bytes());
        let marker = read_frame(&mut client_r).await.unwrap();
        assert_eq!(marker, GAME_MESSAGE.as_bytes());
        let body = read_frame(&mut client_r).await.unwrap();
        let message: GameMessage = serde_json::from_slice(&body).unwrap();
        assert_eq!(message.score, 3);
        assert_eq!(message.grid.width, 20);

        write_frame(&mut client_w, DISCONNECT_MESSAGE.as_bytes())
            .await
            .unwrap();
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_serve_connection_drops_on_bad_header() {
        use tokio::io::AsyncWriteExt;

        let store = store();
        let (client, server) = tokio::io::duplex(1024);
        let (client_r, mut client_w) = tokio::io::split(client);
        let (mut server_r, mut server_w) = tokio::io::split(server);

        let task = tokio::spawn(async move {
            serve_connection(&mut server_r, &mut server_w, 1, &store).await
        });

        client_w.write_all(b"garbage header!!").await.unwrap();
        client_w.flush().await.unwrap();

        let result = task.await.unwrap();
        assert!(result.is_err(), "framing error must drop the connection");
        drop(client_r);
    }

    #[tokio::test]
    async fn test_serve_connection_clean_eof() {
        let store = store();
        let (client, server) = tokio::io::duplex(1024);
        let (mut server_r, mut server_w) = tokio::io::split(server);

        let task = tokio::spawn(async move {
            serve_connection(&mut server_r, &mut server_w, 1, &store).await
        });

        drop(client);
        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_store_publish_is_visible() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let store = SnapshotStore::new(session.snapshot());

        session.tick().unwrap();
        let fresh = session.snapshot();
        // blocking_write cannot run on the async worker itself.
        let store2 = store.clone();
        let fresh2 = fresh.clone();
        tokio::task::spawn_blocking(move || store2.publish(&fresh2))
            .await
            .unwrap();

        assert_eq!(store.load().await, fresh);
    }

    #[test]
    fn test_server_config_from_env_does_not_panic() {
        let _config = ServerConfig::from_env();
    }
}
