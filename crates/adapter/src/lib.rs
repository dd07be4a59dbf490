//! Adapter module - game state replication over TCP
//!
//! Lets remote viewers fetch a read-only snapshot of a running game.
//! The engine never sees this layer; the driver publishes snapshot
//! copies into a [`SnapshotStore`] and the server serves them.
//!
//! # Protocol Overview
//!
//! Every message, in both directions, is framed the same way:
//!
//! 1. a fixed 16-byte header holding the payload length as ASCII
//!    decimal, right-padded with spaces,
//! 2. that many payload bytes.
//!
//! A request/response exchange looks like:
//!
//! ```text
//! Client -> Server: <frame "view">
//! Server -> Client: <frame "msg recieved">      acknowledgment
//! Server -> Client: <frame "!sending_game">     marker
//! Server -> Client: <frame {"grid":...,"snake":...,"score":7}>
//! ```
//!
//! The request payload is an opaque command string; the server answers
//! every request with the current snapshot. The literal `"!disconnect"`
//! closes the connection instead. A malformed frame (unparseable length
//! header, short read) drops the connection - engine state is never
//! affected.
//!
//! Multiple clients may connect concurrently; each connection is handled
//! by its own task and serializes its own snapshot copy per request.
//! No authentication, no retry, no backpressure.
//!
//! # Environment Variables
//!
//! - `SNAKE_NET_HOST`: bind address (default: "127.0.0.1")
//! - `SNAKE_NET_PORT`: port number (default: 5050)
//! - `SNAKE_NET_DISABLED`: set to "1" or "true" to disable replication
//!
//! # Testing
//!
//! The framing layer works over any `AsyncRead`/`AsyncWrite` pair, so
//! tests can run it over an in-memory duplex without sockets.

pub mod client;
pub mod framing;
pub mod server;
pub mod wire;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

// Re-export protocol surface for convenience
pub use client::SnapshotClient;
pub use framing::{read_frame, write_frame, HEADER_LEN};
pub use server::{run_server, spawn_server_thread, ServerConfig, SnapshotStore};
pub use wire::{GameMessage, ACK_MESSAGE, DISCONNECT_MESSAGE, GAME_MESSAGE};
