//! Terminal view module - draws session snapshots into a terminal
//!
//! A thin collaborator over the engine: it consumes read-only
//! [`SessionSnapshot`](tui_snake_core::SessionSnapshot) values and never
//! touches live engine state. The engine runs fine without it.
//!
//! - [`fb`]: an in-memory character framebuffer (pure, testable)
//! - [`game_view`]: maps a snapshot into a framebuffer
//! - [`renderer`]: flushes a framebuffer to the real terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
