//! # wrzeczak - Terminal Dialogue Renderer
//!
//! A minimal terminal dialogue renderer: draws typed messages (character
//! speech, system notices, narrative text) to sequential screen lines using
//! colored, attributed text, plus a hardcoded demonstration of the three
//! message variants.
//!
//! ## Architecture
//!
//! The library is organized into focused modules following modern Rust patterns:
//!
//! - [`error`] - Centralized error types, exit codes, and the fatal banner
//! - [`message`] - Characters and the message sum type with its constructors
//! - [`render`] - Cursor, session boundary, palette, and draw routine
//! - [`app`] - Demo script and session lifecycle orchestration
//!
//! The renderer draws through the [`render::session::TerminalSession`] trait,
//! so everything above the concrete crossterm session is testable against a
//! recording mock.

// Core modules
pub mod error;
pub mod message;
pub mod render;

// Orchestration
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, WrzeczakError};

// Public API surface for external usage
pub use app::Application;
pub use message::{Character, Message, MessageKind};
pub use render::{render, ColorSlot, LineCursor, Palette, TerminalSession, TerminalUI};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
