//! Rendering subsystem: cursor, session boundary, palette, and draw routine.

pub mod cursor;
pub mod palette;
pub mod renderer;
pub mod session;
pub mod terminal;

pub use cursor::LineCursor;
pub use palette::Palette;
pub use renderer::render;
pub use session::{ColorSlot, TerminalSession};
pub use terminal::TerminalUI;
