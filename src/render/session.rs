//! Terminal session boundary.
//!
//! This module defines the `TerminalSession` trait the renderer draws
//! through, so the draw routine can be tested against a recording mock
//! instead of a real terminal. The concrete ratatui/crossterm session lives
//! in [`crate::render::terminal`].

use crate::error::Result;
use ratatui::style::{Color, Modifier};

/// Identifier for a registered color in the session palette.
///
/// Slots 254 and 255 are reserved for default text and system notices;
/// character slots start at 16 and are derived from the character id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSlot(u16);

impl ColorSlot {
    /// Default text color, reserved slot 254.
    pub const DEFAULT_TEXT: Self = Self(254);

    /// System message color, reserved slot 255.
    pub const SYSTEM_MESSAGE: Self = Self(255);

    /// First slot available to characters; slots below it belong to the host.
    const CHARACTER_BASE: u16 = 16;

    /// Slot reserved for a character id: `16 + id`.
    pub fn for_character(id: u16) -> Self {
        Self(Self::CHARACTER_BASE + id)
    }

    /// Numeric slot identifier.
    pub fn id(self) -> u16 {
        self.0
    }
}

/// Core trait for the terminal session the renderer draws into.
///
/// One session spans the whole program run: initialized once, palette
/// installed once, torn down exactly once on both the normal and the fatal
/// path.
pub trait TerminalSession {
    /// Enter raw mode and take over the screen.
    fn initialize(&mut self) -> Result<()>;

    /// Register a reusable color slot with the given foreground/background.
    fn register_color_slot(
        &mut self,
        slot: ColorSlot,
        foreground: Color,
        background: Color,
    ) -> Result<()>;

    /// Write `text` at an absolute row/column in the slot's color, with
    /// zero or more emphasis attributes (underline, italic).
    fn draw_text(
        &mut self,
        line: u16,
        column: u16,
        slot: ColorSlot,
        emphasis: Modifier,
        text: &str,
    ) -> Result<()>;

    /// Flush accumulated draws to the screen inside the session frame.
    fn present(&mut self) -> Result<()>;

    /// Block until any key is pressed.
    fn wait_for_key(&mut self) -> Result<()>;

    /// Current terminal dimensions as (width, height).
    fn size(&self) -> Result<(u16, u16)>;

    /// Restore cooked mode and release the screen.
    fn cleanup(&mut self) -> Result<()>;
}
