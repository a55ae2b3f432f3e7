//! Reserved session colors using ratatui's color system directly.

use crate::error::Result;
use crate::render::session::{ColorSlot, TerminalSession};
use ratatui::style::Color;

/// Colors for the two reserved slots plus the shared background.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Default text foreground.
    pub default_text: Color,

    /// System notice foreground.
    pub system_message: Color,

    /// Background behind every slot.
    pub background: Color,
}

impl Default for Palette {
    /// White-on-black text with yellow system notices.
    fn default() -> Self {
        Self {
            default_text: Color::White,
            system_message: Color::Yellow,
            background: Color::Black,
        }
    }
}

impl Palette {
    /// Palette for terminals without color support.
    pub fn monochrome() -> Self {
        Self {
            default_text: Color::White,
            system_message: Color::White,
            background: Color::Black,
        }
    }

    /// Register both reserved slots with the session.
    pub fn install(&self, session: &mut dyn TerminalSession) -> Result<()> {
        session.register_color_slot(ColorSlot::DEFAULT_TEXT, self.default_text, self.background)?;
        session.register_color_slot(
            ColorSlot::SYSTEM_MESSAGE,
            self.system_message,
            self.background,
        )?;
        Ok(())
    }
}
