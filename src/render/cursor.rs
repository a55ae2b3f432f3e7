//! Render cursor shared across successive draw calls.

/// First content line, leaving room for the frame border above it.
pub const TOP_OF_CONTENT: u16 = 2;

/// Mutable line offset threaded through successive render calls.
///
/// Advances by exactly one per rendered message, regardless of variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCursor {
    line: u16,
}

impl Default for LineCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCursor {
    /// Cursor positioned at the top of the content area.
    pub fn new() -> Self {
        Self {
            line: TOP_OF_CONTENT,
        }
    }

    /// Cursor positioned at an arbitrary line.
    pub fn at(line: u16) -> Self {
        Self { line }
    }

    /// Line the next message will be drawn on.
    pub fn line(&self) -> u16 {
        self.line
    }

    /// Move to the next line.
    pub fn advance(&mut self) {
        self.line += 1;
    }
}
