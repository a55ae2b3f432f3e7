//! Per-variant draw routine.
//!
//! `render` consumes the message by value: its owned text is dropped when the
//! call returns, so a well-formed caller cannot draw the same message twice.

use crate::error::Result;
use crate::message::Message;
use crate::render::cursor::LineCursor;
use crate::render::session::{ColorSlot, TerminalSession};
use ratatui::style::Modifier;

/// Column every message starts at, inset from the frame border.
pub const TEXT_ORIGIN_COLUMN: u16 = 2;

/// Columns reserved between the speaker name and the quoted body for the
/// `< >` brackets of the `<NAME> "body"` layout. The brackets themselves are
/// never drawn; the gap is kept as-is.
const BRACKET_GAP: u16 = 2;

/// Draw one message at the cursor's line, then advance the cursor.
pub fn render(
    message: Message,
    cursor: &mut LineCursor,
    session: &mut dyn TerminalSession,
) -> Result<()> {
    let line = cursor.line();

    match message {
        Message::Character {
            speaker,
            speaker_slot,
            body,
        } => {
            session.draw_text(
                line,
                TEXT_ORIGIN_COLUMN,
                speaker_slot,
                Modifier::UNDERLINED,
                &speaker,
            )?;
            let body_column = TEXT_ORIGIN_COLUMN + BRACKET_GAP + speaker.len() as u16;
            session.draw_text(
                line,
                body_column,
                ColorSlot::DEFAULT_TEXT,
                Modifier::empty(),
                &format!("\"{body}\""),
            )?;
        }
        Message::System { body } => {
            session.draw_text(
                line,
                TEXT_ORIGIN_COLUMN,
                ColorSlot::SYSTEM_MESSAGE,
                Modifier::empty(),
                &format!("SYSTEM: {body}"),
            )?;
        }
        Message::Story { body } => {
            session.draw_text(
                line,
                TEXT_ORIGIN_COLUMN,
                ColorSlot::DEFAULT_TEXT,
                Modifier::ITALIC,
                &format!("{body}... "),
            )?;
        }
    }

    cursor.advance();
    Ok(())
}
