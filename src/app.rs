//! Application orchestration layer
//!
//! Runs one terminal session through the hardcoded demo script: install the
//! palette, register the demo character, render one message of each variant,
//! present, then wait for a key before tearing the session down.

use crate::error::Result;
use crate::message::{Character, Message};
use crate::render::cursor::LineCursor;
use crate::render::palette::Palette;
use crate::render::renderer::render;
use crate::render::session::TerminalSession;
use ratatui::style::Color;

/// Render the three-message demo into an already-initialized session.
///
/// The cursor starts at the top of the content area and ends three lines
/// further down, one per message.
pub fn run_script(session: &mut dyn TerminalSession, palette: &Palette) -> Result<()> {
    palette.install(session)?;

    let test = Character::new("Test", 0, Color::Red);
    test.register(session, palette.background)?;

    let mut cursor = LineCursor::new();

    render(
        Message::character(&test, "This is a test message"),
        &mut cursor,
        session,
    )?;
    render(
        Message::system("This is a system message"),
        &mut cursor,
        session,
    )?;
    render(
        Message::story("This is a story message"),
        &mut cursor,
        session,
    )?;

    session.present()?;
    Ok(())
}

/// Application orchestrator - owns the session for the whole program run
pub struct Application {
    session: Box<dyn TerminalSession>,
    palette: Palette,
}

impl Application {
    /// Create an application around an injected session, default palette.
    pub fn new(session: Box<dyn TerminalSession>) -> Self {
        Self::with_palette(session, Palette::default())
    }

    /// Create an application with a custom palette.
    pub fn with_palette(session: Box<dyn TerminalSession>, palette: Palette) -> Self {
        Self { session, palette }
    }

    /// Run the demo: initialize, render, wait for a key, clean up.
    ///
    /// The session is torn down on both the success and the error path; a
    /// script error takes precedence over a cleanup error in the result.
    pub fn run(&mut self) -> Result<()> {
        self.session.initialize()?;

        let outcome = run_script(self.session.as_mut(), &self.palette)
            .and_then(|()| self.session.wait_for_key());
        let cleanup = self.session.cleanup();

        outcome?;
        cleanup
    }
}
