//! Terminal session implementation using ratatui
//!
//! This module provides the concrete implementation of `TerminalSession`
//! using ratatui with the crossterm backend. Draw calls are buffered as
//! positioned styled ops and painted inside a bordered frame on `present`.

use crate::error::Result;
use crate::render::session::{ColorSlot, TerminalSession};
use ratatui::crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Terminal,
};
use std::collections::HashMap;
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// One buffered absolute-position write, style already resolved.
#[derive(Debug, Clone)]
struct DrawOp {
    line: u16,
    column: u16,
    style: Style,
    text: String,
}

/// Terminal session backed by ratatui/crossterm.
///
/// Color slots resolve against the registered palette at draw time; slots
/// drawn before registration fall back to the terminal defaults.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    palette: HashMap<ColorSlot, (Color, Color)>,
    ops: Vec<DrawOp>,
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalUI {
    /// Create a session; the screen is not touched until `initialize`.
    pub fn new() -> Self {
        Self {
            terminal: None,
            palette: HashMap::new(),
            ops: Vec::new(),
        }
    }

    fn style_for(&self, slot: ColorSlot, emphasis: Modifier) -> Style {
        let (fg, bg) = self
            .palette
            .get(&slot)
            .copied()
            .unwrap_or((Color::Reset, Color::Reset));
        Style::default().fg(fg).bg(bg).add_modifier(emphasis)
    }
}

impl TerminalSession for TerminalUI {
    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn register_color_slot(
        &mut self,
        slot: ColorSlot,
        foreground: Color,
        background: Color,
    ) -> Result<()> {
        self.palette.insert(slot, (foreground, background));
        Ok(())
    }

    fn draw_text(
        &mut self,
        line: u16,
        column: u16,
        slot: ColorSlot,
        emphasis: Modifier,
        text: &str,
    ) -> Result<()> {
        let style = self.style_for(slot, emphasis);
        self.ops.push(DrawOp {
            line,
            column,
            style,
            text: text.to_string(),
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let ops = &self.ops;

            terminal.draw(move |frame| {
                let area = frame.size();

                let border = Block::default().borders(Borders::ALL);
                frame.render_widget(border, area);

                for op in ops {
                    if op.line >= area.height || op.column >= area.width {
                        continue;
                    }
                    let width = (op.text.len() as u16).min(area.width - op.column);
                    let rect = Rect::new(op.column, op.line, width, 1);
                    let paragraph = Paragraph::new(op.text.as_str()).style(op.style);
                    frame.render_widget(paragraph, rect);
                }
            })?;
        }
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<()> {
        loop {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
