//! wrzeczak - Terminal Dialogue Renderer
//!
//! Renders the three-variant dialogue demo and exits after any keypress.

use clap::{Arg, ArgAction, Command};
use std::process;
use wrzeczak::{Application, Palette, TerminalUI};

fn main() {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("wrzeczak")
        .version(wrzeczak::VERSION)
        .about("A terminal dialogue renderer for character, system and story messages")
        .arg(
            Arg::new("monochrome")
                .long("monochrome")
                .help("Render without colors, for terminals without color support")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let palette = if matches.get_flag("monochrome") {
        Palette::monochrome()
    } else {
        Palette::default()
    };

    let session = Box::new(TerminalUI::new());
    let mut app = Application::with_palette(session, palette);

    if let Err(err) = app.run() {
        // The session's cleanup/Drop has already restored the terminal.
        eprintln!("{}", err.fatal_diagnostic());
        process::exit(err.exit_code());
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!wrzeczak::VERSION.is_empty());
    }
}
