//! Terminal rendering for the markdown produced by the core display types
//!
//! Rich mode styles inline markdown with termimad and colors headers by
//! level, keeping their `#` markers so the structure stays visible. Plain
//! mode prints the markdown untouched.

use anyhow::Result;
use termimad::{MadSkin, crossterm::style::Color};

/// ANSI color for a header line, by number of leading `#`.
fn header_color(line: &str) -> Option<&'static str> {
    match line.chars().take_while(|c| *c == '#').count() {
        0 => None,
        1 => Some("\x1b[1;34m"),
        2 => Some("\x1b[34m"),
        _ => Some("\x1b[36m"),
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match header_color(line) {
                Some(color) => println!("{color}{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
