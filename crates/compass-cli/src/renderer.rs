//! Terminal output for the markdown produced by `compass-core`
//!
//! Rich mode prints headers with their hash marks and colors checklist
//! marks by outcome; everything else goes through termimad's inline styling.
//! Plain mode writes the markdown untouched, which keeps output stable for
//! pipes and tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Renders markdown either with terminal styling or as-is.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Print markdown to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("{BLUE}{line}{RESET}");
            } else if let Some(color) = checkbox_color(line) {
                println!("{color}{line}{RESET}");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Print text that is not markdown, such as JSON or a plain-text
    /// report, without any styling.
    pub fn plain(&self, text: &str) {
        print!("{text}");
        if !text.ends_with('\n') {
            println!();
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Color for a checklist line, keyed on its mark.
fn checkbox_color(line: &str) -> Option<&'static str> {
    let rest = line.trim_start().strip_prefix("- [")?;
    match rest.chars().next()? {
        'x' => Some(GREEN),
        '!' => Some(RED),
        '~' => Some(YELLOW),
        _ => None,
    }
}
