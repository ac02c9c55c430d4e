//! Terminal output for the CLI commands.
//!
//! Markdown produced by the display layer is either styled through a
//! termimad skin or written verbatim when color is disabled.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Writes command output to stdout, styled or plain.
///
/// Plain mode prints the markdown source untouched, so scripted
/// consumers see exactly what the display layer produced.
pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        Self {
            skin: rich_enabled.then(Self::skin),
        }
    }

    fn skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Green);
        skin.code_block.set_bg(Color::AnsiValue(236));
        skin.inline_code.set_bg(Color::AnsiValue(236));
        skin
    }

    /// Print markdown to the terminal.
    ///
    /// Header lines keep their hash prefix and get the header color as a
    /// whole line; everything else goes through termimad inline styling.
    pub fn render(&self, markdown: &str) -> Result<()> {
        let Some(skin) = &self.skin else {
            print!("{markdown}");
            return Ok(());
        };

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                skin.print_inline(line);
                println!();
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
