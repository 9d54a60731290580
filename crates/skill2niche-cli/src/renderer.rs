//! Markdown output for the terminal
//!
//! Rich output goes through a termimad skin; `--no-color` prints the markdown
//! as is so it can be piped or asserted on.

use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Green);
        skin.italic.set_fg(Color::DarkYellow);
        skin.inline_code.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Prints markdown, styled unless plain output was requested.
    pub fn render(&self, markdown: &str) {
        if !self.rich_enabled {
            print!("{markdown}");
            return;
        }

        // Headers keep their hash marks so the nesting stays visible
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("{HEADER_STYLE}{line}{RESET}");
            } else {
                println!("{}", self.skin.inline(line));
            }
        }
    }

    /// Prints text meant to be copied or imported elsewhere, never styled.
    pub fn raw(&self, text: &str) {
        println!("{text}");
    }
}
