// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the hookkit CLI.
//!
//! Status lines go to stderr; a guard refusal goes to stdout so hook runners
//! show it alongside the failing exit code.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Writes prefixed status lines with optional color.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    choice: ColorChoice,
}

impl Printer {
    /// Creates a printer.
    ///
    /// # Arguments
    /// * `use_color` - Whether to emit color escape sequences
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { choice }
    }

    /// Prints a success message to stderr.
    pub fn success(&self, message: &str) {
        let mut stderr = StandardStream::stderr(self.choice);
        write_status(&mut stderr, "✓", Color::Green, message);
    }

    /// Prints a warning message to stderr.
    pub fn warning(&self, message: &str) {
        let mut stderr = StandardStream::stderr(self.choice);
        write_status(&mut stderr, "⚠", Color::Yellow, message);
    }

    /// Prints a refusal message to stdout.
    pub fn refusal(&self, message: &str) {
        let mut stdout = StandardStream::stdout(self.choice);
        write_status(&mut stdout, "✗", Color::Red, message);
    }
}

fn write_status(stream: &mut StandardStream, prefix: &str, prefix_color: Color, message: &str) {
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stream, "{} ", prefix);
    let _ = stream.reset();
    let _ = writeln!(stream, "{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_without_color_uses_never() {
        let printer = Printer::new(false);
        assert_eq!(printer.choice, ColorChoice::Never);
    }

    #[test]
    fn test_printer_with_color_uses_auto() {
        let printer = Printer::new(true);
        assert_eq!(printer.choice, ColorChoice::Auto);
    }
}
