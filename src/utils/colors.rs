//! Terminal colouring for status output.
//! Colour is only applied when stdout is a terminal, so piped output and
//! test captures stay plain.

use ansi_term::Colour;
use std::io::IsTerminal;

pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(colour: Colour, text: &str) -> String {
    if stdout_is_tty() {
        colour.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Green for clocked-in state lines.
pub fn clocked_in(text: &str) -> String {
    paint(Colour::Green, text)
}

/// Red for clocked-out state lines.
pub fn clocked_out(text: &str) -> String {
    paint(Colour::Red, text)
}

/// Dimmed grey for past log entries.
pub fn entry(text: &str) -> String {
    paint(Colour::Fixed(244), text)
}

/// Cyan for day totals; days without any hours are greyed out.
pub fn day_total(text: &str, hours: f64) -> String {
    if hours > 0.0 {
        paint(Colour::Cyan, text)
    } else {
        entry(text)
    }
}
