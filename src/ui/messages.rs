use std::fmt;
use std::io::IsTerminal;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn decorate(colour: &str, icon: &str, tty: bool) -> String {
    if tty {
        format!("{colour}{BOLD}{icon} {RESET}")
    } else {
        format!("{icon} ")
    }
}

pub fn success<T: fmt::Display>(msg: T) {
    let tty = std::io::stdout().is_terminal();
    println!("{}{}", decorate(FG_GREEN, ICON_OK, tty), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    let tty = std::io::stderr().is_terminal();
    eprintln!("{}{}", decorate(FG_YELLOW, ICON_WARN, tty), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    let tty = std::io::stderr().is_terminal();
    eprintln!("{}{}", decorate(FG_RED, ICON_ERR, tty), msg);
}
