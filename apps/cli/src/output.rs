//! Output formatting for the CLI.
//!
//! Color and symbols live only here; everything the core hands back is
//! plain text.

use console::style;

/// Print an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue(), msg);
}

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print a warning message.
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), style(msg).red());
}

/// Print a header/title.
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}
