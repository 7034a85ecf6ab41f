// Rust guideline compliant 2026-10-19

//! Terminal UI utilities for the Roster CLI.
//!
//! Color detection and colored status lines on stderr.

use crate::output_mode::is_color_output;
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
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

fn color_choice() -> ColorChoice {
    if is_color_output() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints a status message with a colored prefix.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
pub fn print_status(prefix: &str, prefix_color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(color_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{prefix}: ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{message}");
}

/// Prints a success message.
pub fn print_success(message: &str) {
    print_status("✓", Color::Green, message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    print_status("✗", Color::Red, message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    print_status("⚠", Color::Yellow, message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    print_status("ℹ", Color::Cyan, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_use_color_respects_no_color() {
        // Actual result depends on the environment; NO_COLOR must win when set.
        if env::var_os("NO_COLOR").is_some() {
            assert!(!should_use_color());
        } else {
            let _ = should_use_color();
        }
    }

    #[test]
    fn test_color_choice_follows_mode() {
        crate::output_mode::set_color_output(false);
        assert_eq!(color_choice(), ColorChoice::Never);
    }
}
