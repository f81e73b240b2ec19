// recordshield/src/ui/output_format.rs
//! Themed status messages for stderr/stdout.
//!
//! Colour is applied only when the caller says the target supports it, so redirected
//! output never carries ANSI escapes.

use std::io::{self, Write};

use owo_colors::{AnsiColors, OwoColorize};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Resolves the foreground colour for `entry`, falling back to white.
pub fn theme_color(entry: &ThemeEntry, theme_map: &ThemeMap) -> AnsiColors {
    theme_map
        .get(entry)
        .and_then(|style| style.fg.as_ref())
        .map(|color| color.to_ansi_color())
        .unwrap_or(AnsiColors::White)
}

/// Renders `text` in the colour of `entry` when `supports_color` is set.
pub fn styled(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, supports_color: bool) -> String {
    if supports_color {
        text.color(theme_color(&entry, theme_map)).to_string()
    } else {
        text.to_string()
    }
}

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", prefix, message);
    writeln!(writer, "{}", styled(&line, entry, theme_map, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Info, theme_map, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "", message, ThemeEntry::Success, theme_map, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Warning: ", message, ThemeEntry::Warn, theme_map, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, theme_map: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_message(writer, "Error: ", message, ThemeEntry::Error, theme_map, supports_color)
}
