//! Terminal colour themes.
//!
//! A theme maps each styled part of the output (`ThemeEntry`) to a foreground colour
//! from the 16-colour ANSI palette. Themes are YAML files such as
//!
//! ```yaml
//! error:
//!   fg: brightred
//! summary_field_name:
//!   fg: cyan
//! ```
//!
//! Entries missing from a file keep their default colour. Unknown colour names are
//! rejected when the file is loaded.

use anyhow::{Context, Result};
use comfy_table::Color as TableColor;
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The styled parts of RecordShield's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles such as "Redaction Summary".
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// The PII verdict of `inspect`.
    RedactedText,
    /// Field names in the redaction summary table.
    SummaryFieldName,
    /// Redaction counts in the redaction summary table.
    SummaryOccurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 8] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::RedactedText,
        ThemeEntry::SummaryFieldName,
        ThemeEntry::SummaryOccurrences,
    ];
}

/// Palette entries: theme name, `owo-colors` colour for messages, `comfy-table` colour
/// for table cells. comfy-table names the bright variants without a prefix.
const PALETTE: [(&str, AnsiColors, TableColor); 16] = [
    ("black", AnsiColors::Black, TableColor::Black),
    ("red", AnsiColors::Red, TableColor::DarkRed),
    ("green", AnsiColors::Green, TableColor::DarkGreen),
    ("yellow", AnsiColors::Yellow, TableColor::DarkYellow),
    ("blue", AnsiColors::Blue, TableColor::DarkBlue),
    ("magenta", AnsiColors::Magenta, TableColor::DarkMagenta),
    ("cyan", AnsiColors::Cyan, TableColor::DarkCyan),
    ("white", AnsiColors::White, TableColor::Grey),
    ("brightblack", AnsiColors::BrightBlack, TableColor::DarkGrey),
    ("brightred", AnsiColors::BrightRed, TableColor::Red),
    ("brightgreen", AnsiColors::BrightGreen, TableColor::Green),
    ("brightyellow", AnsiColors::BrightYellow, TableColor::Yellow),
    ("brightblue", AnsiColors::BrightBlue, TableColor::Blue),
    ("brightmagenta", AnsiColors::BrightMagenta, TableColor::Magenta),
    ("brightcyan", AnsiColors::BrightCyan, TableColor::Cyan),
    ("brightwhite", AnsiColors::BrightWhite, TableColor::White),
];

/// A colour from the 16-colour palette. Only palette names deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor {
    index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = PALETTE.iter().map(|(name, _, _)| *name).collect();
        write!(f, "Invalid theme color '{}'; expected one of: {}.", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        PALETTE
            .iter()
            .position(|(name, _, _)| *name == lower)
            .map(|index| ThemeColor { index })
            .ok_or_else(|| ParseThemeColorError(s.to_string()))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.name().to_string()
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        name.parse().unwrap_or(ThemeColor { index: 7 })
    }

    pub fn name(&self) -> &'static str {
        PALETTE[self.index].0
    }

    pub fn to_ansi_color(&self) -> AnsiColors {
        PALETTE[self.index].1
    }

    pub fn to_table_color(&self) -> TableColor {
        PALETTE[self.index].2
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// Loads the theme at `theme_path`, or the default theme when no path is given.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

impl ThemeStyle {
    /// Reads a YAML theme and fills entries it leaves out from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    pub fn default_theme_map() -> ThemeMap {
        ThemeEntry::ALL
            .into_iter()
            .map(|entry| {
                let color = match entry {
                    ThemeEntry::Header => "brightcyan",
                    ThemeEntry::Success => "green",
                    ThemeEntry::Warn => "yellow",
                    ThemeEntry::Error => "red",
                    ThemeEntry::RedactedText => "magenta",
                    ThemeEntry::SummaryFieldName => "cyan",
                    ThemeEntry::SummaryOccurrences => "brightwhite",
                    ThemeEntry::Info => "white",
                };
                (entry, ThemeStyle { fg: Some(ThemeColor::named(color)) })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn theme_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn palette_names_parse_case_insensitively() {
        let color: ThemeColor = "BrightMagenta".parse().unwrap();
        assert_eq!(color.name(), "brightmagenta");
        assert_eq!(color.to_ansi_color(), AnsiColors::BrightMagenta);
        assert_eq!(color.to_table_color(), TableColor::Magenta);
        assert!("purple".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn custom_theme_is_completed_with_defaults() {
        let file = theme_file("error:\n  fg: brightred\nsummary_field_name:\n  fg: Blue\n");
        let map = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(map[&ThemeEntry::Error].fg, Some(ThemeColor::named("brightred")));
        assert_eq!(map[&ThemeEntry::SummaryFieldName].fg, Some(ThemeColor::named("blue")));
        assert_eq!(map[&ThemeEntry::Warn].fg, Some(ThemeColor::named("yellow")));
        assert_eq!(map.len(), ThemeEntry::ALL.len());
    }

    #[test]
    fn unknown_color_is_rejected_on_load() {
        let file = theme_file("warn:\n  fg: purple\n");
        let err = ThemeStyle::load_from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid theme color 'purple'"));
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let map = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(map[&entry].fg.is_some(), "{:?} has no colour", entry);
        }
    }
}
