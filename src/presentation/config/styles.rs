use std::{collections::HashMap, str::FromStr};

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `"heading"` or `"nav.active"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(key, style)| (key, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

impl Styles {
    /// Style registered under `key`, or the terminal default
    pub fn style(&self, key: &str) -> Style {
        self.get(key).copied().unwrap_or_default()
    }
}

/// Parses `"[modifiers] [fg] [on bg]"`, e.g. `"bold #5C3317 on #F5EBD7"`.
///
/// Colors accept anything `ratatui::style::Color` parses: names, `#RRGGBB`
/// and 256-color indices. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let lower = line.to_lowercase();
    let (foreground, background) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg.to_string(), Some(bg.trim().to_string())),
        None => match lower.strip_prefix("on ") {
            Some(bg) => (String::new(), Some(bg.trim().to_string())),
            None => (lower.clone(), None),
        },
    };

    let mut style = Style::default();
    for word in foreground.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = Color::from_str(word) {
            style = style.fg(color);
        }
    }

    if let Some(color) = background.and_then(|bg| Color::from_str(&bg).ok()) {
        style = style.bg(color);
    }

    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" | "inverse" => Some(Modifier::REVERSED),
        "crossed" | "strikethrough" => Some(Modifier::CROSSED_OUT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        let style = parse_style("");
        assert_eq!(style, Style::default());
    }

    #[test]
    fn test_parse_style_foreground() {
        let style = parse_style("red");
        assert_eq!(style.fg, Some(Color::Red));
    }

    #[test]
    fn test_parse_style_background() {
        let style = parse_style("on blue");
        assert_eq!(style.bg, Some(Color::Blue));
    }

    #[test]
    fn test_parse_style_hex_with_modifiers() {
        let style = parse_style("bold italic #5C3317 on #F5EBD7");
        assert_eq!(style.fg, Some(Color::Rgb(0x5C, 0x33, 0x17)));
        assert_eq!(style.bg, Some(Color::Rgb(0xF5, 0xEB, 0xD7)));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_parse_style_ignores_unknown_words() {
        let style = parse_style("sparkly red");
        assert_eq!(style.fg, Some(Color::Red));
        assert!(style.add_modifier.is_empty());
    }

    #[test]
    fn test_styles_lookup() -> color_eyre::Result<()> {
        let styles: Styles = json5::from_str(r#"{ "heading": "bold red" }"#)?;
        assert_eq!(styles.style("heading").fg, Some(Color::Red));
        assert_eq!(styles.style("missing"), Style::default());
        Ok(())
    }
}
