use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles, e.g. `card_focused`, parsed from strings like `"bold black on cyan"`
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Style by name, falling back to the terminal default
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, style)| (name, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replace("on ", ""));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim_start();
    let s = s.trim_end();
    if s.contains("color") {
        let c = s
            .trim_start_matches("color")
            .parse::<u8>()
            .unwrap_or_default();
        Some(Color::Indexed(c))
    } else if s.contains("gray") {
        let level = s
            .trim_start_matches("gray")
            .parse::<u8>()
            .unwrap_or_default()
            .min(23);
        Some(Color::Indexed(232 + level))
    } else if s.contains("rgb") {
        let digit = |i: usize| {
            s.as_bytes()
                .get(i)
                .and_then(|b| char::from(*b).to_digit(6))
                .unwrap_or_default() as u8
        };
        let c = 16 + digit(3) * 36 + digit(4) * 6 + digit(5);
        Some(Color::Indexed(c))
    } else {
        match s {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Style::default());
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
    fn test_parse_style_modifiers() {
        let style = parse_style("bold black on cyan");
        assert_eq!(style.fg, Some(Color::Black));
        assert_eq!(style.bg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_parse_color_indexed() {
        assert_eq!(parse_color("color42"), Some(Color::Indexed(42)));
        assert_eq!(parse_color("gray10"), Some(Color::Indexed(242)));
        assert_eq!(parse_color("rgb123"), Some(Color::Indexed(16 + 36 + 12 + 3)));
    }

    #[test]
    fn test_styles_lookup() -> color_eyre::Result<()> {
        let styles: Styles = json5::from_str(r#"{ card_dragging: "bold yellow" }"#)?;
        assert_eq!(styles.style("card_dragging").fg, Some(Color::Yellow));
        assert_eq!(styles.style("missing"), Style::default());
        Ok(())
    }
}
