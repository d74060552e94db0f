//! Style inference from tag names and inline CSS.

use crate::model::TextStyle;

/// Style implied by an element's tag name alone.
pub fn tag_style(tag: &str) -> TextStyle {
    match tag {
        "b" | "strong" => TextStyle::BOLD,
        "i" | "em" => TextStyle::ITALIC,
        "s" | "del" => TextStyle::STRIKETHROUGH,
        _ => TextStyle::PLAIN,
    }
}

/// Parse a `style` attribute into lowercase `(property, value)` pairs.
///
/// Entries without a colon or with an empty property are skipped, as is a
/// trailing `!important`.
pub fn parse_inline_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (key, value) = declaration.split_once(':')?;
            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().to_ascii_lowercase();
            let value = value
                .strip_suffix("!important")
                .map(str::trim_end)
                .unwrap_or(&value)
                .to_string();
            Some((key, value))
        })
        .collect()
}

/// Apply CSS declarations on top of `style`.
///
/// Declarations can switch a style on (`font-weight: bold`) and off again
/// (`font-weight: normal`), overriding what the tag name implied.
pub fn apply_declarations(mut style: TextStyle, declarations: &[(String, String)]) -> TextStyle {
    for (key, value) in declarations {
        match key.as_str() {
            "font-weight" => {
                if let Some(bold) = weight_is_bold(value) {
                    style.set(TextStyle::BOLD, bold);
                }
            }
            "font-style" => match value.split_whitespace().next() {
                Some("italic" | "oblique") => style.insert(TextStyle::ITALIC),
                Some("normal") => style.remove(TextStyle::ITALIC),
                _ => {}
            },
            "text-decoration" | "text-decoration-line" => {
                if value.contains("line-through") {
                    style.insert(TextStyle::STRIKETHROUGH);
                } else if value.split_whitespace().any(|word| word == "none") {
                    style.remove(TextStyle::STRIKETHROUGH);
                }
            }
            _ => {}
        }
    }
    style
}

/// Numeric weights above 400 are bold.
///
/// 400 is the CSS `normal` weight. Clipboard markup from word processors
/// writes `font-weight:400` on every run it means as plain text, often inside
/// a `<b>` wrapper, so 400 itself has to clear bold rather than set it.
fn weight_is_bold(value: &str) -> Option<bool> {
    match value {
        "bold" | "bolder" => Some(true),
        "normal" | "lighter" => Some(false),
        numeric => numeric.parse::<f32>().ok().map(|weight| weight > 400.0),
    }
}

/// Tag style plus the element's own `style` attribute, layered on `inherited`.
pub fn element_style(tag: &str, style_attr: Option<&str>, inherited: TextStyle) -> TextStyle {
    let style = inherited | tag_style(tag);
    match style_attr {
        Some(css) => apply_declarations(style, &parse_inline_style(css)),
        None => style,
    }
}
