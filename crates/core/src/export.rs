//! Rendering a [`ColorScale`] as design tokens.
//!
//! Tokens are named `<family>-<step>` (e.g. `medium-red-violet-500`), the
//! same shape Tailwind uses for its color utilities.

use crate::error::ScaleError;
use crate::scale::ColorScale;
use std::collections::BTreeMap;
use std::fmt::Write;

/// All recognized export format names.
const FORMAT_NAMES: &[&str] = &["json", "css", "tailwind", "text"];

/// Output format for an exported scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// The bare label -> hex object.
    Json,
    /// A `:root` block of CSS custom properties.
    Css,
    /// `{ "<family>": { label: hex } }`, ready for `theme.extend.colors`.
    Tailwind,
    /// One `<family>-<label> <hex>` line per shade.
    Text,
}

impl ExportFormat {
    /// Returns `ScaleError::UnknownFormat` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, ScaleError> {
        match name {
            "json" => Ok(ExportFormat::Json),
            "css" => Ok(ExportFormat::Css),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "text" => Ok(ExportFormat::Text),
            _ => Err(ScaleError::UnknownFormat(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        FORMAT_NAMES
    }
}

/// Turns a display name into a token family: ASCII alphanumerics lowercased,
/// every other run of characters collapsed to one `-`. Falls back to
/// `"color"` when nothing is left.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "color".to_string()
    } else {
        slug
    }
}

/// Renders `scale` under the token family derived from `name`.
pub fn export(name: &str, scale: &ColorScale, format: ExportFormat) -> Result<String, ScaleError> {
    let family = slugify(name);
    let out = match format {
        ExportFormat::Json => serde_json::to_string_pretty(scale)?,
        ExportFormat::Tailwind => {
            let wrapped: BTreeMap<&str, &ColorScale> = BTreeMap::from([(family.as_str(), scale)]);
            serde_json::to_string_pretty(&wrapped)?
        }
        ExportFormat::Css => {
            let mut css = String::from(":root {\n");
            for (label, hex) in scale.iter() {
                // writing to a String cannot fail
                let _ = writeln!(css, "  --{family}-{label}: {hex};");
            }
            css.push('}');
            css
        }
        ExportFormat::Text => scale
            .iter()
            .map(|(label, hex)| format!("{family}-{label} {hex}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}
