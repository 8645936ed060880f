//! Theme CSS generation.
//!
//! Every catalog theme becomes a `[data-theme="<name>"]` block of CSS
//! variables. The selected theme also fills `:root` so the project is
//! themed without setting the attribute.

use std::fmt::Write;

use crate::config::TailwindVersion;
use crate::registry::ThemeDefinition;

/// Generate the global CSS file for `selected` and the given Tailwind version.
///
/// An unknown `selected` name falls back to the first theme for `:root`.
pub fn theme_css(themes: &[ThemeDefinition], selected: &str, version: TailwindVersion) -> String {
    let mut css = String::new();

    match version {
        TailwindVersion::V3 => {
            css.push_str("@tailwind base;\n@tailwind components;\n@tailwind utilities;\n\n");
        }
        TailwindVersion::V4 => {
            css.push_str("@import \"tailwindcss\";\n\n");
            write_theme_inline(&mut css, themes);
        }
    }

    let root = themes
        .iter()
        .find(|t| t.name == selected)
        .or_else(|| themes.first());

    if let Some(root) = root {
        let _ = writeln!(css, "/* Default theme: {} */", root.name);
        write_block(&mut css, ":root", root);
    }

    for theme in themes {
        write_block(&mut css, &format!("[data-theme=\"{}\"]", theme.name), theme);
    }

    css
}

/// Map palette variables to Tailwind v4 color tokens.
fn write_theme_inline(css: &mut String, themes: &[ThemeDefinition]) {
    let Some(first) = themes.first() else {
        return;
    };

    css.push_str("@theme inline {\n");
    for key in first.palette.keys() {
        let _ = writeln!(css, "  --color-{key}: var(--{key});");
    }
    css.push_str("}\n\n");
}

fn write_block(css: &mut String, selector: &str, theme: &ThemeDefinition) {
    let _ = writeln!(css, "{} {{", selector);
    for (key, value) in &theme.palette {
        let _ = writeln!(css, "  --{}: {};", key, value);
    }
    css.push_str("}\n\n");
}
