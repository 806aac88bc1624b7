//! CSS text generation from a derived style.
//!
//! Emits one rule block for the selector followed by at most one
//! `@keyframes` block. Values come straight from
//! [`BackgroundStyle::declarations`], so the text always matches the style
//! object it was rendered from.

use crate::style::{BackgroundStyle, Keyframes};

/// Render `style` as a copyable stylesheet.
pub fn generate_css(selector: &str, style: &BackgroundStyle) -> String {
    let mut css = format!("{selector} {{\n");

    for decl in style.declarations() {
        css.push_str(&format!("  {}: {};\n", decl.property.css_name(), decl.value));
    }

    css.push('}');

    if let Some(keyframes) = style.keyframes() {
        css.push_str("\n\n");
        css.push_str(&generate_keyframes(keyframes));
    }

    css
}

/// Render a single `@keyframes` block.
pub fn generate_keyframes(keyframes: Keyframes) -> String {
    let mut css = format!("@keyframes {} {{\n", keyframes.name());
    for (offset, declaration) in keyframes.frames() {
        css.push_str(&format!("  {offset} {{ {declaration}; }}\n"));
    }
    css.push('}');
    css
}

// =============================================================================
// TESTS
// =============================================================================
