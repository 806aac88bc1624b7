//! Built-in catalogs used until (or instead of) a successful load.

use crate::template::{CatalogKind, GradientKind, Template};

/// Templates for `kind`. Never empty.
pub fn templates(kind: CatalogKind) -> Vec<Template> {
    match kind {
        CatalogKind::Patterns => patterns(),
        CatalogKind::Gradients => gradients(),
    }
}

fn patterns() -> Vec<Template> {
    use GradientKind::{Linear, Radial};

    vec![
        Template::new(
            "dots",
            "Polka Dots",
            Radial,
            "Circular dot pattern",
            "radial-gradient(circle at center, {fg} 2px, transparent 2px)",
        ),
        Template::new(
            "stripes",
            "Diagonal Stripes",
            Linear,
            "Classic diagonal stripe pattern",
            "repeating-linear-gradient(45deg, {fg} 0px, {fg} {spacing}px, transparent {spacing}px, transparent {doubleSpacing}px)",
        ),
        Template::new(
            "waves",
            "Wave Pattern",
            Linear,
            "Flowing wave design",
            "repeating-linear-gradient(0deg, {fg} 0px, {fg} {spacing}px, transparent {spacing}px, transparent {doubleSpacing}px)",
        ),
        Template::new(
            "grid",
            "Grid Lines",
            Linear,
            "Clean grid pattern",
            "linear-gradient({fg} 1px, transparent 1px), linear-gradient(90deg, {fg} 1px, transparent 1px)",
        ),
        Template::new(
            "chevron",
            "Chevron",
            Linear,
            "Zigzag chevron pattern",
            "repeating-linear-gradient(45deg, {fg} 0px, {fg} {spacing}px, transparent {spacing}px, transparent {doubleSpacing}px)",
        ),
        Template::new(
            "hexagon",
            "Hexagon",
            Radial,
            "Hexagonal pattern",
            "radial-gradient(circle at 50% 50%, {fg} 30%, transparent 30%)",
        ),
        Template::new(
            "triangles",
            "Triangles",
            Linear,
            "Geometric triangle pattern",
            "repeating-linear-gradient(60deg, {fg} 0px, {fg} {spacing}px, transparent {spacing}px, transparent {doubleSpacing}px)",
        ),
        Template::new(
            "circles",
            "Circles",
            Radial,
            "Overlapping circle pattern",
            "radial-gradient(circle at 25% 25%, {fg} {spacing}px, transparent {spacing}px)",
        ),
    ]
}

fn gradients() -> Vec<Template> {
    use GradientKind::{Conic, Linear, Radial};

    vec![
        Template::new(
            "linear-horizontal",
            "Linear Horizontal",
            Linear,
            "Left to right gradient",
            "linear-gradient(90deg, {color1}, {color2}, {color3}, {color4})",
        ),
        Template::new(
            "linear-vertical",
            "Linear Vertical",
            Linear,
            "Top to bottom gradient",
            "linear-gradient(180deg, {color1}, {color2}, {color3}, {color4})",
        ),
        Template::new(
            "linear-diagonal",
            "Linear Diagonal",
            Linear,
            "Diagonal gradient",
            "linear-gradient(45deg, {color1}, {color2}, {color3}, {color4})",
        ),
        Template::new(
            "radial-center",
            "Radial Center",
            Radial,
            "Radial from center",
            "radial-gradient(circle at center, {color1}, {color2}, {color3}, {color4})",
        ),
        Template::new(
            "conic-center",
            "Conic Center",
            Conic,
            "Conic gradient from center",
            "conic-gradient(from 0deg at center, {color1}, {color2}, {color3}, {color4}, {color1})",
        ),
    ]
}
