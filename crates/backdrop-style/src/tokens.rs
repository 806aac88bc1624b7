//! Placeholder substitution over a closed token set.
//!
//! Templates reference values as `{name}`. Only the names in [`Token`] are
//! recognized; anything else between braces is copied through untouched,
//! as is a known token that has no binding.

/// Every placeholder a template may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Fg,
    Bg,
    Spacing,
    DoubleSpacing,
    Color1,
    Color2,
    Color3,
    Color4,
}

impl Token {
    pub const ALL: [Token; 8] = [
        Self::Fg,
        Self::Bg,
        Self::Spacing,
        Self::DoubleSpacing,
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Color4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Fg => "fg",
            Self::Bg => "bg",
            Self::Spacing => "spacing",
            Self::DoubleSpacing => "doubleSpacing",
            Self::Color1 => "color1",
            Self::Color2 => "color2",
            Self::Color3 => "color3",
            Self::Color4 => "color4",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// The gradient stop token for a zero-based index, if any.
    pub fn color(index: usize) -> Option<Self> {
        [Self::Color1, Self::Color2, Self::Color3, Self::Color4]
            .get(index)
            .copied()
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Values bound to tokens for one substitution pass.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: [Option<String>; Token::ALL.len()],
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(mut self, token: Token, value: impl Into<String>) -> Self {
        self.values[token.slot()] = Some(value.into());
        self
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values[token.slot()].as_deref()
    }
}

/// Replace every bound `{token}` in `template`.
pub fn substitute(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match Token::from_name(name).and_then(|t| bindings.get(t)) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
