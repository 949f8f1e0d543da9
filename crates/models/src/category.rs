use serde::{Deserialize, Serialize};

/// A fixed service category. `icon` is a symbolic name resolved through [`Glyph::resolve`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Category {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self { id: id.into(), name: name.into(), icon: icon.into() }
    }

    pub fn glyph(&self) -> Glyph {
        Glyph::resolve(&self.icon)
    }
}

/// Displayable glyph for a category icon name.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    Wrench,
    Zap,
    Laptop,
    Palette,
    Sparkles,
    BookOpen,
    Scale,
    Stethoscope,
    Shirt,
    #[default]
    Briefcase,
}

impl Glyph {
    pub const ALL: [Glyph; 10] = [
        Glyph::Wrench,
        Glyph::Zap,
        Glyph::Laptop,
        Glyph::Palette,
        Glyph::Sparkles,
        Glyph::BookOpen,
        Glyph::Scale,
        Glyph::Stethoscope,
        Glyph::Shirt,
        Glyph::Briefcase,
    ];

    /// Total: unknown names resolve to the default glyph.
    pub fn resolve(name: &str) -> Glyph {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.name() == name)
            .unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Glyph::Wrench => "wrench",
            Glyph::Zap => "zap",
            Glyph::Laptop => "laptop",
            Glyph::Palette => "palette",
            Glyph::Sparkles => "sparkles",
            Glyph::BookOpen => "book-open",
            Glyph::Scale => "scale",
            Glyph::Stethoscope => "stethoscope",
            Glyph::Shirt => "shirt",
            Glyph::Briefcase => "briefcase",
        }
    }
}

impl std::fmt::Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
