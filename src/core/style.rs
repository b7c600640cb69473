use std::str::FromStr;

use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::core::catalog::ResourceKind;
use crate::error::CatalogError;

/// Icon category drawn next to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    FileText,
    BookOpen,
}

impl Icon {
    pub const FALLBACK: Icon = Icon::FileText;

    pub fn for_kind(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Pdf | ResourceKind::Exam => Icon::FileText,
            ResourceKind::Notes => Icon::BookOpen,
        }
    }

    /// Looks up the icon for a raw type string, falling back to [`Icon::FALLBACK`].
    pub fn for_type(tag: &str) -> Self {
        tag.parse::<ResourceKind>()
            .map(Self::for_kind)
            .unwrap_or(Self::FALLBACK)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::FileText => "\u{1F4C4}",
            Icon::BookOpen => "\u{1F4D6}",
        }
    }
}

impl From<ResourceKind> for Icon {
    fn from(kind: ResourceKind) -> Self {
        Icon::for_kind(kind)
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CourseColor {
    #[default]
    Emerald,
    Red,
    Amber,
}

impl CourseColor {
    /// Lenient variant of `from_str`: unknown tags map to the default, emerald.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for CourseColor {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseColor::iter()
            .find(|color| color.as_ref() == s)
            .ok_or_else(|| CatalogError::UnknownColor(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// Badge style for a course code: light background, dark text, mid border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorClasses {
    pub background: Rgb,
    pub text: Rgb,
    pub border: Rgb,
}

impl ColorClasses {
    pub const fn for_color(color: CourseColor) -> Self {
        match color {
            CourseColor::Emerald => ColorClasses {
                background: Rgb::from_hex(0xECFDF5),
                text: Rgb::from_hex(0x047857),
                border: Rgb::from_hex(0xA7F3D0),
            },
            CourseColor::Red => ColorClasses {
                background: Rgb::from_hex(0xFEF2F2),
                text: Rgb::from_hex(0xB91C1C),
                border: Rgb::from_hex(0xFECACA),
            },
            CourseColor::Amber => ColorClasses {
                background: Rgb::from_hex(0xFFFBEB),
                text: Rgb::from_hex(0xB45309),
                border: Rgb::from_hex(0xFDE68A),
            },
        }
    }

    pub fn for_tag(tag: &str) -> Self {
        Self::for_color(CourseColor::from_tag(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tag_uses_emerald() {
        assert_eq!(ColorClasses::for_tag("violet"), ColorClasses::for_tag("emerald"));
        assert_eq!(ColorClasses::for_tag(""), ColorClasses::for_color(CourseColor::Emerald));
    }

    #[test]
    fn known_tags_differ() {
        assert_ne!(ColorClasses::for_tag("red"), ColorClasses::for_tag("amber"));
        assert_ne!(ColorClasses::for_tag("red"), ColorClasses::for_tag("emerald"));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(
            "Red".parse::<CourseColor>(),
            Err(CatalogError::UnknownColor("Red".into()))
        );
        assert_eq!(CourseColor::from_tag("Red"), CourseColor::Emerald);
    }

    #[test]
    fn icon_fallback() {
        assert_eq!(Icon::for_type("Spreadsheet"), Icon::for_type("PDF"));
        assert_eq!(Icon::for_type("Notes"), Icon::BookOpen);
        assert_eq!(Icon::for_type("Exam"), Icon::FileText);
    }

    #[test]
    fn rgb_hex() {
        let c = Rgb::from_hex(0x047857);
        assert_eq!((c.r, c.g, c.b), (0x04, 0x78, 0x57));
    }
}
