use crate::foundation::color::Color;
use crate::foundation::error::{QuizreelError, QuizreelResult};

/// Day of the week, numbered the calendar way: Sunday = 0 .. Saturday = 6.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Day 0.
    Sunday,
    /// Day 1.
    Monday,
    /// Day 2.
    Tuesday,
    /// Day 3.
    Wednesday,
    /// Day 4.
    Thursday,
    /// Day 5.
    Friday,
    /// Day 6.
    Saturday,
}

impl Weekday {
    /// All days in index order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Day for an index, normalized modulo 7 (so `-1` is Saturday and `7` is Sunday).
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Index in `0..=6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase English name, used as the theme table key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Convert a calendar weekday.
    pub fn from_civil(day: jiff::civil::Weekday) -> Self {
        Self::from_index(i64::from(day.to_sunday_zero_offset()))
    }

    /// Today's weekday in the system time zone.
    pub fn today() -> Self {
        Self::from_civil(jiff::Zoned::now().weekday())
    }
}

/// Immutable color palette applied to a whole render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Display name of the palette.
    pub name: &'static str,
    /// Headline and highlight color.
    pub primary_color: Color,
    /// Secondary fill color (option cards).
    pub accent_color: Color,
    /// Scene background color.
    pub background_color: Color,
    /// Body text color.
    pub text_color: Color,
}

/// Palette table indexed by [`Weekday::index`].
pub static THEMES: [Theme; 7] = [
    // sunday
    Theme {
        name: "Simple",
        primary_color: Color::rgb(0x33, 0x33, 0x33),
        accent_color: Color::rgb(0xCC, 0xCC, 0xCC),
        background_color: Color::rgb(0xFF, 0xFF, 0xFF),
        text_color: Color::rgb(0x00, 0x00, 0x00),
    },
    // monday
    Theme {
        name: "Pop",
        primary_color: Color::rgb(0xFF, 0x6B, 0x9D),
        accent_color: Color::rgb(0xFF, 0xD9, 0x3D),
        background_color: Color::rgb(0xFF, 0xF5, 0xE4),
        text_color: Color::rgb(0x2C, 0x3E, 0x50),
    },
    // tuesday
    Theme {
        name: "Retro",
        primary_color: Color::rgb(0xFF, 0x6B, 0x35),
        accent_color: Color::rgb(0xF7, 0xB2, 0x67),
        background_color: Color::rgb(0x6A, 0x4C, 0x93),
        text_color: Color::rgb(0xFF, 0xFF, 0xFF),
    },
    // wednesday
    Theme {
        name: "Cool",
        primary_color: Color::rgb(0x4A, 0x90, 0xE2),
        accent_color: Color::rgb(0x90, 0x13, 0xFE),
        background_color: Color::rgb(0x1E, 0x3A, 0x8A),
        text_color: Color::rgb(0xFF, 0xFF, 0xFF),
    },
    // thursday
    Theme {
        name: "Natural",
        primary_color: Color::rgb(0x2E, 0xCC, 0x71),
        accent_color: Color::rgb(0xF3, 0x9C, 0x12),
        background_color: Color::rgb(0xEC, 0xF0, 0xF1),
        text_color: Color::rgb(0x2C, 0x3E, 0x50),
    },
    // friday
    Theme {
        name: "Elegant",
        primary_color: Color::rgb(0x00, 0x00, 0x00),
        accent_color: Color::rgb(0xFF, 0xD7, 0x00),
        background_color: Color::rgb(0x1A, 0x1A, 0x1A),
        text_color: Color::rgb(0xFF, 0xFF, 0xFF),
    },
    // saturday
    Theme {
        name: "Colorful",
        primary_color: Color::rgb(0xE7, 0x4C, 0x3C),
        accent_color: Color::rgb(0x34, 0x98, 0xDB),
        background_color: Color::rgb(0xFF, 0xFF, 0xFF),
        text_color: Color::rgb(0x2C, 0x3E, 0x50),
    },
];

/// Palette for `day`.
pub fn resolve(day: Weekday) -> &'static Theme {
    &THEMES[day.index()]
}

impl Theme {
    /// Palette for a day index, normalized modulo 7.
    pub fn for_day_index(index: i64) -> &'static Theme {
        resolve(Weekday::from_index(index))
    }

    /// Look up a palette by weekday key (`"friday"`) or palette name (`"Elegant"`),
    /// ignoring ASCII case.
    pub fn by_key(key: &str) -> Option<&'static Theme> {
        let key = key.trim();
        Weekday::ALL
            .iter()
            .find(|d| d.key().eq_ignore_ascii_case(key))
            .map(|d| resolve(*d))
            .or_else(|| THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(key)))
    }
}

/// How the single theme of a render is chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ThemeChoice {
    /// Today's weekday in the local time zone.
    #[default]
    Today,
    /// A fixed weekday.
    Day(Weekday),
    /// A weekday key or palette name, see [`Theme::by_key`].
    Named(String),
}

impl ThemeChoice {
    /// Resolve to a palette. Unknown names are a validation error.
    pub fn resolve(&self) -> QuizreelResult<&'static Theme> {
        let theme = match self {
            Self::Today => resolve(Weekday::today()),
            Self::Day(day) => resolve(*day),
            Self::Named(key) => Theme::by_key(key)
                .ok_or_else(|| QuizreelError::validation(format!("unknown theme \"{key}\"")))?,
        };
        tracing::debug!(choice = ?self, theme = theme.name, "resolved theme");
        Ok(theme)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/daily.rs"]
mod tests;
