//! Clue categories and the order in which they are revealed
//!
//! A game starts with the first clue shown. Every wrong guess reveals the next
//! category from [`CLUE_ORDER`] until all of them are visible.

use std::fmt;

/// One attribute of the hidden country that can be revealed as a clue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClueCategory {
    Area,
    Population,
    Landlocked,
    Region,
    Languages,
    Capital,
    Borders,
    FlagImage,
}

/// Fixed reveal order of all clue categories
pub const CLUE_ORDER: [ClueCategory; 8] = [
    ClueCategory::Area,
    ClueCategory::Population,
    ClueCategory::Landlocked,
    ClueCategory::Region,
    ClueCategory::Languages,
    ClueCategory::Capital,
    ClueCategory::Borders,
    ClueCategory::FlagImage,
];

impl ClueCategory {
    /// Human-readable title for a clue box
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Area => "Area",
            Self::Population => "Population",
            Self::Landlocked => "Landlocked",
            Self::Region => "Region",
            Self::Languages => "Languages",
            Self::Capital => "Capital",
            Self::Borders => "Borders",
            Self::FlagImage => "Flag",
        }
    }
}

impl fmt::Display for ClueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Return `revealed` with the next category from [`CLUE_ORDER`] appended
///
/// Once every category is revealed the input is returned unchanged.
///
/// # Examples
/// ```
/// use countrdle::core::{ClueCategory, reveal_next};
///
/// let revealed = reveal_next(&[ClueCategory::Area]);
/// assert_eq!(revealed, vec![ClueCategory::Area, ClueCategory::Population]);
/// ```
#[must_use]
pub fn reveal_next(revealed: &[ClueCategory]) -> Vec<ClueCategory> {
    let mut next = revealed.to_vec();
    if let Some(&category) = CLUE_ORDER.get(revealed.len()) {
        next.push(category);
    }
    next
}

/// Whether `category` has been revealed
#[inline]
#[must_use]
pub fn is_revealed(revealed: &[ClueCategory], category: ClueCategory) -> bool {
    revealed.contains(&category)
}

/// The value of a clue as the presentation layer may see it
///
/// `Hidden` is returned for every category that has not been revealed yet.
#[derive(Debug, Clone, PartialEq)]
pub enum ClueValue<'a> {
    Hidden,
    Area(f64),
    Population(u64),
    Landlocked(bool),
    Region(&'a str),
    Languages(Vec<&'a str>),
    Capital(&'a [String]),
    Borders(&'a [String]),
    FlagImage(&'a str),
}

impl ClueValue<'_> {
    /// Whether the real value is withheld
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl fmt::Display for ClueValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("?"),
            Self::Area(area) => write!(f, "{} km²", group_thousands(area.round() as u64)),
            Self::Population(population) => f.write_str(&group_thousands(*population)),
            Self::Landlocked(true) => f.write_str("yes"),
            Self::Landlocked(false) => f.write_str("no"),
            Self::Region(region) => f.write_str(region),
            Self::Languages(names) => write_list(f, names.iter().copied()),
            Self::Capital(names) | Self::Borders(names) => {
                write_list(f, names.iter().map(String::as_str))
            }
            Self::FlagImage(url) => f.write_str(url),
        }
    }
}

fn write_list<'s>(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = &'s str>) -> fmt::Result {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        f.write_str("none")
    } else {
        f.write_str(&joined)
    }
}

/// Format an integer with `,` thousands separators
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
