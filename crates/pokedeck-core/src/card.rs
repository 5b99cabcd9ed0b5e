//! Pure record-to-card transform and the static badge color table.

use crate::models::EntityRecord;

/// Badge background colors, named after the Tailwind classes they stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Red500,
    Blue500,
    Green500,
    Purple500,
    Gray500,
    Purple700,
    Gray700,
    Indigo400,
    Yellow700,
    Yellow500,
    /// Fallback for categories missing from the table.
    Gray300,
}

const CATEGORY_COLORS: &[(&str, BadgeColor)] = &[
    ("fire", BadgeColor::Red500),
    ("water", BadgeColor::Blue500),
    ("grass", BadgeColor::Green500),
    ("poison", BadgeColor::Purple500),
    ("bug", BadgeColor::Green500),
    ("normal", BadgeColor::Gray500),
    ("dragon", BadgeColor::Purple700),
    ("steel", BadgeColor::Gray700),
    ("flying", BadgeColor::Indigo400),
    ("rock", BadgeColor::Yellow700),
    ("ground", BadgeColor::Yellow500),
];

impl Default for BadgeColor {
    fn default() -> Self {
        Self::Gray300
    }
}

impl BadgeColor {
    /// Look up a category tag; unknown tags get the neutral default.
    pub fn for_category(category: &str) -> Self {
        CATEGORY_COLORS
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, color)| *color)
            .unwrap_or_default()
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Red500 => "bg-red-500",
            Self::Blue500 => "bg-blue-500",
            Self::Green500 => "bg-green-500",
            Self::Purple500 => "bg-purple-500",
            Self::Gray500 => "bg-gray-500",
            Self::Purple700 => "bg-purple-700",
            Self::Gray700 => "bg-gray-700",
            Self::Indigo400 => "bg-indigo-400",
            Self::Yellow700 => "bg-yellow-700",
            Self::Yellow500 => "bg-yellow-500",
            Self::Gray300 => "bg-gray-300",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Red500 => (239, 68, 68),     // #ef4444
            Self::Blue500 => (59, 130, 246),   // #3b82f6
            Self::Green500 => (34, 197, 94),   // #22c55e
            Self::Purple500 => (168, 85, 247), // #a855f7
            Self::Gray500 => (107, 114, 128),  // #6b7280
            Self::Purple700 => (126, 34, 206), // #7e22ce
            Self::Gray700 => (55, 65, 81),     // #374151
            Self::Indigo400 => (129, 140, 248), // #818cf8
            Self::Yellow700 => (161, 98, 7),   // #a16207
            Self::Yellow500 => (234, 179, 8),  // #eab308
            Self::Gray300 => (209, 213, 219),  // #d1d5db
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub color: BadgeColor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub title: String,
    pub image_url: String,
    pub badges: Vec<Badge>,
}

impl Card {
    pub fn from_record(record: &EntityRecord) -> Self {
        Self {
            id: record.id,
            title: capitalize(&record.display_name),
            image_url: record.image_url.clone(),
            badges: record
                .categories
                .iter()
                .map(|category| Badge {
                    label: category.clone(),
                    color: BadgeColor::for_category(category),
                })
                .collect(),
        }
    }
}

pub fn render_cards(records: &[EntityRecord]) -> Vec<Card> {
    records.iter().map(Card::from_record).collect()
}

/// Upper-case the first letter of every whitespace-separated word.
pub fn capitalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for ch in name.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }

    out
}
