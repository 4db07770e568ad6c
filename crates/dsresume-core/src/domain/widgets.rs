//! Leaf widgets.
//!
//! Terminal elements of the document tree. None of them compose further and
//! none branch on data beyond the text, number, or colour they carry. Writers
//! decide how each one looks; these types only fix what is shown.

use serde::Serialize;

use crate::domain::value_objects::Media;

// ── SkillBar ─────────────────────────────────────────────────────────────────

/// Labeled percentage bar.
///
/// The fill is linear in `value` and is never clamped: a value of 150 reports
/// a ratio of 1.5 and it is up to the writer's canvas whether that overflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBar {
    pub label: String,
    pub value: u32,
}

impl SkillBar {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Filled proportion of the bar: `value / 100`.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.value) / 100.0
    }

    /// Number of filled cells on a bar `width` cells wide, rounded to nearest.
    pub fn filled_cells(&self, width: usize) -> usize {
        (self.fill_ratio() * width as f64).round() as usize
    }

    /// The "NN%" caption shown beside the label.
    pub fn caption(&self) -> String {
        format!("{}%", self.value)
    }
}

// ── InfoPill ─────────────────────────────────────────────────────────────────

/// Small label/value capsule used for the contact quartet.
///
/// `value` is kept whole; clipping long values is a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPill {
    pub label: String,
    pub value: String,
}

impl InfoPill {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

// ── TitleBadge ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleBadge {
    pub text: String,
    pub tag: &'static str,
}

impl TitleBadge {
    pub const TAG: &'static str = "Player 1";

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: Self::TAG,
        }
    }
}

// ── Lamp ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LampColor {
    Red,
    Yellow,
    Green,
}

impl LampColor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

/// Status light in the top-left corner of the upper screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lamp {
    pub color: LampColor,
}

impl Lamp {
    pub const fn new(color: LampColor) -> Self {
        Self { color }
    }

    /// Red, yellow, green: the row shown above the title.
    pub const fn status_row() -> [Lamp; 3] {
        [
            Lamp::new(LampColor::Red),
            Lamp::new(LampColor::Yellow),
            Lamp::new(LampColor::Green),
        ]
    }
}

impl Default for Lamp {
    fn default() -> Self {
        Self::new(LampColor::Green)
    }
}

// ── Hinge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hinge {
    pub label: &'static str,
    pub slots: u8,
}

impl Default for Hinge {
    fn default() -> Self {
        Self {
            label: "CORY-STYLE DS HINGE",
            slots: 3,
        }
    }
}

// ── Stars ────────────────────────────────────────────────────────────────────

/// One soft glint on the star overlay, in a 100x100 viewbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Glint {
    pub x: u8,
    pub y: u8,
    pub radius: u8,
}

/// Decorative star overlay on the upper screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stars {
    pub glints: Vec<Glint>,
}

impl Stars {
    pub const COUNT: u8 = 14;

    /// Scatter `count` glints with fixed strides so the pattern is stable.
    pub fn scatter(count: u8) -> Self {
        let glints = (0..count)
            .map(|i| {
                let i = u32::from(i);
                Glint {
                    x: ((i * 13) % 100) as u8,
                    y: ((i * 29) % 100) as u8,
                    radius: 2,
                }
            })
            .collect();
        Self { glints }
    }
}

impl Default for Stars {
    fn default() -> Self {
        Self::scatter(Self::COUNT)
    }
}

// ── Card / SplitRow ──────────────────────────────────────────────────────────

/// Header capsule on top of each lower-screen section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub icon: &'static str,
}

impl Card {
    pub fn heading(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// Two-ended row: `left` pinned to the start, `right` to the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitRow {
    pub left: String,
    pub right: String,
}

impl SplitRow {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

// ── ConsoleButton ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    Red,
    Blue,
    White,
    Sky,
}

impl ButtonColor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::White => "white",
            Self::Sky => "sky",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsoleButton {
    pub key: char,
    pub color: ButtonColor,
}

impl ConsoleButton {
    /// A, B, X, Y in the order they sit under the lower screen.
    pub const fn face_buttons() -> [ConsoleButton; 4] {
        [
            ConsoleButton {
                key: 'A',
                color: ButtonColor::Red,
            },
            ConsoleButton {
                key: 'B',
                color: ButtonColor::Blue,
            },
            ConsoleButton {
                key: 'X',
                color: ButtonColor::White,
            },
            ConsoleButton {
                key: 'Y',
                color: ButtonColor::Sky,
            },
        ]
    }

    pub const fn visible_in(media: Media) -> bool {
        !media.is_print()
    }
}

// ── Footer ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub segments: Vec<&'static str>,
}

impl Footer {
    pub const SEPARATOR: &'static str = "•";

    pub fn line(&self) -> String {
        self.segments.join(&format!(" {} ", Self::SEPARATOR))
    }

    pub const fn visible_in(media: Media) -> bool {
        !media.is_print()
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            segments: vec!["NINTENDO-STYLE RESUMÉ UI", "PRINT ➜ SAVE AS PDF (LETTER)"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bar_fill_is_linear() {
        assert_eq!(SkillBar::new("Unity", 95).fill_ratio(), 95.0 / 100.0);
        assert_eq!(SkillBar::new("Zero", 0).fill_ratio(), 0.0);
        assert_eq!(SkillBar::new("Full", 100).fill_ratio(), 1.0);
    }

    #[test]
    fn skill_bar_does_not_clamp() {
        let bar = SkillBar::new("Overflow", 150);
        assert_eq!(bar.fill_ratio(), 1.5);
        assert_eq!(bar.filled_cells(20), 30);
        assert_eq!(bar.caption(), "150%");
    }

    #[test]
    fn filled_cells_rounds_to_nearest() {
        assert_eq!(SkillBar::new("x", 75).filled_cells(10), 8);
        assert_eq!(SkillBar::new("x", 70).filled_cells(10), 7);
    }

    #[test]
    fn stars_follow_fixed_strides() {
        let stars = Stars::default();
        assert_eq!(stars.glints.len(), 14);
        assert_eq!(stars.glints[0], Glint { x: 0, y: 0, radius: 2 });
        assert_eq!(stars.glints[1], Glint { x: 13, y: 29, radius: 2 });
        assert_eq!(stars.glints[8], Glint { x: 4, y: 32, radius: 2 });
    }

    #[test]
    fn buttons_and_footer_hide_in_print() {
        assert!(ConsoleButton::visible_in(Media::Screen));
        assert!(!ConsoleButton::visible_in(Media::Print));
        assert!(!Footer::visible_in(Media::Print));
    }

    #[test]
    fn footer_joins_segments() {
        assert_eq!(
            Footer::default().line(),
            "NINTENDO-STYLE RESUMÉ UI • PRINT ➜ SAVE AS PDF (LETTER)"
        );
    }

    #[test]
    fn title_badge_carries_player_tag() {
        assert_eq!(TitleBadge::new("TONY").tag, "Player 1");
    }
}
