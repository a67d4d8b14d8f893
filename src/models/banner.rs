//! Banner models.
//!
//! This module contains the [`BannerData`] derived from a finished balance,
//! the [`OvertimeTier`] chosen from it, and the styled [`BannerLine`]s handed
//! to whatever renders the summary.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Colors a banner segment may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerColor {
    /// Non-negative balance or a cleared goal.
    Green,
    /// Negative balance or an exceeded overtime limit.
    Red,
    /// Overtime approaching the limit.
    Orange,
}

impl BannerColor {
    /// Returns the CSS color keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            BannerColor::Green => "green",
            BannerColor::Red => "red",
            BannerColor::Orange => "orange",
        }
    }

    /// Green for a non-negative balance, red otherwise.
    pub fn for_balance(balance: Decimal) -> Self {
        if balance >= Decimal::ZERO {
            BannerColor::Green
        } else {
            BannerColor::Red
        }
    }
}

impl fmt::Display for BannerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// A run of text sharing one style.
///
/// # Example
///
/// ```
/// use balance_engine::models::{BannerColor, BannerSegment};
///
/// let segment = BannerSegment::plain("Time balance: ");
/// assert!(!segment.bold);
///
/// let value = BannerSegment::colored("+1:30", BannerColor::Green);
/// assert_eq!(value.color, Some(BannerColor::Green));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSegment {
    /// The text to display.
    pub text: String,
    /// Whether the text is emphasized.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,
    /// Optional text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<BannerColor>,
}

impl BannerSegment {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            color: None,
        }
    }

    /// Bold text.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            color: None,
        }
    }

    /// Colored text.
    pub fn colored(text: impl Into<String>, color: BannerColor) -> Self {
        Self {
            text: text.into(),
            bold: false,
            color: Some(color),
        }
    }

    /// Bold colored text.
    pub fn bold_colored(text: impl Into<String>, color: BannerColor) -> Self {
        Self {
            text: text.into(),
            bold: true,
            color: Some(color),
        }
    }
}

/// One line of the summary banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerLine {
    /// Ordered segments making up the line.
    pub segments: Vec<BannerSegment>,
}

impl BannerLine {
    /// Creates a line from its segments.
    pub fn new(segments: Vec<BannerSegment>) -> Self {
        Self { segments }
    }

    /// Returns the concatenated text of all segments.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Returns true when any segment carries the given color.
    pub fn has_color(&self, color: BannerColor) -> bool {
        self.segments.iter().any(|s| s.color == Some(color))
    }
}

impl fmt::Display for BannerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

/// Values shown on the banner, derived from a finished [`BalanceState`].
///
/// [`BalanceState`]: crate::models::BalanceState
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerData {
    /// Scheduled working days without recorded time.
    pub remaining_days: u32,
    /// Hours still owed to meet the monthly target; zero or negative when met.
    pub remaining_required: Decimal,
    /// Average hours per remaining day; zero when no days remain.
    pub avg_per_day: Decimal,
    /// Current time balance against the daily target.
    pub cumulative_diff: Decimal,
    /// Overtime against contracted hours, assuming no change of pace.
    pub projected_overtime: Decimal,
}

/// Overtime warning level shown on the third banner line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum OvertimeTier {
    /// Overtime is comfortably below the limit, or nothing can be done about it.
    None,
    /// Overtime is above the warning threshold but below the limit.
    Approaching {
        /// Highest average daily hours for the remaining days that stays under the limit.
        max_daily: Decimal,
    },
    /// Overtime has reached the limit.
    Exceeded,
}
