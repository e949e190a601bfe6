use std::fmt;

use serde::Serialize;

use crate::consts::TIE_PERCENT;
use crate::quality::{sanitize_score, SharpnessScore};

/// Which of the two compared images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PhotoSlot {
    A,
    B,
}

impl fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Share of the combined sharpness held by each image. `a + b == 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PercentagePair {
    pub a: i32,
    pub b: i32,
}

impl PercentagePair {
    /// The slot with the larger share, or `None` on a tie.
    pub fn leading_slot(&self) -> Option<PhotoSlot> {
        if self.a > self.b {
            Some(PhotoSlot::A)
        } else if self.b > self.a {
            Some(PhotoSlot::B)
        } else {
            None
        }
    }
}

/// Split two sharpness scores into integer percentages summing to 100.
///
/// Both inputs are sanitized first. When neither carries any signal the
/// result is an even 50/50. B is derived as `100 - a` so rounding never
/// breaks the sum.
pub fn relative_percentages(score_a: f64, score_b: f64) -> PercentagePair {
    let a = sanitize_score(score_a);
    let b = sanitize_score(score_b);
    let total = a + b;
    if total <= 0.0 {
        return PercentagePair {
            a: TIE_PERCENT,
            b: TIE_PERCENT,
        };
    }

    // Two finite scores near f64::MAX can overflow the sum.
    let share = if total.is_finite() {
        a / total
    } else {
        (a / 2.0) / (a / 2.0 + b / 2.0)
    };
    let percent_a = (share * 100.0).round().clamp(0.0, 100.0) as i32;
    let percent_b = (100 - percent_a).clamp(0, 100);
    PercentagePair {
        a: percent_a,
        b: percent_b,
    }
}

/// Outcome of comparing two images.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub score_a: SharpnessScore,
    pub score_b: SharpnessScore,
    pub percentages: PercentagePair,
}

impl Comparison {
    pub fn new(score_a: SharpnessScore, score_b: SharpnessScore) -> Self {
        let percentages = relative_percentages(score_a.value, score_b.value);
        Self {
            score_a,
            score_b,
            percentages,
        }
    }

    pub fn leading_slot(&self) -> Option<PhotoSlot> {
        self.percentages.leading_slot()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let PercentagePair { a, b } = self.percentages;
        match self.leading_slot() {
            Some(PhotoSlot::A) => write!(f, "Image A is sharper: {a}% vs {b}%"),
            Some(PhotoSlot::B) => write!(f, "Image B is sharper: {b}% vs {a}%"),
            None => write!(f, "Both images are equally sharp ({a}% each)"),
        }
    }
}
