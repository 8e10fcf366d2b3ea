//! Qualitative commentary on the gap between the two sides' totals.
//!
//! The numbers map to exactly one tier through an ordered rule table; the
//! commentary line is picked at random within the tier for variety.

mod tiers;

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Qualitative bucket for the size of the gap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Mild,
    Medium,
    Heavy,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Ok => "ok",
            Severity::Mild => "mild",
            Severity::Medium => "medium",
            Severity::Heavy => "heavy",
        };
        f.write_str(label)
    }
}

/// Which side of the comparison a label refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GapSide {
    BridePrice,
    Dowry,
    Both,
}

impl GapSide {
    /// User-facing label, matching the front end's wording.
    pub fn label(self) -> &'static str {
        match self {
            GapSide::BridePrice => "彩礼方（左侧）",
            GapSide::Dowry => "嫁妆方（右侧）",
            GapSide::Both => "双方",
        }
    }
}

impl fmt::Display for GapSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived numbers a comparison is classified on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapMetrics {
    /// Signed difference; positive when the bride-price side is larger.
    pub diff: f64,
    pub abs_diff: f64,
    /// Absolute difference over the larger total, the divisor floored at 1
    /// so that two empty ledgers still divide cleanly.
    pub ratio: f64,
    pub higher_side: GapSide,
    pub lower_side: GapSide,
}

impl GapMetrics {
    /// Computes the gap between the bride-price total (left) and the dowry
    /// total (right). A tie labels both sides [`GapSide::Both`].
    pub fn between(total_left: f64, total_right: f64) -> Self {
        let diff = total_left - total_right;
        let abs_diff = diff.abs();
        let max_total = total_left.max(total_right).max(1.0);
        let (higher_side, lower_side) = if diff > 0.0 {
            (GapSide::BridePrice, GapSide::Dowry)
        } else if diff < 0.0 {
            (GapSide::Dowry, GapSide::BridePrice)
        } else {
            (GapSide::Both, GapSide::Both)
        };
        Self {
            diff,
            abs_diff,
            ratio: abs_diff / max_total,
            higher_side,
            lower_side,
        }
    }
}

/// Classification result: the tier plus its randomly picked commentary line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// Classifies the two grand totals, picking the commentary line through the
/// thread-local RNG.
pub fn classify(total_left: f64, total_right: f64) -> Verdict {
    classify_with(total_left, total_right, &mut rand::thread_rng())
}

/// As [`classify`], drawing the commentary pick from the supplied randomness
/// source so callers can pin the output.
pub fn classify_with<R: Rng>(total_left: f64, total_right: f64, rng: &mut R) -> Verdict {
    let metrics = GapMetrics::between(total_left, total_right);
    let rule = tiers::RULES
        .iter()
        .find(|rule| (rule.matches)(&metrics))
        .unwrap_or(&tiers::FALLBACK);
    let template = rule.messages[rng.gen_range(0..rule.messages.len())];
    Verdict {
        severity: rule.severity,
        title: rule.title.to_string(),
        message: render(template, &metrics),
    }
}

fn render(template: &str, metrics: &GapMetrics) -> String {
    template
        .replace("{higher}", metrics.higher_side.label())
        .replace("{lower}", metrics.lower_side.label())
}
