//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the summary and history views.

use crate::models::Money;

/// How healthy a savings figure is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsBand {
    Negative,
    Low,
    Healthy,
}

impl SavingsBand {
    /// Band a savings figure against the configured low threshold
    pub fn classify(savings: Money, low_threshold: Money) -> Self {
        if savings.is_negative() {
            Self::Negative
        } else if savings < low_threshold {
            Self::Low
        } else {
            Self::Healthy
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Negative => "Attention : vos dépenses dépassent vos revenus.",
            Self::Low => "Épargne faible ce mois-ci.",
            Self::Healthy => "Bonne gestion, votre épargne est saine.",
        }
    }
}

/// Balance marker: red when overspent, green otherwise
pub fn balance_marker(remaining: Money) -> &'static str {
    if remaining.is_negative() {
        "🔴"
    } else {
        "🟢"
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `part` in `total` as a percentage
pub fn percentage(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64 * 100.0
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
