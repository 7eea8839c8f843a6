//! Ledger display formatting
//!
//! Renders balances, totals, transactions, debts and the savings history as
//! terminal tables and bar charts.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{DebtEntry, EnvelopeSet, HistorySnapshot, Money, Totals, Transaction};
use crate::services::{CategoryBalances, CategorySpend};

use super::report::{
    balance_marker, format_bar, format_percentage, percentage, truncate, SavingsBand,
};

const BAR_WIDTH: usize = 24;

#[derive(Tabled)]
struct BalanceRow {
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Budget")]
    cap: String,
    #[tabled(rename = "Dépensé")]
    spent: String,
    #[tabled(rename = "Reste")]
    remaining: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Montant")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct DebtRow {
    #[tabled(rename = "Mois")]
    month: String,
    #[tabled(rename = "Nom")]
    name: String,
    #[tabled(rename = "Montant total")]
    total: String,
    #[tabled(rename = "Payé ce mois")]
    paid: String,
    #[tabled(rename = "Restant")]
    remaining: String,
}

#[derive(Tabled)]
struct EnvelopeRow {
    #[tabled(rename = "Catégorie")]
    category: String,
    #[tabled(rename = "Budget mensuel")]
    cap: String,
}

/// Per-envelope balances with a red/green marker
pub fn format_balance_table(balances: &CategoryBalances, symbol: &str) -> String {
    if balances.is_empty() {
        return "No envelopes configured.\n".to_string();
    }

    let rows = balances.iter().map(|row| BalanceRow {
        category: row.category.clone(),
        cap: row.cap.format_with_symbol(symbol),
        spent: row.spent.format_with_symbol(symbol),
        remaining: format!(
            "{} {}",
            balance_marker(row.remaining),
            row.remaining.format_with_symbol(symbol)
        ),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Totals block with the savings band message
pub fn format_totals(totals: &Totals, low_threshold: Money, symbol: &str) -> String {
    let band = SavingsBand::classify(totals.savings, low_threshold);
    let mut output = String::new();
    output.push_str(&format!(
        "Total revenus:   {:>14}\n",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total dépenses:  {:>14}\n",
        totals.spend.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Épargne:         {:>14}\n",
        totals.savings.format_with_symbol(symbol)
    ));
    output.push_str(band.message());
    output.push('\n');
    output
}

/// Warning lines for spend booked against categories with no envelope
pub fn format_unknown_categories(spend: &CategorySpend, symbol: &str) -> String {
    let mut output = String::new();
    for (category, amount) in spend.unknown() {
        output.push_str(&format!(
            "Warning: '{}' has no envelope ({} not counted in totals)\n",
            category,
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Share of spend per envelope as horizontal bars
pub fn format_spend_chart(spend: &CategorySpend, symbol: &str) -> String {
    let total = spend.total();
    if total.is_zero() {
        return "No spending recorded.\n".to_string();
    }

    let max = spend
        .iter()
        .map(|(_, amount)| amount)
        .max()
        .unwrap_or_default();

    let mut output = String::new();
    for (category, amount) in spend.iter().filter(|(_, amount)| !amount.is_zero()) {
        output.push_str(&format!(
            "{:<22} {} {:>6} {:>14}\n",
            truncate(category, 22),
            format_bar(amount.as_decimal(), max.as_decimal(), BAR_WIDTH),
            format_percentage(percentage(amount, total)),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// The transaction log as a table
pub fn format_transaction_table(
    transactions: &[Transaction],
    symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: txn.date.format(date_format).to_string(),
        category: txn.category.clone(),
        amount: txn.amount.format_with_symbol(symbol),
        description: truncate(&txn.description, 40),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Debt entries as a table
pub fn format_debt_table(debts: &[DebtEntry], symbol: &str) -> String {
    if debts.is_empty() {
        return "No debts recorded.\n".to_string();
    }

    let rows = debts.iter().map(|debt| DebtRow {
        month: debt.month.to_string(),
        name: debt.name.clone(),
        total: debt.total_amount.format_with_symbol(symbol),
        paid: debt.paid_this_month.format_with_symbol(symbol),
        remaining: debt.remaining().format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Configured envelopes as a table
pub fn format_envelope_list(envelopes: &EnvelopeSet, symbol: &str) -> String {
    if envelopes.is_empty() {
        return "No envelopes configured.\n".to_string();
    }

    let rows = envelopes.iter().map(|envelope| EnvelopeRow {
        category: envelope.name.clone(),
        cap: envelope.cap.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!(
        "{}\nTotal budgeted: {}\n",
        table,
        envelopes.total_cap().format_with_symbol(symbol)
    )
}

/// Monthly savings history, one bar per month
pub fn format_history(history: &HistorySnapshot, symbol: &str) -> String {
    if history.is_empty() {
        return "No history recorded yet.\n".to_string();
    }

    let max = history
        .iter()
        .map(|(_, totals)| totals.savings.abs())
        .max()
        .unwrap_or_default();

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:>14} {:>14} {:>14}\n",
        "Mois", "Revenus", "Dépenses", "Épargne"
    ));
    for (month, totals) in history.iter() {
        let bar = if totals.savings.is_negative() {
            format!(
                "-{}",
                format_bar(totals.savings.abs().as_decimal(), max.as_decimal(), BAR_WIDTH)
            )
        } else {
            format!(
                " {}",
                format_bar(totals.savings.as_decimal(), max.as_decimal(), BAR_WIDTH)
            )
        };
        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14} {}\n",
            month.to_string(),
            totals.income.format_with_symbol(symbol),
            totals.spend.format_with_symbol(symbol),
            totals.savings.format_with_symbol(symbol),
            bar.trim_end()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeRecord, MonthKey};
    use crate::services::{compute_balances, compute_summary, compute_totals};
    use chrono::NaiveDate;

    fn sample() -> (EnvelopeSet, Vec<Transaction>) {
        let envelopes = EnvelopeSet::from_pairs([
            ("Loyer", Money::from_units(1100)),
            ("Transport", Money::from_units(150)),
        ])
        .unwrap();
        let transactions = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                "Loyer",
                Money::from_units(1100),
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                "Transport",
                Money::from_units(200),
            ),
        ];
        (envelopes, transactions)
    }

    #[test]
    fn test_balance_table_marks_overspent() {
        let (envelopes, transactions) = sample();
        let spend = compute_summary(&transactions, &envelopes);
        let balances = compute_balances(&spend, &envelopes);

        let output = format_balance_table(&balances, "€");
        assert!(output.contains("🔴 -50.00 €"));
        assert!(output.contains("🟢 0.00 €"));
        assert!(output.contains("Catégorie"));
    }

    #[test]
    fn test_totals_show_band() {
        let (envelopes, transactions) = sample();
        let spend = compute_summary(&transactions, &envelopes);
        let income = IncomeRecord::new(Money::from_units(1000), Money::zero(), Money::zero(), Money::zero());
        let totals = compute_totals(&spend, &income);

        let output = format_totals(&totals, Money::from_units(100), "€");
        assert!(output.contains("-300.00 €"));
        assert!(output.contains(SavingsBand::Negative.message()));
    }

    #[test]
    fn test_spend_chart() {
        let (envelopes, transactions) = sample();
        let spend = compute_summary(&transactions, &envelopes);
        let output = format_spend_chart(&spend, "€");
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("85%"));

        let empty = compute_summary(&[], &envelopes);
        assert_eq!(format_spend_chart(&empty, "€"), "No spending recorded.\n");
    }

    #[test]
    fn test_history_lists_months_in_order() {
        let history: HistorySnapshot = [
            (
                MonthKey::new(2025, 2).unwrap(),
                Totals::new(Money::from_units(1000), Money::from_units(1200)),
            ),
            (
                MonthKey::new(2025, 1).unwrap(),
                Totals::new(Money::from_units(3500), Money::from_units(1300)),
            ),
        ]
        .into_iter()
        .collect();

        let output = format_history(&history, "€");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2025-01"));
        assert!(lines[2].starts_with("2025-02"));
        assert!(lines[2].contains("-200.00 €"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_transaction_table(&[], "€", "%Y-%m-%d"), "No transactions found.\n");
        assert_eq!(format_debt_table(&[], "€"), "No debts recorded.\n");
        assert_eq!(format_history(&HistorySnapshot::new(), "€"), "No history recorded yet.\n");
    }

    #[test]
    fn test_unknown_category_warning() {
        let (envelopes, mut transactions) = sample();
        transactions.push(Transaction::new(
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            "Vacances",
            Money::from_units(30),
        ));
        let spend = compute_summary(&transactions, &envelopes);
        let output = format_unknown_categories(&spend, "€");
        assert!(output.contains("'Vacances' has no envelope"));
    }
}
