//! Recap documents
//!
//! Renders a period recap (income, spend, savings, per-envelope spend,
//! income breakdown, debts and the full transaction table) as HTML or plain
//! text. Every free-text field goes through the escaping function of the
//! output format.

use std::borrow::Cow;

use clap::ValueEnum;

use crate::models::{LedgerState, Money, Totals};
use crate::services::CategorySpend;

/// Output format for the recap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RecapFormat {
    /// Standalone HTML page
    #[default]
    Html,
    /// Plain text report
    Text,
}

impl RecapFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Neutralize control characters so free text cannot break the layout of a
/// plain-text report
pub fn escape_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(char::is_control) {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect(),
    )
}

/// Render the recap document
pub fn render_recap(
    state: &LedgerState,
    totals: &Totals,
    spend: &CategorySpend,
    format: RecapFormat,
    currency_symbol: &str,
) -> String {
    match format {
        RecapFormat::Html => render_html(state, totals, spend, currency_symbol),
        RecapFormat::Text => render_text(state, totals, spend, currency_symbol),
    }
}

fn render_html(state: &LedgerState, totals: &Totals, spend: &CategorySpend, symbol: &str) -> String {
    let money = |m: Money| escape_html(&m.format_with_symbol(symbol)).into_owned();
    let name = escape_html(display_name(&state.username));
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"fr\">\n");
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>Récapitulatif budgétaire de {}</title>\n", name));
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str(&format!("<h1>Récapitulatif budgétaire de {}</h1>\n", name));

    out.push_str("<ul class=\"totals\">\n");
    out.push_str(&format!("<li>Total revenus : {}</li>\n", money(totals.income)));
    out.push_str(&format!("<li>Total dépenses : {}</li>\n", money(totals.spend)));
    let savings_class = if totals.is_overspent() { "negative" } else { "positive" };
    out.push_str(&format!(
        "<li class=\"{}\">Épargne : {}</li>\n",
        savings_class,
        money(totals.savings)
    ));
    out.push_str("</ul>\n");

    out.push_str("<h2>Dépenses par catégorie</h2>\n");
    out.push_str("<ul class=\"categories\">\n");
    for (category, spent) in spend.iter() {
        out.push_str(&format!("<li>{} : {}</li>\n", escape_html(category), money(spent)));
    }
    for (category, spent) in spend.unknown() {
        out.push_str(&format!(
            "<li class=\"unknown\">{} (sans enveloppe) : {}</li>\n",
            escape_html(category),
            money(spent)
        ));
    }
    out.push_str("</ul>\n");

    out.push_str("<h2>Revenus</h2>\n");
    out.push_str("<ul class=\"income\">\n");
    for (source, amount) in state.income.breakdown() {
        out.push_str(&format!("<li>{} : {}</li>\n", escape_html(source.label()), money(amount)));
    }
    out.push_str("</ul>\n");

    out.push_str("<h2>Dettes</h2>\n");
    if state.debts.is_empty() {
        out.push_str("<p>Aucune dette enregistrée.</p>\n");
    } else {
        out.push_str("<table class=\"debts\">\n");
        out.push_str("<tr><th>Nom</th><th>Montant total</th><th>Payé ce mois</th><th>Restant</th><th>Mois</th></tr>\n");
        for debt in &state.debts {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&debt.name),
                money(debt.total_amount),
                money(debt.paid_this_month),
                money(debt.remaining()),
                debt.month
            ));
        }
        out.push_str("</table>\n");
    }

    out.push_str("<h2>Transactions</h2>\n");
    if state.transactions.is_empty() {
        out.push_str("<p>Aucune transaction enregistrée.</p>\n");
    } else {
        out.push_str("<table class=\"transactions\">\n");
        out.push_str("<tr><th>Date</th><th>Catégorie</th><th>Montant</th><th>Description</th></tr>\n");
        for txn in &state.transactions {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                txn.date.format("%Y-%m-%d"),
                escape_html(&txn.category),
                money(txn.amount),
                escape_html(&txn.description)
            ));
        }
        out.push_str("</table>\n");
    }

    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}

fn render_text(state: &LedgerState, totals: &Totals, spend: &CategorySpend, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let title = format!(
        "Récapitulatif budgétaire de {}",
        escape_text(display_name(&state.username))
    );
    let mut out = String::new();

    out.push_str(&format!("{}\n", title));
    out.push_str(&format!("{}\n", "=".repeat(title.chars().count())));
    out.push('\n');
    out.push_str(&format!("Total revenus  : {:>14}\n", money(totals.income)));
    out.push_str(&format!("Total dépenses : {:>14}\n", money(totals.spend)));
    out.push_str(&format!("Épargne        : {:>14}\n", money(totals.savings)));
    out.push('\n');

    out.push_str("Dépenses par catégorie\n");
    out.push_str("----------------------\n");
    for (category, spent) in spend.iter() {
        out.push_str(&format!("  {:<30} {:>14}\n", escape_text(category), money(spent)));
    }
    for (category, spent) in spend.unknown() {
        let label = format!("{} (sans enveloppe)", escape_text(category));
        out.push_str(&format!("  {:<30} {:>14}\n", label, money(spent)));
    }
    out.push('\n');

    out.push_str("Revenus\n");
    out.push_str("-------\n");
    for (source, amount) in state.income.breakdown() {
        out.push_str(&format!("  {:<30} {:>14}\n", source.label(), money(amount)));
    }
    out.push('\n');

    out.push_str("Dettes\n");
    out.push_str("------\n");
    if state.debts.is_empty() {
        out.push_str("  Aucune dette enregistrée.\n");
    }
    for debt in &state.debts {
        out.push_str(&format!(
            "  {} {:<24} total {:>14}  payé {:>14}  restant {:>14}\n",
            debt.month,
            escape_text(&debt.name),
            money(debt.total_amount),
            money(debt.paid_this_month),
            money(debt.remaining())
        ));
    }
    out.push('\n');

    out.push_str("Transactions\n");
    out.push_str("------------\n");
    if state.transactions.is_empty() {
        out.push_str("  Aucune transaction enregistrée.\n");
    }
    for txn in &state.transactions {
        out.push_str(&format!(
            "  {} {:<24} {:>14}  {}\n",
            txn.date.format("%Y-%m-%d"),
            escape_text(&txn.category),
            money(txn.amount),
            escape_text(&txn.description)
        ));
    }

    out
}

fn display_name(username: &str) -> &str {
    if username.trim().is_empty() {
        "la famille"
    } else {
        username
    }
}
