//! Render-ready rows for the transaction feed and the spending report.
//!
//! These carry formatted strings and glyphs so the page script only has to
//! place them; no markup is produced here.

use serde::Serialize;

use crate::ledger::{Ledger, Order};
use crate::report::Report;
use crate::settings::Settings;
use crate::transaction::{Kind, Transaction};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FeedRow {
    pub id: u64,
    pub kind: Kind,
    pub glyph: &'static str,
    pub description: String,
    pub category: String,
    pub date: String,
    pub iso_date: String,
    pub sign: char,
    pub amount: f64,
    pub formatted_amount: String,
    /// `income` or `expense`, for styling.
    pub class: &'static str,
}

impl FeedRow {
    pub fn new(transaction: &Transaction, settings: &Settings) -> Self {
        let kind = transaction.kind();
        Self {
            id: transaction.id().0,
            kind,
            glyph: transaction.category().glyph(),
            description: transaction.description().to_string(),
            category: transaction
                .category()
                .localized_label(&settings.locale)
                .to_string(),
            date: settings.format_date(transaction.date()),
            iso_date: transaction.date().to_string(),
            sign: kind.sign(),
            amount: transaction.amount().as_decimal(),
            formatted_amount: settings.format_money(transaction.amount()),
            class: kind.as_str(),
        }
    }

    /// Sign and amount as shown in the feed, e.g. `- R$ 50,00`.
    pub fn display_amount(&self) -> String {
        format!("{} {}", self.sign, self.formatted_amount)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FeedView {
    pub balance: f64,
    pub formatted_balance: String,
    pub rows: Vec<FeedRow>,
    /// Set only when there are no rows.
    pub empty_message: Option<String>,
}

/// Most-recent-first feed with the current balance.
pub fn feed(ledger: &Ledger, settings: &Settings) -> FeedView {
    let rows: Vec<FeedRow> = ledger
        .list_chronological(Order::Reverse)
        .map(|t| FeedRow::new(t, settings))
        .collect();
    let empty_message = rows
        .is_empty()
        .then(|| settings.empty_feed_message.clone());
    let balance = ledger.balance();

    FeedView {
        balance: balance.as_decimal(),
        formatted_balance: settings.format_money(balance),
        rows,
        empty_message,
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub glyph: &'static str,
    pub category: String,
    pub total: f64,
    pub formatted_total: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportView {
    pub rows: Vec<ReportRow>,
    pub total: f64,
    pub formatted_total: String,
    /// Set only for an empty report.
    pub empty_message: Option<String>,
}

pub fn report_view(report: &Report, settings: &Settings) -> ReportView {
    let rows = report
        .totals()
        .iter()
        .map(|line| ReportRow {
            glyph: line.category.glyph(),
            category: line.category.localized_label(&settings.locale).to_string(),
            total: line.total.as_decimal(),
            formatted_total: settings.format_money(line.total),
        })
        .collect();
    let total = report.total();

    ReportView {
        rows,
        total: total.as_decimal(),
        formatted_total: settings.format_money(total),
        empty_message: report
            .is_empty()
            .then(|| settings.empty_report_message.clone()),
    }
}
