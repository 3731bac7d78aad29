//! Locale and display preferences handed over by the page.
//!
//! Every field has a default, so the page may pass a partial object (or
//! nothing at all) and get pt-BR/BRL formatting.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Intl puts a no-break space between the currency symbol and the digits.
const SYMBOL_SPACER: char = '\u{a0}';

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    /// chrono strftime pattern.
    pub date_format: String,
    /// `tracing` filter directive, e.g. `info` or `pocket_ledger=debug`.
    pub log_level: String,
    pub empty_feed_message: String,
    pub empty_report_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency_code: "BRL".into(),
            currency_symbol: "R$".into(),
            decimal_separator: ',',
            grouping_separator: '.',
            date_format: "%d/%m/%Y".into(),
            log_level: "info".into(),
            empty_feed_message: "Nenhuma transação ainda.".into(),
            empty_report_message: "Nenhuma despesa encontrada no período selecionado.".into(),
        }
    }
}

impl Settings {
    /// Grouped two-decimal currency display, e.g. `R$ 1.234,56` or
    /// `-R$ 12,00`.
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{}",
            sign,
            self.currency_symbol,
            SYMBOL_SPACER,
            self.format_number(amount)
        )
    }

    /// The unsigned amount with grouping and decimal separators, no symbol.
    pub fn format_number(&self, amount: Money) -> String {
        let units = group_digits(&amount.units().to_string(), self.grouping_separator);
        format!("{}{}{:02}", units, self.decimal_separator, amount.cents_part())
    }

    /// Falls back to ISO form when the configured pattern is not valid
    /// strftime.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let pattern = if is_valid_pattern(&self.date_format) {
            self.date_format.as_str()
        } else {
            ISO_DATE_FORMAT
        };
        date.format(pattern).to_string()
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
