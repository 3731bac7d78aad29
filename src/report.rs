//! Spending report: expenses in a closed date interval, summed per category.

use chrono::NaiveDate;
use serde::Serialize;

use crate::category::Category;
use crate::error::ReportError;
use crate::ledger::Ledger;
use crate::money::Money;

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Outcome of a valid report request. `Empty` means nothing matched; it is
/// not an error.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", content = "totals", rename_all = "lowercase")]
pub enum Report {
    Empty,
    /// Categories in order of first appearance within the range.
    Totals(Vec<CategoryTotal>),
}

impl Report {
    pub fn is_empty(&self) -> bool {
        matches!(self, Report::Empty)
    }

    pub fn totals(&self) -> &[CategoryTotal] {
        match self {
            Report::Empty => &[],
            Report::Totals(totals) => totals,
        }
    }

    pub fn total(&self) -> Money {
        self.totals().iter().map(|line| line.total).sum()
    }

    pub fn get(&self, category: &Category) -> Option<Money> {
        self.totals()
            .iter()
            .find(|line| &line.category == category)
            .map(|line| line.total)
    }
}

pub fn generate_report(
    ledger: &Ledger,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Report, ReportError> {
    if start > end {
        tracing::warn!(%start, %end, "rejecting report with inverted range");
        return Err(ReportError::InvalidRange { start, end });
    }

    let mut totals: Vec<CategoryTotal> = Vec::new();
    let in_range = ledger
        .transactions()
        .iter()
        .filter(|t| t.is_expense() && start <= t.date() && t.date() <= end);
    for expense in in_range {
        match totals.iter_mut().find(|line| &line.category == expense.category()) {
            Some(line) => line.total += expense.amount(),
            None => totals.push(CategoryTotal {
                category: expense.category().clone(),
                total: expense.amount(),
            }),
        }
    }

    tracing::debug!(%start, %end, categories = totals.len(), "generated report");
    if totals.is_empty() {
        Ok(Report::Empty)
    } else {
        Ok(Report::Totals(totals))
    }
}

/// Like [`generate_report`], but takes the raw `YYYY-MM-DD` inputs of the
/// report form.
pub fn generate_report_from_input(
    ledger: &Ledger,
    start: &str,
    end: &str,
) -> Result<Report, ReportError> {
    let start = parse_iso_date("start", start)?;
    let end = parse_iso_date("end", end)?;
    generate_report(ledger, start, end)
}

pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, ReportError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReportError::MissingDate(field));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ReportError::MalformedDate {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Kind;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let rows = [
            (Kind::Expense, 5_000, "Market", Category::Food, date(1, 5)),
            (Kind::Expense, 3_000, "Bakery", Category::Food, date(1, 10)),
            (Kind::Expense, 2_000, "Taxi", Category::Transport, date(1, 20)),
            (Kind::Income, 100_000, "Pay", Category::Salary, date(1, 1)),
        ];
        for (kind, cents, description, category, day) in rows {
            ledger
                .append(kind, Money::from_cents(cents), description, category, day)
                .unwrap();
        }
        ledger
    }

    #[test]
    fn sums_expenses_in_range_by_category() {
        let report = generate_report(&ledger(), date(1, 1), date(1, 15)).unwrap();
        assert_eq!(
            report,
            Report::Totals(vec![CategoryTotal {
                category: Category::Food,
                total: Money::from_cents(8_000),
            }])
        );
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let report = generate_report(&ledger(), date(1, 5), date(1, 20)).unwrap();
        assert_eq!(report.get(&Category::Food), Some(Money::from_cents(8_000)));
        assert_eq!(report.get(&Category::Transport), Some(Money::from_cents(2_000)));
        assert_eq!(report.total(), Money::from_cents(10_000));
    }

    #[test]
    fn categories_keep_first_occurrence_order() {
        let mut ledger = Ledger::new();
        for (category, day) in [
            (Category::Transport, 3),
            (Category::Unknown("Pets".into()), 4),
            (Category::Food, 5),
            (Category::Transport, 6),
        ] {
            ledger
                .append(Kind::Expense, Money::from_cents(100), "x", category, date(2, day))
                .unwrap();
        }
        let report = generate_report(&ledger, date(2, 1), date(2, 28)).unwrap();
        let order: Vec<_> = report.totals().iter().map(|l| l.category.label()).collect();
        assert_eq!(order, vec!["Transport", "Pets", "Food"]);
    }

    #[test]
    fn no_matching_expenses_is_an_empty_report() {
        let report = generate_report(&ledger(), date(3, 1), date(3, 31)).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.total(), Money::zero());

        let report = generate_report(&Ledger::new(), date(1, 1), date(1, 1)).unwrap();
        assert_eq!(report, Report::Empty);
    }

    #[test]
    fn inverted_range_is_an_error() {
        let err = generate_report(&ledger(), date(1, 15), date(1, 1)).unwrap_err();
        assert_eq!(
            err,
            ReportError::InvalidRange {
                start: date(1, 15),
                end: date(1, 1)
            }
        );
    }

    #[test]
    fn raw_inputs_are_checked_before_filtering() {
        let ledger = ledger();
        assert_eq!(
            generate_report_from_input(&ledger, "", "2024-01-15"),
            Err(ReportError::MissingDate("start"))
        );
        assert_eq!(
            generate_report_from_input(&ledger, "2024-01-01", "  "),
            Err(ReportError::MissingDate("end"))
        );
        assert_eq!(
            generate_report_from_input(&ledger, "2024-13-01", "2024-01-15"),
            Err(ReportError::MalformedDate {
                field: "start",
                value: "2024-13-01".to_string()
            })
        );
        let report = generate_report_from_input(&ledger, "2024-01-01", "2024-01-15").unwrap();
        assert_eq!(report.total(), Money::from_cents(8_000));
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(Report::Empty).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "empty" }));
    }
}
