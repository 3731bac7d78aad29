use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::error::ValidationError;
use crate::money::Money;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    /// Contribution of `amount` to the running balance.
    pub fn signed(self, amount: Money) -> Money {
        match self {
            Kind::Income => amount,
            Kind::Expense => -amount,
        }
    }

    pub fn sign(self) -> char {
        match self {
            Kind::Income => '+',
            Kind::Expense => '-',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }
}

impl FromStr for Kind {
    type Err = ValidationError;

    /// Accepts `income`/`expense` and the entry form's `receita`/`despesa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(Kind::Income),
            "expense" | "despesa" => Ok(Kind::Expense),
            other => Err(ValidationError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ledger-assigned identifier, strictly increasing in creation order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A recorded income or expense. Only the ledger constructs these, so every
/// instance has a positive amount and a non-empty description.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    pub(crate) id: TransactionId,
    pub(crate) kind: Kind,
    pub(crate) amount: Money,
    pub(crate) description: String,
    pub(crate) category: Category,
    pub(crate) date: NaiveDate,
}

impl Transaction {
    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }

    pub fn is_expense(&self) -> bool {
        self.kind == Kind::Expense
    }
}

/// Fields of a transaction that passed input checks but has no id yet.
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub kind: Kind,
    pub amount: Money,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

/// Amount field of the entry form: a number, or the input's text value.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Accepts `12.5` and `12,5`; anything else that is not a number is a
    /// validation failure.
    pub fn to_money(&self) -> Result<Money, ValidationError> {
        match self {
            AmountInput::Number(value) => Money::from_decimal(*value),
            AmountInput::Text(text) => {
                let trimmed = text.trim();
                let normalized = if trimmed.contains('.') {
                    trimmed.to_string()
                } else {
                    trimmed.replace(',', ".")
                };
                let value = normalized
                    .parse::<f64>()
                    .map_err(|_| ValidationError::NonNumericAmount(trimmed.to_string()))?;
                Money::from_decimal(value)
            }
        }
    }
}

impl Default for AmountInput {
    fn default() -> Self {
        AmountInput::Text(String::new())
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(text: &str) -> Self {
        AmountInput::Text(text.to_string())
    }
}

/// Raw entry form as submitted by the page. Missing fields take their
/// defaults; the kind defaults to an expense, as the form does.
#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct TransactionForm {
    pub kind: String,
    pub amount: AmountInput,
    pub description: String,
    pub category: String,
    pub date: Option<String>,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            kind: Kind::Expense.as_str().to_string(),
            amount: AmountInput::default(),
            description: String::new(),
            category: String::new(),
            date: None,
        }
    }
}

impl TransactionForm {
    /// Checks presence and positivity of every field. A missing date means
    /// the entry happened `today`.
    pub fn parse(&self, today: NaiveDate) -> Result<Draft, ValidationError> {
        let kind = self.kind.parse::<Kind>()?;
        let amount = self.amount.to_money()?;
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let category = Category::parse(&self.category)?;
        let date = match self.date.as_deref().map(str::trim) {
            None | Some("") => today,
            Some(raw) => parse_form_date(raw)?,
        };

        Ok(Draft {
            kind,
            amount,
            description: description.to_string(),
            category,
            date,
        })
    }
}

fn parse_form_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::MalformedDate(raw.to_string()))
}
