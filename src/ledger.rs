use chrono::NaiveDate;
use std::slice;
use std::str::FromStr;

use crate::category::Category;
use crate::error::ValidationError;
use crate::money::Money;
use crate::transaction::{Draft, Kind, Transaction, TransactionId};

/// Append-only, insertion-ordered record of the session's transactions.
///
/// Income and expense totals each stay within [`Money::MAX`], so the balance
/// and every report sum are computed without overflow.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Insertion,
    /// Most recent first.
    Reverse,
}

impl FromStr for Order {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "insertion" => Ok(Order::Insertion),
            "reverse" => Ok(Order::Reverse),
            other => Err(ValidationError::UnknownOrder(other.to_string())),
        }
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new transaction and returns it. On error the ledger is left
    /// exactly as it was.
    pub fn append(
        &mut self,
        kind: Kind,
        amount: Money,
        description: &str,
        category: Category,
        date: NaiveDate,
    ) -> Result<&Transaction, ValidationError> {
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if self.total_of(kind).checked_add(amount).is_none() {
            tracing::warn!(%kind, %amount, "rejecting amount beyond the ledger's total bound");
            return Err(ValidationError::AmountOutOfRange);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if category.label().trim().is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let id = self.next_id();
        tracing::debug!(%id, %kind, %amount, %category, %date, "appending transaction");
        self.transactions.push(Transaction {
            id,
            kind,
            amount,
            description: description.to_string(),
            category,
            date,
        });
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    pub fn append_draft(&mut self, draft: Draft) -> Result<&Transaction, ValidationError> {
        let Draft {
            kind,
            amount,
            description,
            category,
            date,
        } = draft;
        self.append(kind, amount, &description, category, date)
    }

    /// Income minus expenses over the whole ledger.
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(Transaction::signed_amount).sum()
    }

    pub fn income_total(&self) -> Money {
        self.total_of(Kind::Income)
    }

    pub fn expense_total(&self) -> Money {
        self.total_of(Kind::Expense)
    }

    fn total_of(&self, kind: Kind) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn list_chronological(&self, order: Order) -> Chronological<'_> {
        Chronological {
            inner: self.transactions.iter(),
            order,
        }
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions
            .binary_search_by_key(&id, |t| t.id)
            .ok()
            .map(|idx| &self.transactions[idx])
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn next_id(&self) -> TransactionId {
        TransactionId(self.transactions.last().map_or(1, |t| t.id.0 + 1))
    }
}

/// Iterator over the ledger in a fixed direction. Call
/// [`Ledger::list_chronological`] again for a fresh pass.
#[derive(Clone, Debug)]
pub struct Chronological<'a> {
    inner: slice::Iter<'a, Transaction>,
    order: Order,
}

impl<'a> Iterator for Chronological<'a> {
    type Item = &'a Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::Insertion => self.inner.next(),
            Order::Reverse => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Chronological<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::Insertion => self.inner.next_back(),
            Order::Reverse => self.inner.next(),
        }
    }
}

impl ExactSizeIterator for Chronological<'_> {}
