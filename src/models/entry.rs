//! Entry record model
//!
//! One income or expense line item as the remote store returns it. The
//! `label` field carries the category for expenses and the source for
//! incomes; both lists share the same shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::EntryId;
use super::money::Money;

/// Validation errors for entry records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    NegativeAmount,
    EmptyLabel,
}

impl std::fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Entry amount cannot be negative"),
            Self::EmptyLabel => write!(f, "Entry label cannot be empty"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

/// One income or expense line item
///
/// The identifier is assigned by the remote store; records constructed
/// locally only ever carry ids echoed back from a confirmed reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub amount: Money,
    /// Category (expenses) or source (incomes)
    pub label: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    /// Create a new entry record
    pub fn new(
        id: impl Into<EntryId>,
        amount: Money,
        label: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            label: label.into(),
            date,
            note: None,
        }
    }

    /// Attach a free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Validate the entry record
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.amount.is_negative() {
            return Err(EntryValidationError::NegativeAmount);
        }
        if self.label.trim().is_empty() {
            return Err(EntryValidationError::EmptyLabel);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
    }

    #[test]
    fn test_new_entry() {
        let entry = Entry::new("a1", Money::from_cents(1050), "Groceries", date());

        assert_eq!(entry.id, EntryId::from("a1"));
        assert_eq!(entry.amount.cents(), 1050);
        assert_eq!(entry.label, "Groceries");
        assert!(entry.note.is_none());
    }

    #[test]
    fn test_with_note() {
        let entry = Entry::new("a1", Money::from_cents(1050), "Groceries", date())
            .with_note("weekly shop");

        assert_eq!(entry.note.as_deref(), Some("weekly shop"));
    }

    #[test]
    fn test_validation_negative_amount() {
        let entry = Entry::new("a1", Money::from_cents(-100), "Groceries", date());

        assert!(matches!(
            entry.validate(),
            Err(EntryValidationError::NegativeAmount)
        ));
    }

    #[test]
    fn test_validation_empty_label() {
        let entry = Entry::new("a1", Money::from_cents(100), "  ", date());

        assert!(matches!(
            entry.validate(),
            Err(EntryValidationError::EmptyLabel)
        ));
    }

    #[test]
    fn test_validation_ok() {
        let entry = Entry::new("a1", Money::zero(), "Salary", date());
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let entry = Entry::new("a1", Money::from_cents(1050), "Groceries", date())
            .with_note("weekly shop");

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: Entry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_missing_note_deserializes_to_none() {
        let json = r#"{"id":"a1","amount":1050,"label":"Groceries","date":"2025-01-10"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(entry.note.is_none());
    }
}
