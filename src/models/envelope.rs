//! Envelope model
//!
//! An envelope is a named spending category with a monthly cap. The
//! `EnvelopeSet` keeps envelopes in configuration order, which is the order
//! every per-category listing follows.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Validation errors for envelopes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeCap(String),
    CapTooLarge(String),
    DuplicateName(String),
}

impl fmt::Display for EnvelopeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Envelope name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Envelope name too long ({} chars, max 50)", len)
            }
            Self::NegativeCap(name) => write!(f, "Envelope '{}' cannot have a negative cap", name),
            Self::CapTooLarge(name) => write!(
                f,
                "Envelope '{}' cannot have a cap above {}",
                name,
                Money::MAX_ENTRY
            ),
            Self::DuplicateName(name) => write!(f, "Envelope '{}' is defined twice", name),
        }
    }
}

impl std::error::Error for EnvelopeValidationError {}

/// A single category budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub name: String,
    pub cap: Money,
}

impl Envelope {
    pub fn new(name: impl Into<String>, cap: Money) -> Self {
        Self {
            name: name.into(),
            cap,
        }
    }

    /// Validate the envelope
    pub fn validate(&self) -> Result<(), EnvelopeValidationError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(EnvelopeValidationError::EmptyName);
        }
        if trimmed.chars().count() > 50 {
            return Err(EnvelopeValidationError::NameTooLong(trimmed.chars().count()));
        }
        if self.cap.is_negative() {
            return Err(EnvelopeValidationError::NegativeCap(self.name.clone()));
        }
        if !self.cap.is_within_entry_limit() {
            return Err(EnvelopeValidationError::CapTooLarge(self.name.clone()));
        }
        Ok(())
    }
}

/// Ordered mapping from category name to monthly cap
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Envelope>", into = "Vec<Envelope>")]
pub struct EnvelopeSet {
    envelopes: Vec<Envelope>,
}

impl EnvelopeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The envelopes of the household form this ledger started from
    pub fn household_defaults() -> Self {
        let defaults = [
            ("Loyer", 1100),
            ("Courses alimentaires", 500),
            ("Transport", 150),
            ("Loisirs", 200),
            ("Santé", 100),
            ("Épargne", 300),
            ("Autres", 100),
        ];
        Self {
            envelopes: defaults
                .into_iter()
                .map(|(name, cap)| Envelope::new(name, Money::from_units(cap)))
                .collect(),
        }
    }

    /// Build a set from `(name, cap)` pairs, validating each one
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, EnvelopeValidationError>
    where
        I: IntoIterator<Item = (S, Money)>,
        S: Into<String>,
    {
        let envelopes: Vec<Envelope> = pairs
            .into_iter()
            .map(|(name, cap)| Envelope::new(name, cap))
            .collect();
        Self::try_from(envelopes)
    }

    /// Set the cap of an envelope, adding it at the end if it is new.
    ///
    /// Returns the previous cap when the envelope already existed.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        cap: Money,
    ) -> Result<Option<Money>, EnvelopeValidationError> {
        let envelope = Envelope::new(name.into().trim(), cap);
        envelope.validate()?;

        if let Some(existing) = self.envelopes.iter_mut().find(|e| e.name == envelope.name) {
            let previous = existing.cap;
            existing.cap = envelope.cap;
            return Ok(Some(previous));
        }

        self.envelopes.push(envelope);
        Ok(None)
    }

    /// Remove an envelope, returning it if it existed
    pub fn remove(&mut self, name: &str) -> Option<Envelope> {
        let index = self.envelopes.iter().position(|e| e.name == name)?;
        Some(self.envelopes.remove(index))
    }

    /// Check whether a category has an envelope
    pub fn contains(&self, name: &str) -> bool {
        self.envelopes.iter().any(|e| e.name == name)
    }

    /// Category names in configuration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.envelopes.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Envelope> {
        self.envelopes.iter()
    }

    pub fn len(&self) -> usize {
        self.envelopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envelopes.is_empty()
    }

    /// Sum of all caps
    pub fn total_cap(&self) -> Money {
        self.envelopes.iter().map(|e| e.cap).sum()
    }
}

impl TryFrom<Vec<Envelope>> for EnvelopeSet {
    type Error = EnvelopeValidationError;

    fn try_from(envelopes: Vec<Envelope>) -> Result<Self, Self::Error> {
        let mut set = Self::new();
        for envelope in envelopes {
            if set.contains(envelope.name.trim()) {
                return Err(EnvelopeValidationError::DuplicateName(envelope.name));
            }
            set.set(envelope.name, envelope.cap)?;
        }
        Ok(set)
    }
}

impl From<EnvelopeSet> for Vec<Envelope> {
    fn from(set: EnvelopeSet) -> Self {
        set.envelopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_household_defaults() {
        let set = EnvelopeSet::household_defaults();
        assert_eq!(set.len(), 7);
        let first = set.iter().next().unwrap();
        assert_eq!(first.name, "Loyer");
        assert_eq!(first.cap, Money::from_units(1100));
        assert_eq!(set.total_cap(), Money::from_units(2450));
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut set = EnvelopeSet::from_pairs([
            ("Loyer", Money::from_units(1100)),
            ("Transport", Money::from_units(150)),
        ])
        .unwrap();

        let previous = set.set("Loyer", Money::from_units(1200)).unwrap();
        assert_eq!(previous, Some(Money::from_units(1100)));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["Loyer", "Transport"]);

        assert_eq!(set.set("Loisirs", Money::zero()).unwrap(), None);
        assert_eq!(set.names().last(), Some("Loisirs"));
    }

    #[test]
    fn test_rejects_negative_cap() {
        let mut set = EnvelopeSet::new();
        assert_eq!(
            set.set("Loyer", Money::from_cents(-1)),
            Err(EnvelopeValidationError::NegativeCap("Loyer".into()))
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_rejects_cap_above_limit() {
        let mut set = EnvelopeSet::new();
        assert_eq!(
            set.set("Loyer", Money::MAX_ENTRY + Money::from_cents(1)),
            Err(EnvelopeValidationError::CapTooLarge("Loyer".into()))
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_rejects_empty_name() {
        let mut set = EnvelopeSet::new();
        assert_eq!(
            set.set("   ", Money::zero()),
            Err(EnvelopeValidationError::EmptyName)
        );
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = EnvelopeSet::from_pairs([
            ("Loyer", Money::from_units(1)),
            ("Loyer", Money::from_units(2)),
        ]);
        assert_eq!(
            result,
            Err(EnvelopeValidationError::DuplicateName("Loyer".into()))
        );
    }

    #[test]
    fn test_remove() {
        let mut set = EnvelopeSet::household_defaults();
        let removed = set.remove("Transport").unwrap();
        assert_eq!(removed.cap, Money::from_units(150));
        assert!(!set.contains("Transport"));
        assert!(set.remove("Transport").is_none());
    }

    #[test]
    fn test_serde_keeps_order() {
        let set = EnvelopeSet::household_defaults();
        let json = serde_json::to_string(&set).unwrap();
        let back: EnvelopeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);

        let invalid = r#"[{"name": "Loyer", "cap": -5}]"#;
        assert!(serde_json::from_str::<EnvelopeSet>(invalid).is_err());
    }
}
