use serde::{Deserialize, Serialize};

/// Reads an amount as a finite number; anything else counts as zero.
pub fn coerce_amount(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// A single line entry: a label, an amount in 元, and an optional note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Item {
    /// Creates a blank entry under the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            amount: 0.0,
            note: None,
        }
    }

    /// Returns the amount, non-finite values reading as zero.
    pub fn coerced_amount(&self) -> f64 {
        coerce_amount(self.amount)
    }

    /// Applies the fields present in `patch`, retaining the rest.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(amount) = patch.amount {
            self.amount = coerce_amount(amount);
        }
        if let Some(note) = &patch.note {
            self.note = Some(note.clone());
        }
    }
}

/// Partial update for an [`Item`]; unset fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ItemPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
