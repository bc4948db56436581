//! Food domain model.
//!
//! # Responsibility
//! - Define the canonical food record read back from storage.
//! - Define the write model used by create/update paths.
//!
//! # Invariants
//! - `id` and `created_at` are assigned by the store and never change.
//! - `name` is unique across the catalog; the schema enforces it.
//! - Write paths reject blank names and negative calories before SQL runs.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FoodId = i64;

/// One row of the `foods` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Store-assigned auto-increment id, monotonic and never reused.
    pub id: FoodId,
    /// Display name, unique across the catalog.
    pub name: String,
    /// Energy content in kilocalories. Never negative.
    pub calories: i64,
    /// Insert timestamp in epoch milliseconds, set by the store.
    pub created_at: i64,
}

/// Write model for create and update operations.
///
/// Update uses full-replacement semantics, so the same shape serves both
/// paths. The store supplies `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub calories: i64,
}

/// Validation failure for a [`NewFood`] write model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodValidationError {
    /// Name is empty or whitespace-only.
    BlankName,
    /// Calories below zero.
    NegativeCalories(i64),
}

impl Display for FoodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "food name must not be blank"),
            Self::NegativeCalories(value) => {
                write!(f, "food calories must not be negative, got {value}")
            }
        }
    }
}

impl Error for FoodValidationError {}

impl NewFood {
    /// Creates a write model from raw name/calories input.
    pub fn new(name: impl Into<String>, calories: i64) -> Self {
        Self {
            name: name.into(),
            calories,
        }
    }

    /// Checks write-boundary invariants.
    ///
    /// # Errors
    /// - `BlankName` when the name trims to nothing.
    /// - `NegativeCalories` when calories are below zero.
    pub fn validate(&self) -> Result<(), FoodValidationError> {
        if self.name.trim().is_empty() {
            return Err(FoodValidationError::BlankName);
        }
        if self.calories < 0 {
            return Err(FoodValidationError::NegativeCalories(self.calories));
        }
        Ok(())
    }
}
