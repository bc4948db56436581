//! Domain model for the food catalog.
//!
//! # Responsibility
//! - Define the canonical record persisted in the `foods` table.
//! - Own write-boundary validation rules.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `FoodId`.
//! - Write models must pass `validate()` before reaching persistence.

pub mod food;
