//! Food use-case service.
//!
//! # Responsibility
//! - Provide stable catalog entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::food::{Food, FoodId, NewFood};
use crate::repo::food_repo::{FoodRepository, RepoResult};

/// Use-case service wrapper for food catalog operations.
pub struct FoodService<R: FoodRepository> {
    repo: R,
}

impl<R: FoodRepository> FoodService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a food to the catalog from raw name/calories input.
    ///
    /// # Contract
    /// - Returns the stored record with its store-assigned id.
    /// - Duplicate names surface as `RepoError::NameTaken`.
    pub fn create_food(&self, name: impl Into<String>, calories: i64) -> RepoResult<Food> {
        self.repo.create_food(&NewFood::new(name, calories))
    }

    /// Gets one food by stable id.
    pub fn find_food(&self, id: FoodId) -> RepoResult<Option<Food>> {
        self.repo.find_food(id)
    }

    /// Replaces name and calories of an existing food.
    ///
    /// Returns repository-level not-found or validation errors unchanged.
    pub fn update_food(
        &self,
        id: FoodId,
        name: impl Into<String>,
        calories: i64,
    ) -> RepoResult<Food> {
        self.repo.update_food(id, &NewFood::new(name, calories))
    }

    /// Deletes one food by id and returns the deleted-row count.
    pub fn destroy_food(&self, id: FoodId) -> RepoResult<usize> {
        self.repo.destroy_food(id)
    }

    /// Searches the catalog by literal name fragment.
    pub fn search_foods(&self, fragment: &str) -> RepoResult<Vec<Food>> {
        self.repo.search_foods(fragment)
    }
}
