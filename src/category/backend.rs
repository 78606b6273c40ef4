//! The persistence contract used by the category store.

use std::fmt::Debug;

use crate::{
    Error,
    category::{Category, CategoryDraft, CategoryId, CategoryName},
};

/// Finds, saves and deletes categories in some kind of storage.
///
/// Implementations own identity assignment and the name uniqueness
/// constraint, and serialise concurrent access themselves.
pub trait CategoryBackend: Debug + Send + Sync {
    /// Get all categories in insertion order.
    fn find_all(&self) -> Result<Vec<Category>, Error>;

    /// Get the category with `category_id`, if there is one.
    fn find_by_id(&self, category_id: CategoryId) -> Result<Option<Category>, Error>;

    /// Get the category named exactly `name`, if there is one.
    fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, Error>;

    /// Insert `draft` if it has no ID, otherwise replace the name of the
    /// existing category with that ID.
    ///
    /// # Errors
    /// Returns [Error::DuplicateCategoryName] if another category already has
    /// the draft's name and [Error::CategoryNotFound] if the draft's ID does
    /// not match a category.
    fn save(&self, draft: CategoryDraft) -> Result<Category, Error>;

    /// Remove `category` permanently.
    ///
    /// # Errors
    /// Returns [Error::CategoryNotFound] if the category has already been removed.
    fn delete(&self, category: &Category) -> Result<(), Error>;
}
