//! The category store, which enforces the rules for creating, updating and
//! deleting categories on top of a [CategoryBackend].

use std::sync::Arc;

use crate::{
    Error,
    category::{Category, CategoryBackend, CategoryDraft, CategoryId},
};

/// Creates, lists, updates and deletes categories.
///
/// The store keeps no state of its own, every call goes to the backend.
#[derive(Debug, Clone)]
pub struct CategoryStore {
    backend: Arc<dyn CategoryBackend>,
}

impl CategoryStore {
    /// Create a store that keeps its categories in `backend`.
    pub fn new(backend: impl CategoryBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get all categories in the order they were created.
    pub fn list(&self) -> Result<Vec<Category>, Error> {
        self.backend.find_all()
    }

    /// Create a category from `category` and return it with its new ID.
    ///
    /// Any ID on `category` is ignored, the backend assigns a fresh one.
    ///
    /// # Errors
    /// Returns [Error::DuplicateCategoryName] if a category with the same name
    /// already exists.
    pub fn create(&self, category: CategoryDraft) -> Result<Category, Error> {
        if self.backend.find_by_name(&category.name)?.is_some() {
            return Err(Error::DuplicateCategoryName(category.name));
        }

        self.backend.save(CategoryDraft {
            id: None,
            name: category.name,
        })
    }

    /// Replace the name of the category with `category_id` and return the
    /// updated category.
    ///
    /// The ID on `category` is overwritten with `category_id`.
    ///
    /// Unlike [CategoryStore::create] there is no duplicate name check here;
    /// the backend's uniqueness constraint still applies.
    ///
    /// # Errors
    /// Returns [Error::CategoryNotFound] if there is no category with `category_id`.
    pub fn update(
        &self,
        category: CategoryDraft,
        category_id: CategoryId,
    ) -> Result<Category, Error> {
        self.backend
            .find_by_id(category_id)?
            .ok_or(Error::CategoryNotFound(category_id))?;

        self.backend.save(CategoryDraft {
            id: Some(category_id),
            name: category.name,
        })
    }

    /// Delete the category with `category_id` and return a confirmation message.
    ///
    /// # Errors
    /// Returns [Error::CategoryNotFound] if there is no category with `category_id`.
    pub fn delete(&self, category_id: CategoryId) -> Result<String, Error> {
        let category = self
            .backend
            .find_by_id(category_id)?
            .ok_or(Error::CategoryNotFound(category_id))?;

        self.backend.delete(&category)?;

        Ok(format!(
            "category with categoryId: {category_id} has been deleted"
        ))
    }
}
