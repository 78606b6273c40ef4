//! Implements an in-memory category store.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    Error,
    category::{Category, CategoryBackend, CategoryDraft, CategoryId, CategoryName},
};

#[derive(Debug, Default)]
struct Categories {
    last_id: CategoryId,
    // IDs only ever increase, so key order is insertion order.
    by_id: BTreeMap<CategoryId, CategoryName>,
}

impl Categories {
    fn name_taken(&self, name: &CategoryName, except: Option<CategoryId>) -> bool {
        self.by_id
            .iter()
            .any(|(id, existing)| existing == name && Some(*id) != except)
    }
}

/// Keeps categories in a map for the lifetime of the process.
///
/// Clones share the same categories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategoryBackend {
    categories: Arc<Mutex<Categories>>,
}

impl InMemoryCategoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn categories(&self) -> Result<MutexGuard<'_, Categories>, Error> {
        self.categories
            .lock()
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl CategoryBackend for InMemoryCategoryBackend {
    fn find_all(&self) -> Result<Vec<Category>, Error> {
        Ok(self
            .categories()?
            .by_id
            .iter()
            .map(|(id, name)| Category {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    fn find_by_id(&self, category_id: CategoryId) -> Result<Option<Category>, Error> {
        Ok(self
            .categories()?
            .by_id
            .get(&category_id)
            .map(|name| Category {
                id: category_id,
                name: name.clone(),
            }))
    }

    fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, Error> {
        Ok(self
            .categories()?
            .by_id
            .iter()
            .find(|(_, existing)| *existing == name)
            .map(|(id, existing)| Category {
                id: *id,
                name: existing.clone(),
            }))
    }

    fn save(&self, draft: CategoryDraft) -> Result<Category, Error> {
        let mut categories = self.categories()?;

        if let Some(id) = draft.id.filter(|id| !categories.by_id.contains_key(id)) {
            return Err(Error::CategoryNotFound(id));
        }

        if categories.name_taken(&draft.name, draft.id) {
            return Err(Error::DuplicateCategoryName(draft.name));
        }

        let id = match draft.id {
            Some(id) => id,
            None => {
                categories.last_id += 1;
                categories.last_id
            }
        };

        categories.by_id.insert(id, draft.name.clone());

        Ok(Category {
            id,
            name: draft.name,
        })
    }

    fn delete(&self, category: &Category) -> Result<(), Error> {
        match self.categories()?.by_id.remove(&category.id) {
            Some(_) => Ok(()),
            None => Err(Error::CategoryNotFound(category.id)),
        }
    }
}
