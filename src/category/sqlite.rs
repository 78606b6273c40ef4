//! Implements a SQLite backed category store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{
    Error,
    category::{Category, CategoryBackend, CategoryDraft, CategoryId, CategoryName},
};

/// Persists categories to a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteCategoryBackend {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCategoryBackend {
    /// Create a category backend with a SQLite database.
    ///
    /// This function will create the category table if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_category_table(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl CategoryBackend for SQLiteCategoryBackend {
    fn find_all(&self) -> Result<Vec<Category>, Error> {
        self.connection()?
            .prepare("SELECT id, name FROM category ORDER BY id ASC;")?
            .query_map([], map_row)?
            .map(|maybe_category| maybe_category.map_err(|error| error.into()))
            .collect()
    }

    fn find_by_id(&self, category_id: CategoryId) -> Result<Option<Category>, Error> {
        self.connection()?
            .prepare("SELECT id, name FROM category WHERE id = :id;")?
            .query_row(&[(":id", &category_id)], map_row)
            .optional()
            .map_err(|error| error.into())
    }

    fn find_by_name(&self, name: &CategoryName) -> Result<Option<Category>, Error> {
        self.connection()?
            .prepare("SELECT id, name FROM category WHERE name = :name;")?
            .query_row(&[(":name", name.as_ref())], map_row)
            .optional()
            .map_err(|error| error.into())
    }

    /// # Errors
    /// This function will return an error if the name is taken, the ID does
    /// not exist, or there is an SQL error.
    fn save(&self, draft: CategoryDraft) -> Result<Category, Error> {
        let connection = self.connection()?;

        let Some(id) = draft.id else {
            connection
                .execute(
                    "INSERT INTO category (name) VALUES (?1);",
                    (draft.name.as_ref(),),
                )
                .map_err(|error| map_write_error(error, &draft.name))?;

            let id = connection.last_insert_rowid();

            return Ok(Category {
                id,
                name: draft.name,
            });
        };

        let rows_affected = connection
            .execute(
                "UPDATE category SET name = ?1 WHERE id = ?2;",
                (draft.name.as_ref(), id),
            )
            .map_err(|error| map_write_error(error, &draft.name))?;

        if rows_affected == 0 {
            return Err(Error::CategoryNotFound(id));
        }

        Ok(Category {
            id,
            name: draft.name,
        })
    }

    fn delete(&self, category: &Category) -> Result<(), Error> {
        let rows_affected = self
            .connection()?
            .execute("DELETE FROM category WHERE id = ?1;", [category.id])?;

        if rows_affected == 0 {
            return Err(Error::CategoryNotFound(category.id));
        }

        Ok(())
    }
}

/// Initialize the category table.
///
/// `AUTOINCREMENT` stops SQLite from handing out the ID of a deleted row again.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );",
    )?;

    Ok(())
}

fn map_write_error(error: rusqlite::Error, name: &CategoryName) -> Error {
    match error {
        // Code 2067 occurs when a UNIQUE constraint failed.
        rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
            if sql_error.extended_code == 2067 && desc.ends_with("category.name") =>
        {
            Error::DuplicateCategoryName(name.clone())
        }
        error => error.into(),
    }
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let name = CategoryName::new_unchecked(&raw_name);

    Ok(Category { id, name })
}

#[cfg(test)]
mod sqlite_category_backend_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        category::{Category, CategoryBackend, CategoryDraft, CategoryName},
    };

    use super::SQLiteCategoryBackend;

    fn get_test_backend() -> SQLiteCategoryBackend {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");

        SQLiteCategoryBackend::new(connection).expect("Could not create category table")
    }

    fn insert(backend: &SQLiteCategoryBackend, name: &str) -> Category {
        backend
            .save(CategoryDraft::new(CategoryName::new_unchecked(name)))
            .expect("Could not create test category")
    }

    #[test]
    fn save_without_id_inserts() {
        let backend = get_test_backend();
        let name = CategoryName::new("Categorically a category").unwrap();

        let category = backend.save(CategoryDraft::new(name.clone()));

        let got_category = category.expect("Could not create category");
        assert!(got_category.id > 0);
        assert_eq!(got_category.name, name);
    }

    #[test]
    fn find_by_id_succeeds() {
        let backend = get_test_backend();
        let inserted_category = insert(&backend, "Foo");

        let selected_category = backend.find_by_id(inserted_category.id);

        assert_eq!(Ok(Some(inserted_category)), selected_category);
    }

    #[test]
    fn find_by_id_with_invalid_id_returns_none() {
        let backend = get_test_backend();
        let inserted_category = insert(&backend, "Foo");

        let selected_category = backend.find_by_id(inserted_category.id + 123);

        assert_eq!(selected_category, Ok(None));
    }

    #[test]
    fn find_by_name_is_case_sensitive() {
        let backend = get_test_backend();
        let inserted_category = insert(&backend, "Books");

        assert_eq!(
            backend.find_by_name(&CategoryName::new_unchecked("Books")),
            Ok(Some(inserted_category))
        );
        assert_eq!(
            backend.find_by_name(&CategoryName::new_unchecked("books")),
            Ok(None)
        );
    }

    #[test]
    fn find_all_returns_insertion_order() {
        let backend = get_test_backend();
        let want = vec![insert(&backend, "Foo"), insert(&backend, "Bar")];

        let got = backend.find_all().expect("Could not get all categories");

        assert_eq!(want, got);
    }

    #[test]
    fn insert_with_duplicate_name_fails() {
        let backend = get_test_backend();
        insert(&backend, "Foo");
        let name = CategoryName::new_unchecked("Foo");

        let result = backend.save(CategoryDraft::new(name.clone()));

        assert_eq!(result, Err(Error::DuplicateCategoryName(name)));
        assert_eq!(backend.find_all().unwrap().len(), 1);
    }

    #[test]
    fn save_with_id_updates_in_place() {
        let backend = get_test_backend();
        let category = insert(&backend, "Original");
        let new_name = CategoryName::new_unchecked("Updated");

        let result = backend.save(CategoryDraft {
            id: Some(category.id),
            name: new_name.clone(),
        });

        let want = Category {
            id: category.id,
            name: new_name,
        };
        assert_eq!(result, Ok(want.clone()));
        assert_eq!(backend.find_all(), Ok(vec![want]));
    }

    #[test]
    fn save_with_invalid_id_returns_not_found() {
        let backend = get_test_backend();

        let result = backend.save(CategoryDraft {
            id: Some(999999),
            name: CategoryName::new_unchecked("Updated"),
        });

        assert_eq!(result, Err(Error::CategoryNotFound(999999)));
    }

    #[test]
    fn rename_onto_existing_name_fails() {
        let backend = get_test_backend();
        insert(&backend, "Foo");
        let bar = insert(&backend, "Bar");
        let name = CategoryName::new_unchecked("Foo");

        let result = backend.save(CategoryDraft {
            id: Some(bar.id),
            name: name.clone(),
        });

        assert_eq!(result, Err(Error::DuplicateCategoryName(name)));
        assert_eq!(backend.find_by_id(bar.id), Ok(Some(bar)));
    }

    #[test]
    fn delete_succeeds() {
        let backend = get_test_backend();
        let category = insert(&backend, "ToDelete");

        let result = backend.delete(&category);

        assert!(result.is_ok());
        assert_eq!(backend.find_by_id(category.id), Ok(None));
    }

    #[test]
    fn delete_missing_category_returns_not_found() {
        let backend = get_test_backend();
        let category = insert(&backend, "ToDelete");
        backend.delete(&category).unwrap();

        let result = backend.delete(&category);

        assert_eq!(result, Err(Error::CategoryNotFound(category.id)));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let backend = get_test_backend();
        let first = insert(&backend, "Foo");
        backend.delete(&first).unwrap();

        let second = insert(&backend, "Foo");

        assert!(second.id > first.id);
    }
}
