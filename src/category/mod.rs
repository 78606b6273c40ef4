//! Category management: the domain types, the store that enforces the
//! category rules, its storage backends and the HTTP endpoints.

mod backend;
mod create;
mod delete;
mod domain;
mod edit;
mod list;
mod memory;
mod sqlite;
mod store;

pub use backend::CategoryBackend;
pub use create::create_category_endpoint;
pub use delete::delete_category_endpoint;
pub use domain::{Category, CategoryDraft, CategoryId, CategoryName, CategoryPayload};
pub use edit::update_category_endpoint;
pub use list::list_categories_endpoint;
pub use memory::InMemoryCategoryBackend;
pub use sqlite::SQLiteCategoryBackend;
pub use store::CategoryStore;
