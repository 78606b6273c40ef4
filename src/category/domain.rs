//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty category name.
///
/// Names are kept verbatim, so two names are only equal if they match
/// exactly, including case and surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty or only contains whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        if name.trim().is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryName::new(&value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a category.
pub type CategoryId = i64;

/// A live category, e.g. 'Electronics' or 'Books'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category {
    /// The ID assigned when the category was created.
    #[serde(rename = "categoryId")]
    pub id: CategoryId,
    /// The unique name of the category.
    #[serde(rename = "categoryName")]
    pub name: CategoryName,
}

/// A category that may not have been persisted yet.
///
/// Backends insert a draft without an ID and update the row in place when the
/// draft carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    /// The ID of the category to update, or `None` to insert a new one.
    pub id: Option<CategoryId>,
    /// The name to save.
    pub name: CategoryName,
}

impl CategoryDraft {
    /// A draft for a category that has not been saved.
    pub fn new(name: CategoryName) -> Self {
        Self { id: None, name }
    }
}

/// JSON body for creating and updating categories.
///
/// `categoryId` is accepted so clients can send back a category they fetched,
/// but it never decides which record is written.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryPayload {
    /// The ID the client has for the category, if any.
    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// The unvalidated category name.
    #[serde(rename = "categoryName")]
    pub category_name: String,
}

impl TryFrom<CategoryPayload> for CategoryDraft {
    type Error = Error;

    fn try_from(payload: CategoryPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            id: payload.category_id,
            name: CategoryName::new(&payload.category_name)?,
        })
    }
}
