//! Category model

use serde::{Deserialize, Serialize};

use super::ids::CategoryId;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Payload for `POST /api/categories/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }
}

/// Find a category by exact id or case-insensitive name
pub fn find_category<'a>(categories: &'a [Category], query: &str) -> Option<&'a Category> {
    let query = query.trim();
    let lowered = query.to_lowercase();
    categories
        .iter()
        .find(|c| c.id.as_str() == query)
        .or_else(|| categories.iter().find(|c| c.name.to_lowercase() == lowered))
}
