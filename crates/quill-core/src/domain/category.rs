use serde::{Deserialize, Serialize};

/// Category entity - posts reference at most one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A category's attributes before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn into_category(self, id: i64) -> Category {
        Category {
            id,
            name: self.name,
        }
    }
}
