//! Question categories.

use crate::identifiers::CategoryId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display label, stored in the `type` column
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// Category labels keyed by id, ordered by id
///
/// Serializes as a JSON object (`{"1": "Science", ...}`), which is what the
/// listing endpoints return.
pub type CategoryLabels = BTreeMap<CategoryId, String>;

/// Build an id → label map from a set of categories
pub fn labels<'a>(categories: impl IntoIterator<Item = &'a Category>) -> CategoryLabels {
    categories
        .into_iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_type_label() {
        let json = serde_json::to_value(Category::new(1, "Science")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "Science");
    }

    #[test]
    fn test_labels_are_ordered_by_id() {
        let categories = vec![
            Category::new(3, "Geography"),
            Category::new(1, "Science"),
            Category::new(2, "Art"),
        ];

        let map = labels(&categories);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"Science","2":"Art","3":"Geography"}"#);
    }
}
