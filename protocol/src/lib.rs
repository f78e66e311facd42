//! Wire types of the jService trivia API.
//!
//! Only the fields the board needs are modeled; anything else in the payload is ignored.
#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Identifier the API assigns to a category.
pub type CategoryId = u64;

/// Base URL of the public jService deployment.
pub const DEFAULT_API_BASE: &str = "http://jservice.io/api";

/// Number of categories the public index enumerates, used to bound random offsets.
pub const DEFAULT_CATEGORY_POOL_SIZE: u32 = 18413;

/// One entry of `GET categories`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    pub clues_count: u32,
}

/// Response of `GET category`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    pub title: String,
    pub clues_count: u32,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

impl CategoryDetail {
    pub fn summary(&self) -> CategorySummary {
        CategorySummary {
            id: self.id,
            title: self.title.clone(),
            clues_count: self.clues_count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub value: Option<u32>,
}

/// URL builders for the two endpoints the board uses.
pub mod endpoint {
    use super::CategoryId;
    use alloc::format;
    use alloc::string::String;

    fn trim(base: &str) -> &str {
        base.trim_end_matches('/')
    }

    /// `GET categories?count=1&offset=<offset>`
    pub fn category_at(base: &str, offset: u32) -> String {
        format!("{}/categories?count=1&offset={}", trim(base), offset)
    }

    /// `GET category?id=<id>`
    pub fn category(base: &str, id: CategoryId) -> String {
        format!("{}/category?id={}", trim(base), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn decodes_category_listing() {
        let body = r#"[{"id":11531,"title":"mixed bag","clues_count":5}]"#;
        let listing: Vec<CategorySummary> = serde_json::from_str(body).unwrap();

        assert_eq!(
            listing,
            vec![CategorySummary {
                id: 11531,
                title: "mixed bag".to_string(),
                clues_count: 5,
            }]
        );
    }

    #[test]
    fn decodes_category_detail_ignoring_extra_fields() {
        let body = r#"{
            "id": 1,
            "title": "Math",
            "clues_count": 2,
            "clues": [
                {"id": 10, "answer": "4", "question": "2+2", "value": 200,
                 "airdate": "1996-01-01T12:00:00.000Z", "category_id": 1, "invalid_count": null},
                {"id": 11, "answer": "2", "question": "1+1", "value": null}
            ]
        }"#;
        let detail: CategoryDetail = serde_json::from_str(body).unwrap();

        assert_eq!(detail.title, "Math");
        assert_eq!(detail.clues.len(), 2);
        assert_eq!(detail.clues[0].question, "2+2");
        assert_eq!(detail.clues[0].value, Some(200));
        assert_eq!(detail.clues[1].value, None);
        assert_eq!(detail.summary().clues_count, 2);
    }

    #[test]
    fn endpoints_tolerate_trailing_slash() {
        assert_eq!(
            endpoint::category_at("http://jservice.io/api/", 42),
            "http://jservice.io/api/categories?count=1&offset=42"
        );
        assert_eq!(
            endpoint::category(DEFAULT_API_BASE, 7),
            "http://jservice.io/api/category?id=7"
        );
    }
}
