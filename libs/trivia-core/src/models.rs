//! Catalog records and their public representations

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use validator::Validate;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Category id. May reference a category that no longer exists.
    pub category: i64,
    pub difficulty: i64,
}

/// A question category. Read-only from the catalog's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Categories keyed by id, rendered as `{"1": "Science", ...}`.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// Public representation of a [`Question`].
///
/// `category` stays the raw foreign key; it is never resolved to a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            answer: q.answer.clone(),
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

impl From<Question> for QuestionView {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Fields submitted to create a question.
///
/// Every field is optional at this level: whether a missing field is rejected
/// up front or left for the store to refuse is decided by the service.
/// Integer fields accept JSON numbers as well as numeric strings (`"2"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct NewQuestion {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub question: Option<String>,

    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "lenient_i64")]
    #[validate(required)]
    pub category: Option<i64>,

    #[serde(default, deserialize_with = "lenient_i64")]
    #[validate(required)]
    pub difficulty: Option<i64>,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }

    /// Turn the submission into a stored record, if every field is present.
    pub fn into_question(self, id: i64) -> Option<Question> {
        Some(Question {
            id,
            question: self.question?,
            answer: self.answer?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

/// Deserialize an optional integer given either as a number or a numeric string.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("expected an integer, got {n}"))),
        Some(JsonValue::String(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("expected an integer, got \"{s}\""))),
        Some(other) => Err(de::Error::custom(format!(
            "expected an integer, got {other}"
        ))),
    }
}
