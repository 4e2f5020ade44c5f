//! Wire-format records and conversion to/from the editor model.
//!
//! The external API represents every question as a record with a `type`
//! discriminator, a `tag` sub-discriminator, a `required` flag (the
//! inverse of the editor's `optional`), free-text `title`/`explanation`,
//! and a type-specific `itemProperties` payload.

use crate::items::{
    ChoiceOption, DateTime, Dropdown, Images, ItemId, MultiSelect, OpenEnded, Question,
    QuestionValue, Rank, SingleSelect, Slider,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Top-level wire discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireType {
    Choice,
    Scale,
    Text,
    #[serde(rename = "DATETIME")]
    DateTime,
}

/// Wire sub-discriminator; distinguishes the choice-like variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireTag {
    Radio,
    Checkbox,
    Dropdown,
    Image,
    Rank,
    Slider,
    Text,
    #[serde(rename = "DATETIME")]
    DateTime,
}

/// One wire-format answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WireOption {
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// Type-specific wire payload. Fields irrelevant to a given type are
/// absent on the wire; parsing tolerates missing fields throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WireProperties {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<WireOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_other: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_range: Option<bool>,
}

impl WireProperties {
    /// Build choice-like properties from editor answers. Missing answers
    /// produce an empty options array, never an error.
    pub fn from_choice_answers(answers: &[ChoiceOption]) -> Self {
        Self {
            options: answers
                .iter()
                .map(|answer| WireOption {
                    value: answer.value.clone(),
                    label: String::new(),
                })
                .collect(),
            ..Self::default()
        }
    }

    /// Rebuild editor answers from the options array, assigning fresh
    /// identifiers (option ids are editor-local and not on the wire).
    pub fn choice_answers(&self) -> Vec<ChoiceOption> {
        self.options
            .iter()
            .map(|option| ChoiceOption::new(option.value.clone()))
            .collect()
    }
}

/// One question as the external API sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: WireType,
    pub tag: WireTag,
    pub title: String,
    pub explanation: String,
    pub required: bool,
    pub item_properties: WireProperties,
}

/// One section of a published task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WireSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub questions: Vec<WireQuestion>,
}

/// A whole task as published to the participant-facing runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WireTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<WireSection>,
}

impl Question {
    /// Serialize to the wire format.
    ///
    /// Partially-populated questions serialize with default/empty wire
    /// fields; the one exception is the slider, which cannot be
    /// represented without both endpoints and yields `None` instead.
    pub fn to_wire(&self) -> Option<WireQuestion> {
        let (kind, tag, item_properties) = match &self.value {
            QuestionValue::SingleSelect(v) => {
                (WireType::Choice, WireTag::Radio, v.wire_properties())
            }
            QuestionValue::MultiSelect(v) => {
                (WireType::Choice, WireTag::Checkbox, v.wire_properties())
            }
            QuestionValue::Dropdown(v) => {
                (WireType::Choice, WireTag::Dropdown, v.wire_properties())
            }
            QuestionValue::Rank(v) => (WireType::Choice, WireTag::Rank, v.wire_properties()),
            QuestionValue::Images(v) => (WireType::Choice, WireTag::Image, v.wire_properties()),
            QuestionValue::Slider(v) => {
                (WireType::Scale, WireTag::Slider, v.wire_properties()?)
            }
            QuestionValue::OpenEnded(v) => (WireType::Text, WireTag::Text, v.wire_properties()),
            QuestionValue::DateTime(v) => {
                (WireType::DateTime, WireTag::DateTime, v.wire_properties())
            }
        };
        Some(WireQuestion {
            id: self.id.to_string(),
            kind,
            tag,
            title: self.title.clone(),
            explanation: self.explanation.clone(),
            required: !self.optional,
            item_properties,
        })
    }

    /// Parse a wire record by dispatching on its discriminators.
    ///
    /// Returns `None` for discriminator combinations no handler claims;
    /// callers skip such records rather than failing the import.
    pub fn from_wire(item: &WireQuestion) -> Option<Question> {
        let value = match (item.kind, item.tag) {
            (WireType::Choice, WireTag::Radio) => {
                SingleSelect::from_wire(item).map(QuestionValue::SingleSelect)
            }
            (WireType::Choice, WireTag::Checkbox) => {
                MultiSelect::from_wire(item).map(QuestionValue::MultiSelect)
            }
            (WireType::Choice, WireTag::Dropdown) => {
                Dropdown::from_wire(item).map(QuestionValue::Dropdown)
            }
            (WireType::Choice, WireTag::Rank) => Rank::from_wire(item).map(QuestionValue::Rank),
            (WireType::Choice, WireTag::Image) => {
                Images::from_wire(item).map(QuestionValue::Images)
            }
            (WireType::Scale, WireTag::Slider) => {
                Slider::from_wire(item).map(QuestionValue::Slider)
            }
            (WireType::Text, WireTag::Text) => {
                OpenEnded::from_wire(item).map(QuestionValue::OpenEnded)
            }
            (WireType::DateTime, WireTag::DateTime) => {
                DateTime::from_wire(item).map(QuestionValue::DateTime)
            }
            _ => None,
        }?;
        Some(Question {
            id: parse_wire_id(&item.id),
            title: item.title.clone(),
            explanation: item.explanation.clone(),
            optional: !item.required,
            value,
        })
    }
}

/// Wire ids are plain strings; records authored elsewhere may carry ids
/// that are not UUIDs, in which case the import assigns a fresh one.
fn parse_wire_id(id: &str) -> ItemId {
    Uuid::parse_str(id).unwrap_or_else(|_| Uuid::new_v4())
}
