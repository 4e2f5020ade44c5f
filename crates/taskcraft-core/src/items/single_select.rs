//! Single-selection (radio) question.

use super::{ChoiceOption, QuestionValue};
use crate::wire::{WireProperties, WireQuestion, WireTag, WireType};
use serde::{Deserialize, Serialize};

/// A question answered by picking exactly one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SingleSelect {
    pub answers: Vec<ChoiceOption>,
    /// Whether a free-text "Other" option is offered.
    pub include_other: bool,
}

impl SingleSelect {
    /// Minimum number of answer placeholders for a new question.
    pub const DEFAULT_ANSWER_COUNT: usize = 2;

    /// Create the default payload: two placeholder answers, no "Other".
    pub fn empty() -> Self {
        Self {
            answers: (0..Self::DEFAULT_ANSWER_COUNT)
                .map(|_| ChoiceOption::empty())
                .collect(),
            include_other: false,
        }
    }

    /// Check if every answer is still at its placeholder value.
    pub fn is_empty(&self) -> bool {
        self.answers.iter().all(ChoiceOption::is_placeholder)
    }

    /// Build from another payload, reusing answers where compatible.
    ///
    /// Compatible sources: multi-select (answers and the "Other" flag),
    /// dropdown, and ranking. Everything else falls back to defaults.
    pub fn from_conversion(source: &QuestionValue) -> Self {
        match source {
            QuestionValue::MultiSelect(v) => Self {
                answers: v.answers.clone(),
                include_other: v.include_other,
            },
            QuestionValue::Dropdown(v) => Self {
                answers: v.answers.clone(),
                include_other: false,
            },
            QuestionValue::Rank(v) => Self {
                answers: v.answers.clone(),
                include_other: false,
            },
            _ => Self::empty(),
        }
    }

    /// Parse a wire record; `None` when the discriminators don't match.
    pub fn from_wire(item: &WireQuestion) -> Option<Self> {
        if item.kind != WireType::Choice || item.tag != WireTag::Radio {
            return None;
        }
        Some(Self {
            answers: item.item_properties.choice_answers(),
            include_other: item.item_properties.include_other.unwrap_or(false),
        })
    }

    /// Serialize to wire properties. Missing answers become an empty
    /// options array rather than an error.
    pub fn wire_properties(&self) -> WireProperties {
        let mut props = WireProperties::from_choice_answers(&self.answers);
        props.include_other = Some(self.include_other);
        props
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_two_placeholders() {
        let value = SingleSelect::empty();
        assert_eq!(value.answers.len(), SingleSelect::DEFAULT_ANSWER_COUNT);
        assert!(value.is_empty());
        assert!(!value.include_other);
    }

    #[test]
    fn test_conversion_from_multi_select_carries_other_flag() {
        let source = QuestionValue::MultiSelect(super::super::MultiSelect {
            answers: vec![ChoiceOption::new("A"), ChoiceOption::new("B")],
            include_other: true,
        });
        let value = SingleSelect::from_conversion(&source);
        assert_eq!(value.answers.len(), 2);
        assert_eq!(value.answers[0].value, "A");
        assert!(value.include_other);
    }

    #[test]
    fn test_conversion_from_slider_uses_defaults() {
        let source = QuestionValue::Slider(super::super::Slider::empty());
        let value = SingleSelect::from_conversion(&source);
        assert!(value.is_empty());
    }
}
