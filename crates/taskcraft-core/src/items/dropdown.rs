//! Dropdown question.

use super::{ChoiceOption, QuestionValue};
use crate::wire::{WireProperties, WireQuestion, WireTag, WireType};
use serde::{Deserialize, Serialize};

/// A question answered by picking one option from a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Dropdown {
    pub answers: Vec<ChoiceOption>,
}

impl Dropdown {
    /// Minimum number of answer placeholders for a new question.
    pub const DEFAULT_ANSWER_COUNT: usize = 2;

    /// Create the default payload: two placeholder answers.
    pub fn empty() -> Self {
        Self {
            answers: (0..Self::DEFAULT_ANSWER_COUNT)
                .map(|_| ChoiceOption::empty())
                .collect(),
        }
    }

    /// Check if every answer is still at its placeholder value.
    pub fn is_empty(&self) -> bool {
        self.answers.iter().all(ChoiceOption::is_placeholder)
    }

    /// Build from another payload, reusing answers where compatible.
    ///
    /// Compatible sources: single-select and multi-select. Ranking answers
    /// are ordered rather than selectable, so they are not carried over.
    pub fn from_conversion(source: &QuestionValue) -> Self {
        match source {
            QuestionValue::SingleSelect(v) => Self {
                answers: v.answers.clone(),
            },
            QuestionValue::MultiSelect(v) => Self {
                answers: v.answers.clone(),
            },
            _ => Self::empty(),
        }
    }

    /// Parse a wire record; `None` when the discriminators don't match.
    pub fn from_wire(item: &WireQuestion) -> Option<Self> {
        if item.kind != WireType::Choice || item.tag != WireTag::Dropdown {
            return None;
        }
        Some(Self {
            answers: item.item_properties.choice_answers(),
        })
    }

    /// Serialize to wire properties.
    pub fn wire_properties(&self) -> WireProperties {
        WireProperties::from_choice_answers(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_from_single_select_reuses_answers() {
        let source = QuestionValue::SingleSelect(super::super::SingleSelect {
            answers: vec![ChoiceOption::new("Yes"), ChoiceOption::new("No")],
            include_other: false,
        });
        let value = Dropdown::from_conversion(&source);
        assert_eq!(value.answers.len(), 2);
        assert_eq!(value.answers[0].value, "Yes");
        assert_eq!(value.answers[1].value, "No");
    }

    #[test]
    fn test_conversion_from_rank_uses_defaults() {
        let source = QuestionValue::Rank(super::super::Rank {
            answers: vec![ChoiceOption::new("First"), ChoiceOption::new("Second")],
        });
        let value = Dropdown::from_conversion(&source);
        assert!(value.is_empty());
    }
}
