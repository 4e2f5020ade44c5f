//! Question definitions for survey and activity tasks.

mod date_time;
mod dropdown;
mod images;
mod multi_select;
mod open_ended;
mod rank;
mod single_select;
mod slider;

pub use date_time::DateTime;
pub use dropdown::Dropdown;
pub use images::{ImageOption, Images};
pub use multi_select::MultiSelect;
pub use open_ended::OpenEnded;
pub use rank::Rank;
pub use single_select::SingleSelect;
pub use slider::{ScaleBound, Slider};

use crate::reorder::{DragTag, Draggable};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for questions and answer options.
pub type ItemId = Uuid;

/// The closed set of question type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    SingleSelect,
    MultiSelect,
    Dropdown,
    Rank,
    Images,
    Slider,
    OpenEnded,
    DateTime,
}

impl QuestionKind {
    /// Get display name for UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            QuestionKind::SingleSelect => "Single Selection",
            QuestionKind::MultiSelect => "Multiple Selection",
            QuestionKind::Dropdown => "Dropdown",
            QuestionKind::Rank => "Ranking",
            QuestionKind::Images => "Image Selection",
            QuestionKind::Slider => "Slider Scale",
            QuestionKind::OpenEnded => "Open-Ended",
            QuestionKind::DateTime => "Date & Time",
        }
    }

    /// Get all available question kinds.
    pub fn all() -> &'static [QuestionKind] {
        &[
            QuestionKind::SingleSelect,
            QuestionKind::MultiSelect,
            QuestionKind::Dropdown,
            QuestionKind::Rank,
            QuestionKind::Images,
            QuestionKind::Slider,
            QuestionKind::OpenEnded,
            QuestionKind::DateTime,
        ]
    }
}

/// What the content editor offers for a question type, beyond the
/// common title/explanation fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditingAffordance {
    /// Editable list of text options; `other_toggle` adds the free-text
    /// "Other" switch.
    OptionList { other_toggle: bool },
    /// Grid of image slots with captions.
    ImageGrid,
    /// Low/high scale bounds with captions.
    ScaleBounds,
    /// Date/time component toggles.
    DateTimeToggles,
    /// No type-specific content editor.
    None,
}

impl QuestionKind {
    /// Describe the content editing affordance for this type.
    pub fn editing_affordance(&self) -> EditingAffordance {
        match self {
            QuestionKind::SingleSelect | QuestionKind::MultiSelect => {
                EditingAffordance::OptionList { other_toggle: true }
            }
            QuestionKind::Dropdown | QuestionKind::Rank => {
                EditingAffordance::OptionList {
                    other_toggle: false,
                }
            }
            QuestionKind::Images => EditingAffordance::ImageGrid,
            QuestionKind::Slider => EditingAffordance::ScaleBounds,
            QuestionKind::OpenEnded => EditingAffordance::None,
            QuestionKind::DateTime => EditingAffordance::DateTimeToggles,
        }
    }
}

/// A selectable answer option for choice-like questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub id: ItemId,
    /// Author-entered option text. Empty string is the placeholder state.
    pub value: String,
}

impl ChoiceOption {
    /// Create an option with the given text.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
        }
    }

    /// Create a placeholder option with no text.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Check if the option still holds its placeholder value.
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Type-specific question payload.
///
/// Adding a new variant is a compile error until every dispatch method
/// below (and the wire conversion in `wire.rs`) handles it; the matches
/// are exhaustive on purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QuestionValue {
    SingleSelect(SingleSelect),
    MultiSelect(MultiSelect),
    Dropdown(Dropdown),
    Rank(Rank),
    Images(Images),
    Slider(Slider),
    OpenEnded(OpenEnded),
    DateTime(DateTime),
}

impl QuestionValue {
    /// Get the type tag of this payload.
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionValue::SingleSelect(_) => QuestionKind::SingleSelect,
            QuestionValue::MultiSelect(_) => QuestionKind::MultiSelect,
            QuestionValue::Dropdown(_) => QuestionKind::Dropdown,
            QuestionValue::Rank(_) => QuestionKind::Rank,
            QuestionValue::Images(_) => QuestionKind::Images,
            QuestionValue::Slider(_) => QuestionKind::Slider,
            QuestionValue::OpenEnded(_) => QuestionKind::OpenEnded,
            QuestionValue::DateTime(_) => QuestionKind::DateTime,
        }
    }

    /// Create the default payload for a type tag.
    pub fn empty(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::SingleSelect => QuestionValue::SingleSelect(SingleSelect::empty()),
            QuestionKind::MultiSelect => QuestionValue::MultiSelect(MultiSelect::empty()),
            QuestionKind::Dropdown => QuestionValue::Dropdown(Dropdown::empty()),
            QuestionKind::Rank => QuestionValue::Rank(Rank::empty()),
            QuestionKind::Images => QuestionValue::Images(Images::empty()),
            QuestionKind::Slider => QuestionValue::Slider(Slider::empty()),
            QuestionKind::OpenEnded => QuestionValue::OpenEnded(OpenEnded::empty()),
            QuestionKind::DateTime => QuestionValue::DateTime(DateTime::empty()),
        }
    }

    /// Check if the payload holds no author-entered content.
    pub fn is_empty(&self) -> bool {
        match self {
            QuestionValue::SingleSelect(v) => v.is_empty(),
            QuestionValue::MultiSelect(v) => v.is_empty(),
            QuestionValue::Dropdown(v) => v.is_empty(),
            QuestionValue::Rank(v) => v.is_empty(),
            QuestionValue::Images(v) => v.is_empty(),
            QuestionValue::Slider(v) => v.is_empty(),
            QuestionValue::OpenEnded(v) => v.is_empty(),
            QuestionValue::DateTime(v) => v.is_empty(),
        }
    }

    /// Build a payload of the target type from an existing payload.
    ///
    /// Answers are reused only where the source shape is structurally
    /// compatible with the target; each target type enumerates its own
    /// compatible sources and substitutes defaults for everything else.
    pub fn converted_from(source: &QuestionValue, target: QuestionKind) -> Self {
        match target {
            QuestionKind::SingleSelect => {
                QuestionValue::SingleSelect(SingleSelect::from_conversion(source))
            }
            QuestionKind::MultiSelect => {
                QuestionValue::MultiSelect(MultiSelect::from_conversion(source))
            }
            QuestionKind::Dropdown => QuestionValue::Dropdown(Dropdown::from_conversion(source)),
            QuestionKind::Rank => QuestionValue::Rank(Rank::from_conversion(source)),
            QuestionKind::Images => QuestionValue::Images(Images::empty()),
            QuestionKind::Slider => QuestionValue::Slider(Slider::empty()),
            QuestionKind::OpenEnded => QuestionValue::OpenEnded(OpenEnded::empty()),
            QuestionKind::DateTime => QuestionValue::DateTime(DateTime::empty()),
        }
    }
}

/// A single question owned by one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier; survives reorders, regenerated on copy.
    pub id: ItemId,
    pub title: String,
    pub explanation: String,
    /// UI flag; the wire format carries the inverse as `required`.
    pub optional: bool,
    pub value: QuestionValue,
}

impl Question {
    /// Create a fully-formed default question of the given type.
    pub fn empty(kind: QuestionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            explanation: String::new(),
            optional: false,
            value: QuestionValue::empty(kind),
        }
    }

    /// Get the type tag of this question.
    pub fn kind(&self) -> QuestionKind {
        self.value.kind()
    }

    /// Check if the question has no author-entered content: title and
    /// explanation blank, and every answer at its placeholder default.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.explanation.is_empty() && self.value.is_empty()
    }

    /// Produce a question of the target type, reusing the common fields
    /// and any structurally compatible answers.
    pub fn convert_to(&self, kind: QuestionKind) -> Question {
        if kind == self.kind() {
            return self.clone();
        }
        Question {
            id: self.id,
            title: self.title.clone(),
            explanation: self.explanation.clone(),
            optional: self.optional,
            value: QuestionValue::converted_from(&self.value, kind),
        }
    }

    /// Regenerate the question's ID with a new unique identifier.
    /// This is used when duplicating questions so copies stay distinct.
    pub fn regenerate_id(&mut self) {
        self.id = Uuid::new_v4();
    }

    /// Deep-copy the question with fresh identifiers throughout.
    pub fn duplicate(&self) -> Question {
        let mut copy = self.clone();
        copy.regenerate_id();
        match &mut copy.value {
            QuestionValue::SingleSelect(v) => regenerate_choice_ids(&mut v.answers),
            QuestionValue::MultiSelect(v) => regenerate_choice_ids(&mut v.answers),
            QuestionValue::Dropdown(v) => regenerate_choice_ids(&mut v.answers),
            QuestionValue::Rank(v) => regenerate_choice_ids(&mut v.answers),
            QuestionValue::Images(v) => {
                for answer in &mut v.answers {
                    answer.id = Uuid::new_v4();
                }
            }
            QuestionValue::Slider(_)
            | QuestionValue::OpenEnded(_)
            | QuestionValue::DateTime(_) => {}
        }
        copy
    }
}

fn regenerate_choice_ids(answers: &mut [ChoiceOption]) {
    for answer in answers {
        answer.id = Uuid::new_v4();
    }
}

impl Draggable for Question {
    fn key(&self) -> Uuid {
        self.id
    }

    fn drag_tag(&self) -> DragTag {
        DragTag::Question
    }
}
