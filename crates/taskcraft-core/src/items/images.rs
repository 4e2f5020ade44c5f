//! Image-selection question.

use super::ItemId;
use crate::wire::{WireOption, WireProperties, WireQuestion, WireTag, WireType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One selectable image answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageOption {
    pub id: ItemId,
    /// Uploaded image reference (URL or asset key). Empty = placeholder.
    pub image: String,
    /// Optional caption shown under the image.
    pub label: String,
    /// Whether the author has interacted with this slot. New questions
    /// start with two touched slots and one untouched trailing slot.
    pub touched: bool,
}

impl ImageOption {
    /// Create a placeholder slot.
    pub fn empty(touched: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            image: String::new(),
            label: String::new(),
            touched,
        }
    }

    /// Check if the slot still holds its placeholder values.
    pub fn is_placeholder(&self) -> bool {
        self.image.is_empty() && self.label.is_empty()
    }
}

/// A question answered by picking one or more images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Images {
    pub answers: Vec<ImageOption>,
    /// Whether more than one image may be selected.
    pub multiple: bool,
}

impl Images {
    /// Create the default payload: three placeholder slots, the first two
    /// touched, the last one not.
    pub fn empty() -> Self {
        Self {
            answers: vec![
                ImageOption::empty(true),
                ImageOption::empty(true),
                ImageOption::empty(false),
            ],
            multiple: false,
        }
    }

    /// Check if every slot is still at its placeholder value.
    pub fn is_empty(&self) -> bool {
        self.answers.iter().all(ImageOption::is_placeholder)
    }

    /// Parse a wire record; `None` when the discriminators don't match.
    pub fn from_wire(item: &WireQuestion) -> Option<Self> {
        if item.kind != WireType::Choice || item.tag != WireTag::Image {
            return None;
        }
        let answers = item
            .item_properties
            .options
            .iter()
            .map(|option| ImageOption {
                id: Uuid::new_v4(),
                image: option.value.clone(),
                label: option.label.clone(),
                touched: !option.value.is_empty(),
            })
            .collect();
        Some(Self {
            answers,
            multiple: item.item_properties.multiple.unwrap_or(false),
        })
    }

    /// Serialize to wire properties: image references as option values,
    /// captions as labels.
    pub fn wire_properties(&self) -> WireProperties {
        WireProperties {
            options: self
                .answers
                .iter()
                .map(|answer| WireOption {
                    value: answer.image.clone(),
                    label: answer.label.clone(),
                })
                .collect(),
            multiple: Some(self.multiple),
            ..WireProperties::default()
        }
    }
}
