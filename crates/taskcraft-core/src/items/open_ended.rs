//! Open-ended (free text) question.

use crate::wire::{WireProperties, WireQuestion, WireTag, WireType};
use serde::{Deserialize, Serialize};

/// A question answered with free text. Carries no answer configuration;
/// all author content lives in the question's common fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OpenEnded {}

impl OpenEnded {
    /// Create the default payload.
    pub fn empty() -> Self {
        Self {}
    }

    /// There is no type-specific content to enter.
    pub fn is_empty(&self) -> bool {
        true
    }

    /// Parse a wire record; `None` when the discriminators don't match.
    pub fn from_wire(item: &WireQuestion) -> Option<Self> {
        if item.kind != WireType::Text || item.tag != WireTag::Text {
            return None;
        }
        Some(Self {})
    }

    /// Serialize to wire properties.
    pub fn wire_properties(&self) -> WireProperties {
        WireProperties::default()
    }
}
