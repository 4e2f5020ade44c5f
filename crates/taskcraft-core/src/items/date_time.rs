//! Date & time question.

use crate::wire::{WireProperties, WireQuestion, WireTag, WireType};
use serde::{Deserialize, Serialize};

/// A question answered with a date, a time, or both, optionally as a
/// range. The flags are configuration, not author content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    pub is_date: bool,
    pub is_time: bool,
    pub is_range: bool,
}

impl Default for DateTime {
    fn default() -> Self {
        Self::empty()
    }
}

impl DateTime {
    /// Create the default payload: a single date, no time, no range.
    pub fn empty() -> Self {
        Self {
            is_date: true,
            is_time: false,
            is_range: false,
        }
    }

    /// There is no type-specific content to enter; the flags are
    /// settings rather than authored answers.
    pub fn is_empty(&self) -> bool {
        true
    }

    /// Parse a wire record; `None` when the discriminators don't match.
    pub fn from_wire(item: &WireQuestion) -> Option<Self> {
        if item.kind != WireType::DateTime || item.tag != WireTag::DateTime {
            return None;
        }
        let props = &item.item_properties;
        Some(Self {
            is_date: props.is_date.unwrap_or(true),
            is_time: props.is_time.unwrap_or(false),
            is_range: props.is_range.unwrap_or(false),
        })
    }

    /// Serialize to wire properties.
    pub fn wire_properties(&self) -> WireProperties {
        WireProperties {
            is_date: Some(self.is_date),
            is_time: Some(self.is_time),
            is_range: Some(self.is_range),
            ..WireProperties::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_date() {
        let value = DateTime::empty();
        assert!(value.is_date);
        assert!(!value.is_time);
        assert!(!value.is_range);
        assert!(value.is_empty());
    }
}
