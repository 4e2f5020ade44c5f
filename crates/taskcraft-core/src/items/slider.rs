//! Slider scale question.

use crate::wire::{WireProperties, WireQuestion, WireTag, WireType};
use serde::{Deserialize, Serialize};

/// One endpoint of the slider scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleBound {
    pub value: i64,
    /// Caption shown at this end of the scale.
    pub label: String,
}

impl ScaleBound {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }
}

/// A question answered by moving a slider between two bounds.
///
/// Both bounds are required for serialization; editing state may
/// transiently hold a half-configured scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Slider {
    pub low: Option<ScaleBound>,
    pub high: Option<ScaleBound>,
}

impl Slider {
    /// Default scale range for a new question.
    pub const DEFAULT_LOW: i64 = 0;
    pub const DEFAULT_HIGH: i64 = 10;

    /// Create the default payload: a 0..=10 scale with no captions.
    pub fn empty() -> Self {
        Self {
            low: Some(ScaleBound::new(Self::DEFAULT_LOW)),
            high: Some(ScaleBound::new(Self::DEFAULT_HIGH)),
        }
    }

    /// Check if the scale is still at its default bounds with no
    /// captions. A missing bound counts as empty.
    pub fn is_empty(&self) -> bool {
        let low_default = self
            .low
            .as_ref()
            .is_none_or(|b| b.value == Self::DEFAULT_LOW && b.label.is_empty());
        let high_default = self
            .high
            .as_ref()
            .is_none_or(|b| b.value == Self::DEFAULT_HIGH && b.label.is_empty());
        low_default && high_default
    }

    /// Parse a wire record; `None` when the discriminators don't match.
    pub fn from_wire(item: &WireQuestion) -> Option<Self> {
        if item.kind != WireType::Scale || item.tag != WireTag::Slider {
            return None;
        }
        let props = &item.item_properties;
        let bound = |value: Option<i64>, label: &Option<String>| {
            value.map(|value| ScaleBound {
                value,
                label: label.clone().unwrap_or_default(),
            })
        };
        Some(Self {
            low: bound(props.low, &props.low_label),
            high: bound(props.high, &props.high_label),
        })
    }

    /// Serialize to wire properties.
    ///
    /// A slider cannot be represented on the wire without both
    /// endpoints, so a half-configured scale yields `None` instead of a
    /// partial record.
    pub fn wire_properties(&self) -> Option<WireProperties> {
        let low = self.low.as_ref()?;
        let high = self.high.as_ref()?;
        Some(WireProperties {
            low: Some(low.value),
            high: Some(high.value),
            low_label: Some(low.label.clone()),
            high_label: Some(high.label.clone()),
            ..WireProperties::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scale_is_empty() {
        assert!(Slider::empty().is_empty());
    }

    #[test]
    fn test_caption_makes_non_empty() {
        let mut value = Slider::empty();
        if let Some(low) = &mut value.low {
            low.label = "Not at all".to_string();
        }
        assert!(!value.is_empty());
    }

    #[test]
    fn test_missing_bound_serializes_to_none() {
        // A bare payload has neither endpoint configured.
        let value = Slider::default();
        assert!(value.wire_properties().is_none());

        let half = Slider {
            low: Some(ScaleBound::new(1)),
            high: None,
        };
        assert!(half.wire_properties().is_none());
    }

    #[test]
    fn test_full_scale_serializes() {
        let props = Slider::empty().wire_properties().expect("both bounds set");
        assert_eq!(props.low, Some(Slider::DEFAULT_LOW));
        assert_eq!(props.high, Some(Slider::DEFAULT_HIGH));
    }
}
