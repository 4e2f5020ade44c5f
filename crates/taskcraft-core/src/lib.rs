//! TaskCraft Core Library
//!
//! Platform-agnostic core data structures and logic for the TaskCraft
//! study-task editor: the question data model, wire-format conversion,
//! drag-reorder support, and section normalization. Rendering, routing,
//! and network transport live in other crates.

pub mod debounce;
pub mod editor;
pub mod error;
pub mod items;
pub mod reorder;
pub mod section;
pub mod wire;

pub use debounce::{DebouncedField, DEFAULT_COMMIT_DELAY};
pub use editor::{Notice, SurveyEditor, SurveyTask};
pub use error::{CoreError, CoreResult};
pub use items::{
    ChoiceOption, DateTime, Dropdown, EditingAffordance, ImageOption, Images, ItemId,
    MultiSelect, OpenEnded, Question, QuestionKind, QuestionValue, Rank, ScaleBound,
    SingleSelect, Slider,
};
pub use reorder::{DragSession, DragTag, Draggable, Offset, RenderProps, ReorderableList};
pub use section::{recalculate, split_points, Recalculated, Section, SectionId};
pub use wire::{WireOption, WireProperties, WireQuestion, WireSection, WireTag, WireTask, WireType};
