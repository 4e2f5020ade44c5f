//! Survey task document and editor state.
//!
//! [`SurveyEditor`] is the single writer of the section list: every
//! mutation goes through its methods, marks the document for boundary
//! recalculation, and the owner runs [`SurveyEditor::process_effects`]
//! as a post-render effect. Recalculation is suppressed while a drag
//! gesture is in progress so boundaries never shift under the pointer.

use crate::error::CoreResult;
use crate::items::{ItemId, Question, QuestionKind};
use crate::section::{recalculate, Section, SectionId};
use crate::wire::{WireSection, WireTask};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Fire-and-forget user-facing messages produced by deferred effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Sections were synthesized to restore the boundary invariant.
    SectionsAdded,
}

impl Notice {
    /// Message text shown to the author.
    pub fn message(&self) -> &'static str {
        match self {
            Notice::SectionsAdded => {
                "Sections were automatically added to avoid display problems."
            }
        }
    }
}

/// A survey task document: the persisted unit of authoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
}

impl Default for SurveyTask {
    fn default() -> Self {
        Self::new()
    }
}

impl SurveyTask {
    /// Create a new task with one empty section.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            description: String::new(),
            sections: vec![Section::new()],
        }
    }

    /// Serialize the task to JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a task from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Export to the wire format for publishing.
    ///
    /// Questions that cannot be represented on the wire (a slider with a
    /// missing endpoint) are left out of the record.
    pub fn to_wire(&self) -> WireTask {
        WireTask {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            sections: self
                .sections
                .iter()
                .map(|section| WireSection {
                    title: section.title.clone(),
                    questions: section
                        .items
                        .iter()
                        .filter_map(Question::to_wire)
                        .collect(),
                })
                .collect(),
        }
    }

    /// Import from the wire format, skipping records no handler claims.
    pub fn from_wire(task: &WireTask) -> Self {
        let sections = task
            .sections
            .iter()
            .map(|section| Section {
                id: Uuid::new_v4(),
                title: section.title.clone(),
                items: section
                    .questions
                    .iter()
                    .filter_map(Question::from_wire)
                    .collect(),
            })
            .collect();
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            sections,
        }
    }
}

/// Editor state for one survey task. Explicitly passed to whichever view
/// needs it; no ambient globals.
#[derive(Debug, Clone)]
pub struct SurveyEditor {
    task: SurveyTask,
    /// Set while a reorder gesture is active; recalculation is deferred
    /// until it clears.
    drag_in_progress: bool,
    /// A mutation happened since the last recalculation pass.
    needs_recalculate: bool,
    notices: VecDeque<Notice>,
}

impl SurveyEditor {
    /// Create an editor over an existing task.
    pub fn new(task: SurveyTask) -> Self {
        Self {
            task,
            drag_in_progress: false,
            needs_recalculate: false,
            notices: VecDeque::new(),
        }
    }

    /// The task being edited.
    pub fn task(&self) -> &SurveyTask {
        &self.task
    }

    /// Current sections.
    pub fn sections(&self) -> &[Section] {
        &self.task.sections
    }

    /// Consume the editor, returning the task.
    pub fn into_task(self) -> SurveyTask {
        self.task
    }

    /// Replace the whole section list (e.g. after a section reorder).
    pub fn set_sections(&mut self, sections: Vec<Section>) {
        self.task.sections = sections;
        self.mark_mutated();
    }

    /// Insert a new empty section at `index` (clamped). Returns its id.
    pub fn add_section(&mut self, index: usize) -> SectionId {
        let section = Section::new();
        let id = section.id;
        let index = index.min(self.task.sections.len());
        self.task.sections.insert(index, section);
        self.mark_mutated();
        id
    }

    /// Remove a section. This is the only path that reduces the section
    /// count besides merging; recalculation never does.
    pub fn remove_section(&mut self, id: SectionId) -> Option<Section> {
        let index = self.section_index(id)?;
        let removed = self.task.sections.remove(index);
        self.mark_mutated();
        Some(removed)
    }

    /// Deep-copy a section, inserting the copy right after the original.
    /// Returns the copy's id.
    pub fn duplicate_section(&mut self, id: SectionId) -> Option<SectionId> {
        let index = self.section_index(id)?;
        let copy = self.task.sections[index].duplicate();
        let copy_id = copy.id;
        self.task.sections.insert(index + 1, copy);
        self.mark_mutated();
        Some(copy_id)
    }

    /// Merge a section into its predecessor, appending its questions.
    /// The first section has no predecessor and is left alone.
    pub fn merge_section_up(&mut self, id: SectionId) -> bool {
        let Some(index) = self.section_index(id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        let section = self.task.sections.remove(index);
        self.task.sections[index - 1].items.extend(section.items);
        self.mark_mutated();
        true
    }

    /// Append a new empty question of `kind` to a section.
    pub fn add_item(&mut self, section_id: SectionId, kind: QuestionKind) -> Option<ItemId> {
        let index = self.section_index(section_id)?;
        let question = Question::empty(kind);
        let id = question.id;
        self.task.sections[index].items.push(question);
        self.mark_mutated();
        Some(id)
    }

    /// Remove a question wherever it lives.
    pub fn remove_item(&mut self, item_id: ItemId) -> Option<Question> {
        let (section, index) = self.item_position(item_id)?;
        let removed = self.task.sections[section].items.remove(index);
        self.mark_mutated();
        Some(removed)
    }

    /// Deep-copy a question, inserting the copy right after the original.
    /// Returns the copy's id.
    pub fn duplicate_item(&mut self, item_id: ItemId) -> Option<ItemId> {
        let (section, index) = self.item_position(item_id)?;
        let copy = self.task.sections[section].items[index].duplicate();
        let copy_id = copy.id;
        self.task.sections[section].items.insert(index + 1, copy);
        self.mark_mutated();
        Some(copy_id)
    }

    /// Apply an edit to a question in place.
    pub fn update_item(&mut self, item_id: ItemId, edit: impl FnOnce(&mut Question)) -> bool {
        let Some((section, index)) = self.item_position(item_id) else {
            return false;
        };
        edit(&mut self.task.sections[section].items[index]);
        self.mark_mutated();
        true
    }

    /// Convert a question to another type, reusing compatible answers.
    pub fn convert_item(&mut self, item_id: ItemId, kind: QuestionKind) -> bool {
        let Some((section, index)) = self.item_position(item_id) else {
            return false;
        };
        let converted = self.task.sections[section].items[index].convert_to(kind);
        self.task.sections[section].items[index] = converted;
        self.mark_mutated();
        true
    }

    /// Move a question to `target_index` within `target_section`,
    /// possibly across sections. The question changes its owning section
    /// but never its identifier.
    pub fn move_item(
        &mut self,
        item_id: ItemId,
        target_section: SectionId,
        target_index: usize,
    ) -> bool {
        let Some((from_section, from_index)) = self.item_position(item_id) else {
            return false;
        };
        let Some(to_section) = self.section_index(target_section) else {
            return false;
        };
        let question = self.task.sections[from_section].items.remove(from_index);
        let items = &mut self.task.sections[to_section].items;
        items.insert(target_index.min(items.len()), question);
        self.mark_mutated();
        true
    }

    /// Commit an order produced by the reorder engine for one section.
    ///
    /// The new order must be a permutation of the section's questions;
    /// anything else is rejected to keep ownership intact.
    pub fn apply_item_order(&mut self, section_id: SectionId, ordered: Vec<Question>) -> bool {
        let Some(index) = self.section_index(section_id) else {
            return false;
        };
        let current = &self.task.sections[index].items;
        if !is_permutation(current, &ordered) {
            log::warn!("rejected item order that is not a permutation of the section");
            return false;
        }
        self.task.sections[index].items = ordered;
        self.mark_mutated();
        true
    }

    /// Guard predicate consulted by the deferred recalculation effect.
    pub fn drag_in_progress(&self) -> bool {
        self.drag_in_progress
    }

    /// Flag the start or end of a reorder gesture.
    pub fn set_drag_in_progress(&mut self, dragging: bool) {
        self.drag_in_progress = dragging;
    }

    /// Run deferred post-mutation effects.
    ///
    /// Invoked by the owner after the triggering state change has been
    /// rendered, never synchronously inside a mutation. Skipped entirely
    /// while a drag is in progress; the pending flag survives so the
    /// pass runs once the gesture ends. Queues a one-shot notice only
    /// when sections were actually synthesized.
    pub fn process_effects(&mut self) {
        if !self.needs_recalculate || self.drag_in_progress {
            return;
        }
        self.needs_recalculate = false;

        let sections = std::mem::take(&mut self.task.sections);
        let result = recalculate(sections);
        self.task.sections = result.sections;
        if result.added > 0 {
            self.notices.push_back(Notice::SectionsAdded);
        }
    }

    /// Take all queued user-facing notices.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    fn mark_mutated(&mut self) {
        self.needs_recalculate = true;
    }

    fn section_index(&self, id: SectionId) -> Option<usize> {
        self.task.sections.iter().position(|s| s.id == id)
    }

    fn item_position(&self, id: ItemId) -> Option<(usize, usize)> {
        for (section_index, section) in self.task.sections.iter().enumerate() {
            if let Some(item_index) = section.items.iter().position(|q| q.id == id) {
                return Some((section_index, item_index));
            }
        }
        None
    }
}

/// Check that `ordered` holds exactly the questions of `current`.
fn is_permutation(current: &[Question], ordered: &[Question]) -> bool {
    if current.len() != ordered.len() {
        return false;
    }
    let mut a: Vec<ItemId> = current.iter().map(|q| q.id).collect();
    let mut b: Vec<ItemId> = ordered.iter().map(|q| q.id).collect();
    a.sort();
    b.sort();
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ChoiceOption, QuestionValue, SingleSelect, Slider};

    fn editor_with_items(count: usize) -> SurveyEditor {
        let mut task = SurveyTask::new();
        task.sections[0].items = (0..count)
            .map(|_| Question::empty(QuestionKind::OpenEnded))
            .collect();
        SurveyEditor::new(task)
    }

    #[test]
    fn test_effects_split_and_notify_once() {
        let mut editor = editor_with_items(3);
        editor.set_sections(editor.sections().to_vec());

        editor.process_effects();
        assert_eq!(editor.sections().len(), 3);
        assert_eq!(editor.drain_notices(), vec![Notice::SectionsAdded]);

        // Second pass is a fixed point: no further split, no notice.
        editor.process_effects();
        assert_eq!(editor.sections().len(), 3);
        assert!(editor.drain_notices().is_empty());
    }

    #[test]
    fn test_effects_deferred_while_dragging() {
        let mut editor = editor_with_items(2);
        editor.set_drag_in_progress(true);
        editor.set_sections(editor.sections().to_vec());

        editor.process_effects();
        assert_eq!(editor.sections().len(), 1, "no split mid-drag");
        assert!(editor.drain_notices().is_empty());

        editor.set_drag_in_progress(false);
        editor.process_effects();
        assert_eq!(editor.sections().len(), 2);
        assert_eq!(editor.drain_notices(), vec![Notice::SectionsAdded]);
    }

    #[test]
    fn test_no_notice_when_nothing_split() {
        let mut editor = editor_with_items(1);
        editor.add_section(1);
        editor.process_effects();
        assert!(editor.drain_notices().is_empty());
    }

    #[test]
    fn test_remove_section_is_the_only_implicit_decrease() {
        let mut editor = editor_with_items(1);
        let id = editor.add_section(1);
        assert_eq!(editor.sections().len(), 2);

        editor.process_effects();
        assert_eq!(editor.sections().len(), 2);

        let removed = editor.remove_section(id);
        assert!(removed.is_some());
        assert_eq!(editor.sections().len(), 1);
    }

    #[test]
    fn test_duplicate_section_inserts_copy_after() {
        let mut editor = editor_with_items(1);
        let original = editor.sections()[0].id;
        let copy = editor.duplicate_section(original).expect("section exists");

        assert_eq!(editor.sections().len(), 2);
        assert_eq!(editor.sections()[0].id, original);
        assert_eq!(editor.sections()[1].id, copy);
        assert_ne!(
            editor.sections()[0].items[0].id,
            editor.sections()[1].items[0].id
        );
    }

    #[test]
    fn test_merge_section_up() {
        let mut editor = editor_with_items(1);
        let second = editor.add_section(1);
        editor.add_item(second, QuestionKind::Slider);

        assert!(editor.merge_section_up(second));
        assert_eq!(editor.sections().len(), 1);
        assert_eq!(editor.sections()[0].items.len(), 2);

        // The first section cannot merge upward.
        let first = editor.sections()[0].id;
        assert!(!editor.merge_section_up(first));
    }

    #[test]
    fn test_move_item_across_sections_keeps_identity() {
        let mut editor = editor_with_items(2);
        let second = editor.add_section(1);
        let moved = editor.sections()[0].items[0].id;

        assert!(editor.move_item(moved, second, 0));
        assert_eq!(editor.sections()[0].items.len(), 1);
        assert_eq!(editor.sections()[1].items.len(), 1);
        assert_eq!(editor.sections()[1].items[0].id, moved);

        // Exactly one section owns the question.
        let owners = editor
            .sections()
            .iter()
            .filter(|s| s.items.iter().any(|q| q.id == moved))
            .count();
        assert_eq!(owners, 1);
    }

    #[test]
    fn test_apply_item_order_rejects_non_permutation() {
        let mut editor = editor_with_items(2);
        let section = editor.sections()[0].id;

        let mut reversed = editor.sections()[0].items.clone();
        reversed.reverse();
        assert!(editor.apply_item_order(section, reversed));

        let foreign = vec![Question::empty(QuestionKind::OpenEnded)];
        assert!(!editor.apply_item_order(section, foreign));
        assert_eq!(editor.sections()[0].items.len(), 2);
    }

    #[test]
    fn test_reorder_gesture_commits_through_editor() {
        use crate::reorder::{Offset, ReorderableList};

        let mut editor = editor_with_items(3);
        let section = editor.sections()[0].id;
        let dragged = editor.sections()[0].items[0].id;

        // A gesture starts: boundaries must not shift until it ends.
        editor.set_drag_in_progress(true);
        let mut list = ReorderableList::new(editor.sections()[0].items.clone());
        assert!(list.begin_drag(0, Offset::default()));

        let mut emitted: Option<Vec<Question>> = None;
        assert!(list.hover(0, 2, |items| emitted = Some(items.to_vec())));
        assert!(editor.apply_item_order(section, emitted.expect("order emitted")));
        assert_eq!(editor.sections()[0].items[2].id, dragged);

        editor.process_effects();
        assert_eq!(editor.sections().len(), 1, "recalculation deferred");

        list.end_drag();
        editor.set_drag_in_progress(false);
        editor.process_effects();
        assert_eq!(editor.sections().len(), 3);
        assert_eq!(editor.sections()[2].items[0].id, dragged);
        assert_eq!(editor.drain_notices(), vec![Notice::SectionsAdded]);
    }

    #[test]
    fn test_convert_single_select_to_dropdown_reuses_answers() {
        let mut editor = editor_with_items(0);
        let section = editor.sections()[0].id;
        let item = editor
            .add_item(section, QuestionKind::SingleSelect)
            .expect("section exists");
        editor.update_item(item, |q| {
            q.value = QuestionValue::SingleSelect(SingleSelect {
                answers: vec![ChoiceOption::new("Yes"), ChoiceOption::new("No")],
                include_other: false,
            });
        });
        let answers_before = match &editor.sections()[0].items[0].value {
            QuestionValue::SingleSelect(v) => v.answers.clone(),
            other => panic!("unexpected payload {other:?}"),
        };

        assert!(editor.convert_item(item, QuestionKind::Dropdown));
        let question = &editor.sections()[0].items[0];
        assert_eq!(question.kind(), QuestionKind::Dropdown);
        assert!(!question.optional);
        let QuestionValue::Dropdown(v) = &question.value else {
            panic!("expected dropdown");
        };
        assert_eq!(v.answers, answers_before);
    }

    #[test]
    fn test_convert_single_select_to_images_substitutes_defaults() {
        let mut editor = editor_with_items(0);
        let section = editor.sections()[0].id;
        let item = editor
            .add_item(section, QuestionKind::SingleSelect)
            .expect("section exists");
        editor.update_item(item, |q| {
            q.value = QuestionValue::SingleSelect(SingleSelect {
                answers: vec![ChoiceOption::new("Yes"), ChoiceOption::new("No")],
                include_other: false,
            });
        });

        assert!(editor.convert_item(item, QuestionKind::Images));
        let QuestionValue::Images(v) = &editor.sections()[0].items[0].value else {
            panic!("expected images");
        };
        assert_eq!(v.answers.len(), 3);
        assert!(v.answers[0].touched);
        assert!(v.answers[1].touched);
        assert!(!v.answers[2].touched);
        assert!(v.answers.iter().all(|a| a.image.is_empty()));
    }

    #[test]
    fn test_wire_export_skips_unserializable_slider() {
        let mut task = SurveyTask::new();
        let mut broken = Question::empty(QuestionKind::Slider);
        broken.value = QuestionValue::Slider(Slider::default());
        task.sections[0].items = vec![Question::empty(QuestionKind::OpenEnded), broken];

        let wire = task.to_wire();
        assert_eq!(wire.sections[0].questions.len(), 1);
    }

    #[test]
    fn test_wire_round_trip() {
        let mut task = SurveyTask::new();
        task.title = "Weekly check-in".to_string();
        task.sections[0].title = Some("Mood".to_string());
        task.sections[0].items = vec![
            Question::empty(QuestionKind::SingleSelect),
            Question::empty(QuestionKind::Slider),
        ];

        let restored = SurveyTask::from_wire(&task.to_wire());
        assert_eq!(restored.title, "Weekly check-in");
        assert_eq!(restored.sections.len(), 1);
        assert_eq!(restored.sections[0].title.as_deref(), Some("Mood"));
        assert_eq!(restored.sections[0].items.len(), 2);
        assert_eq!(
            restored.sections[0].items[1].kind(),
            QuestionKind::Slider
        );
    }

    #[test]
    fn test_json_round_trip() {
        let mut editor = editor_with_items(2);
        editor.process_effects();
        let task = editor.task().clone();

        let json = task.to_json().expect("serializes");
        let restored = SurveyTask::from_json(&json).expect("parses");
        assert_eq!(restored, task);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(SurveyTask::from_json("{not json").is_err());
    }
}
