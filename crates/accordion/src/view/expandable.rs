//! ExpandableListView: headless per-section expand/collapse state.
//!
//! This module provides [`ExpandableListView`], the view-state object for
//! lists with independently expandable sections. It owns the set of expanded
//! section indices and answers the host's count/content queries filtered
//! through that set; collapsed sections always report zero rows.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use accordion::view::ExpandableListView;
//!
//! let mut view = ExpandableListView::new().with_model(model);
//!
//! // Re-render whatever the view reports as changed.
//! view.sections_changed.connect(|change| {
//!     host.reload_sections(&change.sections, change.animation);
//! });
//!
//! // Scroll the header into view if the host's viewport does not contain it.
//! view.reveal_requested.connect(|&section| {
//!     host.scroll_header_to_visible(section);
//! });
//!
//! // Header taps toggle the section.
//! view.toggle_section(2);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use accordion_core::Signal;

use crate::model::{ItemData, RowAddress, SectionHeader, SectionModel, SectionObserver};

use super::effect::{RowAnimation, SectionsChanged};

/// A headless list view state with expandable and collapsible sections.
///
/// The view composes with two optional collaborators: a [`SectionModel`]
/// supplying content and a [`SectionObserver`] receiving interaction
/// notifications. Both degrade gracefully when absent; every query returns a
/// neutral default (zero counts, [`ItemData::None`], `None` heights) until
/// they are attached.
///
/// All sections start collapsed. The only state transitions are
/// [`toggle_section`](Self::toggle_section) (a header tap) and the batch
/// operations [`expand_sections`](Self::expand_sections) /
/// [`collapse_sections`](Self::collapse_sections).
///
/// # Signals
///
/// - `sections_changed(SectionsChanged)`: Apply a scoped reload of the
///   listed sections
/// - `reveal_requested(usize)`: Ensure the section's header is visible;
///   hosts that track a viewport ignore the request when it already is
/// - `expanded(usize)` / `collapsed(usize)`: Emitted per section transition
///
/// # Ownership
///
/// The rendering surface owns the view, never the other way around. The view
/// holds its collaborators behind `Arc`s and has no reference back to the
/// host.
///
/// # Threading
///
/// Mutations are synchronous and unsynchronized. Serialize all calls onto a
/// single logical owner, typically the thread driving the rendering surface.
pub struct ExpandableListView {
    // Collaborators
    model: Option<Arc<dyn SectionModel>>,
    observer: Option<Arc<dyn SectionObserver>>,

    // State
    /// Set of currently expanded section indices.
    expanded_sections: HashSet<usize>,

    // Configuration
    /// Animation style forwarded with every scoped reload.
    animation: RowAnimation,

    // Signals
    /// Emitted when sections need a scoped reload.
    pub sections_changed: Signal<SectionsChanged>,
    /// Emitted after a toggle, asking the host to bring the section's header
    /// into view if its viewport does not already contain it.
    pub reveal_requested: Signal<usize>,
    /// Emitted when a section transitions to expanded.
    pub expanded: Signal<usize>,
    /// Emitted when a section transitions to collapsed.
    pub collapsed: Signal<usize>,
}

impl Default for ExpandableListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpandableListView {
    /// Creates a view with no collaborators and every section collapsed.
    pub fn new() -> Self {
        Self {
            model: None,
            observer: None,
            expanded_sections: HashSet::new(),
            animation: RowAnimation::default(),
            sections_changed: Signal::new(),
            reveal_requested: Signal::new(),
            expanded: Signal::new(),
            collapsed: Signal::new(),
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Creates the view with the given model attached.
    pub fn with_model(mut self, model: Arc<dyn SectionModel>) -> Self {
        self.attach_model(model);
        self
    }

    /// Creates the view with the given observer attached.
    pub fn with_observer(mut self, observer: Arc<dyn SectionObserver>) -> Self {
        self.attach_observer(observer);
        self
    }

    /// Sets the reload animation style using builder pattern.
    pub fn with_animation(mut self, animation: RowAnimation) -> Self {
        self.animation = animation;
        self
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Gets the attached model.
    pub fn model(&self) -> Option<&Arc<dyn SectionModel>> {
        self.model.as_ref()
    }

    /// Attaches the content model.
    ///
    /// Attaching the same model again is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if a different model is already attached. Two competing models
    /// would produce undefined row counts, so this is a programming error;
    /// call [`detach_model`](Self::detach_model) first to replace a model
    /// deliberately.
    pub fn attach_model(&mut self, model: Arc<dyn SectionModel>) {
        if let Some(existing) = &self.model {
            if Arc::ptr_eq(existing, &model) {
                return;
            }
            panic!(
                "a section model is already attached to this view; \
                 detach it before attaching another, since two competing \
                 models would produce undefined row counts"
            );
        }
        tracing::debug!(target: "accordion::view", "section model attached");
        self.model = Some(model);
    }

    /// Detaches and returns the current model, if any.
    ///
    /// The expanded-section set is left untouched; it is only ever mutated
    /// by the toggle and batch operations.
    pub fn detach_model(&mut self) -> Option<Arc<dyn SectionModel>> {
        tracing::debug!(target: "accordion::view", "section model detached");
        self.model.take()
    }

    /// Gets the attached observer.
    pub fn observer(&self) -> Option<&Arc<dyn SectionObserver>> {
        self.observer.as_ref()
    }

    /// Attaches the interaction observer.
    ///
    /// Attaching the same observer again is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if a different observer is already attached; call
    /// [`detach_observer`](Self::detach_observer) first to replace it
    /// deliberately.
    pub fn attach_observer(&mut self, observer: Arc<dyn SectionObserver>) {
        if let Some(existing) = &self.observer {
            if Arc::ptr_eq(existing, &observer) {
                return;
            }
            panic!(
                "a section observer is already attached to this view; \
                 detach it before attaching another"
            );
        }
        tracing::debug!(target: "accordion::view", "section observer attached");
        self.observer = Some(observer);
    }

    /// Detaches and returns the current observer, if any.
    pub fn detach_observer(&mut self) -> Option<Arc<dyn SectionObserver>> {
        tracing::debug!(target: "accordion::view", "section observer detached");
        self.observer.take()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Gets the animation style used for scoped reloads.
    pub fn animation(&self) -> RowAnimation {
        self.animation
    }

    /// Sets the animation style used for scoped reloads.
    pub fn set_animation(&mut self, animation: RowAnimation) {
        self.animation = animation;
    }

    // =========================================================================
    // Expand/Collapse
    // =========================================================================

    /// Returns whether the given section is expanded.
    pub fn is_expanded(&self, section: usize) -> bool {
        self.expanded_sections.contains(&section)
    }

    /// Returns the expanded section indices, sorted.
    pub fn expanded_sections(&self) -> Vec<usize> {
        let mut sections: Vec<usize> = self.expanded_sections.iter().copied().collect();
        sections.sort_unstable();
        sections
    }

    /// Toggles the expanded state of the given section.
    ///
    /// The set is mutated before any signal fires, so row-count queries made
    /// while the host applies the reload already see the new state. After
    /// `sections_changed`, a `reveal_requested` follows so the host can
    /// scroll the section's header into view if necessary.
    pub fn toggle_section(&mut self, section: usize) {
        let expanding = !self.expanded_sections.remove(&section);
        if expanding {
            self.expanded_sections.insert(section);
        }

        tracing::debug!(target: "accordion::view", section, expanding, "section toggled");

        if expanding {
            self.expanded.emit(section);
        } else {
            self.collapsed.emit(section);
        }
        self.sections_changed.emit(SectionsChanged {
            sections: vec![section],
            animation: self.animation,
        });
        self.reveal_requested.emit(section);
    }

    /// Expands the sections at the given indices.
    ///
    /// Indices outside `0..section_count()` are silently dropped. A single
    /// batched `sections_changed` covers every remaining index; if none
    /// remain, no state changes and no signal fires.
    pub fn expand_sections(&mut self, sections: &[usize]) {
        self.perform(sections, true);
    }

    /// Collapses the sections at the given indices.
    ///
    /// Symmetric to [`expand_sections`](Self::expand_sections): out-of-range
    /// indices are silently dropped and an empty filtered set is a no-op.
    pub fn collapse_sections(&mut self, sections: &[usize]) {
        self.perform(sections, false);
    }

    fn perform(&mut self, sections: &[usize], expanding: bool) {
        let count = self.section_count();
        let mut touched: Vec<usize> = sections.iter().copied().filter(|&s| s < count).collect();
        touched.sort_unstable();
        touched.dedup();

        if touched.is_empty() {
            return;
        }

        for &section in &touched {
            if expanding {
                if self.expanded_sections.insert(section) {
                    self.expanded.emit(section);
                }
            } else if self.expanded_sections.remove(&section) {
                self.collapsed.emit(section);
            }
        }

        tracing::debug!(
            target: "accordion::view",
            sections = ?touched,
            expanding,
            "sections updated"
        );

        // Sections already in the target state are still reloaded; only the
        // filtering above narrows the batch.
        self.sections_changed.emit(SectionsChanged {
            sections: touched,
            animation: self.animation,
        });
    }

    // =========================================================================
    // Content Queries (host-facing)
    // =========================================================================

    /// Returns the number of sections, or 0 if no model is attached.
    pub fn section_count(&self) -> usize {
        self.model.as_ref().map_or(0, |model| model.section_count())
    }

    /// Returns the number of rows the host should render for a section.
    ///
    /// Collapsed sections report 0 regardless of the model's row count;
    /// expanded sections report the model's count, or 0 without a model.
    pub fn visible_row_count(&self, section: usize) -> usize {
        if !self.is_expanded(section) {
            return 0;
        }
        self.model
            .as_ref()
            .map_or(0, |model| model.row_count(section))
    }

    /// Returns the content for the row at the given address.
    ///
    /// Returns [`ItemData::None`] as a placeholder when no model is attached.
    pub fn content(&self, address: RowAddress) -> ItemData {
        self.model
            .as_ref()
            .map_or(ItemData::None, |model| model.content(address))
    }

    /// Returns the header descriptor for the given section.
    ///
    /// The descriptor combines the model's header content with the view's
    /// current expanded flag. Returns `None` when no model is attached.
    pub fn header(&self, section: usize) -> Option<SectionHeader> {
        self.model.as_ref().map(|model| SectionHeader {
            section,
            expanded: self.is_expanded(section),
            content: model.header(section),
        })
    }

    // =========================================================================
    // Interaction Forwarding (host-facing)
    // =========================================================================

    /// Asks the observer for the height of a row.
    ///
    /// `None` means the host should use automatic sizing, and is also the
    /// answer when no observer is attached.
    pub fn row_height(&self, address: RowAddress) -> Option<f32> {
        self.observer
            .as_ref()
            .and_then(|observer| observer.row_height(address))
    }

    /// Asks the observer for the height of a section header.
    ///
    /// `None` means automatic sizing, as for [`row_height`](Self::row_height).
    pub fn header_height(&self, section: usize) -> Option<f32> {
        self.observer
            .as_ref()
            .and_then(|observer| observer.header_height(section))
    }

    /// Notifies the observer that a row was selected.
    pub fn row_selected(&self, address: RowAddress) {
        if let Some(observer) = &self.observer {
            observer.row_selected(address);
        }
    }

    /// Notifies the observer that a section header was selected.
    pub fn header_selected(&self, section: usize) {
        if let Some(observer) = &self.observer {
            observer.header_selected(section);
        }
    }

    /// Notifies the observer that a row is about to be displayed.
    pub fn row_will_display(&self, address: RowAddress) {
        if let Some(observer) = &self.observer {
            observer.row_will_display(address);
        }
    }

    /// Notifies the observer that a section header is about to be displayed.
    pub fn header_will_display(&self, section: usize) {
        if let Some(observer) = &self.observer {
            observer.header_will_display(section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Fixed-shape model: one row count per section.
    struct FixtureModel {
        rows: Vec<usize>,
    }

    impl FixtureModel {
        fn new(rows: &[usize]) -> Arc<Self> {
            Arc::new(Self {
                rows: rows.to_vec(),
            })
        }
    }

    impl SectionModel for FixtureModel {
        fn section_count(&self) -> usize {
            self.rows.len()
        }

        fn row_count(&self, section: usize) -> usize {
            self.rows.get(section).copied().unwrap_or(0)
        }

        fn content(&self, address: RowAddress) -> ItemData {
            if address.row() < self.row_count(address.section()) {
                ItemData::Text(format!("row {}.{}", address.section(), address.row()))
            } else {
                ItemData::None
            }
        }

        fn header(&self, section: usize) -> ItemData {
            ItemData::Text(format!("section {section}"))
        }
    }

    /// Observer that records every notification it receives.
    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<String>>,
    }

    impl SectionObserver for RecordingObserver {
        fn row_height(&self, address: RowAddress) -> Option<f32> {
            Some(10.0 + address.row() as f32)
        }

        fn header_height(&self, _section: usize) -> Option<f32> {
            Some(44.0)
        }

        fn row_selected(&self, address: RowAddress) {
            self.events.lock().push(format!("row_selected {address:?}"));
        }

        fn header_selected(&self, section: usize) {
            self.events.lock().push(format!("header_selected {section}"));
        }

        fn row_will_display(&self, address: RowAddress) {
            self.events
                .lock()
                .push(format!("row_will_display {address:?}"));
        }

        fn header_will_display(&self, section: usize) {
            self.events
                .lock()
                .push(format!("header_will_display {section}"));
        }
    }

    /// Installs a test-writer subscriber so the `accordion::view` debug
    /// events surface in `cargo test` output when requested via `RUST_LOG`.
    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    /// Collects every `sections_changed` payload into a shared buffer.
    fn record_reloads(view: &ExpandableListView) -> Arc<Mutex<Vec<SectionsChanged>>> {
        let reloads = Arc::new(Mutex::new(Vec::new()));
        let reloads_clone = reloads.clone();
        view.sections_changed.connect(move |change| {
            reloads_clone.lock().push(change.clone());
        });
        reloads
    }

    // -------------------------------------------------------------------------
    // Derivation invariants
    // -------------------------------------------------------------------------

    #[test]
    fn test_all_sections_start_collapsed() {
        let view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));

        assert_eq!(view.section_count(), 3);
        for section in 0..3 {
            assert!(!view.is_expanded(section));
            assert_eq!(view.visible_row_count(section), 0);
        }
        assert!(view.expanded_sections().is_empty());
    }

    #[test]
    fn test_expanded_section_reports_model_row_count() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));

        view.toggle_section(1);
        assert_eq!(view.visible_row_count(1), 4);
        assert_eq!(view.visible_row_count(0), 0);
    }

    #[test]
    fn test_queries_without_model_return_neutral_defaults() {
        let mut view = ExpandableListView::new();

        assert_eq!(view.section_count(), 0);
        assert!(view.content(RowAddress::new(0, 0)).is_none());
        assert_eq!(view.header(0), None);

        // Expanded without a model still reports zero rows.
        view.toggle_section(0);
        assert!(view.is_expanded(0));
        assert_eq!(view.visible_row_count(0), 0);
    }

    #[test]
    fn test_content_passthrough() {
        let view = ExpandableListView::new().with_model(FixtureModel::new(&[2]));

        assert_eq!(
            view.content(RowAddress::new(0, 1)).as_text(),
            Some("row 0.1")
        );
        assert!(view.content(RowAddress::new(0, 9)).is_none());
    }

    #[test]
    fn test_header_reflects_expanded_flag() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4]));

        let header = view.header(1).unwrap();
        assert_eq!(header.section, 1);
        assert!(!header.expanded);
        assert_eq!(header.content.as_text(), Some("section 1"));

        view.toggle_section(1);
        assert!(view.header(1).unwrap().expanded);
    }

    // -------------------------------------------------------------------------
    // Toggle
    // -------------------------------------------------------------------------

    #[test]
    fn test_toggle_is_self_inverse() {
        init_logging();

        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));

        view.toggle_section(2);
        assert!(view.is_expanded(2));

        view.toggle_section(2);
        assert!(!view.is_expanded(2));
        assert!(view.expanded_sections().is_empty());
    }

    #[test]
    fn test_toggle_emits_scoped_reload_and_reveal() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        let reveals = Arc::new(Mutex::new(Vec::new()));
        let reveals_clone = reveals.clone();
        view.reveal_requested.connect(move |&section| {
            reveals_clone.lock().push(section);
        });

        view.toggle_section(1);

        assert_eq!(
            *reloads.lock(),
            vec![SectionsChanged {
                sections: vec![1],
                animation: RowAnimation::Fade,
            }]
        );
        assert_eq!(*reveals.lock(), vec![1]);
    }

    #[test]
    fn test_toggle_emits_expanded_then_collapsed() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2]));

        let transitions = Arc::new(Mutex::new(Vec::new()));
        let t1 = transitions.clone();
        view.expanded.connect(move |&section| {
            t1.lock().push(("expanded", section));
        });
        let t2 = transitions.clone();
        view.collapsed.connect(move |&section| {
            t2.lock().push(("collapsed", section));
        });

        view.toggle_section(0);
        view.toggle_section(0);

        assert_eq!(*transitions.lock(), vec![("expanded", 0), ("collapsed", 0)]);
    }

    #[test]
    fn test_state_is_mutated_before_reload_is_emitted() {
        // The host applies the reload after emit returns; the row counts it
        // queries then must already reflect the toggle.
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        view.toggle_section(0);
        assert_eq!(view.visible_row_count(0), 2);
        assert_eq!(reloads.lock().len(), 1);

        view.toggle_section(0);
        assert_eq!(view.visible_row_count(0), 0);
        assert_eq!(reloads.lock().len(), 2);
    }

    // -------------------------------------------------------------------------
    // Batch operations
    // -------------------------------------------------------------------------

    #[test]
    fn test_expand_sections_batches_one_reload() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        view.expand_sections(&[0, 2]);

        assert_eq!(view.visible_row_count(0), 2);
        assert_eq!(view.visible_row_count(1), 0);
        assert_eq!(view.visible_row_count(2), 1);
        assert_eq!(
            *reloads.lock(),
            vec![SectionsChanged {
                sections: vec![0, 2],
                animation: RowAnimation::Fade,
            }]
        );
    }

    #[test]
    fn test_collapse_sections_is_symmetric() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        view.expand_sections(&[0, 1, 2]);

        let reloads = record_reloads(&view);
        view.collapse_sections(&[1, 2]);

        assert_eq!(view.expanded_sections(), vec![0]);
        assert_eq!(reloads.lock().len(), 1);
        assert_eq!(reloads.lock()[0].sections, vec![1, 2]);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        view.expand_sections(&[]);
        view.collapse_sections(&[]);

        assert!(view.expanded_sections().is_empty());
        assert!(reloads.lock().is_empty());
    }

    #[test]
    fn test_out_of_range_indices_are_dropped() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        // Every index is out of range: no state change, no effect.
        view.expand_sections(&[5, 1000]);
        assert!(view.expanded_sections().is_empty());
        assert!(reloads.lock().is_empty());

        // Mixed input keeps only the valid indices.
        view.expand_sections(&[1, 7, 300]);
        assert_eq!(view.expanded_sections(), vec![1]);
        assert_eq!(reloads.lock().len(), 1);
        assert_eq!(reloads.lock()[0].sections, vec![1]);
    }

    #[test]
    fn test_batch_input_is_sorted_and_deduplicated() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        view.expand_sections(&[2, 0, 2, 0]);

        assert_eq!(reloads.lock()[0].sections, vec![0, 2]);
    }

    #[test]
    fn test_already_expanded_sections_still_reload_without_transition() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        view.expand_sections(&[0]);

        let transitions = Arc::new(Mutex::new(Vec::new()));
        let t = transitions.clone();
        view.expanded.connect(move |&section| {
            t.lock().push(section);
        });
        let reloads = record_reloads(&view);

        // Section 0 is already expanded: it reloads but does not transition.
        view.expand_sections(&[0, 1]);

        assert_eq!(*transitions.lock(), vec![1]);
        assert_eq!(reloads.lock()[0].sections, vec![0, 1]);
    }

    #[test]
    fn test_batch_without_model_is_a_no_op() {
        // section_count() is 0 without a model, so every index filters out.
        let mut view = ExpandableListView::new();
        let reloads = record_reloads(&view);

        view.expand_sections(&[0, 1]);

        assert!(view.expanded_sections().is_empty());
        assert!(reloads.lock().is_empty());
    }

    #[test]
    fn test_expand_then_toggle_scenario() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4, 1]));
        let reloads = record_reloads(&view);

        view.expand_sections(&[0, 2]);
        assert_eq!(
            (0..3).map(|s| view.visible_row_count(s)).collect::<Vec<_>>(),
            vec![2, 0, 1]
        );

        view.toggle_section(0);
        assert_eq!(
            (0..3).map(|s| view.visible_row_count(s)).collect::<Vec<_>>(),
            vec![0, 0, 1]
        );

        let reloads = reloads.lock();
        assert_eq!(reloads.len(), 2);
        assert_eq!(reloads[0].sections, vec![0, 2]);
        assert_eq!(reloads[1].sections, vec![0]);
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    #[test]
    fn test_animation_style_is_carried_in_reloads() {
        let mut view = ExpandableListView::new()
            .with_model(FixtureModel::new(&[2]))
            .with_animation(RowAnimation::Top);
        let reloads = record_reloads(&view);

        view.toggle_section(0);
        assert_eq!(reloads.lock()[0].animation, RowAnimation::Top);

        view.set_animation(RowAnimation::None);
        assert_eq!(view.animation(), RowAnimation::None);
        view.expand_sections(&[0]);
        assert_eq!(reloads.lock()[1].animation, RowAnimation::None);
    }

    // -------------------------------------------------------------------------
    // Collaborator binding
    // -------------------------------------------------------------------------

    #[test]
    #[should_panic(expected = "a section model is already attached")]
    fn test_attaching_second_model_panics() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2]));
        view.attach_model(FixtureModel::new(&[3]));
    }

    #[test]
    #[should_panic(expected = "a section observer is already attached")]
    fn test_attaching_second_observer_panics() {
        let mut view =
            ExpandableListView::new().with_observer(Arc::new(RecordingObserver::default()));
        view.attach_observer(Arc::new(RecordingObserver::default()));
    }

    #[test]
    fn test_reattaching_same_model_is_a_no_op() {
        let model: Arc<dyn SectionModel> = FixtureModel::new(&[2]);
        let mut view = ExpandableListView::new().with_model(model.clone());

        view.attach_model(model.clone());
        assert_eq!(view.section_count(), 1);
        assert!(view
            .model()
            .is_some_and(|attached| Arc::ptr_eq(attached, &model)));
    }

    #[test]
    fn test_detach_allows_replacement_and_keeps_state() {
        let mut view = ExpandableListView::new().with_model(FixtureModel::new(&[2, 4]));
        view.expand_sections(&[1]);

        let old = view.detach_model();
        assert!(old.is_some());
        assert!(view.model().is_none());
        assert_eq!(view.section_count(), 0);
        // Detaching does not touch the expanded set.
        assert!(view.is_expanded(1));

        view.attach_model(FixtureModel::new(&[3, 3, 3]));
        assert_eq!(view.section_count(), 3);
        assert_eq!(view.visible_row_count(1), 3);
    }

    // -------------------------------------------------------------------------
    // Interaction forwarding
    // -------------------------------------------------------------------------

    #[test]
    fn test_heights_without_observer_mean_automatic_sizing() {
        let view = ExpandableListView::new().with_model(FixtureModel::new(&[2]));

        assert!(view.observer().is_none());
        assert_eq!(view.row_height(RowAddress::new(0, 0)), None);
        assert_eq!(view.header_height(0), None);

        // Notifications without an observer are silently dropped.
        view.row_selected(RowAddress::new(0, 0));
        view.header_selected(0);
    }

    #[test]
    fn test_observer_receives_forwarded_events() {
        let observer = Arc::new(RecordingObserver::default());
        let view = ExpandableListView::new()
            .with_model(FixtureModel::new(&[2]))
            .with_observer(observer.clone());

        assert!(view.observer().is_some());
        assert_eq!(view.row_height(RowAddress::new(0, 1)), Some(11.0));
        assert_eq!(view.header_height(0), Some(44.0));

        view.row_selected(RowAddress::new(0, 1));
        view.header_selected(0);
        view.row_will_display(RowAddress::new(0, 0));
        view.header_will_display(0);

        assert_eq!(
            *observer.events.lock(),
            vec![
                "row_selected RowAddress(0, 1)",
                "header_selected 0",
                "row_will_display RowAddress(0, 0)",
                "header_will_display 0",
            ]
        );
    }
}
