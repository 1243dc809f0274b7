use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::color::CategoryColors;
use crate::config::AppConfig;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::TransactionSet;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The filter widgets edit the fields here directly; [`AppState::criteria`]
/// snapshots them into a [`FilterCriteria`] and [`AppState::refilter`]
/// recomputes the visible rows in full. Nothing incremental is carried
/// between events.
pub struct AppState {
    /// Startup configuration (column names, date format, currency).
    pub config: AppConfig,

    /// Loaded transaction set (None until the user opens a file). Replaced
    /// wholesale on every successful load.
    pub dataset: Option<TransactionSet>,

    /// Lower date bound widget state. When the checkbox is off the side is
    /// unbounded and `date_from` is just the picker's last position.
    pub date_from_enabled: bool,
    pub date_from: NaiveDate,

    /// Upper date bound widget state.
    pub date_to_enabled: bool,
    pub date_to: NaiveDate,

    /// Selected categories; empty means "all categories".
    pub selected_categories: BTreeSet<String>,

    /// Inclusive [min, max] amount selection.
    pub amount_range: [f64; 2],
    /// Upper bound of the amount sliders, seeded from the loaded set.
    pub amount_cap: f64,

    /// Indices of transactions passing the current filters (source order).
    pub visible_indices: Vec<usize>,

    /// Stable category colours for charts and swatches.
    pub category_colors: CategoryColors,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            config,
            dataset: None,
            date_from_enabled: false,
            date_from: today,
            date_to_enabled: false,
            date_to: today,
            selected_categories: BTreeSet::new(),
            amount_range: [0.0, 0.0],
            amount_cap: 0.0,
            visible_indices: Vec::new(),
            category_colors: CategoryColors::default(),
            status_message: None,
        }
    }

    /// Ingest a newly loaded set: reset filters to their defaults, rebuild
    /// the category colours, and show everything.
    pub fn set_dataset(&mut self, dataset: TransactionSet) {
        self.category_colors = CategoryColors::new(&dataset.categories);
        self.visible_indices = (0..dataset.len()).collect();
        self.status_message = None;
        self.dataset = Some(dataset);
        self.apply_default_criteria();
    }

    /// Whether the filter controls should be interactive. They stay
    /// disabled until a set has been loaded.
    pub fn controls_enabled(&self) -> bool {
        self.dataset.is_some()
    }

    /// Snapshot the widget state into filter criteria.
    pub fn criteria(&self) -> FilterCriteria {
        let lo = self.amount_range[0].min(self.amount_range[1]);
        let hi = self.amount_range[0].max(self.amount_range[1]);
        FilterCriteria {
            date_from: self.date_from_enabled.then_some(self.date_from),
            date_to: self.date_to_enabled.then_some(self.date_to),
            categories: self.selected_categories.clone(),
            amount_min: lo,
            amount_max: hi,
        }
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(set) = &self.dataset {
            self.visible_indices = filtered_indices(set, &self.criteria());
        }
    }

    /// Restore the default criteria (full date span, no category
    /// selection, full amount range) and recompute everything. Unlike the
    /// original dashboard's reset button, this actually clears the filters
    /// instead of leaving the outputs stale.
    pub fn reset_filters(&mut self) {
        self.apply_default_criteria();
    }

    /// Toggle a category in the selection.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.selected_categories.remove(category) {
            self.selected_categories.insert(category.to_string());
        }
        self.refilter();
    }

    /// Clear the category selection (back to "all categories").
    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
        self.refilter();
    }

    fn apply_default_criteria(&mut self) {
        if let Some(set) = &self.dataset {
            if let Some((lo, hi)) = set.date_span {
                self.date_from = lo;
                self.date_to = hi;
                self.date_from_enabled = true;
                self.date_to_enabled = true;
            } else {
                self.date_from_enabled = false;
                self.date_to_enabled = false;
            }
            self.amount_cap = set.max_amount.ceil().max(1.0);
        }
        self.amount_range = [0.0, self.amount_cap];
        self.selected_categories.clear();
        self.refilter();
    }
}
