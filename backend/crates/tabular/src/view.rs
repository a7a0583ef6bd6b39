//! The table view itself: configuration, derived state, and navigation.

use crate::value::{CellValue, compare_cells};

/// Default page size applied when the builder does not override it.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest (or alphabetically first) values first.
    Ascending,
    /// Reverse of ascending, including null placement.
    Descending,
}

/// One configured column: a stable key plus a typed accessor.
pub struct Column<R> {
    key: String,
    accessor: Box<dyn Fn(&R) -> CellValue + Send + Sync>,
}

impl<R> Column<R> {
    /// Build a column from a key and an accessor closure.
    pub fn new(
        key: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            accessor: Box::new(accessor),
        }
    }

    /// The column key used for search and sort configuration.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Builder for [`TableView`].
pub struct TableViewBuilder<R> {
    data: Vec<R>,
    columns: Vec<Column<R>>,
    search_keys: Vec<String>,
    rows_per_page: usize,
    initial_sort: Option<(String, SortDirection)>,
}

impl<R> TableViewBuilder<R> {
    /// Add a typed column accessor.
    #[must_use]
    pub fn column(
        mut self,
        key: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        self.columns.push(Column::new(key, accessor));
        self
    }

    /// Restrict search to the given column keys. Unknown keys are ignored.
    #[must_use]
    pub fn search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Override the page size. Zero is clamped to one row per page.
    #[must_use]
    pub fn rows_per_page(mut self, rows: usize) -> Self {
        self.rows_per_page = rows.max(1);
        self
    }

    /// Start with an active sort instead of the source order.
    #[must_use]
    pub fn initial_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.initial_sort = Some((key.into(), direction));
        self
    }

    /// Finish building the view.
    ///
    /// An initial sort naming an unconfigured column is dropped silently,
    /// matching the view's no-error contract.
    #[must_use]
    pub fn build(self) -> TableView<R> {
        let sort = self
            .initial_sort
            .filter(|(key, _)| self.columns.iter().any(|column| column.key == *key));
        TableView {
            data: self.data,
            columns: self.columns,
            search_keys: self.search_keys,
            rows_per_page: self.rows_per_page,
            search: String::new(),
            sort,
            page: 0,
        }
    }
}

/// Derived (filtered, sorted, paginated) view over an in-memory collection.
///
/// Holds the full dataset plus the active search term, sort state, and page
/// index. Derived views are recomputed on each read; replacing the data or
/// changing the sort resets to page zero, and every navigation clamps to
/// `[0, page_count - 1]` (or zero when the filtered set is empty).
pub struct TableView<R> {
    data: Vec<R>,
    columns: Vec<Column<R>>,
    search_keys: Vec<String>,
    rows_per_page: usize,
    search: String,
    sort: Option<(String, SortDirection)>,
    page: usize,
}

impl<R> TableView<R> {
    /// Start building a view over `data`.
    #[must_use]
    pub fn builder(data: Vec<R>) -> TableViewBuilder<R> {
        TableViewBuilder {
            data,
            columns: Vec::new(),
            search_keys: Vec::new(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            initial_sort: None,
        }
    }

    /// Replace the source data and return to the first page.
    pub fn replace_data(&mut self, data: Vec<R>) {
        self.data = data;
        self.page = 0;
    }

    /// Set the search term. The page index is clamped, not reset, so a
    /// narrowing search keeps the reader as close as possible to where they
    /// were.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = self.clamped_page();
    }

    /// Cycle the sort state for `key`: ascending, then descending, then
    /// cleared (back to the filtered source order). Sorting by a different
    /// column always starts ascending. Unknown keys are ignored.
    pub fn request_sort(&mut self, key: &str) {
        if !self.columns.iter().any(|column| column.key == key) {
            return;
        }
        self.sort = match self.sort.take() {
            Some((active, SortDirection::Ascending)) if active == key => {
                Some((active, SortDirection::Descending))
            }
            Some((active, SortDirection::Descending)) if active == key => None,
            _ => Some((key.to_owned(), SortDirection::Ascending)),
        };
        self.page = 0;
    }

    /// Move to the next page, clamping at the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.clamped_page() as isize + 1);
    }

    /// Move to the previous page, clamping at the first page.
    pub fn previous_page(&mut self) {
        self.go_to_page(self.clamped_page() as isize - 1);
    }

    /// Jump to an absolute page index, clamping to the valid range.
    pub fn go_to_page(&mut self, page: isize) {
        let requested = if page < 0 { 0 } else { page.unsigned_abs() };
        self.page = requested.min(self.last_page());
    }

    /// Active search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active sort, if any.
    #[must_use]
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort
            .as_ref()
            .map(|(key, direction)| (key.as_str(), *direction))
    }

    /// Current page index, clamped against the filtered set.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.clamped_page()
    }

    /// Number of records matching the active search.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.filtered().len()
    }

    /// Number of pages for the filtered set; zero when it is empty.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.rows_per_page)
    }

    /// Records of the current page, in filtered-then-sorted order.
    #[must_use]
    pub fn page_items(&self) -> Vec<&R> {
        let ordered = self.ordered();
        let start = self.clamped_page() * self.rows_per_page;
        ordered
            .into_iter()
            .skip(start)
            .take(self.rows_per_page)
            .collect()
    }

    fn filtered(&self) -> Vec<&R> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.data.iter().collect();
        }
        let searchable: Vec<&Column<R>> = self
            .columns
            .iter()
            .filter(|column| self.search_keys.iter().any(|key| *key == column.key))
            .collect();
        self.data
            .iter()
            .filter(|record| {
                searchable
                    .iter()
                    .any(|column| (column.accessor)(record).matches(&needle))
            })
            .collect()
    }

    fn ordered(&self) -> Vec<&R> {
        let mut rows = self.filtered();
        let Some((key, direction)) = &self.sort else {
            return rows;
        };
        let Some(column) = self.columns.iter().find(|column| column.key == *key) else {
            return rows;
        };
        // Stable sort keeps the filtered order for ties.
        rows.sort_by(|a, b| {
            let ordering = compare_cells(&(column.accessor)(a), &(column.accessor)(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        rows
    }

    fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    fn clamped_page(&self) -> usize {
        self.page.min(self.last_page())
    }
}
