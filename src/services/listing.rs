//! Listing request parsing and pagination for the map catalog.
//!
//! DESIGN
//! ======
//! The catalog page is driven entirely by three query-string values:
//! a name filter, a page number, and a combined `<column>-<order>` sort key.
//! Anything unrecognised falls back to a default instead of failing, so a
//! hand-edited URL always renders a page.
//!
//! Page clamping happens after counting: a page past the end is pulled back
//! to the last page. With zero matching rows the last page is 0, and the
//! request is answered with page 0 and an empty result.

use serde::Serialize;

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

/// Rows per catalog page.
pub const PAGE_SIZE: i64 = 50;

/// Column the catalog is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Width,
    Height,
    /// Computed at query time as `height / width` in floating point.
    HeightByWidth,
}

impl SortColumn {
    /// Columns in table order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Width, Self::Height, Self::HeightByWidth];

    /// Parse a column name; unknown names sort by name.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "width" => Self::Width,
            "height" => Self::Height,
            "heightbywidth" => Self::HeightByWidth,
            _ => Self::Name,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Width => "width",
            Self::Height => "height",
            Self::HeightByWidth => "heightbywidth",
        }
    }

    /// SQL expression to order by. Never contains user input.
    #[must_use]
    pub fn order_expr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Width => "width",
            Self::Height => "height",
            Self::HeightByWidth => "CAST(height AS REAL) / CAST(width AS REAL)",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse a direction; anything but `desc` is ascending.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") { Self::Desc } else { Self::Asc }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Next direction when a column header is clicked.
    ///
    /// `current` is `None` when the catalog is sorted by another column.
    #[must_use]
    pub fn toggle(current: Option<Self>) -> Self {
        match current {
            None | Some(Self::Desc) => Self::Asc,
            Some(Self::Asc) => Self::Desc,
        }
    }
}

/// A parsed catalog request, before counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    /// Substring the map name must contain. Empty matches everything.
    pub name: String,
    /// Requested page, always `>= 1` before clamping.
    pub page: i64,
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self { name: String::new(), page: 1, column: SortColumn::Name, order: SortOrder::Asc }
    }
}

impl ListingRequest {
    /// Build a request from raw query-string values.
    ///
    /// `column_and_order` is `"<column>-<order>"`, defaulting to `name-asc`.
    #[must_use]
    pub fn from_query(name: Option<&str>, page: Option<&str>, column_and_order: Option<&str>) -> Self {
        let mut parts = column_and_order.unwrap_or("name-asc").splitn(2, '-');
        let column = SortColumn::parse(parts.next().unwrap_or_default());
        let order = SortOrder::parse(parts.next().unwrap_or_default());

        Self {
            name: name.unwrap_or_default().to_owned(),
            page: parse_page(page),
            column,
            order,
        }
    }

    /// The `<column>-<order>` key for this request.
    #[must_use]
    pub fn sort_key(&self) -> String {
        format!("{}-{}", self.column.as_str(), self.order.as_str())
    }

    /// Header state for every sortable column.
    #[must_use]
    pub fn headers(&self) -> Vec<ColumnHeader> {
        SortColumn::ALL
            .into_iter()
            .map(|column| {
                let active = (column == self.column).then_some(self.order);
                let next = SortOrder::toggle(active);
                ColumnHeader { column, active, next_sort_key: format!("{}-{}", column.as_str(), next.as_str()) }
            })
            .collect()
    }
}

/// One sortable table header: its current direction and the sort key its
/// button switches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub column: SortColumn,
    /// `None` when the table is sorted by another column.
    pub active: Option<SortOrder>,
    pub next_sort_key: String,
}

/// Parse a page number. Non-integers and values below 1 become 1.
fn parse_page(raw: Option<&str>) -> i64 {
    match raw.and_then(parse_integral) {
        Some(page) if page >= 1 => page,
        _ => 1,
    }
}

/// Parse a finite, integral number such as `"12"`, `"4.0"` or `"1e20"`.
/// Magnitudes past the `i64` range saturate.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn parse_integral(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

/// Page position after counting matching rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Clamped page. 0 when there are no rows.
    pub page: i64,
    pub number_of_pages: i64,
    pub number_of_rows: i64,
}

impl Pagination {
    /// Clamp `requested_page` down to the last page for `number_of_rows`.
    #[must_use]
    pub fn new(requested_page: i64, number_of_rows: i64) -> Self {
        let number_of_rows = number_of_rows.max(0);
        let number_of_pages = (number_of_rows + PAGE_SIZE - 1) / PAGE_SIZE;
        let page = requested_page.min(number_of_pages);
        Self { page, number_of_pages, number_of_rows }
    }

    /// Row offset of the first row on this page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        PAGE_SIZE * (self.page - 1).max(0)
    }

    /// Pager targets visible from this page.
    #[must_use]
    pub fn links(&self) -> PageLinks {
        let back = self.page > 1;
        let forward = self.page < self.number_of_pages;
        PageLinks {
            first: back.then_some(1),
            previous: back.then_some(self.page - 1),
            next: forward.then_some(self.page + 1),
            last: forward.then_some(self.number_of_pages),
        }
    }
}

/// Pager buttons: backwards ones appear past page 1, forward ones before
/// the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: Option<i64>,
    pub previous: Option<i64>,
    pub next: Option<i64>,
    pub last: Option<i64>,
}
