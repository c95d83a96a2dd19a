use crate::model::quote::{Quote, ServiceKind};
use chrono::NaiveDate;

/// Service predicate of a [`FilterSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceFilter {
    All,
    Only(ServiceKind),
}

/// Search and filter criteria applied to the full quote set before display.
///
/// Ephemeral view input, never persisted.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against name, email and service.
    pub search_text: String,
    pub service: ServiceFilter,
    /// Inclusive calendar-date bounds on `created_at`, time of day ignored.
    pub created_at_start: Option<NaiveDate>,
    pub created_at_end: Option<NaiveDate>,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec {
            search_text: String::new(),
            service: ServiceFilter::All,
            created_at_start: None,
            created_at_end: None,
        }
    }
}

/// One page of a filtered quote set.
#[derive(Debug, Clone)]
pub struct PagedView {
    pub items: Vec<Quote>,
    pub total_pages: usize,
}

/// Narrow `all` down to the records matching `spec` and slice out one page.
///
/// All predicates are intersected. `page` is 1-based and is not clamped:
/// a page past the end (or page 0, or a zero `page_size`) yields an empty
/// `items`. `total_pages` is 0 when nothing matched.
///
/// Pure and deterministic, no I/O.
pub fn apply(all: &[Quote], spec: &FilterSpec, page: usize, page_size: usize) -> PagedView {
    let filtered: Vec<&Quote> = all
        .iter()
        .filter(|q| matches_search(q, &spec.search_text))
        .filter(|q| matches_service(q, spec.service))
        .filter(|q| matches_date_range(q, spec.created_at_start, spec.created_at_end))
        .collect();

    if filtered.is_empty() || page_size == 0 {
        return PagedView {
            items: Vec::new(),
            total_pages: 0,
        };
    }

    let total_pages = filtered.len().div_ceil(page_size);
    let items = if page == 0 {
        Vec::new()
    } else {
        filtered
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .cloned()
            .collect()
    };

    PagedView { items, total_pages }
}

fn matches_search(quote: &Quote, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    quote.name.to_lowercase().contains(&needle)
        || quote.email.to_lowercase().contains(&needle)
        || quote.service.as_str().to_lowercase().contains(&needle)
}

fn matches_service(quote: &Quote, filter: ServiceFilter) -> bool {
    match filter {
        ServiceFilter::All => true,
        ServiceFilter::Only(kind) => quote.service == kind,
    }
}

fn matches_date_range(
    quote: &Quote,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    // A record with no (or unparseable) creation date is excluded whenever
    // any bound is set.
    let Some(date) = created_date(quote) else {
        return false;
    };
    if let Some(start) = start {
        if date < start {
            return false;
        }
    }
    if let Some(end) = end {
        if date > end {
            return false;
        }
    }
    true
}

fn created_date(quote: &Quote) -> Option<NaiveDate> {
    quote
        .created_at
        .as_deref()
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.date_naive())
}
