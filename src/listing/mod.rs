pub mod quote_filter;

pub use quote_filter::{apply, FilterSpec, PagedView, ServiceFilter};
