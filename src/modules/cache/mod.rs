//! Cache module for raw listing pages
//!
//! Stores each fetched page as a JSON file keyed by its pagination offset so
//! repeated report generations do not hit the listings endpoint again.

mod page_cache;

pub use page_cache::PageCache;
