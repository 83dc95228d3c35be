//! Search types: pure filtering over the catalog.

mod filter;

pub use filter::ProductFilter;
