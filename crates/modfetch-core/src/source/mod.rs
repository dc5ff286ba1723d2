//! Source string parsing for module acquisition.
//!
//! A module source uses the grammar
//! `[<scheme>::]<address>[//<subdir>][?<query>]`: an optional forced-scheme
//! override, a URL-shaped address, an optional sub-path inside the fetched
//! artifact, and query parameters that always travel with the address.

mod locator;

pub use locator::Locator;
