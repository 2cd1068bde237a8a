//! Static catalogs — scenes and product categories.
//!
//! Both tables are compiled-in, immutable data: loaded once, never written
//! at runtime. Unknown ids resolve to `None`, never to an error.

pub mod categories;
pub mod handlers;
pub mod scenes;
