//! Product insight — vision analysis that understands the uploaded product
//! photos and populates the product state: category mapping, selling
//! points, per-scene descriptions, and size information.

pub mod engine;
pub mod handlers;
pub mod prompts;
