//! Layered prompt compilation.
//!
//! Each semantic facet of the final instruction is a layer with its own
//! content generator. `assemble` groups enabled layers into five semantic
//! buckets and renders them as English sentences — one paragraph of
//! instructive prose, not a keyword bag — plus a separate comma-joined
//! negative prompt.

pub mod assemble;
pub mod builder;
pub mod handlers;
pub mod layers;
pub mod phrases;
