//! Scene recommendation — category-priority weighting plus keyword
//! heuristics over the product's free text, and the semantic keyword
//! engine that turns product wording into visual cues.

pub mod handlers;
pub mod scene_recommender;
pub mod semantic;
