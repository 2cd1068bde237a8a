// Image generation pipeline: compile the prompt, call the image model once
// per requested shot, stamp results. All upstream calls go through the
// gemini module — no direct HTTP here.

pub mod handlers;
pub mod pipeline;
