//! The report pipeline: fetch, normalize, summarize, assemble, render.
//!
//! Each stage is a standalone module with a narrow contract; the `report`
//! command drives them in sequence.

pub mod document;
pub mod docx;
pub mod fetch;
pub mod normalize;
pub mod summarize;
