//! Shared utilities for parsing model responses.

pub mod section_extraction;

pub use section_extraction::{extract_labeled_sections, strip_code_fences, SECTION_DELIMITER};
