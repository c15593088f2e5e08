//! Domain logic shared by the Vitrine backend crates.
//!
//! Pure, I/O-free building blocks: the error taxonomy, slug generation,
//! media-type derivation, feedback validation, and the per-page SEO
//! metadata table.

pub mod error;
pub mod feedback;
pub mod media;
pub mod pages;
pub mod slug;
pub mod types;
