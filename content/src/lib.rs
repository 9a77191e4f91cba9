//! Shared content and configuration for the MedVault landing experience.
//!
//! This crate is the language-neutral source of truth consumed by the
//! render engine: the static site record (navigation, hero copy, feature
//! pillars, stats, gallery, footer), the translation catalog type backing
//! the JSON locale assets, and the tuning constants for the particle
//! scene, scrolling and the lead relay.

/// Translation catalogs, locale identifiers and key resolution.
pub mod catalog;

/// Static site record: everything the page composer renders.
pub mod site;

/// Tuning constants for the scene, viewport tracking and lead relay.
pub mod tuning;
