//! Frame-to-frame page systems.
//!
//! `scrolling` owns the page offset and the viewport observer that maps
//! anchor visibility to the active section index; `fps_tracking` renders
//! the diagnostics overlay.

/// Page scroll state, wheel input, and section visibility tracking.
pub mod scrolling;

/// FPS overlay text via the frame time diagnostics plugin.
pub mod fps_tracking;
