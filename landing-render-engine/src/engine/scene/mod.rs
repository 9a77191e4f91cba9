//! The animated particle scene behind the page.
//!
//! A fixed field of 4000 points morphs between three procedural target
//! shapes as the active section changes, while the whole cloud rotates
//! and its tint drifts toward the section colour. Behind it sit a dim
//! torus knot, a starfield shell and distance fog for depth.
//!
//! ## Morphing
//!
//! ```text
//! ActiveSection (viewport observer)
//!   └─> morph_particles()
//!       └─> current += (target[section] - current) * damping(dt)
//! ```
//!
//! The particle buffer is allocated once and only mutated in place; a
//! section change mid-morph simply redirects the decay toward the new
//! target, so positions stay continuous.

/// Procedural target shape generation (vortex, helix, sphere).
pub mod shapes;

/// Particle field resource, point mesh, and the per-frame morph,
/// rotation and tint systems.
pub mod particles;

/// Decorative backdrop: torus knot, starfield, fog, lights and camera.
pub mod backdrop;
