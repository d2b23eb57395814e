//! Ambient particle-field backgrounds.
//!
//! Two variants share the same frame-driven design:
//! - a 2D field whose particles drift, wrap at the surface edges, react
//!   to the pointer, and link up with faint lines when close together;
//! - a 3D point field whose points sink through a cube and recycle to
//!   the top face, projected onto the canvas through a pinhole camera.
//!
//! The simulations are pure Rust and emit draw instructions through the
//! [`surface::DrawSurface`] trait; the Leptos components in
//! [`component`] wire them to a canvas, the pointer, and the browser's
//! animation-frame scheduler.
//!
//! # Example
//!
//! ```ignore
//! use neon_portfolio::components::particle_field::ParticleCanvas;
//!
//! view! {
//!     <section class="backdrop">
//!         <ParticleCanvas />
//!     </section>
//! }
//! ```

mod component;
pub mod depth;
pub mod field;
pub mod runner;
pub mod style;
pub mod surface;

pub use component::{DepthCanvas, ParticleCanvas};
pub use style::{Color, DepthStyle, FieldStyle};
