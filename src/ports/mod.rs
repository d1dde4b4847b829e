//! Ports layer: Trait definitions for external collaborators.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the evaluation core and the outside (rendering surfaces).

mod renderer;

pub use renderer::Renderer;
