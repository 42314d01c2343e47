//! Rendering module
//!
//! Produces CPU-side triangle lists; uploading and drawing them is up to the
//! host's graphics backend.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{build_bounce_frame, build_dodge_frame, build_runner_frame};
pub use vertex::{Vertex, colors};
