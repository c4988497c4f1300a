//! Body registry
//!
//! Static, never-mutated data for the sun's eight orbiting bodies.

pub mod registry;

pub use registry::{BODIES, BodyDescriptor, BodyId, all_bodies};

#[cfg(test)]
pub use registry::find_body;
