//! Pure data types for bandbatch — band windows, partitions, job handles.
//!
//! This crate is a leaf dependency with no async runtime and no I/O. It
//! exists so that consumers (the kernel, embedders driving submission from
//! their own code) can work with bandbatch's type system without pulling in
//! the kernel's scheduler and config machinery.

pub mod band;
pub mod handle;
pub mod options;
pub mod partition;

// Flat re-exports for convenience
pub use band::*;
pub use handle::*;
pub use options::*;
pub use partition::*;
