//! TraceLens Trace Model
//!
//! Defines the data contract for recorded drawing-animation traces:
//! - **Record:** Canvas metadata plus the ordered sequence of drawn frames
//! - **Loader:** Eager, all-or-nothing parsing of a trace document into the record
//!
//! Hand positions are pixel coordinates on the canvas; tiles are cells of
//! the drawing grid identified by `[column, row]`.

pub mod loader;
pub mod record;

pub use loader::*;
pub use record::*;
