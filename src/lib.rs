//! A small walkthrough of the factory creational pattern over drawable shapes.
//!
//! The crate offers two flavours of the same idea. [`shape_factory`] is a simple
//! factory: it maps a string token such as `"circle"` to a freshly built [`Shape`],
//! or fails with [`ShapeError::UnsupportedShapeType`]. The [`creator`] module shows
//! the factory-method flavour, where each [`ShapeCreator`] decides which shape it
//! builds while sharing the reporting logic.
//!
//! The [`driver`] module writes the demonstration transcripts used by the binaries
//! to any [`std::io::Write`] sink.

pub mod creator;
pub mod driver;
mod factory;
pub mod shape;

pub use creator::{CircleCreator, ShapeCreator, SquareCreator};
pub use factory::{ShapeError, shape_factory};
pub use shape::{Shape, ShapeKind};
