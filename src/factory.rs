use crate::shape::{Shape, ShapeKind};
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while resolving a shape token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The token does not name any known shape. Carries the token verbatim.
    #[error("Unsupported shape type: {0}")]
    UnsupportedShapeType(String),
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Exact, case-sensitive lookup. No trimming or case folding is applied.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            _ => Err(ShapeError::UnsupportedShapeType(token.to_string())),
        }
    }
}

/// Create a new shape for the given token.
///
/// Recognized tokens are `"circle"` and `"square"`. Anything else, including the
/// empty string, yields [`ShapeError::UnsupportedShapeType`].
///
/// Example
/// ```
/// use shape_factory::shape_factory;
/// let shape = shape_factory("circle").unwrap();
/// assert_eq!(shape.name(), "Circle");
/// assert_eq!(shape.draw(), "Drawing a circle");
/// assert!(shape_factory("triangle").is_err());
/// ```
pub fn shape_factory(token: &str) -> Result<Shape, ShapeError> {
    let kind: ShapeKind = token.parse()?;
    Ok(Shape::new(kind))
}
