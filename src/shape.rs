use std::fmt;

/// The concrete kinds of shape this crate knows how to build.
///
/// Each kind fixes the type name a fresh shape starts with and the description
/// returned by [`Shape::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl ShapeKind {
    /// Type name a freshly constructed shape of this kind is given.
    pub fn type_name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
        }
    }

    /// Token accepted by [`crate::shape_factory`] for this kind.
    pub fn token(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
        }
    }

    fn description(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Drawing a circle",
            ShapeKind::Square => "Drawing a square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A drawable shape: a variant tag plus a name the owner may change.
///
/// Every instance owns its name outright; cloning produces an independent copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    kind: ShapeKind,
    name: String,
}

impl Shape {
    /// Build a shape of the given kind, named after its type.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            name: kind.type_name().to_string(),
        }
    }

    pub fn circle() -> Self {
        Self::new(ShapeKind::Circle)
    }

    pub fn square() -> Self {
        Self::new(ShapeKind::Square)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Describe how this shape is drawn. Depends only on the variant, not the name.
    pub fn draw(&self) -> &'static str {
        self.kind.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_type_name() {
        let circle = Shape::circle();
        assert_eq!(circle.kind(), ShapeKind::Circle);
        assert_eq!(circle.name(), "Circle");
        assert_eq!(circle.draw(), "Drawing a circle");

        let square = Shape::square();
        assert_eq!(square.kind(), ShapeKind::Square);
        assert_eq!(square.name(), "Square");
        assert_eq!(square.draw(), "Drawing a square");
    }

    #[test]
    fn test_set_name_keeps_draw_behaviour() {
        let mut shape = Shape::circle();
        shape.set_name("Wheel");

        assert_eq!(shape.name(), "Wheel");
        assert_eq!(shape.draw(), "Drawing a circle");
        assert_eq!(shape.kind(), ShapeKind::Circle);
    }

    #[test]
    fn test_kind_display_matches_type_name() {
        assert_eq!(ShapeKind::Circle.to_string(), "Circle");
        assert_eq!(ShapeKind::Square.to_string(), "Square");
    }

    #[test]
    fn test_draw_is_never_empty() {
        for kind in [ShapeKind::Circle, ShapeKind::Square] {
            let shape = Shape::new(kind);
            assert!(!shape.name().is_empty());
            assert!(!shape.draw().is_empty());
        }
    }
}
