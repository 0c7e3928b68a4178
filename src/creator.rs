use crate::shape::Shape;
use anyhow::Result;
use std::io::Write;

/// Object-safe creator in the factory-method style.
///
/// Implementors decide which shape to build in [`ShapeCreator::create_shape`];
/// [`ShapeCreator::create`] is shared by every creator and only reports the result.
pub trait ShapeCreator {
    /// The factory method: build the shape this creator is responsible for.
    fn create_shape(&self) -> Shape;

    /// Build a shape through the factory method and describe it.
    fn create(&self) -> String {
        let shape = self.create_shape();
        format!("ShapeCreator: Created shape - {}", shape.draw())
    }
}

/// Creator that always builds a circle.
#[derive(Debug, Default, Clone, Copy)]
pub struct CircleCreator;

impl ShapeCreator for CircleCreator {
    fn create_shape(&self) -> Shape {
        Shape::circle()
    }
}

/// Creator that always builds a square.
#[derive(Debug, Default, Clone, Copy)]
pub struct SquareCreator;

impl ShapeCreator for SquareCreator {
    fn create_shape(&self) -> Shape {
        Shape::square()
    }
}

/// Client side of the pattern: works with any creator without knowing the concrete shape.
pub fn client_code(out: &mut dyn Write, creator: &dyn ShapeCreator) -> Result<()> {
    writeln!(out, "{}", creator.create())?;
    Ok(())
}

/// Write the factory-method walkthrough: a circle creator, then a square creator.
pub fn run_factory_method_demo(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "App: Drawing a circle.")?;
    client_code(out, &CircleCreator)?;
    writeln!(out)?;

    writeln!(out, "App: Drawing a square.")?;
    client_code(out, &SquareCreator)?;
    Ok(())
}
