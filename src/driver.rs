use crate::factory::shape_factory;
use crate::shape::Shape;
use anyhow::Result;
use std::io::Write;

/// Tokens the demo feeds to the factory, in order. The last one is deliberately unknown.
pub const DEMO_TOKENS: [&str; 3] = ["circle", "square", "triangle"];

/// Write the name and draw description of a shape, followed by a blank line.
pub fn print_shape_details(out: &mut dyn Write, shape: &Shape) -> Result<()> {
    writeln!(out, "Shape Name: {}", shape.name())?;
    writeln!(out, "{}", shape.draw())?;
    writeln!(out)?;
    Ok(())
}

/// Run every demo token through the factory and write the outcome of each.
///
/// An unsupported token is reported on the same stream and does not stop the run;
/// only a failing writer makes this return an error.
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    for token in DEMO_TOKENS {
        match shape_factory(token) {
            Ok(shape) => print_shape_details(out, &shape)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
    Ok(())
}
