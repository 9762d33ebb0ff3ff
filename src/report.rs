use crate::bounds::IntegralBounds;

use std::io::{self, Write};

pub const HEADER: &str = "i, bounds, quality";

pub fn format_line(index: usize, bounds: &IntegralBounds) -> String {
    format!(
        "{}, ub = {:?}, lb = {:?}, quality = {:?}",
        index,
        bounds.upper,
        bounds.lower,
        bounds.quality()
    )
}

/// Writes the header and the first `iterations + 1` brackets of `sequence`.
/// Returns the last bracket written.
pub fn write_report<W, I>(
    out: &mut W,
    sequence: I,
    iterations: usize,
) -> io::Result<Option<IntegralBounds>>
where
    W: Write,
    I: Iterator<Item = IntegralBounds>,
{
    writeln!(out, "{}", HEADER)?;
    let mut last = None;
    for (index, bounds) in sequence.take(iterations.saturating_add(1)).enumerate() {
        writeln!(out, "{}", format_line(index, &bounds))?;
        last = Some(bounds);
    }
    out.flush()?;
    Ok(last)
}
