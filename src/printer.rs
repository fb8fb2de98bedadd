use std::fmt::Display;
use std::io::{self, Write};

/// Writes every value followed by a single space. No newline is written.
pub fn print_sequence<W, T>(out: &mut W, values: &[T]) -> io::Result<()>
where
    W: Write + ?Sized,
    T: Display,
{
    for value in values {
        write!(out, "{} ", value)?;
    }
    Ok(())
}
