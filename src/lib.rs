pub mod config;
pub mod printer;
pub mod sequence;
pub mod sorting;

use std::io::Write;

use anyhow::{Context, Result};

pub use config::Config;
pub use sequence::Sequence;

/// Generates the sequence, prints it, sorts it and prints it again.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let mut seq = Sequence::generate(config.len)
        .with_context(|| format!("sequence length {} is out of range", config.len))?;
    log::debug!("generated {} values", seq.len());

    if config.labels {
        write!(out, "before: ").context("failed to write label")?;
    }
    printer::print_sequence(out, seq.as_slice()).context("failed to print generated values")?;

    writeln!(out).context("failed to write separator")?;
    writeln!(out).context("failed to write separator")?;

    let swaps = sorting::selection_sort(seq.as_mut_slice());
    log::debug!("sorted with {} swaps", swaps);

    if config.labels {
        write!(out, "after: ").context("failed to write label")?;
    }
    printer::print_sequence(out, seq.as_slice()).context("failed to print sorted values")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}
