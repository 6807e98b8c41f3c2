//! Binary schema compilation
//!
//! Compiles a local binary schema file into a source-embeddable header: a
//! size constant plus a byte-array literal that reproduces the input
//! byte-for-byte. Output is deterministic, so re-running on an unchanged
//! input rewrites an identical file.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::config::defaults::EMBED_BYTES_PER_ROW;
use crate::error::SchemaError;

/// Description of one schema compilation: where to read, where to write,
/// and the names emitted into the generated header.
#[derive(Debug, Clone)]
pub struct SchemaJob {
    /// Binary input file
    pub input: PathBuf,
    /// Generated header destination
    pub output: PathBuf,
    /// Source name for the banner comment
    pub source_name: String,
    /// Preprocessor constant holding the byte length
    pub size_constant: String,
    /// Array variable holding the bytes
    pub array_name: String,
}

/// Render the generated header for `data`.
///
/// Layout: banner comment, size `#define`, blank line, array declaration.
/// The array body starts with a newline and carries one tab-indented row
/// per group of [`EMBED_BYTES_PER_ROW`] bytes, each byte as an uppercase
/// `0xNN` literal, every row comma-terminated. The final row may be short;
/// empty input produces an empty body.
pub fn render_embed(job: &SchemaJob, data: &[u8]) -> String {
    let mut body = String::from("\n");

    for row in data.chunks(EMBED_BYTES_PER_ROW) {
        let literals: Vec<String> = row.iter().map(|b| format!("0x{b:02X}")).collect();
        let _ = writeln!(body, "\t{},", literals.join(", "));
    }

    format!(
        "/* file: {} */\n\n#define {} {}\n\nchar {}[] = {{{body}}};\n",
        job.source_name,
        job.size_constant,
        data.len(),
        job.array_name,
    )
}

/// Compile the schema described by `job`, overwriting any existing output.
///
/// Returns the input byte count. Fails loudly if the input cannot be read
/// or the output cannot be written; no truncated header is left behind on
/// a read failure because rendering happens entirely in memory.
pub fn compile(job: &SchemaJob) -> Result<usize, SchemaError> {
    let data = std::fs::read(&job.input).map_err(|e| SchemaError::ReadInput {
        path: job.input.clone(),
        error: e.to_string(),
    })?;

    let rendered = render_embed(job, &data);

    if let Some(parent) = job.output.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SchemaError::WriteOutput {
            path: job.output.clone(),
            error: e.to_string(),
        })?;
    }

    std::fs::write(&job.output, rendered).map_err(|e| SchemaError::WriteOutput {
        path: job.output.clone(),
        error: e.to_string(),
    })?;

    tracing::debug!(
        "Compiled {} ({} bytes) into {}",
        job.input.display(),
        data.len(),
        job.output.display()
    );

    Ok(data.len())
}
