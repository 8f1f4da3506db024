use pemheader_common::{re::anyhow, ConversionJob};

/// Embed a single file given on the command line
pub fn convert(
    job: &ConversionJob,
    root: &std::path::Path,
    out: &mut impl std::io::Write,
) -> anyhow::Result<()> {
    pemheader_common::convert(&job.rooted_at(root))?;
    writeln!(
        out,
        "Converted {} to {}",
        job.input.display(),
        job.output.display()
    )?;
    Ok(())
}
