use pemheader_common::{
    convert,
    re::{anyhow, tracing},
    ConversionJob,
};

/// Generate every header in order, stopping at the first failure
///
/// Headers generated before the failure are kept.
pub fn run(
    jobs: &[ConversionJob],
    root: &std::path::Path,
    out: &mut impl std::io::Write,
) -> anyhow::Result<()> {
    tracing::info!(count = jobs.len(), root = %root.display(), "generating headers");

    for job in jobs {
        convert(&job.rooted_at(root))?;
        writeln!(
            out,
            "Converted {} to {}",
            job.input.display(),
            job.output.display()
        )?;
    }

    writeln!(out, "Certificate conversion complete!")?;
    Ok(())
}
