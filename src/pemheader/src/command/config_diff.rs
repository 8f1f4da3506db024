use pemheader_common::re::anyhow;
use pemheader_config::Config;

pub fn config_diff(config: &Config, out: &mut impl std::io::Write) -> anyhow::Result<()> {
    let loaded_config = serde_json::to_string_pretty(config)?;
    let default_config = serde_json::to_string_pretty(&Config::default())?;

    for diff in diff::lines(&default_config, &loaded_config) {
        match diff {
            diff::Result::Left(l) => writeln!(out, "-{l}")?,
            diff::Result::Both(l, _) => writeln!(out, " {l}")?,
            diff::Result::Right(r) => writeln!(out, "+{r}")?,
        }
    }
    Ok(())
}
