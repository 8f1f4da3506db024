use pemheader_common::re::anyhow;
use pemheader_config::Config;

pub fn config_show(config: &Config, out: &mut impl std::io::Write) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}
