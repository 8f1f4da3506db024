use crate::{
    config::{Config, ConfigDefaults},
    ConfigHeader,
};
use pemheader_common::{re::anyhow, StorageMarker};

use super::{wants::WantsValidate, with::Builder};

impl Builder<WantsValidate> {
    /// Assemble the configuration and check it
    ///
    /// # Errors
    ///
    /// * see [`Config::from_toml`] for the checks
    pub fn validate(self) -> anyhow::Result<Config> {
        Self::ensure(self.build())
    }

    /// Assemble the configuration without checking it
    #[must_use]
    pub fn build(self) -> Config {
        let headers = self.state;
        let defaults = headers.parent;
        let version = defaults.parent;

        Config {
            version_requirement: version.version_requirement,
            defaults: ConfigDefaults {
                storage_marker: defaults.storage_marker,
                delimiter: defaults.delimiter,
            },
            headers: headers.headers,
        }
    }

    pub(crate) fn ensure(config: Config) -> anyhow::Result<Config> {
        fn normalize(path: &std::path::Path) -> std::path::PathBuf {
            path.components()
                .filter(|c| !matches!(c, std::path::Component::CurDir))
                .collect()
        }

        config.defaults.storage_marker.parse::<StorageMarker>()?;

        let inputs = config
            .headers
            .iter()
            .map(|header| normalize(&header.input))
            .collect::<std::collections::BTreeSet<_>>();

        let mut outputs = std::collections::BTreeSet::new();
        for ConfigHeader {
            output,
            storage_marker,
            name,
            ..
        } in &config.headers
        {
            if let Some(marker) = storage_marker {
                marker.parse::<StorageMarker>()?;
            }

            let normalized = normalize(output);
            if inputs.contains(&normalized) {
                anyhow::bail!(
                    "'{}' is both the input of a header and the output of '{name}'",
                    output.display()
                );
            }
            if !outputs.insert(normalized) {
                anyhow::bail!(
                    "'{}' is the output of more than one header (second one is '{name}')",
                    output.display()
                );
            }
        }

        Ok(config)
    }
}
