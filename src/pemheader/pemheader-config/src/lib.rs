//! pemheader configuration

#![doc(html_no_source)]
#![deny(missing_docs)]
//
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cargo)]
//
#![allow(clippy::doc_markdown)]

/*
 * pemheader firmware certificate embedder
 * Copyright (C) 2022 viridIT SAS
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or any later version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT
 * ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program. If not, see https://www.gnu.org/licenses/.
 *
**/


mod parser {
    pub mod semver;
}

mod builder {
    ///
    pub mod validate;

    ///
    pub mod wants;

    ///
    pub mod with;
}

mod config;

pub use builder::{wants::*, with::*};
pub use config::{Config, ConfigDefaults, ConfigHeader};

use pemheader_common::{
    log_channel::CONFIG,
    re::{anyhow, tracing},
    ConversionJob, HeaderDeclaration,
};

impl Config {
    ///
    #[must_use]
    pub const fn builder() -> Builder<WantsVersion> {
        Builder {
            state: WantsVersion(()),
        }
    }

    /// Parse a [Config] with [TOML] format
    ///
    /// # Errors
    ///
    /// * data is not a valid [TOML]
    /// * one field is unknown
    /// * the version requirement are not fulfilled
    /// * a constant name or a delimiter is ill-formed
    /// * two headers target the same output file
    ///
    /// [TOML]: https://github.com/toml-lang/toml
    pub fn from_toml(input: &str) -> anyhow::Result<Self> {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct VersionRequirement {
            #[serde(
                serialize_with = "crate::parser::semver::serialize",
                deserialize_with = "crate::parser::semver::deserialize"
            )]
            version_requirement: semver::VersionReq,
        }

        let req = toml::from_str::<VersionRequirement>(input)?;
        let pkg_version = semver::Version::parse(env!("CARGO_PKG_VERSION"))?;

        if !req.version_requirement.matches(&pkg_version) {
            anyhow::bail!(
                "Version requirement not fulfilled: expected '{}' but got '{}'",
                req.version_requirement,
                env!("CARGO_PKG_VERSION")
            );
        }

        let config = toml::from_str::<Self>(input)
            .map_err(anyhow::Error::new)
            .and_then(Builder::<WantsValidate>::ensure)?;

        tracing::debug!(
            target: CONFIG,
            headers = config.headers.len(),
            "configuration loaded"
        );

        Ok(config)
    }

    ///
    #[must_use]
    pub const fn defaults(&self) -> &ConfigDefaults {
        &self.defaults
    }

    ///
    #[must_use]
    pub fn headers(&self) -> &[ConfigHeader] {
        &self.headers
    }

    /// One job per `[[headers]]` entry, in file order, overrides resolved against `[defaults]`
    #[must_use]
    pub fn jobs(&self) -> Vec<ConversionJob> {
        self.headers
            .iter()
            .map(|header| {
                let storage_marker = header
                    .storage_marker
                    .as_ref()
                    .unwrap_or(&self.defaults.storage_marker);

                ConversionJob::new(
                    &header.input,
                    &header.output,
                    HeaderDeclaration {
                        name: header.name.to_string(),
                        storage_marker: if storage_marker.is_empty() {
                            None
                        } else {
                            Some(storage_marker.clone())
                        },
                        delimiter: header
                            .delimiter
                            .clone()
                            .unwrap_or_else(|| self.defaults.delimiter.clone()),
                    },
                )
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builder()
            .with_current_version()
            .with_default_declaration()
            .with_firmware_headers()
            .build()
    }
}
