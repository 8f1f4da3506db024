#![allow(clippy::module_name_repetitions)]
use pemheader_common::{Identifier, RawStringDelimiter, DEFAULT_STORAGE_MARKER};

///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(
        serialize_with = "crate::parser::semver::serialize",
        deserialize_with = "crate::parser::semver::deserialize"
    )]
    pub(crate) version_requirement: semver::VersionReq,
    #[serde(default)]
    pub(crate) defaults: ConfigDefaults,
    #[serde(default)]
    pub(crate) headers: Vec<ConfigHeader>,
}

/// Values used by every header which does not override them
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigDefaults {
    /// an empty string removes the marker from the declaration
    #[serde(default = "ConfigDefaults::default_storage_marker")]
    pub storage_marker: String,
    ///
    #[serde(default)]
    pub delimiter: RawStringDelimiter,
}

impl ConfigDefaults {
    pub(crate) fn default_storage_marker() -> String {
        DEFAULT_STORAGE_MARKER.to_string()
    }
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            storage_marker: Self::default_storage_marker(),
            delimiter: RawStringDelimiter::default(),
        }
    }
}

/// A `[[headers]]` entry
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigHeader {
    /// PEM file, relative to the working directory
    pub input: std::path::PathBuf,
    /// generated header, relative to the working directory
    pub output: std::path::PathBuf,
    /// name of the C constant
    pub name: Identifier,
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_marker: Option<String>,
    ///
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<RawStringDelimiter>,
}

impl ConfigHeader {
    /// A header using the `[defaults]` declaration settings
    #[must_use]
    pub fn new(
        input: impl Into<std::path::PathBuf>,
        output: impl Into<std::path::PathBuf>,
        name: Identifier,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            name,
            storage_marker: None,
            delimiter: None,
        }
    }
}
