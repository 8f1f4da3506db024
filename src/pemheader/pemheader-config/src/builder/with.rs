use super::wants::{WantsDefaults, WantsHeaders, WantsValidate, WantsVersion};
use crate::{config::ConfigDefaults, ConfigHeader};
use pemheader_common::{re::anyhow, RawStringDelimiter};

///
pub struct Builder<State> {
    pub(crate) state: State,
}

impl Builder<WantsVersion> {
    ///
    ///
    /// # Panics
    ///
    /// * CARGO_PKG_VERSION is not valid
    #[must_use]
    pub fn with_current_version(self) -> Builder<WantsDefaults> {
        Builder::<WantsDefaults> {
            state: WantsDefaults {
                parent: self.state,
                version_requirement: semver::VersionReq::parse(env!("CARGO_PKG_VERSION")).unwrap(),
            },
        }
    }

    ///
    ///
    /// # Errors
    ///
    /// * `version_requirement` is not a valid semver requirement
    pub fn with_version_str(
        self,
        version_requirement: &str,
    ) -> anyhow::Result<Builder<WantsDefaults>> {
        Ok(Builder::<WantsDefaults> {
            state: WantsDefaults {
                parent: self.state,
                version_requirement: semver::VersionReq::parse(version_requirement)?,
            },
        })
    }
}

impl Builder<WantsDefaults> {
    /// `PROGMEM` marker and `EOF` delimiter
    #[must_use]
    pub fn with_default_declaration(self) -> Builder<WantsHeaders> {
        let defaults = ConfigDefaults::default();
        self.with_declaration(&defaults.storage_marker, defaults.delimiter)
    }

    /// An empty `storage_marker` produces declarations without marker
    #[must_use]
    pub fn with_declaration(
        self,
        storage_marker: &str,
        delimiter: RawStringDelimiter,
    ) -> Builder<WantsHeaders> {
        Builder::<WantsHeaders> {
            state: WantsHeaders {
                parent: self.state,
                storage_marker: storage_marker.to_string(),
                delimiter,
            },
        }
    }
}

impl Builder<WantsHeaders> {
    /// The certificate and the key of the firmware's HTTPS server
    ///
    /// * `certs/cert.pem` into `src/cert.h` as `SSL_CERT`
    /// * `certs/key.pem` into `src/key.h` as `SSL_KEY`
    #[must_use]
    pub fn with_firmware_headers(self) -> Builder<WantsValidate> {
        self.with_headers([
            ConfigHeader::new(
                "certs/cert.pem",
                "src/cert.h",
                "SSL_CERT".parse().expect("valid"),
            ),
            ConfigHeader::new(
                "certs/key.pem",
                "src/key.h",
                "SSL_KEY".parse().expect("valid"),
            ),
        ])
    }

    ///
    #[must_use]
    pub fn with_headers(
        self,
        headers: impl IntoIterator<Item = ConfigHeader>,
    ) -> Builder<WantsValidate> {
        Builder::<WantsValidate> {
            state: WantsValidate {
                parent: self.state,
                headers: headers.into_iter().collect(),
            },
        }
    }

    ///
    #[must_use]
    pub fn without_headers(self) -> Builder<WantsValidate> {
        self.with_headers([])
    }
}
