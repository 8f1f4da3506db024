use crate::ConfigHeader;
use pemheader_common::RawStringDelimiter;

///
pub struct WantsVersion(pub(crate) ());

///
pub struct WantsDefaults {
    #[allow(dead_code)]
    pub(crate) parent: WantsVersion,
    pub(super) version_requirement: semver::VersionReq,
}

///
pub struct WantsHeaders {
    pub(crate) parent: WantsDefaults,
    pub(super) storage_marker: String,
    pub(super) delimiter: RawStringDelimiter,
}

///
pub struct WantsValidate {
    pub(crate) parent: WantsHeaders,
    pub(super) headers: Vec<ConfigHeader>,
}
