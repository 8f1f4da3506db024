pub fn deserialize<'de, D>(deserializer: D) -> Result<semver::VersionReq, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = <String as serde::Deserialize>::deserialize(deserializer)?;
    semver::VersionReq::parse(&s).map_err(|e| {
        serde::de::Error::custom(format!("version requirement is invalid: '{s}': {e}"))
    })
}

pub fn serialize<S>(this: &semver::VersionReq, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&this.to_string())
}
