use pemheader_common::{Identifier, RawStringDelimiter, StorageMarker};

///
#[derive(clap::Parser, Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[clap(about, version, author)]
pub struct Args {
    /// Path of the pemheader configuration file (toml format)
    #[clap(short, long)]
    pub config: Option<String>,

    /// Without command, every configured header is generated
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

///
#[derive(clap::Subcommand, Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Commands {
    /// Embed a single PEM file, ignoring the configured headers
    Convert {
        /// PEM file to embed
        input: std::path::PathBuf,
        /// Header file to generate
        output: std::path::PathBuf,
        /// Name of the C constant
        name: Identifier,
        /// Placement annotation of the constant, empty for none [default: PROGMEM]
        #[clap(long, conflicts_with = "no-storage-marker")]
        storage_marker: Option<StorageMarker>,
        /// Declare the constant without placement annotation
        #[clap(long)]
        no_storage_marker: bool,
        /// Delimiter of the raw string literal
        #[clap(long, default_value = "EOF")]
        delimiter: RawStringDelimiter,
    },
    /// Show the loaded config (as serialized json format)
    ConfigShow,
    /// Show the difference between the loaded config and the default one
    ConfigDiff,
}
