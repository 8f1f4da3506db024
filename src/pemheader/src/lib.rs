//! pemheader: embed PEM certificates and keys into C headers

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
*/

mod args;
mod command;

pub use args::{Args, Commands};

use pemheader_common::{
    log_channel::CONFIG,
    re::{
        anyhow::{self, Context},
        tracing,
    },
    ConversionJob, HeaderDeclaration, DEFAULT_STORAGE_MARKER,
};
use pemheader_config::Config;

/// Read the configuration file given with `--config`, or fall back on the firmware defaults
///
/// # Errors
///
/// * the file cannot be read
/// * the file is not a valid configuration
pub fn load_config(path: Option<&str>) -> anyhow::Result<Config> {
    path.map_or_else(
        || {
            tracing::debug!(target: CONFIG, "no configuration file, using the firmware defaults");
            Ok(Config::default())
        },
        |config| {
            std::fs::read_to_string(config)
                .context(format!("Cannot read file '{config}'"))
                .and_then(|f| Config::from_toml(&f).context("File contains format error"))
                .context("Cannot parse the configuration")
        },
    )
}

/// Execute `args`, relative paths are resolved against `root`
///
/// Confirmation lines go to `out`, diagnostics go through `tracing`.
///
/// # Errors
///
/// * the configuration cannot be loaded
/// * a file cannot be read or written
pub fn dispatch(
    args: Args,
    root: &std::path::Path,
    out: &mut impl std::io::Write,
) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    match args.command {
        None => command::run(&config.jobs(), root, out),
        Some(Commands::Convert {
            input,
            output,
            name,
            storage_marker,
            no_storage_marker,
            delimiter,
        }) => command::convert(
            &ConversionJob::new(
                input,
                output,
                HeaderDeclaration {
                    name: name.to_string(),
                    storage_marker: match storage_marker {
                        _ if no_storage_marker => None,
                        Some(marker) => marker.into_declared(),
                        None => Some(DEFAULT_STORAGE_MARKER.to_string()),
                    },
                    delimiter,
                },
            ),
            root,
            out,
        ),
        Some(Commands::ConfigShow) => command::config_show(&config, out),
        Some(Commands::ConfigDiff) => command::config_diff(&config, out),
    }
}

/// stderr subscriber, filtered by `RUST_LOG` (`warn` when unset)
///
/// # Errors
///
/// * a global subscriber is already installed
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
