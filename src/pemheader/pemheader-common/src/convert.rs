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
use crate::{log_channel::CONVERT, ConversionJob, HeaderDeclaration};

/// I/O failure while converting a file, nothing else can go wrong
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    ///
    #[error("cannot read '{}'", .path.display())]
    Read {
        ///
        path: std::path::PathBuf,
        ///
        source: std::io::Error,
    },
    ///
    #[error("cannot write '{}'", .path.display())]
    Write {
        ///
        path: std::path::PathBuf,
        ///
        source: std::io::Error,
    },
}

impl ConvertError {
    /// kind of the underlying io error
    #[must_use]
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}

/// What a successful conversion produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    ///
    pub input: std::path::PathBuf,
    ///
    pub output: std::path::PathBuf,
    /// size of the generated header
    pub written: usize,
    /// the content holds the closing sequence, the header will not compile
    pub delimiter_collision: bool,
}

/// Embed `job.input` into `job.output`
///
/// The input is read completely before the output is opened, so a missing
/// input leaves the output untouched.
///
/// # Errors
///
/// * the input cannot be read
/// * the output cannot be created or written
pub fn convert(job: &ConversionJob) -> Result<Conversion, ConvertError> {
    tracing::debug!(target: CONVERT, input = %job.input.display(), "reading");

    let content = std::fs::read_to_string(&job.input).map_err(|source| ConvertError::Read {
        path: job.input.clone(),
        source,
    })?;

    let delimiter_collision = job.declaration.collides_with(&content);
    if delimiter_collision {
        tracing::warn!(
            target: CONVERT,
            input = %job.input.display(),
            "content contains '{}', the generated literal is ill-formed",
            job.declaration.delimiter.close()
        );
    }

    let header = job.declaration.render(&content);

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&job.output)
        .map_err(|source| ConvertError::Write {
            path: job.output.clone(),
            source,
        })?;

    std::io::Write::write_all(&mut file, header.as_bytes()).map_err(|source| {
        ConvertError::Write {
            path: job.output.clone(),
            source,
        }
    })?;

    tracing::debug!(
        target: CONVERT,
        output = %job.output.display(),
        bytes = header.len(),
        name = %job.declaration.name,
        "header written"
    );

    Ok(Conversion {
        input: job.input.clone(),
        output: job.output.clone(),
        written: header.len(),
        delimiter_collision,
    })
}

/// [`convert`] with the default `PROGMEM` marker and `EOF` delimiter
///
/// # Errors
///
/// see [`convert`]
pub fn pem_to_c_array(
    input: impl Into<std::path::PathBuf>,
    output: impl Into<std::path::PathBuf>,
    name: &str,
) -> Result<Conversion, ConvertError> {
    convert(&ConversionJob::new(
        input,
        output,
        HeaderDeclaration::new(name),
    ))
}
