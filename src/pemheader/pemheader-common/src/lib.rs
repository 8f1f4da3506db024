//! pemheader common definitions

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

/// targets for tracing macros
pub mod log_channel {
    /// file conversion
    pub const CONVERT: &str = "convert";
    /// configuration loading
    pub const CONFIG: &str = "config";
}

mod convert;
mod header;
mod literal;

pub use convert::{convert, pem_to_c_array, Conversion, ConvertError};
pub use header::{ConversionJob, HeaderDeclaration, DEFAULT_STORAGE_MARKER};
pub use literal::{Identifier, LiteralError, RawStringDelimiter, StorageMarker, DEFAULT_DELIMITER};

/// re-exported crates, so dependents stay on the same versions
pub mod re {
    pub use anyhow;
    pub use serde;
    pub use tracing;
}
