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
use crate::RawStringDelimiter;

/// Arduino's marker placing a constant in flash instead of RAM
pub const DEFAULT_STORAGE_MARKER: &str = "PROGMEM";

/// The `const char NAME[] MARKER = R"DELIM(...)DELIM";` declaration wrapping a file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HeaderDeclaration {
    /// name of the constant, written as given
    pub name: String,
    /// placement annotation, omitted from the declaration when `None`
    pub storage_marker: Option<String>,
    ///
    pub delimiter: RawStringDelimiter,
}

impl HeaderDeclaration {
    /// A `PROGMEM` declaration using the `EOF` delimiter
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            storage_marker: Some(DEFAULT_STORAGE_MARKER.to_string()),
            delimiter: RawStringDelimiter::default(),
        }
    }

    /// Everything written before the embedded content, trailing newline included
    #[must_use]
    pub fn prefix(&self) -> String {
        match &self.storage_marker {
            Some(marker) => format!(
                "const char {}[] {} = {}\n",
                self.name,
                marker,
                self.delimiter.open()
            ),
            None => format!("const char {}[] = {}\n", self.name, self.delimiter.open()),
        }
    }

    /// Everything written after the embedded content
    #[must_use]
    pub fn suffix(&self) -> String {
        format!("{};\n", self.delimiter.close())
    }

    /// Produce the header text, `content` is embedded verbatim
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        let (prefix, suffix) = (self.prefix(), self.suffix());

        let mut out = String::with_capacity(prefix.len() + content.len() + suffix.len());
        out.push_str(&prefix);
        out.push_str(content);
        out.push_str(&suffix);
        out
    }

    /// `true` if `content` would end the raw string literal early
    #[must_use]
    pub fn collides_with(&self, content: &str) -> bool {
        content.contains(&self.delimiter.close())
    }
}

/// One input file turned into one header file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionJob {
    /// PEM file to embed
    pub input: std::path::PathBuf,
    /// header file to (re)generate
    pub output: std::path::PathBuf,
    ///
    pub declaration: HeaderDeclaration,
}

impl ConversionJob {
    ///
    #[must_use]
    pub fn new(
        input: impl Into<std::path::PathBuf>,
        output: impl Into<std::path::PathBuf>,
        declaration: HeaderDeclaration,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            declaration,
        }
    }

    /// The same job with both paths resolved against `root`
    ///
    /// Absolute paths are left untouched.
    #[must_use]
    pub fn rooted_at(&self, root: &std::path::Path) -> Self {
        Self {
            input: root.join(&self.input),
            output: root.join(&self.output),
            declaration: self.declaration.clone(),
        }
    }
}
