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

/// delimiter used when none is configured
pub const DEFAULT_DELIMITER: &str = "EOF";

/// C++ caps the d-char-sequence of a raw string literal at 16 characters
const DELIMITER_MAX_LEN: usize = 16;

/// Reasons a token cannot be used in the generated declaration
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    ///
    #[error("raw string delimiter is too long: `{delimiter}` has {len} characters, the limit is 16")]
    DelimiterTooLong {
        ///
        delimiter: String,
        ///
        len: usize,
    },
    ///
    #[error("raw string delimiter `{delimiter}` contains the forbidden character {forbidden:?}")]
    DelimiterForbiddenChar {
        ///
        delimiter: String,
        ///
        forbidden: char,
    },
    ///
    #[error("`{0}` is not a valid C identifier")]
    InvalidIdentifier(String),
    ///
    #[error("`{0}` is a reserved keyword and cannot name a constant")]
    ReservedIdentifier(String),
    ///
    #[error("storage marker must fit on one line: '{}'", .0.escape_debug())]
    MultilineStorageMarker(String),
}

/// characters of the basic source character set allowed in a d-char-sequence,
/// besides ascii letters and digits
const DELIMITER_PUNCTUATION: &str = "_{}[]#<>%:;.?*+-/^&|~!=,\"'";

/// C and C++ keywords, none of them can name the generated array
const RESERVED_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "restrict", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq", "_Alignas", "_Alignof",
    "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

/// The d-char-sequence of a C++ raw string literal: `R"<delimiter>(...)<delimiter>"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RawStringDelimiter(String);

impl RawStringDelimiter {
    /// Opening sequence of the literal, `R"EOF(` for the default delimiter
    #[must_use]
    pub fn open(&self) -> String {
        format!("R\"{}(", self.0)
    }

    /// Closing sequence of the literal, `)EOF"` for the default delimiter
    #[must_use]
    pub fn close(&self) -> String {
        format!("){}\"", self.0)
    }

    ///
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RawStringDelimiter {
    fn default() -> Self {
        Self(DEFAULT_DELIMITER.to_string())
    }
}

impl std::str::FromStr for RawStringDelimiter {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len > DELIMITER_MAX_LEN {
            return Err(LiteralError::DelimiterTooLong {
                delimiter: s.to_string(),
                len,
            });
        }

        if let Some(forbidden) = s
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !DELIMITER_PUNCTUATION.contains(*c))
        {
            return Err(LiteralError::DelimiterForbiddenChar {
                delimiter: s.to_string(),
                forbidden,
            });
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for RawStringDelimiter {
    type Error = LiteralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        <Self as std::str::FromStr>::from_str(&value)
    }
}

impl From<RawStringDelimiter> for String {
    fn from(this: RawStringDelimiter) -> Self {
        this.0
    }
}

impl std::fmt::Display for RawStringDelimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A C identifier: `[A-Za-z_][A-Za-z0-9_]*`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    ///
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Identifier {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            Some(first)
                if (first.is_ascii_alphabetic() || first == '_')
                    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                if RESERVED_KEYWORDS.contains(&s) {
                    Err(LiteralError::ReservedIdentifier(s.to_string()))
                } else {
                    Ok(Self(s.to_string()))
                }
            }
            _ => Err(LiteralError::InvalidIdentifier(s.to_string())),
        }
    }
}

impl TryFrom<String> for Identifier {
    type Error = LiteralError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        <Self as std::str::FromStr>::from_str(&value)
    }
}

impl From<Identifier> for String {
    fn from(this: Identifier) -> Self {
        this.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Annotation placed between `[]` and `=`, such as `PROGMEM`
///
/// Empty means the declaration has no annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageMarker(String);

impl StorageMarker {
    /// `None` for the empty marker
    #[must_use]
    pub fn into_declared(self) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl std::str::FromStr for StorageMarker {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().any(char::is_control) {
            return Err(LiteralError::MultilineStorageMarker(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}
