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

//! Fixtures shared by the pemheader test suites

/// A self-signed certificate, as produced by `openssl req -x509`
#[must_use]
pub const fn get_certificate() -> &'static str {
    include_str!("./template/certs/certificate.crt")
}

/// The PKCS#8 private key matching [`get_certificate`]
#[must_use]
pub const fn get_private_key() -> &'static str {
    include_str!("./template/certs/private_key.key")
}

/// The smallest certificate-shaped input, the one used in the documentation
#[must_use]
pub const fn get_tiny_certificate() -> &'static str {
    "-----BEGIN CERTIFICATE-----\nABCD\n-----END CERTIFICATE-----\n"
}

/// Write `content` at `root/relative`, creating parent directories
///
/// # Panics
///
/// * the directory or the file cannot be created
pub fn put_file(root: &std::path::Path, relative: &str, content: &str) -> std::path::PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
