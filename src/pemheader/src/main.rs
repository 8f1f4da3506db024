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
use pemheader::Args;
use pemheader_common::re::anyhow::{self, Context};

fn main() -> anyhow::Result<()> {
    pemheader::init_tracing()?;

    let args = <Args as clap::Parser>::parse();
    let root = std::env::current_dir().context("Cannot get the working directory")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pemheader::dispatch(args, &root, &mut out)
}
