// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, BufWriter};

use bsdl_irlist::{debug, irlist, resolve_input_path};

/// Turn the INSTRUCTION_OPCODE list of a BSDL file into the TCL `irlist` array
/// used by OpenOCD's JTAG DR enumeration scripts.
#[derive(Parser, Debug)]
#[command(name = "bsdl-irlist", version, about)]
struct Cli {
    /// BSDL file to read (a path or a file:// URI)
    bsdl: OsString,

    /// Enable debug output on stderr
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = debug::init_logging(cli.debug)?;

    let path = resolve_input_path(&cli.bsdl);
    log::debug!("Resolved {} to {}", cli.bsdl.to_string_lossy(), path.display());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = irlist::run(&path, &mut out)?;
    log::debug!("irlistlen {}", count);
    Ok(())
}
