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

//! Emits the opcode table as the TCL `irlist` array used by OpenOCD's
//! JTAG DR enumeration scripts. The output is meant to be pasted into `irenumlist()`:
//!
//! ```text
//!     set irlist(0,"name")    BYPASS
//!     set irlist(0,"hex")     1f
//!     set irlist(0,"dec")     31
//!     set irlist(0,"bin")     11111
//!     set irlistlen 1
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::bsdl::OpcodeScanner;
use crate::opcode::OpcodeEntry;

const BANNER: &str = "Given a bsdl file as input this will parse the INSTRUCTION_OPCODE\n\
list and output a TCL array that can be used in OpenOCD with the\n\
JTAG DR enumeration scripts.\n";

const HINT: &str = "copy this into the irenumlist() function";

pub fn write_banner<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER)
}

pub fn write_entry<W: Write>(out: &mut W, entry: &OpcodeEntry) -> std::io::Result<()> {
    let i = entry.index;
    write!(out, "\tset irlist({},\"name\")\t", i)?;
    out.write_all(&entry.name)?;
    writeln!(out)?;
    writeln!(out, "\tset irlist({},\"hex\")\t{}", i, entry.hex())?;
    writeln!(out, "\tset irlist({},\"dec\")\t{}", i, entry.dec())?;
    writeln!(out, "\tset irlist({},\"bin\")\t{}", i, entry.bits)
}

pub fn write_trailer<W: Write>(out: &mut W, count: usize) -> std::io::Result<()> {
    writeln!(out, "\tset irlistlen {}", count)?;
    writeln!(out)?;
    writeln!(out, "{}", HINT)
}

/// Stream a BSDL file through the scanner, writing each entry as soon as it is found,
/// followed by the `irlistlen` trailer. Returns the final count.
///
/// The banner is not written here; see [`run`].
pub fn extract<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<usize> {
    let mut scanner = OpcodeScanner::new();
    let mut buf: Vec<u8> = Vec::with_capacity(1024);
    let mut emitted = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read BSDL input")?;
        if n == 0 {
            break; // EOF
        }

        if let Some(entry) = scanner.scan_line(&buf) {
            write_entry(out, &entry)?;
            emitted += 1;
        }
    }

    let count = scanner.count();
    if scanner.in_block() {
        debug!("Input ended inside an opcode block with {} entries", count);
    }
    if emitted != count {
        debug!(
            "{} entries written over all opcode blocks, {} in the last one",
            emitted, count
        );
    }
    write_trailer(out, count)?;
    Ok(count)
}

/// Banner, then the table for the file at `path`.
///
/// The banner goes out before the file is opened, so a bad path still produces it
/// ahead of the error.
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<usize> {
    write_banner(out)?;

    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    info!("Reading {}", path.display());

    let count = extract(BufReader::with_capacity(64 * 1024, file), out)
        .with_context(|| format!("While processing {}", path.display()))?;
    out.flush()?;
    Ok(count)
}
