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

//! Line scanner for the INSTRUCTION_OPCODE attribute of a BSDL file.
//!
//! We do not parse BSDL. A BSDL opcode table looks like
//!
//! ```text
//! attribute INSTRUCTION_OPCODE of STM32F405 : entity is
//!     "BYPASS  (11111)," &
//!     "IDCODE  (00001)";
//! attribute INSTRUCTION_CAPTURE of STM32F405 : entity is "XXX01";
//! ```
//!
//! so it is enough to notice where the block opens, where the next attribute closes it,
//! and pick out every quoted `NAME (bits)` pair in between. Everything else in the file
//! is ignored.
//!
//! Lines are scanned as raw bytes with ASCII character classes. BSDL files are not
//! always UTF-8 and names must come out exactly as they are in the file.

use log::{debug, trace};
use regex::bytes::Regex;
use std::sync::OnceLock;

use crate::opcode::OpcodeEntry;

const BLOCK_START: &[u8] = b"INSTRUCTION_OPCODE";
const BLOCK_END: &[u8] = b"attribute";

fn entry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?-u)"\s*(\S+)\s+\(([01]+)\)"#).expect("opcode pattern is valid")
    })
}

fn contains(line: &[u8], needle: &[u8]) -> bool {
    line.windows(needle.len()).any(|w| w == needle)
}

/// Scan state threaded through the lines of one file.
#[derive(Debug, Default)]
pub struct OpcodeScanner {
    in_block: bool,
    index: usize,
    line_no: usize,
}

impl OpcodeScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next line of the file. Returns the entry found on it, if any.
    ///
    /// The block-start check runs first, so a line like
    /// `attribute INSTRUCTION_OPCODE of foo : entity is` opens the block even though it
    /// also contains `attribute`. Entries on the opening line itself are not picked up.
    pub fn scan_line(&mut self, line: &[u8]) -> Option<OpcodeEntry> {
        self.line_no += 1;

        if contains(line, BLOCK_START) {
            if self.in_block || self.index > 0 {
                debug!("line {}: new opcode block, restarting numbering", self.line_no);
            } else {
                debug!("line {}: opcode block starts", self.line_no);
            }
            self.in_block = true;
            self.index = 0;
            return None;
        }

        if contains(line, BLOCK_END) {
            if self.in_block {
                debug!(
                    "line {}: opcode block ends after {} entries",
                    self.line_no, self.index
                );
            }
            self.in_block = false;
        }

        if !self.in_block {
            return None;
        }

        let Some(caps) = entry_regex().captures(line) else {
            trace!(
                "line {}: no opcode entry in {:?}",
                self.line_no,
                String::from_utf8_lossy(line).trim_end()
            );
            return None;
        };

        // The bits group only ever matches ASCII 0/1
        let bits = String::from_utf8_lossy(&caps[2]).into_owned();
        let entry = OpcodeEntry::new(self.index, caps[1].to_vec(), bits);
        trace!(
            "line {}: irlist({}) = {} ({})",
            self.line_no,
            entry.index,
            entry.display_name(),
            entry.bits
        );
        self.index += 1;
        Some(entry)
    }

    /// Entries seen since the most recent block start. This is what goes into `irlistlen`.
    pub fn count(&self) -> usize {
        self.index
    }

    /// True while the last block start has not been closed by an `attribute` line.
    pub fn in_block(&self) -> bool {
        self.in_block
    }
}
