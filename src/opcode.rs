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

/// One instruction pulled out of an INSTRUCTION_OPCODE block.
///
/// `name` holds the raw bytes from the file, so a vendor name in Latin-1 comes out
/// the way it went in. `bits` is kept exactly as it appeared in the BSDL file
/// (leading zeros included), the numeric forms are derived on demand. IR lengths are
/// not bounded by any integer type here, so the conversions work digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeEntry {
    pub index: usize,
    pub name: Vec<u8>,
    pub bits: String,
}

impl OpcodeEntry {
    pub fn new(index: usize, name: Vec<u8>, bits: String) -> Self {
        Self { index, name, bits }
    }

    /// Lowercase hex, at least two digits.
    pub fn hex(&self) -> String {
        binary_to_hex(&self.bits)
    }

    pub fn dec(&self) -> String {
        binary_to_decimal(&self.bits)
    }

    /// Name for log messages only; the table is written from the raw bytes.
    pub fn display_name(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}

/// Render a string of '0'/'1' as lowercase hex, zero-padded to a width of 2.
/// Anything other than '1' counts as a zero bit; callers only hand us matched opcodes.
pub fn binary_to_hex(bits: &str) -> String {
    let significant = bits.trim_start_matches('0');
    if significant.is_empty() {
        return "00".to_string();
    }

    let bytes = significant.as_bytes();
    let lead = bytes.len() % 4;
    let mut out = String::with_capacity(bytes.len() / 4 + 2);

    // The first group carries the leftover high bits, the rest are full nibbles
    let mut start = 0;
    let mut end = if lead == 0 { 4 } else { lead };
    while start < bytes.len() {
        let nibble = bytes[start..end]
            .iter()
            .fold(0u32, |acc, b| (acc << 1) | u32::from(*b == b'1'));
        // nibble < 16 so this always yields a digit
        out.push(char::from_digit(nibble, 16).unwrap_or('0'));
        start = end;
        end += 4;
    }

    if out.len() < 2 {
        out.insert(0, '0');
    }
    out
}

/// Render a string of '0'/'1' as an unsigned decimal number.
pub fn binary_to_decimal(bits: &str) -> String {
    // Little-endian base-10 digits, doubled once per input bit
    let mut digits: Vec<u8> = vec![0];
    for b in bits.bytes() {
        let mut carry = u8::from(b == b'1');
        for d in digits.iter_mut() {
            let v = *d * 2 + carry;
            *d = v % 10;
            carry = v / 10;
        }
        if carry > 0 {
            digits.push(carry);
        }
    }
    digits.iter().rev().map(|d| char::from(b'0' + d)).collect()
}
