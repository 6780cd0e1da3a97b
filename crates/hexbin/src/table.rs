// BSD 3-Clause License
// Copyright (c) 2026, Virtual Cable S.L.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
//    this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
//    may be used to endorse or promote products derived from this software
//    without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

// Authors: Adolfo Gómez, dkmaster at dkmon dot com

use crate::{consts::TABLE_LEN, unit::HexUnit};

/// Character code -> nibble lookup.
/// Entries that are not hex digits hold `None`.
pub struct NibbleTable([Option<u8>; TABLE_LEN]);

impl NibbleTable {
    const fn build() -> Self {
        let mut entries = [None; TABLE_LEN];
        // while loop, for is not allowed in const fn
        let mut i = 0;
        while i < TABLE_LEN {
            let c = i as u8;
            entries[i] = match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'A'..=b'F' => Some(c - b'A' + 10),
                b'a'..=b'f' => Some(c - b'a' + 10),
                _ => None,
            };
            i += 1;
        }
        NibbleTable(entries)
    }

    /// Returns the nibble for `code`, or None if it is not a hex digit.
    /// Codes outside the table are not hex digits.
    #[inline]
    pub const fn get(&self, code: u32) -> Option<u8> {
        if code as usize >= TABLE_LEN {
            return None;
        }
        self.0[code as usize]
    }

    pub const fn len(&self) -> usize {
        TABLE_LEN
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

// Built at compile time, so there is no first-use initialization to race on
static NIBBLES: NibbleTable = NibbleTable::build();

pub fn nibble_table() -> &'static NibbleTable {
    &NIBBLES
}

#[inline]
pub fn nibble<U: HexUnit>(unit: U) -> Option<u8> {
    NIBBLES.get(unit.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for (i, c) in (b'0'..=b'9').enumerate() {
            assert_eq!(nibble(c), Some(i as u8));
        }
    }

    #[test]
    fn test_letters() {
        for (i, c) in (b'A'..=b'F').enumerate() {
            assert_eq!(nibble(c), Some(10 + i as u8));
            assert_eq!(nibble(c.to_ascii_lowercase()), Some(10 + i as u8));
        }
    }

    #[test]
    fn test_exactly_22_hex_digits() {
        let table = nibble_table();
        let count = (0..table.len() as u32)
            .filter(|&c| table.get(c).is_some())
            .count();
        assert_eq!(count, 22);
    }

    #[test]
    fn test_neighbours_are_not_hex() {
        for c in [b'/', b':', b'@', b'G', b'`', b'g', b' ', 0u8, 0xFE] {
            assert_eq!(nibble(c), None, "code {:#x}", c);
        }
    }

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(nibble_table().get(TABLE_LEN as u32), None);
        assert_eq!(nibble(0xFFu8), None);
        assert_eq!(nibble(0x0130u16), None);
        assert_eq!(nibble(0xFF10u16), None); // fullwidth digit zero
        assert_eq!(nibble('\u{10FFFF}'), None);
        assert_eq!(nibble_table().get(u32::MAX), None);
    }
}
