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

use std::ops::Deref;

use crate::{
    consts::DIGITS_PER_ELEMENT,
    errors::MalformedHexInput,
    log, table,
    unit::{DecodedUnit, HexUnit},
};

// Decoded output, owned by the caller.
// Only ever built from a fully decoded input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedBuffer<T>(Vec<T>);

impl<T: DecodedUnit> DecodedBuffer<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Returns the decoded elements followed by a trailing 0 element,
    /// for consumers that expect terminated buffers.
    /// Capacity for the terminator is reserved by the decoder, so this never reallocates.
    pub fn into_nul_terminated(self) -> Vec<T> {
        let mut data = self.0;
        data.push(T::default());
        data
    }
}

impl<T> Deref for DecodedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> AsRef<[T]> for DecodedBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<DecodedBuffer<T>> for Vec<T> {
    fn from(value: DecodedBuffer<T>) -> Self {
        value.0
    }
}

pub fn is_hex_digit<U: HexUnit>(c: U) -> bool {
    table::nibble(c).is_some()
}

/// True if `seq` is non empty, has an even length and only contains hex digits.
pub fn is_valid_hex<U: HexUnit>(seq: &[U]) -> bool {
    if seq.is_empty() || seq.len() % DIGITS_PER_ELEMENT != 0 {
        return false;
    }
    seq.iter().all(|&c| is_hex_digit(c))
}

/// Number of elements `seq` decodes to, None if it is not valid hex.
pub fn decoded_len<U: HexUnit>(seq: &[U]) -> Option<usize> {
    if !is_valid_hex(seq) {
        return None;
    }
    Some(seq.len() / DIGITS_PER_ELEMENT)
}

/// Uppercase copy of a valid hex string.
pub fn canonicalize(hex: &str) -> Option<String> {
    decoded_len(hex.as_bytes())?;
    Some(hex.to_ascii_uppercase())
}

pub fn canonicalize_units<U: HexUnit>(seq: &[U]) -> Option<Vec<U>> {
    decoded_len(seq)?;
    Some(seq.iter().map(|c| c.to_ascii_upper()).collect())
}

pub fn try_canonicalize(hex: &str) -> Result<String, MalformedHexInput> {
    canonicalize(hex).ok_or(MalformedHexInput)
}

#[inline]
fn combine<T: DecodedUnit, U: HexUnit>(hi: U, lo: U) -> Option<T> {
    let hi = table::nibble(hi)?;
    let lo = table::nibble(lo)?;
    Some(T::from((hi << 4) | lo))
}

// Only emptiness and parity are checked upfront, bad digits are found while decoding
#[inline]
fn has_decodable_len<U>(seq: &[U]) -> bool {
    !seq.is_empty() && seq.len() % DIGITS_PER_ELEMENT == 0
}

/// Decodes `seq` into a buffer of `T` elements, one per pair of hex digits.
/// `T` is `u8` for raw bytes or `u16` for wide units.
/// Returns None if the input is empty, has an odd length or contains a non hex digit.
pub fn decode<T: DecodedUnit, U: HexUnit>(seq: &[U]) -> Option<DecodedBuffer<T>> {
    if !has_decodable_len(seq) {
        log::trace!("hex input of length {} cannot be decoded", seq.len());
        return None;
    }

    let len = seq.len() / DIGITS_PER_ELEMENT;
    // +1 so into_nul_terminated does not need to grow the buffer
    let mut out = Vec::with_capacity(len + 1);
    for pair in seq.chunks_exact(DIGITS_PER_ELEMENT) {
        // On failure `out` is simply dropped
        out.push(combine(pair[0], pair[1])?);
    }
    Some(DecodedBuffer(out))
}

pub fn decode_bytes<U: HexUnit>(seq: &[U]) -> Option<DecodedBuffer<u8>> {
    decode(seq)
}

pub fn decode_wide<U: HexUnit>(seq: &[U]) -> Option<DecodedBuffer<u16>> {
    decode(seq)
}

pub fn try_decode<T: DecodedUnit, U: HexUnit>(
    seq: &[U],
) -> Result<DecodedBuffer<T>, MalformedHexInput> {
    decode(seq).ok_or(MalformedHexInput)
}

/// Appends the decoded elements of `seq` to `out`, returning how many were added.
/// On failure `out` is left exactly as it was received.
pub fn decode_into<T: DecodedUnit, U: HexUnit>(
    seq: &[U],
    out: &mut Vec<T>,
) -> Result<usize, MalformedHexInput> {
    if !has_decodable_len(seq) {
        return Err(MalformedHexInput);
    }

    let start = out.len();
    out.reserve(seq.len() / DIGITS_PER_ELEMENT);
    for pair in seq.chunks_exact(DIGITS_PER_ELEMENT) {
        match combine(pair[0], pair[1]) {
            Some(value) => out.push(value),
            None => {
                out.truncate(start);
                return Err(MalformedHexInput);
            }
        }
    }
    Ok(out.len() - start)
}
