//! Cursor-style little-endian reader over a bounded byte buffer.

use crate::NUM_CARS;
use crate::error::{DecodeError, DecodeResult};

/// Sequential little-endian primitive reader.
///
/// Every read advances the cursor by exactly the width of the type read. A
/// read that would pass the end of the buffer fails with
/// [`DecodeError::OutOfRange`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position, in bytes from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    fn take(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        let bytes = self
            .pos
            .checked_add(n)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or(DecodeError::OutOfRange {
                offset: self.pos,
                needed: n,
                len: self.data.len(),
            })?;
        self.pos += n;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    #[inline]
    pub fn u8(&mut self) -> DecodeResult<u8> {
        self.take_array::<1>().map(u8::from_le_bytes)
    }

    #[inline]
    pub fn i8(&mut self) -> DecodeResult<i8> {
        self.take_array::<1>().map(i8::from_le_bytes)
    }

    #[inline]
    pub fn u16_le(&mut self) -> DecodeResult<u16> {
        self.take_array().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn i16_le(&mut self) -> DecodeResult<i16> {
        self.take_array().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn u32_le(&mut self) -> DecodeResult<u32> {
        self.take_array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn i32_le(&mut self) -> DecodeResult<i32> {
        self.take_array().map(i32::from_le_bytes)
    }

    #[inline]
    pub fn u64_le(&mut self) -> DecodeResult<u64> {
        self.take_array().map(u64::from_le_bytes)
    }

    #[inline]
    pub fn i64_le(&mut self) -> DecodeResult<i64> {
        self.take_array().map(i64::from_le_bytes)
    }

    /// Reads an IEEE-754 single from its raw little-endian bit pattern.
    ///
    /// Non-finite values are passed through untouched.
    #[inline]
    pub fn f32_le(&mut self) -> DecodeResult<f32> {
        self.u32_le().map(f32::from_bits)
    }

    pub fn skip(&mut self, n: usize) -> DecodeResult<()> {
        self.take(n).map(|_| ())
    }

    /// Reads a fixed-width, zero-terminated UTF-8 run.
    ///
    /// The text ends at the first zero byte, or spans the whole run when no
    /// zero byte is present. Invalid sequences are replaced with U+FFFD.
    pub fn fixed_str(&mut self, len: usize) -> DecodeResult<String> {
        let run = self.take(len)?;
        let text = run.split(|&b| b == 0).next().unwrap_or_default();
        Ok(String::from_utf8_lossy(text).into_owned())
    }

    /// Decodes one fixed-stride record.
    ///
    /// `read` consumes the record's fields in wire order; whatever it leaves
    /// unread up to `stride` is skipped, so the cursor always ends exactly
    /// `stride` bytes past where it started.
    pub fn record<T>(
        &mut self,
        name: &'static str,
        stride: usize,
        read: impl FnOnce(&mut Self) -> DecodeResult<T>,
    ) -> DecodeResult<T> {
        let start = self.pos;
        let value = read(self)?;
        let consumed = self.pos.saturating_sub(start);
        let padding = stride
            .checked_sub(consumed)
            .ok_or(DecodeError::StrideOverrun {
                record: name,
                consumed,
                stride,
            })?;
        self.skip(padding)?;
        Ok(value)
    }
}

/// Decodes the fixed 22-entry per-car array that every car packet carries.
pub(crate) fn read_car_records<T>(
    cursor: &mut ByteCursor<'_>,
    mut read: impl FnMut(&mut ByteCursor<'_>) -> DecodeResult<T>,
) -> DecodeResult<Vec<T>> {
    let mut cars = Vec::with_capacity(NUM_CARS);
    for _ in 0..NUM_CARS {
        cars.push(read(cursor)?);
    }
    Ok(cars)
}
