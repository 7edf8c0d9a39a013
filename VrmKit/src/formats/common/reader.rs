//! Byte-order aware binary reader
//!
//! Thin wrapper over any `Read + Seek` source. Multi-byte reads honour the
//! selected [`Endianness`]; single bytes and raw runs are order independent.

use crate::error::{Error, Result};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{self, Read, Seek, SeekFrom};

/// Byte order used for multi-byte reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// Reader that decodes fixed-width values under a selectable byte order.
#[derive(Debug)]
pub struct EndianReader<R> {
    inner: R,
    endian: Endianness,
}

/// Map end-of-stream to [`Error::UnexpectedEof`], keep everything else as IO.
fn map_io(err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        Error::UnexpectedEof
    } else {
        Error::Io(err)
    }
}

macro_rules! endian_read {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $method:ident) => {
        $(#[$doc])*
        pub fn $name(&mut self) -> Result<$ty> {
            match self.endian {
                Endianness::Little => self.inner.$method::<LittleEndian>(),
                Endianness::Big => self.inner.$method::<BigEndian>(),
            }
            .map_err(map_io)
        }
    };
}

impl<R: Read + Seek> EndianReader<R> {
    pub fn new(inner: R, endian: Endianness) -> Self {
        Self { inner, endian }
    }

    /// Little-endian reader, the order used by glb containers.
    pub fn little(inner: R) -> Self {
        Self::new(inner, Endianness::Little)
    }

    pub fn endianness(&self) -> Endianness {
        self.endian
    }

    pub fn set_endianness(&mut self, endian: Endianness) {
        self.endian = endian;
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Current read position from the start of the source.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Move the cursor to an absolute position.
    pub fn seek(&mut self, pos: u64) -> Result<u64> {
        Ok(self.inner.seek(SeekFrom::Start(pos))?)
    }

    /// Advance the cursor without reading.
    pub fn skip(&mut self, count: i64) -> Result<u64> {
        Ok(self.inner.seek(SeekFrom::Current(count))?)
    }

    /// Total size of the source in bytes. The cursor is left where it was.
    pub fn len(&mut self) -> Result<u64> {
        let pos = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(end)
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.inner.read_u8().map_err(map_io)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.inner.read_i8().map_err(map_io)
    }

    endian_read!(read_u16, u16, read_u16);
    endian_read!(read_i16, i16, read_i16);
    endian_read!(read_u32, u32, read_u32);
    endian_read!(read_i32, i32, read_i32);
    endian_read!(read_u64, u64, read_u64);
    endian_read!(read_i64, i64, read_i64);
    endian_read!(read_f32, f32, read_f32);
    endian_read!(read_f64, f64, read_f64);

    /// Read exactly `count` raw bytes.
    ///
    /// The buffer grows with the data actually read, so a bogus length from a
    /// corrupt header fails with [`Error::UnexpectedEof`] instead of allocating
    /// the full amount up front.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        (&mut self.inner).take(count as u64).read_to_end(&mut data)?;
        if data.len() != count {
            return Err(Error::UnexpectedEof);
        }
        Ok(data)
    }

    /// Read bytes up to a NUL terminator.
    ///
    /// End of stream ends the string as well; it is never an error here.
    pub fn read_string_to_null(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            match self.read_u8() {
                Ok(0) | Err(Error::UnexpectedEof) => break,
                Ok(b) => bytes.push(b),
                Err(e) => return Err(e),
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Read consecutive NUL-terminated strings until the source is exhausted.
    pub fn read_strings_to_end(&mut self) -> Result<Vec<String>> {
        let len = self.len()?;
        let mut strings = Vec::new();
        while self.position()? < len {
            strings.push(self.read_string_to_null()?);
        }
        Ok(strings)
    }
}

/// Render a four-character code stored as a little-endian `u32`.
///
/// NUL bytes are dropped so `BIN\0` prints as `BIN`; other non-printable
/// bytes are shown as `.`.
pub fn fourcc_to_string(tag: u32) -> String {
    tag.to_le_bytes()
        .iter()
        .filter(|&&b| b != 0)
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
        .collect()
}
