//! glb container reading

use super::header::{ChunkType, GlbChunk, GlbContainer, GlbHeader};
use super::GLB_VERSION;
use crate::error::{Error, Result};
use crate::formats::common::EndianReader;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Read and validate the 12-byte header.
///
/// # Errors
///
/// Returns [`Error::InvalidGlbMagic`] if the magic is not `glTF`; nothing past
/// the header is consumed in that case.
pub fn read_header<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<GlbHeader> {
    let header = GlbHeader {
        magic: reader.read_u32()?,
        version: reader.read_u32()?,
        length: reader.read_u32()?,
    };

    if !header.is_valid() {
        return Err(Error::InvalidGlbMagic { found: header.magic });
    }
    if header.version != GLB_VERSION {
        tracing::debug!("glb version {} (expected {})", header.version, GLB_VERSION);
    }

    Ok(header)
}

/// Read one chunk: length, type tag, then exactly `length` payload bytes.
pub fn read_chunk<R: Read + Seek>(reader: &mut EndianReader<R>) -> Result<GlbChunk> {
    let length = reader.read_u32()?;
    let chunk_type = ChunkType::from(reader.read_u32()?);
    let data = reader.read_bytes(length as usize)?;

    Ok(GlbChunk { length, chunk_type, data })
}

/// Check that the chunk at position `index` carries the `expected` tag.
pub fn expect_chunk(chunk: &GlbChunk, expected: ChunkType, index: usize) -> Result<()> {
    if chunk.chunk_type == expected {
        Ok(())
    } else {
        Err(Error::UnexpectedChunkType {
            index,
            expected: expected.to_string(),
            found: chunk.chunk_type.to_string(),
        })
    }
}

/// Read the header and the JSON and BIN chunks from a byte source.
///
/// The source is consumed little-endian regardless of the host order. Any
/// failure aborts the whole load.
pub fn load_container<R: Read + Seek>(source: R) -> Result<GlbContainer> {
    let mut reader = EndianReader::little(source);

    let header = read_header(&mut reader)?;
    tracing::debug!("glb header {}", header);

    let json = read_chunk(&mut reader)?;
    expect_chunk(&json, ChunkType::Json, 0)?;
    tracing::debug!("chunk #0 {}", json);

    let binary = read_chunk(&mut reader)?;
    expect_chunk(&binary, ChunkType::Binary, 1)?;
    tracing::debug!("chunk #1 {}", binary);

    let end = reader.position()?;
    let size = reader.len()?;
    if end < size {
        tracing::warn!("ignoring {} bytes after the binary chunk", size - end);
    }
    if u64::from(header.length) != size {
        tracing::debug!("declared length {} differs from source size {}", header.length, size);
    }

    Ok(GlbContainer {
        header,
        json: json.data,
        binary: binary.data,
    })
}

/// Read a glb/vrm file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened, otherwise the errors of
/// [`load_container`].
pub fn read_glb<P: AsRef<Path>>(path: P) -> Result<GlbContainer> {
    let file = File::open(path)?;
    load_container(BufReader::new(file))
}

/// Parse a glb container held in memory.
pub fn parse_glb_bytes(data: &[u8]) -> Result<GlbContainer> {
    load_container(Cursor::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::glb::{CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, GLB_MAGIC, HEADER_SIZE};

    fn chunk_bytes(tag: u32, payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn container(magic: u32, chunks: &[Vec<u8>]) -> Vec<u8> {
        let body: Vec<u8> = chunks.concat();
        let mut out = Vec::new();
        out.extend_from_slice(&magic.to_le_bytes());
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&((body.len() + 12) as u32).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    #[test]
    fn test_load_container() {
        let data = container(
            GLB_MAGIC,
            &[
                chunk_bytes(CHUNK_TYPE_JSON, b"{}  "),
                chunk_bytes(CHUNK_TYPE_BIN, &[1, 2, 3, 4]),
            ],
        );
        let glb = parse_glb_bytes(&data).unwrap();
        assert_eq!(glb.header.version, 2);
        assert_eq!(glb.header.length as usize, data.len());
        assert_eq!(glb.json, b"{}  ");
        assert_eq!(glb.binary, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_bad_magic_stops_after_header() {
        let data = container(
            0x12345678,
            &[chunk_bytes(CHUNK_TYPE_JSON, b"{}"), chunk_bytes(CHUNK_TYPE_BIN, &[])],
        );
        let mut reader = EndianReader::little(Cursor::new(&data[..]));
        let err = read_header(&mut reader).unwrap_err();
        assert!(matches!(err, Error::InvalidGlbMagic { found: 0x12345678 }));
        assert_eq!(reader.position().unwrap(), HEADER_SIZE);
    }

    #[test]
    fn test_json_chunk_must_come_first() {
        let data = container(
            GLB_MAGIC,
            &[chunk_bytes(CHUNK_TYPE_BIN, &[0; 4]), chunk_bytes(CHUNK_TYPE_JSON, b"{}")],
        );
        let err = parse_glb_bytes(&data).unwrap_err();
        match err {
            Error::UnexpectedChunkType { index, expected, found } => {
                assert_eq!(index, 0);
                assert_eq!(expected, "JSON");
                assert_eq!(found, "BIN");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_space_padded_bin_tag_is_rejected() {
        let data = container(
            GLB_MAGIC,
            &[chunk_bytes(CHUNK_TYPE_JSON, b"{}"), chunk_bytes(0x204E4942, &[0; 4])],
        );
        let err = parse_glb_bytes(&data).unwrap_err();
        assert!(matches!(err, Error::UnexpectedChunkType { index: 1, .. }));
    }

    #[test]
    fn test_truncated_payload() {
        let mut data = container(
            GLB_MAGIC,
            &[chunk_bytes(CHUNK_TYPE_JSON, b"{}"), chunk_bytes(CHUNK_TYPE_BIN, &[0; 8])],
        );
        data.truncate(data.len() - 3);
        assert!(matches!(parse_glb_bytes(&data), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_missing_bin_chunk() {
        let data = container(GLB_MAGIC, &[chunk_bytes(CHUNK_TYPE_JSON, b"{}")]);
        assert!(matches!(parse_glb_bytes(&data), Err(Error::UnexpectedEof)));
    }
}
