//! Binary codec for node payloads.
//!
//! The per-node record is fixed-layout and always little-endian:
//! occupancy as an `f32` (4 bytes), then the three color channel bytes.
//! 7 bytes, no delimiters; read consumes exactly what write produced.
//! Semantics is variable-length and deliberately excluded from the fixed
//! record - [`write_semantics`]/[`read_semantics`] provide the separate
//! length-prefixed scheme for callers that persist it.
//!
//! Stream faults propagate untouched. A failed call leaves the payload
//! partially written or partially read; callers must treat it as corrupt.

use std::io::{self, Read, Write};

use super::color::Color;
use super::payload::VoxelPayload;
use super::semantics::Semantics;

/// Write the fixed 7-byte payload record: occupancy then color
pub fn write_payload<W: Write>(writer: &mut W, payload: &VoxelPayload) -> io::Result<()> {
    writer.write_all(&payload.occupancy().to_le_bytes())?;
    let color = payload.color();
    writer.write_all(&[color.r, color.g, color.b])?;
    Ok(())
}

/// Read the fixed 7-byte payload record into `payload`, leaving its
/// semantics untouched
pub fn read_payload<R: Read>(reader: &mut R, payload: &mut VoxelPayload) -> io::Result<()> {
    let mut buf4 = [0u8; 4];
    reader.read_exact(&mut buf4)?;
    payload.set_occupancy(f32::from_le_bytes(buf4));

    let mut buf3 = [0u8; 3];
    reader.read_exact(&mut buf3)?;
    payload.set_color(Color::new(buf3[0], buf3[1], buf3[2]));
    Ok(())
}

/// Write a semantics record: score count (u32), the scores (f32 each),
/// then the observation count (u32). All little-endian.
pub fn write_semantics<W: Write>(writer: &mut W, semantics: &Semantics) -> io::Result<()> {
    writer.write_all(&(semantics.scores.len() as u32).to_le_bytes())?;
    for score in &semantics.scores {
        writer.write_all(&score.to_le_bytes())?;
    }
    writer.write_all(&semantics.count.to_le_bytes())?;
    Ok(())
}

/// Read a semantics record written by [`write_semantics`]
pub fn read_semantics<R: Read>(reader: &mut R) -> io::Result<Semantics> {
    let mut buf4 = [0u8; 4];
    reader.read_exact(&mut buf4)?;
    let len = u32::from_le_bytes(buf4) as usize;

    let mut scores = Vec::with_capacity(len);
    for _ in 0..len {
        reader.read_exact(&mut buf4)?;
        scores.push(f32::from_le_bytes(buf4));
    }

    reader.read_exact(&mut buf4)?;
    let count = u32::from_le_bytes(buf4);

    Ok(Semantics { scores, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::{BufReader, BufWriter, Cursor};

    #[test]
    fn test_payload_round_trip() {
        let mut original = VoxelPayload::new();
        original.set_occupancy(-1.203_125);
        original.set_color(Color::new(17, 0, 255));

        let mut buf = Vec::new();
        write_payload(&mut buf, &original).unwrap();
        assert_eq!(buf.len(), 7);

        let mut restored = VoxelPayload::new();
        read_payload(&mut Cursor::new(buf), &mut restored).unwrap();
        assert_eq!(restored.occupancy().to_bits(), original.occupancy().to_bits());
        assert_eq!(restored.color(), original.color());
    }

    #[test]
    fn test_payload_record_is_little_endian() {
        let mut payload = VoxelPayload::new();
        payload.set_occupancy(1.0);
        payload.set_color(Color::new(1, 2, 3));

        let mut buf = Vec::new();
        write_payload(&mut buf, &payload).unwrap();
        assert_eq!(buf, vec![0x00, 0x00, 0x80, 0x3F, 1, 2, 3]);
    }

    #[test]
    fn test_truncated_payload_fails() {
        let mut payload = VoxelPayload::new();
        let err = read_payload(&mut Cursor::new([0u8; 5]), &mut payload).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_semantics_round_trip() {
        let original = Semantics {
            scores: vec![0.25, 0.5, 0.125, 0.125],
            count: 9,
        };

        let mut buf = Vec::new();
        write_semantics(&mut buf, &original).unwrap();
        assert_eq!(buf.len(), 4 + 4 * 4 + 4);

        let restored = read_semantics(&mut Cursor::new(buf)).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_empty_semantics_round_trip() {
        let mut buf = Vec::new();
        write_semantics(&mut buf, &Semantics::unset()).unwrap();
        let restored = read_semantics(&mut Cursor::new(buf)).unwrap();
        assert!(!restored.is_set());
        assert_eq!(restored.count, 0);
    }

    #[test]
    fn test_consecutive_records_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nodes.bin");

        let mut a = VoxelPayload::new();
        a.set_occupancy(0.85);
        a.set_color(Color::new(200, 0, 0));
        let mut b = VoxelPayload::new();
        b.set_occupancy(-2.0);

        {
            let mut writer = BufWriter::new(File::create(&path).unwrap());
            write_payload(&mut writer, &a).unwrap();
            write_payload(&mut writer, &b).unwrap();
        }

        let mut reader = BufReader::new(File::open(&path).unwrap());
        let mut first = VoxelPayload::new();
        let mut second = VoxelPayload::new();
        read_payload(&mut reader, &mut first).unwrap();
        read_payload(&mut reader, &mut second).unwrap();

        assert_eq!(first.color(), Color::new(200, 0, 0));
        assert_eq!(second.occupancy(), -2.0);
        assert_eq!(second.color(), Color::WHITE);
    }
}
