use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bytecode::Op;

/// Leading bytes of an encoded program image.
pub const MAGIC: [u8; 4] = *b"TLY\0";

/// Version written by [`ProgramBc::to_bytes`]; the only one accepted on load.
pub const FORMAT_VERSION: u16 = 1;

#[derive(Debug, Error)]
pub enum BytecodeError {
    #[error("bytecode codec error: {0}")]
    Codec(#[from] postcard::Error),

    #[error("not a tally bytecode image (bad magic {0:02x?})")]
    BadMagic([u8; 4]),

    #[error("unsupported bytecode format version {0} (expected {})", FORMAT_VERSION)]
    UnsupportedVersion(u16),
}

/// A compiled program: one flat instruction stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramBc {
    pub ops: Vec<Op>,
}

#[derive(Serialize, Deserialize)]
struct Image<T> {
    magic: [u8; 4],
    version: u16,
    ops: T,
}

impl ProgramBc {
    pub fn new(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Encodes the program as a versioned postcard image.
    pub fn to_bytes(&self) -> Result<Vec<u8>, BytecodeError> {
        let image = Image {
            magic: MAGIC,
            version: FORMAT_VERSION,
            ops: &self.ops,
        };
        Ok(postcard::to_allocvec(&image)?)
    }

    /// Decodes an image written by [`ProgramBc::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BytecodeError> {
        let image: Image<Vec<Op>> = postcard::from_bytes(bytes)?;

        if image.magic != MAGIC {
            return Err(BytecodeError::BadMagic(image.magic));
        }
        if image.version != FORMAT_VERSION {
            return Err(BytecodeError::UnsupportedVersion(image.version));
        }

        Ok(Self { ops: image.ops })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProgramBc {
        ProgramBc::new(vec![
            Op::PushSlot("hp".to_string()),
            Op::PushValue(1.25),
            Op::Store,
            Op::PushSlot("hp".to_string()),
            Op::Load,
            Op::PushValue(-2.0),
            Op::Mod,
        ])
    }

    #[test]
    fn test_image_round_trip() {
        let program = sample();
        let bytes = program.to_bytes().unwrap();
        assert_eq!(&bytes[..4], &MAGIC);
        assert_eq!(ProgramBc::from_bytes(&bytes).unwrap(), program);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut bytes = sample().to_bytes().unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            ProgramBc::from_bytes(&bytes),
            Err(BytecodeError::BadMagic(_))
        ));
    }

    #[test]
    fn test_future_version_rejected() {
        let image = Image {
            magic: MAGIC,
            version: FORMAT_VERSION + 1,
            ops: Vec::<Op>::new(),
        };
        let bytes = postcard::to_allocvec(&image).unwrap();
        assert!(matches!(
            ProgramBc::from_bytes(&bytes),
            Err(BytecodeError::UnsupportedVersion(v)) if v == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn test_truncated_image_rejected() {
        let bytes = sample().to_bytes().unwrap();
        assert!(matches!(
            ProgramBc::from_bytes(&bytes[..bytes.len() - 3]),
            Err(BytecodeError::Codec(_))
        ));
    }
}
