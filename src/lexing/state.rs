//!
//! The scanner's persisted state.
//!
//! Kept deliberately tiny: the grammar engine snapshots it after
//! every token so it can restart lexing anywhere after an edit.
//!

use thiserror::Error;

///
/// Size of a serialized [ScannerState], in bytes.
///
pub const SERIALIZED_LEN: usize = 4;

///
/// Cross-call lexer state.
///
/// Serialized layout:
/// * byte 0: `in_tune_body` (0/1),
/// * byte 1: `in_text_block` (0/1),
/// * bytes 2..4: `line_number`, big-endian.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScannerState {
    pub in_tune_body: bool,
    pub in_text_block: bool,

    ///
    /// 1-based number of the line the cursor is on.
    ///
    pub line_number: u16,
}

///
/// Problems decoding a [ScannerState] from bytes.
///
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("Scanner state needs {expected} bytes, got {0}", expected = SERIALIZED_LEN)]
    TooShort(usize),
}

impl ScannerState {
    ///
    /// State at the start of a document.
    ///
    pub const fn new() -> Self {
        Self {
            in_tune_body: false,
            in_text_block: false,
            line_number: 1,
        }
    }

    pub fn serialize(&self) -> [u8; SERIALIZED_LEN] {
        let [hi, lo] = self.line_number.to_be_bytes();
        [u8::from(self.in_tune_body), u8::from(self.in_text_block), hi, lo]
    }

    ///
    /// Writes the serialized state to the front of `buffer`,
    /// returning the number of bytes written (0 if it doesn't fit).
    ///
    pub fn serialize_into(&self, buffer: &mut [u8]) -> usize {
        match buffer.get_mut(..SERIALIZED_LEN) {
            Some(front) => {
                front.copy_from_slice(&self.serialize());
                SERIALIZED_LEN
            }
            None => 0,
        }
    }

    ///
    /// Restores a state written by [ScannerState::serialize].
    ///
    /// Input shorter than [SERIALIZED_LEN] is ignored, leaving `self` untouched.
    ///
    pub fn deserialize(&mut self, bytes: &[u8]) {
        if let Ok(state) = Self::try_from(bytes) {
            *self = state;
        }
    }

    ///
    /// Count one newline sequence.
    ///
    pub(crate) fn next_line(&mut self) {
        self.line_number = self.line_number.saturating_add(1);
    }
}

impl Default for ScannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&[u8]> for ScannerState {
    type Error = StateError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let [tune_body, text_block, hi, lo] = match bytes.get(..SERIALIZED_LEN) {
            Some(&[a, b, c, d]) => [a, b, c, d],
            _ => return Err(StateError::TooShort(bytes.len())),
        };

        Ok(Self {
            in_tune_body: tune_body != 0,
            in_text_block: text_block != 0,
            line_number: u16::from_be_bytes([hi, lo]),
        })
    }
}
