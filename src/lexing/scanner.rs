//!
//! One external-scanner instance, as the grammar engine sees it.
//!

use super::{
    dispatch,
    state::SERIALIZED_LEN,
    utils::Cursor,
    ScannerState, ValidSymbols,
};

///
/// Owns a [ScannerState] for the lifetime of one parser.
///
/// Creating one is the engine's `create`, dropping it is `destroy`.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    state: ScannerState,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ScannerState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn serialize(&self) -> [u8; SERIALIZED_LEN] {
        self.state.serialize()
    }

    ///
    /// Writes the state into the engine's buffer, returning how many
    /// bytes were written (none if the buffer is too small).
    ///
    pub fn serialize_into(&self, buffer: &mut [u8]) -> usize {
        self.state.serialize_into(buffer)
    }

    ///
    /// Restores a snapshot. Fewer than [SERIALIZED_LEN] bytes
    /// leave the state as it is.
    ///
    pub fn deserialize(&mut self, bytes: &[u8]) {
        self.state.deserialize(bytes);
    }

    pub fn scan(&mut self, cursor: &mut dyn Cursor, valid: &ValidSymbols) -> bool {
        dispatch::scan(&mut self.state, cursor, valid)
    }
}
