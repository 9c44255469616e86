//! Wire-level protocol definitions.
//!
//! Command codes, payload layouts and value encodings for each supported
//! board, independent of the transport that carries them.

pub mod sr_v4;
