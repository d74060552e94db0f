//! Helpers shared by every codec.

pub mod escape;
