//! Platform abstraction layer
//!
//! Turns raw browser/native input into simulation inputs:
//! - Pointer position and device orientation into board tilt
//! - Key presses into session commands

pub mod input;

pub use input::{command_for_key, orientation_tilt, pointer_tilt};
