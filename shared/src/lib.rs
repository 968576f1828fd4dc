//! Engine-independent logic for the seascape scenes.
//!
//! Everything in this crate works on raw buffers and scalars so it can be
//! tested without a graphics context. The client crate feeds it Bevy's frame
//! delta, input events and mesh buffers.

pub mod assets;
pub mod config;
pub mod constants;
pub mod ocean;
pub mod orbit;
pub mod scroll;
pub mod sets;

pub use constants::*;
