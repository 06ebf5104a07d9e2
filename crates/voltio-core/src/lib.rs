//! Voltio Core - primitives for audio-rate rack modules
//!
//! This crate provides the building blocks shared by voltio's rack modules,
//! designed for real-time per-frame processing with zero allocation in the
//! audio path once a patch has settled.
//!
//! # Core Abstractions
//!
//! ## Host Boundary
//!
//! - [`Module`] - Object-safe trait a host drives once per audio frame
//! - [`ProcessArgs`] - Engine metadata (sample rate) delivered per frame
//! - [`InputPort`] / [`OutputPort`] - Polyphonic patch points with
//!   connection state, channel counts, and bulk voltage access
//!
//! ## Control State Machines
//!
//! - [`EdgeDetector`] - Strict rising-edge detection for momentary controls
//! - [`ToggleLatch`] - Latched on/off state driven by rising edges
//!
//! ## Filters
//!
//! - [`LowpassSection`] / [`HighpassSection`] - Single-pole recursive
//!   sections with one scalar of persisted state each
//! - [`BandSection`] - Low-minus-high band construction from both
//! - [`cutoff_alpha`] - Cutoff-to-coefficient mapping with Nyquist clamp
//!
//! ## Lane Storage
//!
//! - [`LaneBuffer`] - Grow-only per-lane voltage storage, the unit of
//!   polyphonic processing
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (with `alloc`) for embedded hosts.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! voltio-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use voltio_core::{LowpassSection, cutoff_alpha};
//!
//! let alpha = cutoff_alpha(120.0, 48_000.0);
//! let mut section = LowpassSection::new();
//! let out = section.process(5.0, alpha);
//! assert!(out < 5.0); // one-pole smoothing toward the input
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: lane storage grows, never reallocates per frame
//! - **Single-threaded**: all state is private to one module instance and
//!   mutated only inside the per-frame callback
//! - **Host-validated inputs**: no error taxonomy; numeric defense only
//!   (sign-normalized, Nyquist-clamped cutoffs)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod lane;
pub mod math;
pub mod module;
pub mod one_pole;
pub mod port;
pub mod trigger;

// Re-export main types at crate root
pub use lane::LaneBuffer;
pub use math::flush_denormal;
pub use module::{Module, ProcessArgs};
pub use one_pole::{BandSection, HighpassSection, LowpassSection, cutoff_alpha};
pub use port::{InputPort, OutputPort};
pub use trigger::{EdgeDetector, ToggleLatch};
