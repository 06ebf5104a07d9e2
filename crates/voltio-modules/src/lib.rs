//! Voltio Modules - rack module implementations
//!
//! This crate provides the audio-rate modules built on voltio-core:
//!
//! - [`FilterBank`] - Three-output filter bank (low, band, high pass)
//!   fed from one polyphonic input and one shared cutoff knob
//! - [`Combiner`] - Up-to-three-input combiner with exclusive
//!   sum/average passthrough modes
//!
//! Both modules are gated by a latched power button: a rising edge on the
//! raw button value toggles the module on or off, and a powered-off module
//! forces its output channel counts to zero.
//!
//! ## Example
//!
//! ```rust
//! use voltio_core::{Module, ProcessArgs};
//! use voltio_modules::FilterBank;
//!
//! let mut bank = FilterBank::new();
//! bank.outputs_mut()[FilterBank::OUT_LOWPASS].connect();
//! bank.set_param(FilterBank::PARAM_CUTOFF, 120.0);
//!
//! // Press the power button for one frame.
//! bank.set_param(FilterBank::PARAM_POWER, 1.0);
//! bank.inputs_mut()[FilterBank::IN_SIGNAL].connect(&[5.0]);
//! bank.process(&ProcessArgs::new(48_000.0));
//! assert_eq!(bank.outputs()[FilterBank::OUT_LOWPASS].channels(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default) - standard library support
//! - `tracing` - `debug!` events on latched state transitions

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod combiner;
pub mod filter_bank;

// Re-export main types at crate root
pub use combiner::{Combiner, ModeSelect};
pub use filter_bank::FilterBank;
