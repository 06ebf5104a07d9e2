//! Three-output filter bank fed from a single polyphonic input.
//!
//! One cutoff knob drives three single-pole stages that run in a fixed
//! order every frame: low pass, then band pass, then high pass. Each stage
//! filters the lane buffer in place, so later stages see the earlier
//! stages' output rather than the raw input. The ordering is part of the
//! module's sound and must not be changed.
//!
//! Each stage keeps one set of scalar state shared across all lanes of a
//! polyphonic signal; lanes are not filtered independently.

use libm::fabsf;
use voltio_core::{
    BandSection, HighpassSection, InputPort, LaneBuffer, LowpassSection, Module, OutputPort,
    ProcessArgs, ToggleLatch, cutoff_alpha,
};

/// Half-width in Hz of the band stage around the shared cutoff.
const BAND_SPREAD_HZ: f32 = 5.0;

/// Multi-output filter bank (low, band, high pass).
///
/// Powered by a latched button; while off, every output's channel count is
/// forced to zero and no state advances. A stage whose output is unpatched
/// is skipped entirely: no channel-count change, no state mutation, no
/// write.
///
/// ## Params
///
/// | Index | Name | Range |
/// |-------|------|-------|
/// | 0 | Power | button, 0 or 1 |
/// | 1 | Cutoff | −250.0–250.0 Hz |
///
/// # Example
///
/// ```rust
/// use voltio_core::{Module, ProcessArgs};
/// use voltio_modules::FilterBank;
///
/// let mut bank = FilterBank::new();
/// bank.outputs_mut()[FilterBank::OUT_HIGHPASS].connect();
/// bank.set_param(FilterBank::PARAM_POWER, 1.0);
/// bank.set_param(FilterBank::PARAM_CUTOFF, -40.0);
/// bank.inputs_mut()[FilterBank::IN_SIGNAL].connect(&[1.0, -1.0]);
/// bank.process(&ProcessArgs::new(48_000.0));
/// assert_eq!(bank.outputs()[FilterBank::OUT_HIGHPASS].channels(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBank {
    params: [f32; 2],
    inputs: [InputPort; 1],
    outputs: [OutputPort; 3],
    lights: [f32; 1],
    power: ToggleLatch,
    lanes: LaneBuffer,
    lowpass: LowpassSection,
    band: BandSection,
    highpass: HighpassSection,
}

impl FilterBank {
    /// Power button param index.
    pub const PARAM_POWER: usize = 0;
    /// Cutoff knob param index.
    pub const PARAM_CUTOFF: usize = 1;

    /// Signal input port index.
    pub const IN_SIGNAL: usize = 0;

    /// Low-pass output port index.
    pub const OUT_LOWPASS: usize = 0;
    /// Band-pass output port index.
    pub const OUT_BANDPASS: usize = 1;
    /// High-pass output port index.
    pub const OUT_HIGHPASS: usize = 2;

    /// Power indicator light index.
    pub const LIGHT_POWER: usize = 0;

    /// Cutoff knob range in Hz, symmetric around zero.
    pub const CUTOFF_RANGE_HZ: f32 = 250.0;

    /// Create a powered-off filter bank with zeroed filter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cutoff knob, clamped to the knob range.
    pub fn set_cutoff_hz(&mut self, cutoff_hz: f32) {
        self.params[Self::PARAM_CUTOFF] =
            cutoff_hz.clamp(-Self::CUTOFF_RANGE_HZ, Self::CUTOFF_RANGE_HZ);
    }

    /// Current cutoff knob value in Hz.
    pub fn cutoff_hz(&self) -> f32 {
        self.params[Self::PARAM_CUTOFF]
    }

    /// Whether the power latch is currently on.
    pub fn is_powered(&self) -> bool {
        self.power.is_on()
    }

    fn update_power(&mut self) -> bool {
        let pressed = self.params[Self::PARAM_POWER] > 0.5;
        #[cfg(feature = "tracing")]
        let was_on = self.power.is_on();
        let on = self.power.update(pressed);
        #[cfg(feature = "tracing")]
        if on != was_on {
            tracing::debug!("filter bank power toggled: on={on}");
        }
        self.lights[Self::LIGHT_POWER] = if on { 1.0 } else { 0.0 };
        on
    }

    fn disable_outputs(&mut self) {
        for output in &mut self.outputs {
            output.set_channels(0);
        }
    }

    fn read_input(&mut self) {
        let port = &self.inputs[Self::IN_SIGNAL];
        if port.is_connected() {
            self.lanes.copy_from(port.voltages());
        } else {
            self.lanes.clear();
        }
    }

    fn apply_lowpass(&mut self, sample_rate: f32) {
        if !self.outputs[Self::OUT_LOWPASS].is_connected() {
            return;
        }
        self.outputs[Self::OUT_LOWPASS].set_channels(self.lanes.lanes());

        let alpha = cutoff_alpha(self.cutoff_hz(), sample_rate);
        for lane in self.lanes.as_mut_slice() {
            *lane = self.lowpass.process(*lane, alpha);
        }

        self.outputs[Self::OUT_LOWPASS].write(self.lanes.as_slice());
    }

    fn apply_bandpass(&mut self, sample_rate: f32) {
        if !self.outputs[Self::OUT_BANDPASS].is_connected() {
            return;
        }
        self.outputs[Self::OUT_BANDPASS].set_channels(self.lanes.lanes());

        let cutoff = self.cutoff_hz();
        let low_cutoff = fabsf(cutoff - BAND_SPREAD_HZ);
        let high_cutoff = fabsf(cutoff + BAND_SPREAD_HZ);
        let alpha_low = cutoff_alpha(low_cutoff, sample_rate);
        let alpha_high = cutoff_alpha(high_cutoff, sample_rate);
        for lane in self.lanes.as_mut_slice() {
            *lane = self.band.process(*lane, alpha_low, alpha_high);
        }

        self.outputs[Self::OUT_BANDPASS].write(self.lanes.as_slice());
    }

    fn apply_highpass(&mut self, sample_rate: f32) {
        if !self.outputs[Self::OUT_HIGHPASS].is_connected() {
            return;
        }
        self.outputs[Self::OUT_HIGHPASS].set_channels(self.lanes.lanes());

        let alpha = cutoff_alpha(self.cutoff_hz(), sample_rate);
        for lane in self.lanes.as_mut_slice() {
            *lane = self.highpass.process(*lane, alpha);
        }

        self.outputs[Self::OUT_HIGHPASS].write(self.lanes.as_slice());
    }
}

impl Module for FilterBank {
    fn process(&mut self, args: &ProcessArgs) {
        if !self.update_power() {
            self.disable_outputs();
            return;
        }

        self.read_input();
        self.apply_lowpass(args.sample_rate);
        self.apply_bandpass(args.sample_rate);
        self.apply_highpass(args.sample_rate);
    }

    fn reset(&mut self) {
        self.power.reset();
        self.lanes.clear();
        self.lowpass.reset();
        self.band.reset();
        self.highpass.reset();
        self.lights = [0.0];
        self.disable_outputs();
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            Self::PARAM_POWER => self.params[Self::PARAM_POWER] = value,
            Self::PARAM_CUTOFF => self.set_cutoff_hz(value),
            _ => {}
        }
    }

    fn param(&self, index: usize) -> f32 {
        self.params.get(index).copied().unwrap_or(0.0)
    }

    fn inputs(&self) -> &[InputPort] {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut [InputPort] {
        &mut self.inputs
    }

    fn outputs(&self) -> &[OutputPort] {
        &self.outputs
    }

    fn outputs_mut(&mut self) -> &mut [OutputPort] {
        &mut self.outputs
    }

    fn light(&self, index: usize) -> f32 {
        self.lights.get(index).copied().unwrap_or(0.0)
    }
}
