//! Multi-input combiner with summed or averaged passthrough.
//!
//! Up to three polyphonic inputs are accumulated lane-wise into one
//! buffer. Sum mode passes the accumulated lanes through; average mode
//! divides them by the total channel count read across all connected
//! inputs — a per-port total, so two overlapping stereo inputs divide by
//! four, not two.
//!
//! While powered but with neither mode selected, the inputs are not read
//! at all: the lane buffer and channel total keep their prior values and
//! the output re-emits them every frame. The output freezes rather than
//! clears, and the frozen values survive a power cycle. Patches that rely
//! on the output going silent must power the module off.

use voltio_core::{
    EdgeDetector, InputPort, LaneBuffer, Module, OutputPort, ProcessArgs, ToggleLatch,
};

/// Exclusive sum/average selection driven by two momentary triggers.
///
/// Last pressed wins: a rising edge on either trigger claims the selection
/// and clears the other flag, so at most one flag is ever true. The
/// average trigger is evaluated second and wins when both rise in the same
/// frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSelect {
    sum_edge: EdgeDetector,
    avg_edge: EdgeDetector,
    sum_on: bool,
    avg_on: bool,
}

impl ModeSelect {
    /// Create a selector with nothing selected.
    pub const fn new() -> Self {
        Self {
            sum_edge: EdgeDetector::new(),
            avg_edge: EdgeDetector::new(),
            sum_on: false,
            avg_on: false,
        }
    }

    /// Feed both raw trigger values; returns `(sum_on, avg_on)`.
    pub fn update(&mut self, sum_raw: bool, avg_raw: bool) -> (bool, bool) {
        if self.sum_edge.process(sum_raw) {
            self.sum_on = true;
            self.avg_on = false;
        }
        if self.avg_edge.process(avg_raw) {
            self.avg_on = true;
            self.sum_on = false;
        }
        (self.sum_on, self.avg_on)
    }

    /// Clear both flags. Idempotent; trigger edge memory is kept.
    pub fn clear(&mut self) {
        self.sum_on = false;
        self.avg_on = false;
    }

    /// Whether sum mode is selected.
    pub const fn sum_on(&self) -> bool {
        self.sum_on
    }

    /// Whether average mode is selected.
    pub const fn avg_on(&self) -> bool {
        self.avg_on
    }
}

/// Up-to-three-input combiner with exclusive sum/average modes.
///
/// ## Params
///
/// | Index | Name | Range |
/// |-------|------|-------|
/// | 0 | Power | button, 0 or 1 |
/// | 1 | Sum | button, 0 or 1 |
/// | 2 | Average | button, 0 or 1 |
///
/// The output is fully polyphonic: its channel count follows the widest
/// connected input and every accumulated lane is written.
///
/// # Example
///
/// ```rust
/// use voltio_core::{Module, ProcessArgs};
/// use voltio_modules::Combiner;
///
/// let mut combiner = Combiner::new();
/// combiner.inputs_mut()[Combiner::IN_TRACK_1].connect(&[4.0]);
/// combiner.inputs_mut()[Combiner::IN_TRACK_2].connect(&[2.0]);
/// combiner.set_param(Combiner::PARAM_POWER, 1.0);
/// combiner.set_param(Combiner::PARAM_SUM, 1.0);
/// combiner.process(&ProcessArgs::new(48_000.0));
/// assert_eq!(combiner.outputs()[Combiner::OUT_MIX].voltages(), &[6.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Combiner {
    params: [f32; 3],
    inputs: [InputPort; 3],
    outputs: [OutputPort; 1],
    lights: [f32; 3],
    power: ToggleLatch,
    mode: ModeSelect,
    lanes: LaneBuffer,
    channels_read: usize,
}

impl Combiner {
    /// Power button param index.
    pub const PARAM_POWER: usize = 0;
    /// Sum trigger param index.
    pub const PARAM_SUM: usize = 1;
    /// Average trigger param index.
    pub const PARAM_AVG: usize = 2;

    /// First track input port index.
    pub const IN_TRACK_1: usize = 0;
    /// Second track input port index.
    pub const IN_TRACK_2: usize = 1;
    /// Third track input port index.
    pub const IN_TRACK_3: usize = 2;

    /// Mix output port index.
    pub const OUT_MIX: usize = 0;

    /// Power indicator light index.
    pub const LIGHT_POWER: usize = 0;
    /// Sum indicator light index.
    pub const LIGHT_SUM: usize = 1;
    /// Average indicator light index.
    pub const LIGHT_AVG: usize = 2;

    /// Create a powered-off combiner with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the power latch is currently on.
    pub fn is_powered(&self) -> bool {
        self.power.is_on()
    }

    /// The current mode selection as `(sum_on, avg_on)`.
    pub fn mode(&self) -> (bool, bool) {
        (self.mode.sum_on(), self.mode.avg_on())
    }

    fn update_power(&mut self) -> bool {
        let pressed = self.params[Self::PARAM_POWER] > 0.5;
        #[cfg(feature = "tracing")]
        let was_on = self.power.is_on();
        let on = self.power.update(pressed);
        #[cfg(feature = "tracing")]
        if on != was_on {
            tracing::debug!("combiner power toggled: on={on}");
        }
        self.lights[Self::LIGHT_POWER] = if on { 1.0 } else { 0.0 };
        on
    }

    fn update_modes(&mut self) -> (bool, bool) {
        let sum_raw = self.params[Self::PARAM_SUM] > 0.5;
        let avg_raw = self.params[Self::PARAM_AVG] > 0.5;
        #[cfg(feature = "tracing")]
        let before = (self.mode.sum_on(), self.mode.avg_on());
        let (sum_on, avg_on) = self.mode.update(sum_raw, avg_raw);
        #[cfg(feature = "tracing")]
        if (sum_on, avg_on) != before {
            tracing::debug!("combiner mode selected: sum={sum_on} avg={avg_on}");
        }
        self.lights[Self::LIGHT_SUM] = if sum_on { 1.0 } else { 0.0 };
        self.lights[Self::LIGHT_AVG] = if avg_on { 1.0 } else { 0.0 };
        (sum_on, avg_on)
    }

    fn read_inputs(&mut self) {
        self.lanes.clear();
        self.channels_read = 0;

        let Self {
            inputs,
            lanes,
            channels_read,
            ..
        } = self;
        for port in inputs.iter() {
            if !port.is_connected() {
                continue;
            }
            let channels = port.channels();
            lanes.grow_to(channels);
            for (lane, voltage) in port.voltages().iter().enumerate() {
                lanes[lane] += *voltage;
            }
            *channels_read += channels;
        }
    }

    fn apply_average(&mut self) {
        let total = self.channels_read as f32;
        for lane in self.lanes.as_mut_slice() {
            *lane /= total;
        }
    }

    fn send_output(&mut self) {
        self.outputs[Self::OUT_MIX].set_channels(self.lanes.lanes());
        self.outputs[Self::OUT_MIX].write(self.lanes.as_slice());
    }

    fn disable_output(&mut self) {
        self.outputs[Self::OUT_MIX].set_channels(0);
        self.mode.clear();
        self.lights[Self::LIGHT_SUM] = 0.0;
        self.lights[Self::LIGHT_AVG] = 0.0;
    }
}

impl Module for Combiner {
    fn process(&mut self, _args: &ProcessArgs) {
        if !self.update_power() {
            self.disable_output();
            return;
        }

        let (sum_on, avg_on) = self.update_modes();

        if sum_on || avg_on {
            self.read_inputs();
        }

        // With no mode active the buffer and channel total are stale from
        // the last active frame; re-emitting them is the frozen-output
        // contract described in the module docs.
        if self.channels_read > 0 {
            if avg_on {
                self.apply_average();
            }
            self.send_output();
        }
    }

    fn reset(&mut self) {
        self.power.reset();
        self.mode = ModeSelect::new();
        self.lanes.clear();
        self.channels_read = 0;
        self.lights = [0.0; 3];
        self.outputs[Self::OUT_MIX].set_channels(0);
    }

    fn set_param(&mut self, index: usize, value: f32) {
        if index < self.params.len() {
            self.params[index] = value;
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
