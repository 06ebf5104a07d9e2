//! Host-facing signal ports.
//!
//! Ports are the only data surface a module shares with the host: inputs
//! are populated by the host before each frame, outputs are populated by
//! the module during the frame and read back by the host after it.
//! Setting an output's channel count to zero is the documented way to mark
//! it as carrying no signal.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A host-written input: connection state plus per-lane voltages.
///
/// The reported channel count is the number of voltages the host wrote;
/// an unpatched port reports zero channels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputPort {
    connected: bool,
    voltages: Vec<f32>,
}

impl InputPort {
    /// Create an unpatched input.
    pub const fn new() -> Self {
        Self {
            connected: false,
            voltages: Vec::new(),
        }
    }

    /// Host side: mark the port patched and set its per-lane voltages.
    pub fn connect(&mut self, voltages: &[f32]) {
        self.connected = true;
        self.voltages.clear();
        self.voltages.extend_from_slice(voltages);
    }

    /// Host side: unpatch the port.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.voltages.clear();
    }

    /// Whether a cable is patched into this input.
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Reported channel count; zero when unpatched.
    pub fn channels(&self) -> usize {
        self.voltages.len()
    }

    /// Bulk read of the per-lane voltages.
    pub fn voltages(&self) -> &[f32] {
        &self.voltages
    }
}

/// A module-written output: channel count plus per-lane voltages.
///
/// The connection flag is host-owned; modules consult it to skip work for
/// unpatched outputs. Channel count and voltages are module-owned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputPort {
    connected: bool,
    channels: usize,
    voltages: Vec<f32>,
}

impl OutputPort {
    /// Create an unpatched output carrying no signal.
    pub const fn new() -> Self {
        Self {
            connected: false,
            channels: 0,
            voltages: Vec::new(),
        }
    }

    /// Host side: mark a cable patched into this output.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    /// Host side: unpatch the output.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    /// Whether a cable is patched into this output.
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Module side: declare how many lanes the output carries (0 = none).
    ///
    /// Storage grows to fit but never shrinks.
    pub fn set_channels(&mut self, channels: usize) {
        self.channels = channels;
        if self.voltages.len() < channels {
            self.voltages.resize(channels, 0.0);
        }
    }

    /// Declared channel count.
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Module side: bulk write of the first `channels` lanes.
    ///
    /// `voltages` must hold at least as many lanes as declared.
    pub fn write(&mut self, voltages: &[f32]) {
        debug_assert!(voltages.len() >= self.channels);
        self.voltages[..self.channels].copy_from_slice(&voltages[..self.channels]);
    }

    /// Host side: read the lanes written this frame.
    pub fn voltages(&self) -> &[f32] {
        &self.voltages[..self.channels]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_starts_unpatched() {
        let port = InputPort::new();
        assert!(!port.is_connected());
        assert_eq!(port.channels(), 0);
    }

    #[test]
    fn input_reports_host_written_lanes() {
        let mut port = InputPort::new();
        port.connect(&[1.0, 2.0, 3.0]);
        assert!(port.is_connected());
        assert_eq!(port.channels(), 3);
        assert_eq!(port.voltages(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn input_disconnect_drops_lanes() {
        let mut port = InputPort::new();
        port.connect(&[1.0]);
        port.disconnect();
        assert!(!port.is_connected());
        assert_eq!(port.channels(), 0);
    }

    #[test]
    fn output_zero_channels_reads_empty() {
        let mut port = OutputPort::new();
        port.set_channels(2);
        port.write(&[1.0, 2.0]);
        port.set_channels(0);
        assert!(port.voltages().is_empty());
    }

    #[test]
    fn output_write_copies_declared_lanes() {
        let mut port = OutputPort::new();
        port.set_channels(2);
        port.write(&[4.0, 5.0, 6.0]);
        assert_eq!(port.voltages(), &[4.0, 5.0]);
    }

    #[test]
    fn output_connection_is_host_owned() {
        let mut port = OutputPort::new();
        assert!(!port.is_connected());
        port.connect();
        assert!(port.is_connected());
        port.disconnect();
        assert!(!port.is_connected());
    }
}
