//! Property-based tests for the module state machines and filter paths.
//!
//! Uses proptest to verify the invariants the panels rely on: latches
//! flip only on strict rising edges, the coefficient mapping stays in
//! [0, 1] over the whole parameter plane, mode selection is exclusive
//! under arbitrary press sequences, and the audio paths never produce
//! non-finite voltages for bounded inputs.

use proptest::prelude::*;
use voltio_core::{Module, ProcessArgs, ToggleLatch, cutoff_alpha};
use voltio_modules::{Combiner, FilterBank, ModeSelect};

const SR: f32 = 48_000.0;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The latch state equals the initial state XORed with one flip per
    /// strict rising edge of the raw sequence.
    #[test]
    fn toggle_latch_matches_edge_count_model(raws in prop::collection::vec(any::<bool>(), 0..256)) {
        let mut latch = ToggleLatch::new();
        let mut expected = false;
        let mut last = false;
        for raw in raws {
            if raw && !last {
                expected = !expected;
            }
            last = raw;
            prop_assert_eq!(latch.update(raw), expected);
        }
    }

    /// The passband weight stays in [0, 1] for any cutoff, at any
    /// plausible engine rate.
    #[test]
    fn alpha_stays_in_unit_interval(
        cutoff in -30_000.0f32..=30_000.0,
        sample_rate in 8_000.0f32..=192_000.0,
    ) {
        let alpha = cutoff_alpha(cutoff, sample_rate);
        prop_assert!((0.0..=1.0).contains(&alpha), "alpha {} out of range", alpha);
    }

    /// At most one mode flag is true after any sequence of raw presses.
    #[test]
    fn mode_selection_is_always_exclusive(
        presses in prop::collection::vec((any::<bool>(), any::<bool>()), 0..128)
    ) {
        let mut mode = ModeSelect::new();
        for (sum_raw, avg_raw) in presses {
            let (sum_on, avg_on) = mode.update(sum_raw, avg_raw);
            prop_assert!(!(sum_on && avg_on), "both modes latched at once");
        }
    }

    /// For bounded input voltages and any knob position, all three filter
    /// outputs stay finite and within a loose voltage bound.
    #[test]
    fn filter_outputs_stay_finite_and_bounded(
        signal in prop::collection::vec(-10.0f32..=10.0, 1..256),
        cutoff in -250.0f32..=250.0,
    ) {
        let mut bank = FilterBank::new();
        for output in bank.outputs_mut() {
            output.connect();
        }
        bank.set_param(FilterBank::PARAM_CUTOFF, cutoff);
        bank.set_param(FilterBank::PARAM_POWER, 1.0);

        for sample in signal {
            bank.inputs_mut()[FilterBank::IN_SIGNAL].connect(&[sample]);
            bank.process(&ProcessArgs::new(SR));
            for output in bank.outputs() {
                let out = output.voltages()[0];
                prop_assert!(out.is_finite(), "non-finite output {}", out);
                prop_assert!(out.abs() < 1_000.0, "output {} blew up", out);
            }
        }
    }

    /// Average mode is exactly sum mode scaled by the total channel count.
    #[test]
    fn average_is_sum_scaled_by_total_channels(
        track1 in prop::collection::vec(-10.0f32..=10.0, 1..8),
        track2 in prop::collection::vec(-10.0f32..=10.0, 1..8),
        track3 in prop::collection::vec(-10.0f32..=10.0, 1..8),
    ) {
        let total = (track1.len() + track2.len() + track3.len()) as f32;

        let mut summed = Combiner::new();
        let mut averaged = Combiner::new();
        for (combiner, mode_param) in [
            (&mut summed, Combiner::PARAM_SUM),
            (&mut averaged, Combiner::PARAM_AVG),
        ] {
            combiner.inputs_mut()[Combiner::IN_TRACK_1].connect(&track1);
            combiner.inputs_mut()[Combiner::IN_TRACK_2].connect(&track2);
            combiner.inputs_mut()[Combiner::IN_TRACK_3].connect(&track3);
            combiner.set_param(Combiner::PARAM_POWER, 1.0);
            combiner.set_param(mode_param, 1.0);
            combiner.process(&ProcessArgs::new(SR));
        }

        let sum_out = summed.outputs()[Combiner::OUT_MIX].voltages();
        let avg_out = averaged.outputs()[Combiner::OUT_MIX].voltages();
        prop_assert_eq!(sum_out.len(), avg_out.len());
        for (sum_lane, avg_lane) in sum_out.iter().zip(avg_out) {
            prop_assert_eq!(*avg_lane, sum_lane / total);
        }
    }

    /// A powered-off module declares zero channels everywhere, no matter
    /// what it was doing before.
    #[test]
    fn power_off_always_silences_the_filter(
        signal in prop::collection::vec(-10.0f32..=10.0, 1..64),
    ) {
        let mut bank = FilterBank::new();
        for output in bank.outputs_mut() {
            output.connect();
        }
        bank.set_param(FilterBank::PARAM_POWER, 1.0);
        for sample in &signal {
            bank.inputs_mut()[FilterBank::IN_SIGNAL].connect(&[*sample]);
            bank.process(&ProcessArgs::new(SR));
        }

        // Release, then press again: the second edge powers off.
        bank.set_param(FilterBank::PARAM_POWER, 0.0);
        bank.process(&ProcessArgs::new(SR));
        bank.set_param(FilterBank::PARAM_POWER, 1.0);
        bank.process(&ProcessArgs::new(SR));

        for output in bank.outputs() {
            prop_assert_eq!(output.channels(), 0);
        }
    }
}
