//! Demonstration of a small voltio patch driven from plain Rust.
//!
//! A two-tone test signal runs through the filter bank, and the three
//! band outputs are mixed back down by the combiner in average mode.
//!
//! Run with: cargo run --example patch_demo

use voltio_core::{Module, ProcessArgs};
use voltio_modules::{Combiner, FilterBank};

const SAMPLE_RATE: f32 = 48_000.0;
const FRAMES: usize = 48_000;

fn rms(sum_of_squares: f64, frames: usize) -> f64 {
    (sum_of_squares / frames as f64).sqrt()
}

fn main() {
    println!("Voltio Patch Demo");
    println!("=================\n");

    let mut bank = FilterBank::new();
    for output in bank.outputs_mut() {
        output.connect();
    }
    bank.set_param(FilterBank::PARAM_CUTOFF, 120.0);
    bank.set_param(FilterBank::PARAM_POWER, 1.0);

    let mut combiner = Combiner::new();
    combiner.set_param(Combiner::PARAM_POWER, 1.0);
    combiner.set_param(Combiner::PARAM_AVG, 1.0);

    let args = ProcessArgs::new(SAMPLE_RATE);
    let mut band_energy = [0.0f64; 3];
    let mut mix_energy = 0.0f64;

    for i in 0..FRAMES {
        let t = i as f32 / SAMPLE_RATE;
        // 40 Hz fundamental plus a 2 kHz overtone, +-5 V.
        let sample = ((2.0 * std::f32::consts::PI * 40.0 * t).sin() * 3.0)
            + ((2.0 * std::f32::consts::PI * 2_000.0 * t).sin() * 2.0);

        bank.inputs_mut()[FilterBank::IN_SIGNAL].connect(&[sample]);
        bank.process(&args);

        for (band, energy) in band_energy.iter_mut().enumerate() {
            let out = bank.outputs()[band].voltages()[0];
            *energy += f64::from(out) * f64::from(out);
        }

        let low = bank.outputs()[FilterBank::OUT_LOWPASS].voltages().to_vec();
        let band = bank.outputs()[FilterBank::OUT_BANDPASS].voltages().to_vec();
        let high = bank.outputs()[FilterBank::OUT_HIGHPASS].voltages().to_vec();
        combiner.inputs_mut()[Combiner::IN_TRACK_1].connect(&low);
        combiner.inputs_mut()[Combiner::IN_TRACK_2].connect(&band);
        combiner.inputs_mut()[Combiner::IN_TRACK_3].connect(&high);
        combiner.process(&args);

        let mix = combiner.outputs()[Combiner::OUT_MIX].voltages()[0];
        mix_energy += f64::from(mix) * f64::from(mix);
    }

    println!("Filter bank at 120 Hz cutoff, {FRAMES} frames:");
    println!("  low pass RMS:  {:.4} V", rms(band_energy[0], FRAMES));
    println!("  band pass RMS: {:.4} V", rms(band_energy[1], FRAMES));
    println!("  high pass RMS: {:.4} V", rms(band_energy[2], FRAMES));
    println!("\nCombiner (average of the three bands):");
    println!("  mix RMS:       {:.4} V", rms(mix_energy, FRAMES));
}
