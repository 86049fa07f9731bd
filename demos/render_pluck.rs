//! Renders a short plucked phrase to a WAV file.

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use pluck_dsp::engine::{Engine, EngineConfig, FeedbackTopology};
use pluck_dsp::excitation::ExcitationMode;
use pluck_dsp::params::{AtomicParamStore, NoteEvent, ParamId, ParamStore};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 256;

fn main() {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let mut engine = Engine::new(EngineConfig {
        topology: FeedbackTopology::Resonator,
        excitation: ExcitationMode::Triggered,
    });
    assert!(engine.configure(2, SAMPLE_RATE as f32));

    let params = AtomicParamStore::new();
    params.publish(ParamId::Feedback, 0.6);
    params.publish(ParamId::Color, 0.5);
    params.publish(ParamId::WetGainDb, 0.0);

    let spec = WavSpec {
        channels: 2,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create("pluck.wav", spec).unwrap();

    // One note per second, a rising arpeggio.
    for (beat, note) in [48u8, 52, 55, 60].iter().enumerate() {
        log::info!("note on: {note}");

        let blocks = SAMPLE_RATE as usize / BLOCK_SIZE;
        for block in 0..blocks {
            let mut left = [0.0f32; BLOCK_SIZE];
            let mut right = [0.0f32; BLOCK_SIZE];

            let events = if block == 0 {
                vec![NoteEvent {
                    offset: 0,
                    note: *note,
                }]
            } else {
                vec![]
            };

            engine.process(&mut [&mut left, &mut right], &events, &params);

            for frame in 0..BLOCK_SIZE {
                writer.write_sample(left[frame]).unwrap();
                writer.write_sample(right[frame]).unwrap();
            }
        }

        log::info!(
            "beat {beat}: delay length {} samples",
            params.read(ParamId::DelaySamples)
        );
    }

    writer.finalize().unwrap();
    log::info!("wrote pluck.wav");
}
