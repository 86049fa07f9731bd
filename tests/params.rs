//! Tests for the parameter store.

use pluck_dsp::params::{AtomicParamStore, ParamId, ParamStore};

#[test]
fn store_seeds_defaults() {
    let store = AtomicParamStore::new();

    assert_eq!(store.read(ParamId::Feedback), 0.1);
    assert_eq!(store.read(ParamId::DryGainDb), 0.0);
    assert_eq!(store.read(ParamId::WetGainDb), -15.0);
    assert_eq!(store.read(ParamId::Color), 0.5);
    assert_eq!(store.read(ParamId::DelaySamples), 200.0);
    assert_eq!(store.read(ParamId::NoteNumber), 60.0);
    assert_eq!(store.read(ParamId::SquareMode), 0.0);
}

#[test]
fn publish_round_trips() {
    let store = AtomicParamStore::new();

    store.publish(ParamId::Feedback, 0.75);
    assert_eq!(store.read(ParamId::Feedback), 0.75);

    store.publish(ParamId::WetGainDb, -3.0);
    assert_eq!(store.read(ParamId::WetGainDb), -3.0);
}

#[test]
fn publish_clamps_to_declared_range() {
    let store = AtomicParamStore::new();

    store.publish(ParamId::Feedback, 2.0);
    assert_eq!(store.read(ParamId::Feedback), 1.0);

    store.publish(ParamId::DryGainDb, -200.0);
    assert_eq!(store.read(ParamId::DryGainDb), -60.0);

    store.publish(ParamId::DelaySamples, 5.0);
    assert_eq!(store.read(ParamId::DelaySamples), 10.0);

    store.publish(ParamId::NoteNumber, 300.0);
    assert_eq!(store.read(ParamId::NoteNumber), 128.0);
}

#[test]
fn store_is_shareable_across_threads() {
    let store = std::sync::Arc::new(AtomicParamStore::new());
    let writer = std::sync::Arc::clone(&store);

    let handle = std::thread::spawn(move || {
        for i in 0..1000 {
            writer.publish(ParamId::Color, (i % 100) as f32 / 100.0);
        }
    });

    // Reader only ever observes complete values inside the range.
    for _ in 0..1000 {
        let color = store.read(ParamId::Color);
        assert!((0.0..=1.0).contains(&color));
    }

    handle.join().unwrap();
}
