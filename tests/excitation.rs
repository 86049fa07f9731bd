//! Tests for the delay buffer and the noise-burst excitation.

use pluck_dsp::delay_buffer::DelayBuffer;
use pluck_dsp::excitation::ExcitationController;

#[test]
fn buffer_allocates_zeroed() {
    let mut buffer = DelayBuffer::new();
    buffer.allocate(2, 1024);

    assert_eq!(buffer.channels(), 2);
    assert_eq!(buffer.capacity(), 1024);
    for channel in 0..2 {
        for i in 0..1024 {
            assert_eq!(buffer.read(channel, i), 0.0);
        }
    }
}

#[test]
fn buffer_channels_are_independent() {
    let mut buffer = DelayBuffer::new();
    buffer.allocate(2, 16);

    buffer.write(0, 3, 0.5);
    assert_eq!(buffer.read(0, 3), 0.5);
    assert_eq!(buffer.read(1, 3), 0.0);

    buffer.clear();
    assert_eq!(buffer.read(0, 3), 0.0);
}

#[test]
fn trigger_seeds_only_the_tail() {
    let mut buffer = DelayBuffer::new();
    buffer.allocate(1, 256);
    let mut excitation = ExcitationController::new();

    excitation.trigger(&mut buffer, 64);

    for i in 0..192 {
        assert_eq!(buffer.read(0, i), 0.0, "head touched at {i}");
    }
    let mut nonzero = 0;
    for i in 192..256 {
        let value = buffer.read(0, i);
        assert!((-1.0..=1.0).contains(&value), "out of range at {i}: {value}");
        if value != 0.0 {
            nonzero += 1;
        }
    }
    assert!(nonzero > 56, "tail barely seeded: {nonzero} nonzero of 64");
}

#[test]
fn trigger_clears_previous_contents() {
    let mut buffer = DelayBuffer::new();
    buffer.allocate(1, 256);
    buffer.write(0, 10, 0.9);

    let mut excitation = ExcitationController::new();
    excitation.trigger(&mut buffer, 32);

    assert_eq!(buffer.read(0, 10), 0.0);
}

#[test]
fn channels_get_decorrelated_noise() {
    let mut buffer = DelayBuffer::new();
    buffer.allocate(2, 512);
    let mut excitation = ExcitationController::new();

    excitation.trigger(&mut buffer, 256);

    let mut differing = 0;
    for i in 256..512 {
        if buffer.read(0, i) != buffer.read(1, i) {
            differing += 1;
        }
    }
    assert!(differing > 200, "channels correlated: only {differing} samples differ");
}

#[test]
fn oversized_delay_request_clamps_to_capacity() {
    let mut buffer = DelayBuffer::new();
    buffer.allocate(2, 128);
    let mut excitation = ExcitationController::new();

    // Must not index outside the per-channel capacity.
    excitation.trigger(&mut buffer, 100000);

    for channel in 0..2 {
        for i in 1..128 {
            assert!(buffer.read(channel, i).abs() <= 1.0);
        }
    }
}
