// Host-side tests for the global audio-energy derivation.

use soundroom::constants::{IDLE_MOMENTUM, MOMENTUM_CAP, MOMENTUM_PER_LOUDNESS};
use soundroom::AudioEnergyState;

#[test]
fn loud_frames_and_sharp_jumps_are_flash_eligible() {
    let mut energy = AudioEnergyState::new();

    // 10 -> 70 -> 72: the first crosses the delta rule from silence, the next
    // two sit above the absolute threshold.
    energy.update(10.0, true);
    assert!(energy.flash_eligible, "jump from silence exceeds the delta");
    energy.update(70.0, true);
    assert!(energy.flash_eligible, "above the loudness threshold");
    energy.update(72.0, true);
    assert!(
        energy.flash_eligible,
        "small delta, but still above the loudness threshold"
    );
}

#[test]
fn quiet_steady_audio_is_not_flash_eligible() {
    let mut energy = AudioEnergyState::new();
    energy.update(40.0, true); // jump from 0, eligible
    energy.update(42.0, true); // quiet and steady
    assert!(!energy.flash_eligible);

    // A sharp drop re-arms the flash gate even below the loudness threshold.
    energy.update(20.0, true);
    assert!(energy.flash_eligible);
}

#[test]
fn momentum_follows_loudness_linearly_up_to_the_cap() {
    let mut energy = AudioEnergyState::new();

    energy.update(30.0, true);
    assert_eq!(energy.momentum, 30.0 * MOMENTUM_PER_LOUDNESS);

    // Fractional loudness is floored before scaling.
    energy.update(20.9, true);
    assert_eq!(energy.momentum, 20.0 * MOMENTUM_PER_LOUDNESS);

    energy.update(100.0, true);
    assert_eq!(energy.momentum, MOMENTUM_CAP);
}

#[test]
fn momentum_is_monotonic_in_loudness_while_playing() {
    let mut prev = 0.0;
    for step in 0..120 {
        let loudness = step as f32 * 2.0;
        let mut energy = AudioEnergyState::new();
        energy.update(loudness, true);
        assert!(
            energy.momentum >= prev,
            "momentum dipped at loudness {loudness}"
        );
        assert!(energy.momentum <= MOMENTUM_CAP);
        prev = energy.momentum;
    }
}

#[test]
fn silent_deck_falls_back_to_idle_momentum() {
    let mut energy = AudioEnergyState::new();
    energy.update(100.0, true);
    assert_eq!(energy.momentum, MOMENTUM_CAP);

    // Track stops: momentum drops to the idle constant no matter how loud the
    // last sample was.
    energy.update(100.0, false);
    assert_eq!(energy.momentum, IDLE_MOMENTUM);
}
