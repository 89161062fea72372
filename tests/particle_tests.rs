// Host-side tests for the audio-reactive particle swarm.

use soundroom::constants::{
    BASE_DRIFT, FLASH_COOLDOWN_FRAMES, PHASE_DIVISOR, PHASE_PERIOD, SPAWN_MARGIN,
    STEADY_DRIFT_BOOST,
};
use soundroom::{brightness_biased_color, AudioEnergyState, Axis, ParticleField};

fn loud_energy() -> AudioEnergyState {
    let mut energy = AudioEnergyState::new();
    energy.update(100.0, true); // above the flash threshold, momentum capped
    assert!(energy.flash_eligible);
    energy
}

#[test]
fn particles_spawn_outside_the_room_margin() {
    let field = ParticleField::new(350, 7);
    let half_margin = SPAWN_MARGIN / 2.0;
    for p in &field.particles {
        for coord in [p.position.x, p.position.y, p.position.z] {
            assert!(
                coord.abs() >= half_margin,
                "particle spawned inside the margin at {coord}"
            );
        }
    }
}

#[test]
fn axis_and_sign_reassignment_happens_exactly_once_per_period() {
    let mut field = ParticleField::new(1, 3);
    let energy = loud_energy();

    let mut reset_frames = Vec::new();
    for frame in 1..=(PHASE_PERIOD * 5) {
        field.tick(&energy, true);
        if field.particles[0].phase_counter == 0 {
            reset_frames.push(frame);
        }
    }
    let expected: Vec<u32> = (1..=5).map(|k| k * PHASE_PERIOD).collect();
    assert_eq!(reset_frames, expected, "one reset per period, never more");
}

#[test]
fn reassignment_cadence_is_independent_of_momentum() {
    let mut quiet = ParticleField::new(1, 3);
    let mut loud = ParticleField::new(1, 3);
    let mut idle_energy = AudioEnergyState::new();
    idle_energy.update(0.0, false);
    let loud_energy = loud_energy();

    for _ in 0..PHASE_PERIOD {
        quiet.tick(&idle_energy, false);
        loud.tick(&loud_energy, true);
    }
    assert_eq!(quiet.particles[0].phase_counter, 0);
    assert_eq!(loud.particles[0].phase_counter, 0);
}

#[test]
fn color_flashes_respect_the_cooldown() {
    let mut field = ParticleField::new(1, 11);
    let energy = loud_energy();

    let mut last_color = field.particles[0].color;
    let mut flash_frames = Vec::new();
    for frame in 1..=(PHASE_PERIOD - 1) {
        field.tick(&energy, true);
        let color = field.particles[0].color;
        if color != last_color {
            flash_frames.push(frame);
            last_color = color;
        }
    }

    assert!(!flash_frames.is_empty(), "sustained loud audio should flash");
    for pair in flash_frames.windows(2) {
        assert!(
            pair[1] - pair[0] > FLASH_COOLDOWN_FRAMES,
            "two flashes within the cooldown window: {flash_frames:?}"
        );
    }
}

#[test]
fn no_flashes_while_nothing_is_playing() {
    let mut field = ParticleField::new(4, 11);
    // Eligible by the delta rule, but the deck is silent.
    let mut energy = AudioEnergyState::new();
    energy.update(40.0, false);
    assert!(energy.flash_eligible);

    let before: Vec<[f32; 3]> = field.particles.iter().map(|p| p.color).collect();
    for _ in 0..30 {
        field.tick(&energy, false);
    }
    let after: Vec<[f32; 3]> = field.particles.iter().map(|p| p.color).collect();
    assert_eq!(before, after);
}

#[test]
fn chosen_axis_oscillates_and_the_rest_drift() {
    let mut field = ParticleField::new(1, 5);
    let energy = loud_energy();
    let momentum = energy.momentum;

    // Pin the particle to a known state so the step is predictable.
    {
        let p = &mut field.particles[0];
        p.axis_choice = Axis::X;
        p.sign = 1.0;
        p.phase_counter = 10;
        p.position = glam::Vec3::ZERO;
    }

    field.tick(&energy, true);
    let p = field.particles[0];
    let phase = 11.0; // counter advances before the motion step
    let expected_wobble = BASE_DRIFT + (phase / PHASE_DIVISOR).sin() * momentum;
    let expected_drift = (BASE_DRIFT + STEADY_DRIFT_BOOST) * momentum;

    assert!((p.position.x - expected_wobble).abs() < 1e-6);
    assert!((p.position.y - expected_drift).abs() < 1e-6);
    assert!((p.position.z - expected_drift).abs() < 1e-6);
}

#[test]
fn negative_sign_mirrors_the_motion() {
    let mut field = ParticleField::new(1, 5);
    let energy = loud_energy();

    {
        let p = &mut field.particles[0];
        p.axis_choice = Axis::Z;
        p.sign = -1.0;
        p.phase_counter = 3;
        p.position = glam::Vec3::ZERO;
    }

    field.tick(&energy, true);
    let p = field.particles[0];
    let expected_z = -(BASE_DRIFT + (4.0 / PHASE_DIVISOR).sin() * energy.momentum);
    let expected_xy = -(BASE_DRIFT + STEADY_DRIFT_BOOST) * energy.momentum;
    assert!((p.position.z - expected_z).abs() < 1e-6);
    assert!((p.position.x - expected_xy).abs() < 1e-6);
    assert!((p.position.y - expected_xy).abs() < 1e-6);
}

#[test]
fn brightness_biased_colors_land_in_the_light_range() {
    let mut rng = rand::rngs::mock::StepRng::new(0, 0x1234_5678_9abc_def0);
    for _ in 0..200 {
        let color = brightness_biased_color(&mut rng, 5);
        for channel in color {
            assert!(
                (0.5..=1.004).contains(&channel),
                "level-5 colors stay in the bright half, got {channel}"
            );
        }
    }
}

#[test]
fn same_seed_reproduces_the_same_field() {
    let a = ParticleField::new(32, 99);
    let b = ParticleField::new(32, 99);
    for (pa, pb) in a.particles.iter().zip(b.particles.iter()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.color, pb.color);
        assert_eq!(pa.axis_choice, pb.axis_choice);
        assert_eq!(pa.sign, pb.sign);
    }
}
