//! Session and spawner behaviour through the public API

use bblock::core::spawner::{advance, sample_lanes};
use bblock::core::{seeded_rng, Block, ScriptedRandom, Session};
use bblock::types::{
    DifficultyLevel, DifficultyProfile, HitResult, Lane, Point, TickResult, FIELD_HEIGHT,
    LANE_WIDTH,
};

fn profile(level: u8) -> DifficultyProfile {
    DifficultyProfile::for_level(DifficultyLevel::new(level).unwrap())
}

#[test]
fn test_first_spawn_cycle_at_25_ticks() {
    // block_height=100, fall_rate=4 => floor(100/4) = 25
    let p = profile(3);
    assert_eq!(p.block_height, 100.0);
    assert_eq!(p.fall_rate, 4.0);

    let mut session = Session::new(p, seeded_rng(1));
    for tick in 1..25 {
        assert_eq!(session.tick(), TickResult::Continue);
        assert!(session.blocks().is_empty(), "block before tick 25 (tick {})", tick);
    }
    session.tick();
    assert!(!session.blocks().is_empty());
    assert_eq!(session.spawn_tick_counter(), 0);
}

#[test]
fn test_loss_timing_for_every_preset() {
    for level in DifficultyLevel::ALL {
        let p = DifficultyProfile::for_level(level);
        let mut session = Session::new(p, ScriptedRandom::default());
        session.push_block(Block::new(Lane::new(2).unwrap()));

        // The round ends one step before the lower edge would reach the floor.
        let expected = (FIELD_HEIGHT / p.fall_rate).ceil() as u32 - 1;
        let mut ticks = 0;
        loop {
            ticks += 1;
            if session.tick() == TickResult::Lost {
                break;
            }
            assert!(ticks < 1000);
        }
        assert_eq!(ticks, expected, "level {}", level.get());
    }
}

#[test]
fn test_tick_advances_existing_blocks_by_fall_rate() {
    let p = profile(5);
    let mut session = Session::new(p, seeded_rng(2024));

    loop {
        let before: Vec<Block> = session.blocks().to_vec();
        let result = session.tick();
        for (old, new) in before.iter().zip(session.blocks()) {
            assert_eq!(old.lane(), new.lane());
            assert_eq!(new.bottom_offset(), old.bottom_offset() + p.fall_rate);
        }
        if result == TickResult::Lost {
            break;
        }
    }
}

#[test]
fn test_spawn_cycles_never_repeat_a_lane() {
    for seed in 0..20u64 {
        let mut rng = seeded_rng(seed);
        let mut counter = 0;
        for _ in 0..2_000 {
            let lanes = advance(&mut counter, 1, &mut rng);
            assert!(!lanes.is_empty());
            for (i, lane) in lanes.iter().enumerate() {
                assert!(!lanes[..i].contains(lane), "seed {} repeated {:?}", seed, lane);
            }
        }
    }
}

#[test]
fn test_fixed_sequence_gives_exact_lanes() {
    let mut rng = ScriptedRandom::default();
    rng.push_cycle(&[3]);
    rng.push_cycle(&[0, 2, 0]);
    rng.push_cycle(&[1, 1, 1, 1]);

    let mut counter = 0;
    let got: Vec<Vec<u8>> = (0..3)
        .map(|_| {
            advance(&mut counter, 1, &mut rng)
                .iter()
                .map(|l| l.index())
                .collect()
        })
        .collect();
    assert_eq!(got, vec![vec![3], vec![0, 2], vec![1]]);
}

#[test]
fn test_sampling_is_reproducible_per_seed() {
    let a: Vec<_> = {
        let mut rng = seeded_rng(77);
        (0..100).map(|_| sample_lanes(&mut rng)).collect()
    };
    let b: Vec<_> = {
        let mut rng = seeded_rng(77);
        (0..100).map(|_| sample_lanes(&mut rng)).collect()
    };
    assert_eq!(a, b);
}

#[test]
fn test_miss_leaves_session_untouched() {
    let mut session = Session::new(profile(1), ScriptedRandom::default());
    session.push_block(Block::new(Lane::new(1).unwrap()));
    for _ in 0..30 {
        session.tick();
    }
    let before = session.blocks().to_vec();

    for pointer in [
        Point::new(10.0, 150.0),
        Point::new(50.5, 20.0),
        Point::new(-1.0, -1.0),
        Point::new(76.0, 299.0),
    ] {
        assert_eq!(session.resolve_click(pointer), HitResult::Miss);
        assert_eq!(session.score(), 0);
        assert_eq!(session.blocks(), &before[..]);
    }
}

#[test]
fn test_hit_changes_only_the_hit_block() {
    let p = profile(2);
    let mut session = Session::new(p, ScriptedRandom::default());
    for lane in Lane::ALL {
        session.push_block(Block::new(lane));
    }
    for _ in 0..20 {
        session.tick();
    }

    let target = session.blocks()[2];
    let others: Vec<Block> = session
        .blocks()
        .iter()
        .copied()
        .filter(|b| b.lane() != target.lane())
        .collect();

    let x = target.horizontal_position() + LANE_WIDTH / 2.0;
    let y = FIELD_HEIGHT - (target.bottom() + 1.0);
    assert_eq!(session.resolve_click(Point::new(x, y)), HitResult::Hit(1));
    assert_eq!(session.blocks().len(), 3);
    assert_eq!(session.blocks(), &others[..]);
}
