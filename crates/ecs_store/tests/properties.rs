//! Store invariants checked over randomly built populations.
//!
//! Each test seeds its own RNG so failures reproduce.

mod common;

use std::collections::BTreeSet;

use common::{Counter, LaneState, Position, Velocity};
use ecs_store::{Component, Entity, QueryDescriptor, Store};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POPULATION: usize = 200;

/// Spawn a population where `Position` is near-universal and `LaneState`
/// is rare, then churn it with detaches and destroys.
fn build_population(seed: u64) -> (Store, Vec<Entity>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = Store::new();
    let mut entities = Vec::with_capacity(POPULATION);

    for i in 0..POPULATION {
        let e = store.spawn();
        if rng.gen_bool(0.95) {
            store.attach(e, Position { x: i as f32, y: 0.0 });
        }
        if rng.gen_bool(0.5) {
            store.attach(e, Velocity { dx: 1.0, dy: 0.0 });
        }
        if rng.gen_bool(0.05) {
            store.attach(e, LaneState { index: rng.gen_range(1..=6) });
        }
        if rng.gen_bool(0.3) {
            store.attach(e, Counter(i as u32));
        }
        entities.push(e);
    }

    for &e in &entities {
        if rng.gen_bool(0.1) {
            store.detach::<Velocity>(e);
        }
        if rng.gen_bool(0.1) {
            store.destroy(e);
        }
    }

    (store, entities)
}

fn set(entities: Vec<Entity>) -> BTreeSet<Entity> {
    entities.into_iter().collect()
}

fn expected<A: Component, B: Component>(store: &Store, entities: &[Entity]) -> BTreeSet<Entity> {
    entities
        .iter()
        .copied()
        .filter(|&e| store.has::<A>(e) && store.has::<B>(e))
        .collect()
}

#[test]
fn single_type_query_matches_has() {
    for seed in 0..8 {
        let (store, entities) = build_population(seed);
        let queried = set(store.query::<(Velocity,)>());
        for &e in &entities {
            assert_eq!(queried.contains(&e), store.has::<Velocity>(e), "seed {seed}, {e}");
        }
    }
}

#[test]
fn query_results_are_duplicate_free() {
    let (store, _) = build_population(42);
    let result = store.query::<(Position, Velocity)>();
    assert_eq!(result.len(), set(result.clone()).len());
}

#[test]
fn intersection_matches_has_in_any_order() {
    for seed in 0..8 {
        let (store, entities) = build_population(seed);

        let pv = set(store.query::<(Position, Velocity)>());
        let vp = set(store.query::<(Velocity, Position)>());
        assert_eq!(pv, expected::<Position, Velocity>(&store, &entities));
        assert_eq!(pv, vp);

        let pl = set(store.query::<(Position, LaneState)>());
        let lp = set(store.query::<(LaneState, Position)>());
        assert_eq!(pl, expected::<Position, LaneState>(&store, &entities));
        assert_eq!(pl, lp);
    }
}

#[test]
fn exclusion_removes_exactly_the_excluded() {
    let (store, entities) = build_population(7);
    let query = QueryDescriptor::new().with::<Position>().without::<Counter>();
    let queried = set(store.query_with(&query));
    let expected: BTreeSet<_> = entities
        .iter()
        .copied()
        .filter(|&e| store.has::<Position>(e) && !store.has::<Counter>(e))
        .collect();
    assert_eq!(queried, expected);
}

#[test]
fn attach_then_fetch_round_trips() {
    let mut store = Store::new();
    let e = store.spawn();
    let lane = LaneState { index: 4 };
    store.attach(e, lane);
    assert_eq!(store.get::<LaneState>(e), Some(&lane));
}

#[test]
fn detach_only_affects_its_type() {
    let mut store = Store::new();
    let e = store.spawn();
    store.attach(e, Position { x: 1.0, y: 2.0 });
    store.attach(e, Velocity { dx: 3.0, dy: 4.0 });
    store.attach(e, Counter(5));

    store.detach::<Velocity>(e);

    assert!(store.get::<Velocity>(e).is_none());
    assert!(!store.has::<Velocity>(e));
    assert_eq!(store.get::<Position>(e), Some(&Position { x: 1.0, y: 2.0 }));
    assert_eq!(store.get::<Counter>(e), Some(&Counter(5)));
}

#[test]
fn marked_entities_stay_visible_until_sweep() {
    let (mut store, entities) = build_population(3);
    let marked: Vec<_> = entities
        .iter()
        .copied()
        .filter(|&e| store.is_marked(e))
        .collect();
    assert!(!marked.is_empty());

    let positions = set(store.query::<(Position,)>());
    for &e in &marked {
        assert!(store.is_alive(e));
        if store.has::<Position>(e) {
            assert!(positions.contains(&e));
            assert!(store.get::<Position>(e).is_some());
        }
    }

    let swept = store.sweep();
    assert_eq!(swept, marked.len());

    for &e in &marked {
        assert!(!store.is_alive(e));
        assert!(store.get::<Position>(e).is_none());
        assert!(store.get::<Velocity>(e).is_none());
        assert!(store.get::<LaneState>(e).is_none());
        assert!(store.get::<Counter>(e).is_none());
        assert!(store.component_names(e).is_empty());
    }
    let after = set(store.query::<(Position,)>());
    assert!(marked.iter().all(|e| !after.contains(e)));
}

#[test]
fn repeated_marks_and_sweeps_change_nothing_further() {
    let (mut store, entities) = build_population(11);
    let victim = entities
        .iter()
        .copied()
        .find(|&e| !store.is_marked(e))
        .unwrap();

    store.destroy(victim);
    let pending = store.pending_destruction();
    store.destroy(victim);
    assert_eq!(store.pending_destruction(), pending);

    store.sweep();
    let alive = store.entity_count();
    let positions = set(store.query::<(Position,)>());

    assert_eq!(store.sweep(), 0);
    assert_eq!(store.entity_count(), alive);
    assert_eq!(set(store.query::<(Position,)>()), positions);
}

#[test]
fn swept_ids_are_never_handed_out_again() {
    let (mut store, entities) = build_population(5);
    store.sweep();
    let issued: BTreeSet<_> = entities.into_iter().collect();
    for _ in 0..50 {
        let fresh = store.spawn();
        assert!(!issued.contains(&fresh));
        assert!(!fresh.is_null());
    }
}
