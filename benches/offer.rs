use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use briefcase_game::banker::{make_offer, offer_for_pool, RemarkStrategy};
use briefcase_game::core::{Action, ContainerId, GameConfig, GameRng};
use briefcase_game::rules::Engine;

fn bench_offer(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut pool = config.prize_table.clone();
    pool.sort();

    c.bench_function("offer_full_pool", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| offer_for_pool(black_box(&pool), &mut rng))
    });

    let engine = Engine::new(config).unwrap();
    let mut rng = GameRng::new(2);
    let state = engine.new_game(1, false, &mut rng).unwrap();
    let state = engine
        .apply(&state, Action::SelectContainer(ContainerId::new(1)), &mut rng)
        .state;

    c.bench_function("make_offer_with_remark", |b| {
        b.iter(|| make_offer(black_box(&state.containers), RemarkStrategy::Relative, &mut rng))
    });

    c.bench_function("apply_open", |b| {
        b.iter(|| engine.apply(black_box(&state), Action::OpenContainer(ContainerId::new(2)), &mut rng))
    });
}

criterion_group!(benches, bench_offer);
criterion_main!(benches);
