use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};

use snake_engine::sim::{Direction, GamePhase, SessionRng, SimulationSettings, SnakeSimulation};

fn bench_settings() -> SimulationSettings {
    SimulationSettings {
        grid_size: 20,
        board_width: 640,
        board_height: 640,
        tick_interval: Duration::from_millis(150),
        score_increment: 10,
    }
}

fn random_direction(rng: &mut SessionRng) -> Direction {
    match rng.random_range(0..4) {
        0 => Direction::Up,
        1 => Direction::Down,
        2 => Direction::Left,
        _ => Direction::Right,
    }
}

fn play_ticks(tick_count: usize) {
    let mut simulation = SnakeSimulation::new(bench_settings(), 42).unwrap();
    let mut rng = SessionRng::new(7);

    for _ in 0..tick_count {
        if simulation.phase() == GamePhase::Over {
            simulation.reset();
        }
        if rng.random_bool() {
            simulation.set_direction(random_direction(&mut rng));
        }
        simulation.tick();
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("1k_ticks", |b| b.iter(|| play_ticks(1_000)));
    group.bench_function("10k_ticks", |b| b.iter(|| play_ticks(10_000)));

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
