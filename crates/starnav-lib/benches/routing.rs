use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use starnav_lib::{
    route_gate, route_jump, JumpOptions, LinkKind, LinkRecord, Starmap, StarmapData, SystemRecord,
    KM_PER_LIGHT_YEAR,
};
use std::hint::black_box;

const GRID: i64 = 20;

/// A GRID x GRID lattice of null-sec systems, 1.5 ly apart, gate-linked to
/// their orthogonal neighbours. Large enough that routing dominates setup.
fn lattice() -> Starmap {
    let id = |row: i64, col: i64| row * GRID + col + 1;

    let mut nodes = Vec::new();
    let mut links = Vec::new();
    for row in 0..GRID {
        for col in 0..GRID {
            nodes.push(SystemRecord {
                id: id(row, col),
                name: format!("L{row}-{col}"),
                region: "Lattice".to_string(),
                x: col as f64 * 1.5 * KM_PER_LIGHT_YEAR,
                y: row as f64 * 1.5 * KM_PER_LIGHT_YEAR,
                z: 0.0,
                security: -0.4,
                station: (row + col) % 3 == 0,
            });
            if col + 1 < GRID {
                links.push(LinkRecord {
                    source: id(row, col),
                    target: id(row, col + 1),
                    kind: LinkKind::Gate,
                });
            }
            if row + 1 < GRID {
                links.push(LinkRecord {
                    source: id(row, col),
                    target: id(row + 1, col),
                    kind: LinkKind::Gate,
                });
            }
        }
    }

    Starmap::from_dataset(&StarmapData { nodes, links }).expect("lattice is valid")
}

static STARMAP: Lazy<Starmap> = Lazy::new(lattice);

fn benchmark_routing(c: &mut Criterion) {
    let starmap = &*STARMAP;
    let corner_a = 1;
    let corner_b = GRID * GRID;

    c.bench_function("gate_route_corner_to_corner", |b| {
        b.iter(|| {
            let route = route_gate(starmap, corner_a, corner_b).expect("lattice is connected");
            black_box(route.len())
        });
    });

    let short_hops = JumpOptions {
        range_override: Some(2.0),
        ..JumpOptions::default()
    };
    c.bench_function("jump_route_short_range", |b| {
        b.iter(|| {
            let route =
                route_jump(starmap, corner_a, corner_b, &short_hops).expect("route exists");
            black_box(route.len())
        });
    });

    let long_hops = JumpOptions {
        range_override: Some(8.0),
        ..JumpOptions::default()
    };
    c.bench_function("jump_route_long_range", |b| {
        b.iter(|| {
            let route =
                route_jump(starmap, corner_a, corner_b, &long_hops).expect("route exists");
            black_box(route.len())
        });
    });

    let constrained = JumpOptions {
        range_override: Some(8.0),
        station_only: true,
        ..JumpOptions::default()
    };
    c.bench_function("jump_route_station_only", |b| {
        b.iter(|| {
            let route =
                route_jump(starmap, corner_a, corner_b, &constrained).expect("route exists");
            black_box(route.len())
        });
    });
}

criterion_group!(benches, benchmark_routing);
criterion_main!(benches);
