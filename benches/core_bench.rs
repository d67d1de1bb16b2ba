use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use pcb_layout_editor::app::build_render_scene;
use pcb_layout_editor::core::{check_clearance, Component, Pin, PinKind, PinRef, Route};
use pcb_layout_editor::{AppState, EditorOptions, Layer};
use std::hint::black_box;

fn build_synthetic_state(component_count: usize) -> AppState {
    let mut state = AppState::new();

    for index in 0..component_count {
        let column = (index % 40) as f32;
        let row = (index / 40) as f32;
        // Jede zehnte Reihe leicht versetzt, damit der DRC Treffer liefert
        let jitter = if index % 10 == 0 { 20.0 } else { 0.0 };
        let id = format!("comp_{}", index + 1);
        state.board.add_component(Component::new(
            id.clone(),
            format!("U{}", index + 1),
            "IC",
            Vec2::new(column * 100.0 + jitter, row * 120.0),
            vec![
                Pin::new("pin_0", "VCC", Vec2::new(-25.4, -25.4), PinKind::Power),
                Pin::new("pin_1", "IO", Vec2::new(25.4, -25.4), PinKind::Signal),
            ],
        ));
        if index > 0 {
            state.board.add_route(Route {
                id: format!("route_{}", index),
                from: PinRef::new(format!("comp_{}", index), "pin_1"),
                to: PinRef::new(id, "pin_0"),
                color: [0.2, 0.6, 1.0, 1.0],
                layer: if index % 2 == 0 { Layer::Top } else { Layer::Bottom },
            });
        }
    }

    state.editor.selected_component = Some("comp_1".into());
    state
}

fn bench_drc(c: &mut Criterion) {
    let mut group = c.benchmark_group("drc");
    let clearance = EditorOptions::default().drc_clearance();

    for &count in &[100usize, 500usize] {
        let state = build_synthetic_state(count);
        group.bench_with_input(BenchmarkId::new("pairwise", count), &state, |b, state| {
            b.iter(|| {
                let report = check_clearance(state.board.components(), black_box(clearance));
                black_box(report.collisions.len())
            })
        });
    }

    group.finish();
}

fn bench_render_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scene");

    for &count in &[100usize, 1000usize] {
        let state = build_synthetic_state(count);
        group.bench_with_input(BenchmarkId::new("build", count), &state, |b, state| {
            b.iter(|| {
                let scene = build_render_scene(black_box(state));
                black_box(scene.items.len())
            })
        });
    }

    group.finish();
}

criterion_group!(core_benches, bench_drc, bench_render_scene);
criterion_main!(core_benches);
