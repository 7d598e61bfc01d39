use bottom_sheet::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CONTAINER: Size = Size::new(1080.0, 1920.0);
const MOVES_PER_GESTURE: &[usize] = &[16, 128];
const FRAME_NANOS: u64 = 16_666_667;

/// One upward drag from the collapsed handle, `moves` pointer moves long.
fn drag_gesture(moves: usize) -> Vec<PointerEvent> {
    let start = CONTAINER.height - 80.0;
    let end = start - 900.0;
    let mut events = Vec::with_capacity(moves + 2);
    events.push(PointerEvent::new(PointerEventKind::Down, Point::new(540.0, start)));
    for step in 1..=moves {
        let y = start + (end - start) * step as f32 / moves as f32;
        events.push(PointerEvent::new(PointerEventKind::Move, Point::new(540.0, y)));
    }
    events.push(PointerEvent::new(PointerEventKind::Up, Point::new(540.0, end)));
    events
}

fn bench_drag_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_gesture");
    for &moves in MOVES_PER_GESTURE {
        let events = drag_gesture(moves);
        group.bench_with_input(BenchmarkId::from_parameter(moves), &events, |b, events| {
            b.iter(|| {
                let mut sheet = SheetPositionController::default();
                let mut gesture = SheetDragGesture::new();
                for event in events {
                    gesture.handle(&mut sheet, event, CONTAINER);
                }
                black_box(sheet.position())
            });
        });
    }
    group.finish();
}

fn bench_settle_frames(c: &mut Criterion) {
    c.bench_function("settle_frames", |b| {
        b.iter(|| {
            let mut sheet = SheetPositionController::default();
            sheet.on_drag_end(1800.0, 1600.0, CONTAINER.height);
            let mut frame_time = 0;
            while sheet.advance_frame(frame_time) {
                black_box(sheet.layout(CONTAINER));
                frame_time += FRAME_NANOS;
            }
            black_box(sheet.rendered_offset())
        });
    });
}

criterion_group!(benches, bench_drag_gesture, bench_settle_frames);
criterion_main!(benches);
