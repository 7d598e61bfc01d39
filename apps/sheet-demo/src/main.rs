use anyhow::Context;
use bottom_sheet::prelude::*;
use std::time::Duration;
use web_time::Instant;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_SIZE: Size = Size::new(390.0, 800.0);

/// A scripted user action.
enum Step {
    /// Press 10px into the drag surface and drag by `dy`.
    Drag { dy: f32 },
    Resize(Size),
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let height = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("container height must be a number, got {arg:?}"))?,
        None => DEFAULT_SIZE.height,
    };
    let mut container = Size::new(DEFAULT_SIZE.width, height);

    println!("=== Bottom sheet demo ===");
    println!("Container {}x{}", container.width, container.height);
    println!();

    let mut sheet = SheetPositionController::new(SheetConfig::default());
    sheet.on_position_changed(|position| {
        log::info!("position changed: {position:?}");
    });
    let mut gesture = SheetDragGesture::new();
    let mut sizes = SizeObserver::new();
    sizes.observe(&mut sheet, container);

    let script = [
        Step::Drag { dy: -100.0 },
        Step::Drag { dy: -80.0 },
        Step::Drag { dy: 5.0 },
        Step::Resize(Size::new(container.width, container.height + 200.0)),
        Step::Drag { dy: 200.0 },
        Step::Drag { dy: 150.0 },
    ];

    let clock = Instant::now();
    for step in script {
        match step {
            Step::Drag { dy } => {
                let start = sheet.layout(container).panel.y + 10.0;
                let events = [
                    (PointerEventKind::Down, start),
                    (PointerEventKind::Move, start + dy / 2.0),
                    (PointerEventKind::Move, start + dy),
                    (PointerEventKind::Up, start + dy),
                ];
                for (kind, y) in events {
                    let event = PointerEvent::new(kind, Point::new(container.width / 2.0, y));
                    gesture.handle(&mut sheet, &event, container);
                }
                println!("drag {dy:+}: {:?}", sheet.position());
            }
            Step::Resize(size) => {
                container = size;
                sizes.observe(&mut sheet, container);
                println!("resize to {}x{}: {:?}", size.width, size.height, sheet.position());
            }
        }

        let frames = settle(&mut sheet, clock);
        let layout = sheet.layout(container);
        println!(
            "  settled after {frames} frames, panel top {:.1}, visible {:.1}",
            layout.panel.y,
            layout.visible_height()
        );
    }

    Ok(())
}

/// Tick the settle animation against the wall clock until it finishes.
fn settle(sheet: &mut SheetPositionController, clock: Instant) -> usize {
    let mut frames = 0;
    loop {
        let now = clock.elapsed().as_nanos() as u64;
        if !sheet.advance_frame(now) {
            return frames;
        }
        frames += 1;
        log::trace!("frame {frames}: offset {:.1}", sheet.rendered_offset());
        std::thread::sleep(FRAME_INTERVAL);
    }
}
