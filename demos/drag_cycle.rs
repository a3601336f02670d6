//! Drives the interaction pipeline the way a host would: a few scripted
//! drags, one tick per frame, with every published event printed.
//!
//! Run with `RUST_LOG=debug` to see the pipeline's own log records.

use dragline_engine::prelude::*;

const FRAMES_PER_DRAG: usize = 60;

fn main() {
    env_logger::init();

    let mut pipeline = PipelineBuilder::new()
        .build()
        .expect("The default configuration is valid");

    {
        let bus = pipeline.event_bus_mut();
        bus.drag_start()
            .subscribe(|position| println!("drag started at {:?}", position));
        bus.drag_complete().subscribe(|drag| {
            println!("drag completed from {:?} to {:?}", drag.start, drag.end)
        });
        bus.indicator_moved().subscribe(|movement| {
            println!(
                "indicator moved from {:?} to {:?}",
                movement.start, movement.end
            )
        });
        bus.region_committed()
            .subscribe(|region| println!("region committed: {:?}", region.vertices()));
    }

    let drags = [
        (Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)),
        (Point3::new(1.0, 0.0, 1.0), Point3::new(1.0, 0.0, 1.0)),
        (Point3::new(2.0, 0.0, 2.0), Point3::new(3.0, 0.0, 2.5)),
        (Point3::new(0.5, 0.0, -0.5), Point3::new(-0.5, 0.0, 0.5)),
    ];

    for &(start, end) in drags.iter() {
        pipeline.drag_start(start);
        let outcome = pipeline.drag_end(end);
        println!("drag ended: {:?}", outcome);

        for _ in 0..FRAMES_PER_DRAG {
            pipeline.tick();
        }

        println!(
            "indicator at {:?}, target volume is {:?}",
            pipeline.indicator().position(),
            pipeline.target_volume().visual_state()
        );
    }
}
