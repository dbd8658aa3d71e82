use recycler::{Axis, Edge, Event, ItemView, RecyclerOptions};
use recycler_adapter::Controller;

#[derive(Clone, Debug, Default)]
struct Tile {
    label: String,
}

impl ItemView for Tile {
    fn extent(&self, _axis: Axis) -> f32 {
        120.0
    }
}

fn main() {
    // Example: a horizontal strip flung by a decaying velocity, as a frame loop would drive it.
    //
    // An adapter would:
    // - call scroll_by / scroll_to when input moves the content
    // - call bind_pending once per frame to fill recycled tiles
    // - react to edge events (e.g. load the next page)
    let options = RecyclerOptions::new(Axis::Horizontal)
        .with_spacing(8.0)
        .with_margins(16.0, 16.0);
    let mut c = Controller::new(options, Tile::default(), 800.0).expect("valid configuration");
    let mut len = 200usize;
    c.setup(len).expect("setup");

    let mut velocity = 900.0f32;
    let mut frame = 0u32;
    while velocity.abs() > 1.0 {
        c.scroll_by(velocity);
        velocity *= 0.95;
        frame += 1;

        let events = c.bind_pending(|index, tile| tile.label = format!("tile {index}"));
        for event in events {
            if event == Event::ReachedEdge(Edge::Trailing) {
                len += 100;
                c.resize(len).expect("resize");
                println!("frame={frame} reached end, grew to {len} tiles");
            }
        }
        if frame % 10 == 0 {
            println!(
                "frame={frame} offset={:.1} active={:?}",
                c.offset(),
                c.view().active_rows().collect::<Vec<_>>()
            );
        }
    }

    c.jump_top(0).expect("jump");
    c.bind_pending(|index, tile| tile.label = format!("tile {index}"));
    println!("back to start: offset={}", c.offset());
}
