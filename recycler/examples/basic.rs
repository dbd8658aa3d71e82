// Example: a pooled list driven by hand: setup, scroll triggers, binding and a jump.
use recycler::{
    Axis, Event, ItemView, RecyclerOptions, RecyclingView, ScrollContainer, ScrollEvent,
};

#[derive(Clone, Debug, Default)]
struct Cell {
    text: String,
}

impl ItemView for Cell {
    fn extent(&self, _axis: Axis) -> f32 {
        48.0
    }
}

#[derive(Debug, Default)]
struct Viewport {
    offset: f32,
}

impl ScrollContainer for Viewport {
    fn viewport_extent(&self, _axis: Axis) -> f32 {
        480.0
    }

    fn set_content_extent(&mut self, _axis: Axis, extent: f32) {
        println!("content_extent={extent}");
    }

    fn set_content_offset(&mut self, _axis: Axis, offset: f32) {
        self.offset = offset;
    }
}

fn bind(view: &mut RecyclingView<Cell, Viewport>, data: &[String]) {
    let events: Vec<Event> = view.drain_events().collect();
    for event in events {
        match event {
            Event::UpdateItem { slot, .. } => {
                view.bind(slot, |index, cell| cell.text.clone_from(&data[index]));
            }
            other => println!("event={other:?}"),
        }
    }
}

fn main() {
    let data: Vec<String> = (0..1_000).map(|i| format!("row #{i}")).collect();
    let options = RecyclerOptions::new(Axis::Vertical).with_spacing(4.0);
    let mut view = RecyclingView::new(options, Cell::default(), Viewport::default())
        .expect("valid configuration");

    view.setup(data.len()).expect("setup");
    bind(&mut view, &data);
    println!(
        "pool={} (capacity {}) active={:?}",
        view.pool_len(),
        view.pool_capacity(),
        view.active_rows().collect::<Vec<_>>()
    );

    for offset in [120.0, 2_600.0, 900.0] {
        let normalized = view
            .axis()
            .normalized(offset, view.content_extent(), 480.0);
        view.on_scroll(ScrollEvent::new(offset, normalized));
        bind(&mut view, &data);
        let first = view.handles().find(|h| h.is_active()).expect("visible row");
        println!("offset={offset} first_visible={:?}", first.view().text);
    }

    view.jump_center(500).expect("jump");
    bind(&mut view, &data);
    println!(
        "after jump_center: offset={} active={:?}",
        view.container().offset,
        view.active_rows().collect::<Vec<_>>()
    );
}
