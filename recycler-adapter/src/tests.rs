use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use recycler::{Alignment, Axis, Edge, Event, ItemView, RecyclerOptions, ScrollContainer};

#[derive(Clone, Debug, Default)]
struct Label {
    text: Option<usize>,
}

impl ItemView for Label {
    fn extent(&self, _axis: Axis) -> f32 {
        50.0
    }
}

fn controller(len: usize) -> Controller<Label> {
    let mut c = Controller::new(RecyclerOptions::default(), Label::default(), 320.0).unwrap();
    c.setup(len).unwrap();
    c
}

fn assert_bound(c: &Controller<Label>) {
    let len = c.view().data_len();
    for h in c.view().handles().filter(|h| h.is_active()) {
        assert_eq!(h.view().text, h.row(len), "slot {:?}", h.slot());
    }
}

#[test]
fn scroll_rect_clamps_and_reports_scroll_bar_values() {
    let mut rect = ScrollRect::new(Axis::Vertical, 300.0);
    rect.set_content_extent(Axis::Vertical, 1300.0);
    assert_eq!(rect.max_offset(), 1000.0);

    assert_eq!(rect.set_offset_clamped(-20.0), 0.0);
    assert_eq!(rect.normalized(), 1.0);
    assert_eq!(rect.set_offset_clamped(250.0), 250.0);
    assert_eq!(rect.normalized(), 0.75);
    assert_eq!(rect.set_offset_clamped(5_000.0), 1000.0);
    assert_eq!(rect.scroll_event().normalized, 0.0);

    // Shrinking content pulls the offset back into range.
    rect.set_content_extent(Axis::Vertical, 500.0);
    assert_eq!(rect.offset(), 200.0);

    let mut wide = ScrollRect::new(Axis::Horizontal, 300.0);
    wide.set_content_extent(Axis::Horizontal, 1300.0);
    wide.set_offset_clamped(250.0);
    assert_eq!(wide.normalized(), 0.25);
}

#[test]
fn setup_reports_leading_edge_and_binds_first_rows() {
    let mut c = controller(100);
    let rest = c.bind_pending(|index, label| label.text = Some(index));
    assert_eq!(rest, vec![Event::ReachedEdge(Edge::Leading)]);
    assert_eq!(c.view().active_rows().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    assert_bound(&c);
}

#[test]
fn scrolling_recycles_and_rebinds() {
    let mut c = controller(100);
    c.bind_pending(|index, label| label.text = Some(index));

    for step in 1..=40 {
        c.scroll_by(37.0);
        let rest = c.bind_pending(|index, label| label.text = Some(index));
        assert!(rest.is_empty(), "step {step}: {rest:?}");
        assert_bound(&c);
    }
    assert_eq!(c.offset(), 1480.0);
    assert_eq!(c.view().handles().next().unwrap().data_index(), 29);
}

#[test]
fn scrolling_past_the_end_clamps_and_fires_trailing_once() {
    let mut c = controller(100);
    c.bind_pending(|_, _| {});

    assert_eq!(c.scroll_to(1.0e6), 4680.0);
    let rest = c.bind_pending(|index, label| label.text = Some(index));
    assert_eq!(rest, vec![Event::ReachedEdge(Edge::Trailing)]);
    assert_bound(&c);

    assert_eq!(c.scroll_by(100.0), 4680.0);
    assert!(c.bind_pending(|_, _| {}).is_empty());

    assert_eq!(c.scroll_by(-1.0e6), 0.0);
    let rest = c.bind_pending(|index, label| label.text = Some(index));
    assert_eq!(rest, vec![Event::ReachedEdge(Edge::Leading)]);
    assert_bound(&c);
}

#[test]
fn jump_echo_is_not_treated_as_motion() {
    let mut c = controller(100);
    c.bind_pending(|_, _| {});

    c.jump_top(30).unwrap();
    assert_eq!(c.offset(), 1500.0);
    let before = c.view().snapshot();
    c.sync();
    assert_eq!(before, c.view().snapshot());

    let rest = c.bind_pending(|index, label| label.text = Some(index));
    assert!(rest.is_empty());
    assert_bound(&c);

    c.jump_to(99, Alignment::Bottom).unwrap();
    let rest = c.bind_pending(|index, label| label.text = Some(index));
    assert_eq!(rest, vec![Event::ReachedEdge(Edge::Trailing)]);
    assert_eq!(c.offset(), 4680.0);
}

#[test]
fn shrinking_under_the_viewport_recycles_back_into_range() {
    let mut c = controller(100);
    c.scroll_to(4680.0);
    c.bind_pending(|index, label| label.text = Some(index));

    c.resize(20).unwrap();
    // 20 rows of 50 in a 320 viewport.
    assert_eq!(c.offset(), 680.0);
    c.bind_pending(|index, label| label.text = Some(index));

    assert_eq!(
        c.view().active_rows().collect::<Vec<_>>(),
        (13..20).collect::<Vec<_>>()
    );
    assert_bound(&c);
}

#[test]
fn clicks_are_forwarded_with_edges() {
    let mut c = controller(100);
    c.bind_pending(|_, _| {});

    let slot = c.view().handles().nth(3).unwrap().slot();
    assert!(c.click(slot));
    assert_eq!(
        c.bind_pending(|_, _| {}),
        vec![Event::ItemClicked { index: 3 }]
    );

    c.dispose();
    assert!(!c.click(slot));
    assert!(c.view().is_disposed());
}
