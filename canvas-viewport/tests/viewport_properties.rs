//! Property tests for zoom clamping, zoom anchoring, fitting, and page
//! ordering.

use canvas_viewport::{CanvasManager, Page, Point, Rect};
use proptest::prelude::*;

/// Tolerance relative to the magnitude of the compared values.
fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}

/// Sub-pixel screen-space tolerance. Zooming from 0.1 to 5.0 amplifies f32
/// rounding in the pan offset by up to 50x.
const SCREEN_TOLERANCE: f32 = 0.05;

#[derive(Debug, Clone)]
enum PageOp {
    Add,
    Remove(usize),
    Reorder(usize, usize),
    Activate(usize),
}

fn page_op() -> impl Strategy<Value = PageOp> {
    prop_oneof![
        Just(PageOp::Add),
        (0usize..12).prop_map(PageOp::Remove),
        (0usize..12, 0usize..15).prop_map(|(i, to)| PageOp::Reorder(i, to)),
        (0usize..12).prop_map(PageOp::Activate),
    ]
}

fn shape() -> impl Strategy<Value = Rect> {
    (
        -1000.0f32..1000.0,
        -1000.0f32..1000.0,
        1.0f32..500.0,
        1.0f32..500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn zoom_is_always_clamped(requests in prop::collection::vec(-100.0f32..100.0, 1..20)) {
        let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
        for scale in requests {
            let vp = manager.set_zoom(scale, None);
            prop_assert!((0.1..=5.0).contains(&vp.scale));
            let vp = manager.zoom_in(None);
            prop_assert!((0.1..=5.0).contains(&vp.scale));
            let vp = manager.zoom_out(Some(Point::new(scale, scale)));
            prop_assert!((0.1..=5.0).contains(&vp.scale));
        }
    }

    #[test]
    fn zoom_keeps_cursor_anchored(
        start in 0.1f32..5.0,
        target in 0.1f32..5.0,
        pan_x in -500.0f32..500.0,
        pan_y in -500.0f32..500.0,
        cx in 0.0f32..800.0,
        cy in 0.0f32..600.0,
    ) {
        let mut manager = CanvasManager::new(800.0, 600.0, start);
        manager.set_pan(pan_x, pan_y);
        let before = manager.screen_to_canvas(cx, cy);

        manager.set_zoom(target, Some(Point::new(cx, cy)));
        let screen = manager.canvas_to_screen(before.x, before.y);

        prop_assert!((screen.x - cx).abs() < SCREEN_TOLERANCE, "x: {} vs {}", screen.x, cx);
        prop_assert!((screen.y - cy).abs() < SCREEN_TOLERANCE, "y: {} vs {}", screen.y, cy);
    }

    #[test]
    fn fit_to_screen_centers_bounds(
        shapes in prop::collection::vec(shape(), 1..10),
        padding in 0.0f32..100.0,
    ) {
        let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
        let bounds = manager.calculate_bounds(&shapes);
        let vp = manager.fit_to_screen_padded(padding);

        prop_assert!((0.1..=5.0).contains(&vp.scale));
        let center = manager.canvas_to_screen(bounds.center_x(), bounds.center_y());
        prop_assert!(approx_eq(center.x, 400.0), "center x {}", center.x);
        prop_assert!(approx_eq(center.y, 300.0), "center y {}", center.y);
    }

    #[test]
    fn fits_keep_scale_in_range_for_any_padding(
        shapes in prop::collection::vec(shape(), 1..5),
        padding in prop_oneof![
            Just(f32::NAN),
            Just(f32::INFINITY),
            Just(f32::NEG_INFINITY),
            -1000.0f32..1000.0,
        ],
    ) {
        let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
        manager.calculate_bounds(&shapes);

        for vp in [
            manager.fit_to_screen_padded(padding),
            manager.fit_to_width_padded(padding),
            manager.zoom_to_area_padded(shapes[0], padding),
            manager.zoom_in(None),
        ] {
            prop_assert!((0.1..=5.0).contains(&vp.scale), "scale {}", vp.scale);
            prop_assert!(vp.x.is_finite() && vp.y.is_finite());
        }
        prop_assert!(manager.to_json().is_ok());
    }

    #[test]
    fn bounds_cover_every_shape(shapes in prop::collection::vec(shape(), 1..10)) {
        let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
        let bounds = manager.calculate_bounds(&shapes);
        for s in &shapes {
            prop_assert!(bounds.min_x <= s.x && bounds.max_x >= s.right());
            prop_assert!(bounds.min_y <= s.y && bounds.max_y >= s.bottom());
        }
        prop_assert!(bounds.width >= 0.0 && bounds.height >= 0.0);
    }

    #[test]
    fn page_orders_stay_dense(ops in prop::collection::vec(page_op(), 0..40)) {
        let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
        let mut next_id = 0;

        for op in ops {
            let ids: Vec<String> = manager.pages().iter().map(|p| p.id.clone()).collect();
            match op {
                PageOp::Add => {
                    manager.add_page(Page::a4(format!("p{next_id}"), "Page")).expect("fresh id");
                    next_id += 1;
                }
                PageOp::Remove(i) => {
                    if let Some(id) = ids.get(i) {
                        prop_assert!(manager.remove_page(id));
                    }
                }
                PageOp::Reorder(i, to) => {
                    if let Some(id) = ids.get(i) {
                        prop_assert!(manager.reorder_page(id, to));
                    }
                }
                PageOp::Activate(i) => {
                    if let Some(id) = ids.get(i) {
                        prop_assert!(manager.set_active_page(id));
                    }
                }
            }

            let orders: Vec<usize> = manager.pages().iter().map(|p| p.order).collect();
            let expected: Vec<usize> = (0..manager.page_count()).collect();
            prop_assert_eq!(orders, expected);

            match manager.active_page() {
                None => prop_assert_eq!(manager.page_count(), 0),
                Some(active) => {
                    prop_assert!(manager.pages().iter().any(|p| p.id == active.id));
                }
            }
        }
    }

    #[test]
    fn snapshot_roundtrip_preserves_state(
        scale in 0.1f32..5.0,
        page_count in 0usize..6,
        shapes in prop::collection::vec(shape(), 0..5),
        width in 100.0f32..2000.0,
        height in 100.0f32..2000.0,
    ) {
        let mut manager = CanvasManager::new(800.0, 600.0, 1.0);
        for i in 0..page_count {
            manager.add_page(Page::a4(format!("p{i}"), format!("Page {i}"))).expect("fresh id");
        }
        manager.calculate_bounds(&shapes);
        manager.set_zoom(scale, None);

        let json = manager.to_json().expect("serialize");
        let restored = CanvasManager::from_json(&json, width, height).expect("restore");

        prop_assert!(approx_eq(restored.viewport().scale, manager.viewport().scale));
        prop_assert_eq!(restored.bounds(), manager.bounds());
        prop_assert_eq!(restored.pages(), manager.pages());
        prop_assert_eq!(
            restored.active_page().map(|p| p.id.clone()),
            manager.active_page().map(|p| p.id.clone())
        );
    }
}
