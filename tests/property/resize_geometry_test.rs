//! Property-based tests for the geometry engine.
//!
//! Resizing never produces a dimension below the minimum and never moves
//! the edge opposite the one being dragged.

use proptest::prelude::*;

use subtitle_shell::services::geometry_engine::{resize_rect, translate};
use subtitle_shell::types::geometry::{Edges, Point, Rect, Size};

fn arb_edges() -> impl Strategy<Value = Edges> {
    prop_oneof![
        Just(Edges::TOP),
        Just(Edges::BOTTOM),
        Just(Edges::LEFT),
        Just(Edges::RIGHT),
        Just(Edges::TOP | Edges::LEFT),
        Just(Edges::TOP | Edges::RIGHT),
        Just(Edges::BOTTOM | Edges::LEFT),
        Just(Edges::BOTTOM | Edges::RIGHT),
    ]
}

/// A minimum size and an anchor rectangle at least that large.
fn arb_anchor() -> impl Strategy<Value = (Rect, Size)> {
    (1..800i32, 1..600i32, -2000..2000i32, -2000..2000i32, 0..1200i32, 0..900i32)
        .prop_map(|(min_w, min_h, x, y, extra_w, extra_h)| {
            (Rect::new(x, y, min_w + extra_w, min_h + extra_h), Size::new(min_w, min_h))
        })
}

fn arb_delta() -> impl Strategy<Value = Point> {
    (-5000..5000i32, -5000..5000i32).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn resize_never_goes_below_minimum((anchor, minimum) in arb_anchor(), edges in arb_edges(), delta in arb_delta()) {
        let rect = resize_rect(anchor, edges, delta, minimum);
        prop_assert!(rect.width >= minimum.width);
        prop_assert!(rect.height >= minimum.height);
    }

    #[test]
    fn resize_keeps_opposite_edges_fixed((anchor, minimum) in arb_anchor(), edges in arb_edges(), delta in arb_delta()) {
        let rect = resize_rect(anchor, edges, delta, minimum);
        if edges.contains(Edges::LEFT) {
            prop_assert_eq!(rect.right(), anchor.right());
        }
        if edges.contains(Edges::RIGHT) {
            prop_assert_eq!(rect.x, anchor.x);
        }
        if edges.contains(Edges::TOP) {
            prop_assert_eq!(rect.bottom(), anchor.bottom());
        }
        if edges.contains(Edges::BOTTOM) {
            prop_assert_eq!(rect.y, anchor.y);
        }
    }

    #[test]
    fn resize_on_one_axis_leaves_other_axis(
        (anchor, minimum) in arb_anchor(),
        delta in arb_delta(),
        horizontal in any::<bool>(),
    ) {
        let edges = if horizontal { Edges::RIGHT } else { Edges::BOTTOM };
        let rect = resize_rect(anchor, edges, delta, minimum);
        if horizontal {
            prop_assert_eq!((rect.y, rect.height), (anchor.y, anchor.height));
        } else {
            prop_assert_eq!((rect.x, rect.width), (anchor.x, anchor.width));
        }
    }

    #[test]
    fn resize_width_is_delta_or_minimum((anchor, minimum) in arb_anchor(), delta in arb_delta(), left in any::<bool>()) {
        let (edges, requested) = if left {
            (Edges::LEFT, anchor.width - delta.x)
        } else {
            (Edges::RIGHT, anchor.width + delta.x)
        };
        let rect = resize_rect(anchor, edges, delta, minimum);
        prop_assert_eq!(rect.width, requested.max(minimum.width));
    }

    #[test]
    fn translate_preserves_offset(origin in arb_delta(), anchor in arb_delta(), pointer in arb_delta()) {
        let moved = translate(origin, anchor, pointer);
        prop_assert_eq!(moved - origin, pointer - anchor);
    }
}
