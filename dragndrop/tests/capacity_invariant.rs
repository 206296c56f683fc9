// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random drag sequences never overfill an anchor.

use dragndrop::{DragDrop, DropOutcome};
use dragndrop_scene::{ElementId, LocalElement, Scene};
use kurbo::{Point, Size};
use proptest::prelude::*;

const CELL: f64 = 100.0;

/// A row of anchors with capacities 1..=3 under a toolbox full of pieces.
fn build(
    capacities: &[usize],
    pieces: usize,
    sensitive: bool,
) -> (Scene, Vec<ElementId>, Vec<ElementId>) {
    let mut scene = Scene::new();
    let row = scene.insert(
        None,
        LocalElement::sized(Size::new(CELL * capacities.len() as f64, CELL)),
    );
    let anchors: Vec<_> = capacities
        .iter()
        .enumerate()
        .map(|(i, cap)| {
            scene.insert(
                Some(row),
                LocalElement::sized(Size::new(CELL, CELL))
                    .at(Point::new(CELL * i as f64, 0.0))
                    .with_classes([
                        "drop-anchor".to_string(),
                        format!("drop-anchor--max-elements-{cap}"),
                    ]),
            )
        })
        .collect();
    let toolbox = scene.insert(
        None,
        LocalElement::sized(Size::new(CELL, CELL)).at(Point::new(0.0, 2.0 * CELL)),
    );
    let kind = if sensitive {
        "draggable--drop-anchor-sensitive"
    } else {
        "draggable--drop-anchor-exclusive"
    };
    let pieces = (0..pieces)
        .map(|_| {
            scene.insert(
                Some(toolbox),
                LocalElement::sized(Size::new(10.0, 10.0)).with_classes(["draggable", kind]),
            )
        })
        .collect();
    (scene, anchors, pieces)
}

proptest! {
    #[test]
    fn occupancy_never_exceeds_capacity(
        capacities in prop::collection::vec(1usize..=3, 1..5),
        sensitive in any::<bool>(),
        moves in prop::collection::vec((0usize..8, 0.0f64..500.0, 0.0f64..300.0), 0..40),
    ) {
        let (mut scene, anchors, pieces) = build(&capacities, 8, sensitive);
        let mut dnd = DragDrop::new();
        dnd.set_up(&mut scene);

        for (which, x, y) in moves {
            let piece = pieces[which];
            let grab = scene.bounding_rect(piece).unwrap().center();
            prop_assert!(dnd.begin_drag(&mut scene, piece, grab));
            let to = Point::new(x, y);
            dnd.pointer_move(&mut scene, to);
            let drop = dnd.pointer_up(&mut scene, to).unwrap();
            prop_assert_eq!(drop.element, piece);
            if let DropOutcome::Placed(anchor) = drop.outcome {
                prop_assert_eq!(scene.parent(piece), Some(anchor));
            }
            for (anchor, cap) in anchors.iter().zip(&capacities) {
                prop_assert!(scene.child_count(*anchor) <= *cap);
            }
        }
    }
}
