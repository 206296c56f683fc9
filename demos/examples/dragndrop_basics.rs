// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dragndrop basics.
//!
//! Mark a few elements, bind them, and drag them around: a plain draggable, a
//! sensitive one, and an exclusive one, over two anchors of different capacity.
//!
//! Run:
//! - `cargo run -p dragndrop_demos --example dragndrop_basics`
//! - `RUST_LOG=debug cargo run -p dragndrop_demos --example dragndrop_basics`

use dragndrop::{DragDrop, DropOutcome};
use dragndrop_scene::{LocalElement, Scene};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut scene = Scene::new();
    let tray = scene.insert(None, LocalElement::sized(Size::new(300.0, 100.0)));
    let single = scene.insert(
        None,
        LocalElement::sized(Size::new(100.0, 100.0))
            .at(Point::new(0.0, 200.0))
            .with_classes(["drop-anchor"]),
    );
    let pair = scene.insert(
        None,
        LocalElement::sized(Size::new(100.0, 100.0))
            .at(Point::new(200.0, 200.0))
            .with_classes(["drop-anchor", "drop-anchor--max-elements-2"]),
    );

    let cell = Size::new(50.0, 50.0);
    let plain = scene.insert(
        Some(tray),
        LocalElement::sized(cell).with_classes(["draggable"]),
    );
    let sensitive = scene.insert(
        Some(tray),
        LocalElement::sized(cell)
            .at(Point::new(100.0, 0.0))
            .with_classes(["draggable", "draggable--drop-anchor-sensitive"]),
    );
    let exclusive = scene.insert(
        Some(tray),
        LocalElement::sized(cell)
            .at(Point::new(200.0, 0.0))
            .with_classes(["draggable", "draggable--drop-anchor-exclusive"]),
    );

    let mut dnd = DragDrop::new();
    let report = dnd.set_up(&mut scene);
    println!("setup: {report:?}");

    let mut drag = |scene: &mut Scene, from: Point, to: Point| {
        dnd.pointer_down(scene, from);
        dnd.pointer_move(scene, to);
        dnd.pointer_up(scene, to)
    };

    // The plain draggable ignores anchors and stays where it is released.
    let drop = drag(&mut scene, Point::new(25.0, 25.0), Point::new(50.0, 250.0)).unwrap();
    println!("plain: {:?} at {:?}", drop.outcome, scene.position(plain));
    assert_eq!(drop.outcome, DropOutcome::Stayed);
    assert_eq!(scene.parent(plain), Some(tray));

    // The sensitive draggable lands in the single anchor.
    let drop = drag(&mut scene, Point::new(125.0, 25.0), Point::new(50.0, 250.0)).unwrap();
    println!("sensitive: {:?}", drop.outcome);
    assert_eq!(drop.outcome, DropOutcome::Placed(single));
    assert_eq!(scene.parent(sensitive), Some(single));

    // The single anchor is full: the exclusive draggable snaps back home.
    let drop = drag(&mut scene, Point::new(225.0, 25.0), Point::new(50.0, 250.0)).unwrap();
    println!("exclusive over a full anchor: {:?}", drop.outcome);
    assert_eq!(drop.outcome, DropOutcome::Reset);
    assert_eq!(scene.position(exclusive), Some(Point::ORIGIN));

    // The pair anchor still has room.
    let drop = drag(&mut scene, Point::new(25.0, 25.0), Point::new(250.0, 250.0)).unwrap();
    println!("exclusive into the pair: {:?}", drop.outcome);
    assert_eq!(drop.outcome, DropOutcome::Placed(pair));
    assert_eq!(scene.children(pair), &[exclusive]);
}
