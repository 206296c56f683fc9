// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbox and board construction.
//!
//! Both regions are split into `size` rows of `size` drop anchors, each
//! holding one piece. The toolbox starts with every piece, shuffled; the board
//! starts empty. The puzzle is complete when board anchor `i` (document
//! order) holds piece `i`.

use dragndrop::markers::{ANCHOR_EXCLUSIVE, DRAGGABLE, DROP_ANCHOR};
use dragndrop_scene::{ElementId, LocalElement, Scene};
use kurbo::{Point, Size};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::Region;
use crate::pieces::{PieceStyle, piece_styles};
use crate::size::PuzzleSize;

/// The two puzzle regions of a scene and the pieces currently in play.
#[derive(Clone, Debug)]
pub struct Board {
    toolbox: ElementId,
    board: ElementId,
    picture: String,
    size: Option<PuzzleSize>,
    pieces: Vec<(ElementId, PieceStyle)>,
}

impl Board {
    /// Add empty toolbox and board regions to `scene`.
    pub fn new(scene: &mut Scene, toolbox: Region, board: Region) -> Self {
        let region = |r: Region| LocalElement::sized(r.rect().size()).at(r.rect().origin());
        let toolbox = scene.insert(None, region(toolbox));
        let board = scene.insert(None, region(board));
        Self {
            toolbox,
            board,
            picture: String::new(),
            size: None,
            pieces: Vec::new(),
        }
    }

    /// Toolbox region element.
    pub fn toolbox(&self) -> ElementId {
        self.toolbox
    }

    /// Board region element.
    pub fn board(&self) -> ElementId {
        self.board
    }

    /// Picture of the current round; empty before the first [`Board::reset`].
    pub fn picture(&self) -> &str {
        &self.picture
    }

    /// Size of the current round.
    pub fn size(&self) -> Option<PuzzleSize> {
        self.size
    }

    /// Pieces in play with their styles, by piece index.
    pub fn pieces(&self) -> &[(ElementId, PieceStyle)] {
        &self.pieces
    }

    /// Piece index of a scene element.
    pub fn piece_index(&self, element: ElementId) -> Option<usize> {
        self.pieces
            .iter()
            .find(|(id, _)| *id == element)
            .map(|(_, style)| style.index)
    }

    /// Inline style of the reference picture shown next to the board.
    pub fn reference_css(&self) -> String {
        format!(
            "background-image: url(\"{}\"); background-size: 100% 100%; \
             background-repeat: no-repeat;",
            self.picture
        )
    }

    /// Clear both regions and lay out a fresh round of `picture` cut in `size`.
    ///
    /// The caller must rerun the binder's setup afterwards so new pieces and
    /// anchors get bound and removed ones released.
    pub fn reset<R: Rng + ?Sized>(
        &mut self,
        scene: &mut Scene,
        picture: &str,
        size: PuzzleSize,
        rng: &mut R,
    ) {
        scene.remove_children(self.toolbox);
        scene.remove_children(self.board);

        let slots = add_drop_anchors(scene, self.toolbox, size);
        add_drop_anchors(scene, self.board, size);

        let mut styles = piece_styles(picture, size);
        styles.shuffle(rng);
        self.pieces.clear();
        for (slot, style) in slots.into_iter().zip(styles) {
            let cell = scene.local(slot).map(|l| l.size).unwrap_or(Size::ZERO);
            let piece = scene.insert(
                Some(slot),
                LocalElement::sized(cell).with_classes([
                    DRAGGABLE.to_owned(),
                    ANCHOR_EXCLUSIVE.to_owned(),
                    style.class(),
                ]),
            );
            self.pieces.push((piece, style));
        }
        self.pieces.sort_by_key(|(_, style)| style.index);
        self.picture = picture.to_owned();
        self.size = Some(size);
    }

    /// Drop anchors of the board region, in document order.
    pub fn board_anchors(&self, scene: &Scene) -> Vec<ElementId> {
        anchors_in(scene, self.board)
    }

    /// Drop anchors of the toolbox region, in document order.
    pub fn toolbox_anchors(&self, scene: &Scene) -> Vec<ElementId> {
        anchors_in(scene, self.toolbox)
    }

    /// Whether every board anchor holds its own piece first.
    ///
    /// A board without anchors is never complete.
    pub fn is_complete(&self, scene: &Scene) -> bool {
        let anchors = self.board_anchors(scene);
        !anchors.is_empty()
            && anchors.iter().enumerate().all(|(i, &anchor)| {
                scene
                    .children(anchor)
                    .first()
                    .is_some_and(|&child| scene.has_class(child, &format!("piece-{i}")))
            })
    }
}

fn anchors_in(scene: &Scene, region: ElementId) -> Vec<ElementId> {
    scene
        .subtree(region)
        .into_iter()
        .filter(|&id| scene.has_class(id, DROP_ANCHOR))
        .collect()
}

/// Fill `region` with `size` rows of `size` anchors. Returns the anchors in order.
fn add_drop_anchors(scene: &mut Scene, region: ElementId, size: PuzzleSize) -> Vec<ElementId> {
    let area = scene.local(region).map(|l| l.size).unwrap_or(Size::ZERO);
    let n = f64::from(size.get());
    let cell = Size::new(area.width / n, area.height / n);
    let mut anchors = Vec::with_capacity(size.piece_count());
    for row in 0..size.get() {
        let row_el = scene.insert(
            Some(region),
            LocalElement::sized(Size::new(area.width, cell.height))
                .at(Point::new(0.0, cell.height * f64::from(row))),
        );
        for col in 0..size.get() {
            anchors.push(
                scene.insert(
                    Some(row_el),
                    LocalElement::sized(cell)
                        .at(Point::new(cell.width * f64::from(col), 0.0))
                        .with_classes([DROP_ANCHOR]),
                ),
            );
        }
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn region(x: f64) -> Region {
        Region {
            x,
            y: 0.0,
            width: 300.0,
            height: 300.0,
        }
    }

    fn setup(n: u32, seed: u64) -> (Scene, Board) {
        let mut scene = Scene::new();
        let mut board = Board::new(&mut scene, region(0.0), region(400.0));
        let mut rng = SmallRng::seed_from_u64(seed);
        board.reset(&mut scene, "media/roses.jpg", PuzzleSize::new(n).unwrap(), &mut rng);
        (scene, board)
    }

    /// Move every piece onto its own board slot.
    fn solve(scene: &mut Scene, board: &Board) {
        let slots = board.board_anchors(scene);
        for (piece, style) in board.pieces() {
            scene.reparent(*piece, Some(slots[style.index]));
        }
    }

    #[test]
    fn regions_get_rows_of_anchors() {
        let (scene, board) = setup(3, 1);
        assert_eq!(scene.child_count(board.toolbox()), 3);
        assert_eq!(scene.child_count(board.board()), 3);
        let slots = board.board_anchors(&scene);
        assert_eq!(slots.len(), 9);
        // Slot 5 is row 1, column 2: 100×100 cells, board at x = 400.
        assert_eq!(
            scene.bounding_rect(slots[5]),
            Some(kurbo::Rect::new(600.0, 100.0, 700.0, 200.0))
        );
        assert!(slots.iter().all(|&s| scene.child_count(s) == 0));
    }

    #[test]
    fn toolbox_holds_every_piece_once() {
        let (scene, board) = setup(4, 7);
        let toolbox = board.toolbox_anchors(&scene);
        assert_eq!(toolbox.len(), 16);
        assert!(toolbox.iter().all(|&s| scene.child_count(s) == 1));
        let mut indices: Vec<_> = toolbox
            .iter()
            .map(|&s| board.piece_index(scene.children(s)[0]).unwrap())
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
        let (piece, _) = board.pieces()[0];
        assert!(scene.has_class(piece, DRAGGABLE));
        assert!(scene.has_class(piece, ANCHOR_EXCLUSIVE));
        assert!(scene.has_class(piece, "piece-0"));
    }

    #[test]
    fn same_seed_same_shuffle() {
        let order = |seed| {
            let (scene, board) = setup(3, seed);
            board
                .toolbox_anchors(&scene)
                .iter()
                .map(|&s| board.piece_index(scene.children(s)[0]).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(42), order(42));
    }

    #[test]
    fn completeness() {
        let (mut scene, board) = setup(2, 3);
        assert!(!board.is_complete(&scene));
        solve(&mut scene, &board);
        assert!(board.is_complete(&scene));

        // Swap two pieces: no longer complete.
        let slots = board.board_anchors(&scene);
        let (p0, _) = board.pieces()[0];
        let (p1, _) = board.pieces()[1];
        scene.reparent(p0, Some(slots[1]));
        scene.reparent(p1, Some(slots[0]));
        assert!(!board.is_complete(&scene));
    }

    #[test]
    fn reset_replaces_everything() {
        let (mut scene, mut board) = setup(2, 3);
        let old: Vec<_> = board.pieces().iter().map(|(id, _)| *id).collect();
        let mut rng = SmallRng::seed_from_u64(9);
        board.reset(&mut scene, "media/futura.jpg", PuzzleSize::new(3).unwrap(), &mut rng);
        assert!(old.iter().all(|&id| !scene.is_alive(id)));
        assert_eq!(board.pieces().len(), 9);
        assert_eq!(board.picture(), "media/futura.jpg");
        assert_eq!(board.board_anchors(&scene).len(), 9);
        assert!(board.reference_css().contains("media/futura.jpg"));
    }

    #[test]
    fn empty_board_is_not_complete() {
        let mut scene = Scene::new();
        let board = Board::new(&mut scene, region(0.0), region(400.0));
        assert!(!board.is_complete(&scene));
        assert_eq!(board.size(), None);
    }
}
