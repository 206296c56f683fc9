// Copyright 2025 the Dragndrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The game loop: difficulty menu, rounds, win check, and scores.

use std::time::{Duration, Instant};

use dragndrop::{DragDrop, DropEvent};
use dragndrop_scene::{ElementId, Scene};
use kurbo::Point;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

use crate::board::Board;
use crate::chrono::{Chrono, format_seconds};
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::messages::MessageBoard;
use crate::scoreboard::Scoreboard;
use crate::size::{Difficulty, PuzzleSize};

/// A finished round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundCompleted {
    /// Time taken.
    pub time: Duration,
    /// Rank on the scoreboard, if the time made it.
    pub rank: Option<usize>,
    /// Picture of the round that starts now.
    pub next_picture: String,
}

/// One player's puzzle session.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    rng: SmallRng,
    scene: Scene,
    dnd: DragDrop,
    board: Board,
    chrono: Chrono,
    scoreboard: Scoreboard,
    messages: MessageBoard,
    menu_visible: bool,
}

impl Game {
    /// Create a game waiting on the difficulty menu.
    pub fn new(config: GameConfig, rng: SmallRng, now: Instant) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut scene = Scene::new();
        let board = Board::new(&mut scene, config.toolbox, config.board);
        Ok(Self {
            scoreboard: Scoreboard::new(config.scoreboard_len),
            messages: MessageBoard::new(config.messages.capacity, config.messages.fade_step),
            chrono: Chrono::start(now),
            dnd: DragDrop::new(),
            menu_visible: true,
            config,
            rng,
            scene,
            board,
        })
    }

    /// Start a round at the chosen difficulty with a random picture.
    ///
    /// The menu is hidden and the chronometer restarts from zero.
    pub fn choose_difficulty(
        &mut self,
        difficulty: Difficulty<'_>,
        now: Instant,
    ) -> Result<PuzzleSize, GameError> {
        let size = difficulty.resolve(&self.config.presets)?;
        let picture = self.random_picture();
        self.start_round(&picture, size);
        self.chrono.reset(now);
        self.menu_visible = false;
        tracing::info!(size = size.get(), picture = %picture, "round started");
        Ok(size)
    }

    /// Reshuffle the current round with a new random picture, keeping the size.
    pub fn restart(&mut self, now: Instant) -> Result<(), GameError> {
        let size = self.board.size().ok_or(GameError::NoRound)?;
        let picture = self.random_picture();
        self.start_round(&picture, size);
        self.chrono.reset(now);
        tracing::info!(size = size.get(), picture = %picture, "round restarted");
        Ok(())
    }

    /// Grab the piece under `pointer`.
    pub fn pointer_down(&mut self, pointer: Point) -> Option<ElementId> {
        self.dnd.pointer_down(&mut self.scene, pointer)
    }

    /// Drag the grabbed piece.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        self.dnd.pointer_move(&mut self.scene, pointer)
    }

    /// Release the grabbed piece, then check for a win.
    pub fn pointer_up(&mut self, pointer: Point, now: Instant) -> Option<RoundCompleted> {
        let drop = self.dnd.pointer_up(&mut self.scene, pointer)?;
        self.on_drop(drop, now)
    }

    /// The pointer left the window mid-drag.
    pub fn cancel_pointer(&mut self, now: Instant) -> Option<RoundCompleted> {
        let drop = self.dnd.cancel(&mut self.scene)?;
        self.on_drop(drop, now)
    }

    fn on_drop(&mut self, drop: DropEvent, now: Instant) -> Option<RoundCompleted> {
        tracing::debug!(element = ?drop.element, outcome = ?drop.outcome, "piece dropped");
        if !self.board.is_complete(&self.scene) {
            return None;
        }
        let size = self.board.size()?;
        let time = self.chrono.reset(now);
        self.messages.say(format!(
            "Yeah! You completed the puzzle in {} seconds!",
            format_seconds(time)
        ));
        let rank = self.scoreboard.record(time);
        tracing::info!(time = %format_seconds(time), ?rank, "puzzle completed");

        let next_picture = self.random_picture();
        self.start_round(&next_picture, size);
        Some(RoundCompleted {
            time,
            rank,
            next_picture,
        })
    }

    fn start_round(&mut self, picture: &str, size: PuzzleSize) {
        self.board.reset(&mut self.scene, picture, size, &mut self.rng);
        let report = self.dnd.set_up(&mut self.scene);
        tracing::info!(
            bound = report.bound,
            released = report.released,
            anchors = report.anchors,
            "board reset"
        );
    }

    fn random_picture(&mut self) -> String {
        // The pool is validated non-empty in `new`.
        self.config
            .pictures
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the difficulty menu is shown.
    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    /// Time display of the running round.
    pub fn chrono_display(&self, now: Instant) -> String {
        self.chrono.display(now)
    }

    /// Best times so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Messages to the player.
    pub fn messages(&self) -> &MessageBoard {
        &self.messages
    }

    /// Toolbox and board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The scene being played on.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The drag-and-drop engine driving the pieces.
    pub fn drag_drop(&self) -> &DragDrop {
        &self.dnd
    }

    /// Configuration the game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn game(now: Instant) -> Game {
        Game::new(GameConfig::default(), SmallRng::seed_from_u64(5), now).unwrap()
    }

    fn center(game: &Game, id: ElementId) -> Point {
        game.scene().bounding_rect(id).unwrap().center()
    }

    /// Drag piece `i` onto board slot `i`.
    fn place(game: &mut Game, i: usize, now: Instant) -> Option<RoundCompleted> {
        let (piece, _) = game.board().pieces()[i];
        let slot = game.board().board_anchors(game.scene())[i];
        let from = center(game, piece);
        let to = center(game, slot);
        assert_eq!(game.pointer_down(from), Some(piece));
        assert!(game.pointer_move(to));
        game.pointer_up(to, now)
    }

    #[test]
    fn starts_on_the_menu() {
        let t0 = Instant::now();
        let mut g = game(t0);
        assert!(g.menu_visible());
        assert!(g.board().pieces().is_empty());
        assert_eq!(g.restart(t0), Err(GameError::NoRound));
        assert_eq!(g.pointer_down(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn choosing_a_difficulty_builds_the_round() {
        let t0 = Instant::now();
        let mut g = game(t0);
        let t1 = t0 + Duration::from_secs(30);
        let size = g.choose_difficulty(Difficulty::Preset(0), t1).unwrap();
        assert_eq!(size.get(), 3);
        assert!(!g.menu_visible());
        assert_eq!(g.board().pieces().len(), 9);
        assert_eq!(g.drag_drop().bindings().len(), 9);
        assert_eq!(g.drag_drop().anchors().len(), 18);
        assert!(g.config().pictures.iter().any(|p| p == g.board().picture()));
        assert_eq!(g.chrono_display(t1), "0.00");
    }

    #[test]
    fn bad_difficulty_keeps_the_menu() {
        let t0 = Instant::now();
        let mut g = game(t0);
        assert_eq!(
            g.choose_difficulty(Difficulty::Custom("lots"), t0),
            Err(GameError::InvalidCustomDifficulty("lots".into()))
        );
        assert_eq!(
            g.choose_difficulty(Difficulty::Custom("1"), t0),
            Err(GameError::InvalidPuzzleSize { got: 1 })
        );
        assert_eq!(
            g.choose_difficulty(Difficulty::Custom("100000"), t0),
            Err(GameError::InvalidPuzzleSize { got: 100_000 })
        );
        assert!(g.board().pieces().is_empty());
        assert!(g.menu_visible());
    }

    #[test]
    fn solving_completes_the_round() {
        let t0 = Instant::now();
        let mut g = game(t0);
        g.choose_difficulty(Difficulty::Custom("2"), t0).unwrap();
        let old_pieces: Vec<_> = g.board().pieces().iter().map(|(id, _)| *id).collect();

        for i in 0..3 {
            assert_eq!(place(&mut g, i, t0 + Duration::from_secs(1)), None);
        }
        let done = place(&mut g, 3, t0 + Duration::from_millis(42_500)).unwrap();
        assert_eq!(done.time, Duration::from_millis(42_500));
        assert_eq!(done.rank, Some(0));
        assert_eq!(g.board().picture(), done.next_picture);
        assert_eq!(
            g.messages().messages()[0].text,
            "Yeah! You completed the puzzle in 42.50 seconds!"
        );
        assert_eq!(g.scoreboard().times(), &[Duration::from_millis(42_500)]);

        // A fresh round at the same size.
        assert!(old_pieces.iter().all(|&id| !g.scene().is_alive(id)));
        assert_eq!(g.board().pieces().len(), 4);
        assert_eq!(g.drag_drop().bindings().len(), 4);
        assert!(!g.board().is_complete(g.scene()));
    }

    #[test]
    fn released_outside_snaps_back() {
        let t0 = Instant::now();
        let mut g = game(t0);
        g.choose_difficulty(Difficulty::Custom("2"), t0).unwrap();
        let (piece, _) = g.board().pieces()[0];
        let home = g.scene().parent(piece);
        let from = center(&g, piece);
        g.pointer_down(from);
        let away = Point::new(2000.0, 2000.0);
        g.pointer_move(away);
        assert_eq!(g.pointer_up(away, t0), None);
        assert_eq!(g.scene().parent(piece), home);
        assert_eq!(g.scene().position(piece), Some(Point::ORIGIN));
    }

    #[test]
    fn cancel_reports_no_round() {
        let t0 = Instant::now();
        let mut g = game(t0);
        g.choose_difficulty(Difficulty::Preset(1), t0).unwrap();
        let (piece, _) = g.board().pieces()[0];
        let from = center(&g, piece);
        g.pointer_down(from);
        assert_eq!(g.cancel_pointer(t0), None);
        assert!(!g.drag_drop().is_dragging());
        assert_eq!(g.cancel_pointer(t0), None);
    }

    #[test]
    fn restart_keeps_the_size() {
        let t0 = Instant::now();
        let mut g = game(t0);
        g.choose_difficulty(Difficulty::Preset(2), t0).unwrap();
        g.restart(t0 + Duration::from_secs(3)).unwrap();
        assert_eq!(g.board().size().map(PuzzleSize::get), Some(5));
        assert_eq!(g.drag_drop().bindings().len(), 25);
        assert_eq!(g.chrono_display(t0 + Duration::from_secs(4)), "1.00");
    }
}
