//! Board interaction controller - turns square taps into game operations.
//!
//! The controller owns the game model and a sound sink. Each tap becomes
//! exactly one of select, move or cancel, and the outcome decides which
//! sound cue is played.

use std::time::Duration;

use shakmaty::Square;
use tracing::debug;

use crate::audio::{SoundCue, SoundSink};
use crate::domain::PieceKind;
use crate::models::GameModel;

/// A pawn move waiting for the player to pick a piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

/// Where the board interaction currently stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Selected(Square),
    PendingPromotion(PendingPromotion),
}

pub struct BoardController<S: SoundSink> {
    game: GameModel,
    pending_promotion: Option<PendingPromotion>,
    sounds: S,
    /// Delay between a move sound and its check/game-over follow-up
    follow_up_delay: Duration,
}

impl<S: SoundSink> BoardController<S> {
    pub fn new(game: GameModel, sounds: S, follow_up_delay: Duration) -> Self {
        Self {
            game,
            pending_promotion: None,
            sounds,
            follow_up_delay,
        }
    }

    pub fn game(&self) -> &GameModel {
        &self.game
    }

    #[cfg(test)]
    pub fn sounds(&self) -> &S {
        &self.sounds
    }

    pub fn state(&self) -> InteractionState {
        if let Some(pending) = self.pending_promotion {
            InteractionState::PendingPromotion(pending)
        } else if let Some(square) = self.game.selected_square() {
            InteractionState::Selected(square)
        } else {
            InteractionState::Idle
        }
    }

    /// Handle a tap on a board square
    pub fn tap(&mut self, square: Square) {
        if self.pending_promotion.is_some() {
            self.cancel_promotion();
            return;
        }

        if let Some(from) = self.game.selected_square() {
            if self.game.is_legal_destination(square) {
                self.attempt_move(from, square);
                return;
            }
        }

        let tapped = self.game.piece_at(square);
        let turn = self.game.current_turn();
        if !self.game.select_square(square) && tapped.is_some_and(|piece| piece.color != turn) {
            debug!(%square, "tapped opponent piece");
            self.sounds.play(SoundCue::Illegal, Duration::ZERO);
        }
    }

    /// Complete a pending promotion with the chosen piece kind
    pub fn confirm_promotion(&mut self, kind: PieceKind) {
        let Some(PendingPromotion { from, to }) = self.pending_promotion.take() else {
            return;
        };

        let target_occupied = self.game.piece_at(to).is_some();
        if self.game.make_move(from, to, Some(kind)) {
            self.play_move_feedback(target_occupied);
        } else {
            debug!(%from, %to, ?kind, "promotion rejected");
            self.game.clear_selection();
            self.sounds.play(SoundCue::Illegal, Duration::ZERO);
        }
    }

    pub fn cancel_promotion(&mut self) {
        self.pending_promotion = None;
        self.game.clear_selection();
    }

    pub fn new_game(&mut self) {
        self.pending_promotion = None;
        self.game.new_game();
    }

    pub fn undo(&mut self) {
        self.pending_promotion = None;
        self.game.undo_move();
    }

    pub fn sound_enabled(&self) -> bool {
        self.sounds.is_enabled()
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sounds.set_enabled(enabled);
        debug!(enabled, "sound setting changed");
    }

    pub fn toggle_sound(&mut self) {
        self.set_sound_enabled(!self.sounds.is_enabled());
    }

    fn attempt_move(&mut self, from: Square, to: Square) {
        let Some(moving) = self.game.piece_at(from) else {
            return;
        };

        if moving.promotes_on(to) {
            self.pending_promotion = Some(PendingPromotion { from, to });
            return;
        }

        let target_occupied = self.game.piece_at(to).is_some();
        if self.game.make_move(from, to, None) {
            self.play_move_feedback(target_occupied);
        }
    }

    /// Primary move/capture cue, then check or game over after a short delay
    fn play_move_feedback(&mut self, target_occupied: bool) {
        let snapshot = self.game.snapshot();
        let captured = target_occupied
            || snapshot
                .move_history
                .last()
                .is_some_and(|record| record.captured.is_some());

        let follow_up = if snapshot.is_game_over {
            Some(SoundCue::GameOver)
        } else if snapshot.is_check {
            Some(SoundCue::Check)
        } else {
            None
        };

        let primary = if captured {
            SoundCue::Capture
        } else {
            SoundCue::Move
        };
        self.sounds.play(primary, Duration::ZERO);
        if let Some(cue) = follow_up {
            self.sounds.play(cue, self.follow_up_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Piece, PieceColor};
    use shakmaty::fen::Fen;
    use shakmaty::{CastlingMode, Chess};

    const DELAY: Duration = Duration::from_millis(100);

    #[derive(Default)]
    struct RecordingSink {
        cues: Vec<(SoundCue, Duration)>,
        muted: bool,
    }

    impl SoundSink for RecordingSink {
        fn play(&mut self, cue: SoundCue, delay: Duration) {
            if !self.muted {
                self.cues.push((cue, delay));
            }
        }

        fn set_enabled(&mut self, enabled: bool) {
            self.muted = !enabled;
        }

        fn is_enabled(&self) -> bool {
            !self.muted
        }
    }

    fn controller() -> BoardController<RecordingSink> {
        BoardController::new(GameModel::new(), RecordingSink::default(), DELAY)
    }

    fn cues(controller: &BoardController<RecordingSink>) -> Vec<SoundCue> {
        controller.sounds().cues.iter().map(|(cue, _)| *cue).collect()
    }

    fn tap_moves(controller: &mut BoardController<RecordingSink>, moves: &[(Square, Square)]) {
        for &(from, to) in moves {
            controller.tap(from);
            controller.tap(to);
        }
    }

    /// Taps 1.e4 d5 2.exd5 c6 3.dxc6 Nf6 4.cxb7 Nbd7, then forgets the cues
    fn controller_with_pawn_on_b7() -> BoardController<RecordingSink> {
        let mut controller = controller();
        tap_moves(
            &mut controller,
            &[
                (Square::E2, Square::E4),
                (Square::D7, Square::D5),
                (Square::E4, Square::D5),
                (Square::C7, Square::C6),
                (Square::D5, Square::C6),
                (Square::G8, Square::F6),
                (Square::C6, Square::B7),
                (Square::B8, Square::D7),
            ],
        );
        assert_eq!(controller.game().snapshot().move_history.len(), 8);
        controller.sounds.cues.clear();
        controller
    }

    #[test]
    fn test_tap_opponent_piece_plays_one_illegal_cue() {
        let mut controller = controller();
        let before = controller.game().snapshot().clone();

        controller.tap(Square::E7);

        assert_eq!(cues(&controller), vec![SoundCue::Illegal]);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.game().snapshot(), &before);
    }

    #[test]
    fn test_tap_empty_or_own_piece_is_silent() {
        let mut controller = controller();
        controller.tap(Square::E4);
        assert_eq!(controller.state(), InteractionState::Idle);

        controller.tap(Square::G1);
        assert_eq!(controller.state(), InteractionState::Selected(Square::G1));

        controller.tap(Square::B1);
        assert_eq!(controller.state(), InteractionState::Selected(Square::B1));
        assert!(cues(&controller).is_empty());
    }

    #[test]
    fn test_tap_non_destination_deselects() {
        let mut controller = controller();
        controller.tap(Square::E2);
        controller.tap(Square::E5);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(cues(&controller).is_empty());
    }

    #[test]
    fn test_tap_opponent_piece_with_selection_is_illegal() {
        let mut controller = controller();
        controller.tap(Square::E2);
        controller.tap(Square::E7);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(cues(&controller), vec![SoundCue::Illegal]);
    }

    #[test]
    fn test_select_then_move() {
        let mut controller = controller();
        controller.tap(Square::E2);
        controller.tap(Square::E4);

        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.game().snapshot().turn, PieceColor::Black);
        assert_eq!(cues(&controller), vec![SoundCue::Move]);
    }

    #[test]
    fn test_capture_cue() {
        let mut controller = controller();
        tap_moves(
            &mut controller,
            &[
                (Square::E2, Square::E4),
                (Square::D7, Square::D5),
                (Square::E4, Square::D5),
            ],
        );
        assert_eq!(
            cues(&controller),
            vec![SoundCue::Move, SoundCue::Move, SoundCue::Capture]
        );
    }

    #[test]
    fn test_en_passant_uses_capture_cue() {
        let mut controller = controller();
        tap_moves(
            &mut controller,
            &[
                (Square::E2, Square::E4),
                (Square::A7, Square::A6),
                (Square::E4, Square::E5),
                (Square::D7, Square::D5),
                (Square::E5, Square::D6),
            ],
        );
        assert_eq!(cues(&controller).last(), Some(&SoundCue::Capture));
    }

    #[test]
    fn test_check_follow_up_is_delayed() {
        let mut controller = controller();
        tap_moves(
            &mut controller,
            &[
                (Square::E2, Square::E4),
                (Square::F7, Square::F6),
                (Square::D1, Square::H5),
            ],
        );
        let recorded = &controller.sounds().cues;
        assert_eq!(recorded.len(), 4);
        assert_eq!(recorded[2], (SoundCue::Move, Duration::ZERO));
        assert_eq!(recorded[3], (SoundCue::Check, DELAY));
    }

    #[test]
    fn test_checkmate_plays_game_over() {
        let mut controller = controller();
        tap_moves(
            &mut controller,
            &[
                (Square::F2, Square::F3),
                (Square::E7, Square::E5),
                (Square::G2, Square::G4),
                (Square::D8, Square::H4),
            ],
        );
        let recorded = &controller.sounds().cues;
        assert_eq!(recorded.last(), Some(&(SoundCue::GameOver, DELAY)));
        assert!(!recorded.iter().any(|(cue, _)| *cue == SoundCue::Check));
        assert!(controller.game().snapshot().is_checkmate);
    }

    #[test]
    fn test_promotion_waits_for_choice() {
        let mut controller = controller_with_pawn_on_b7();
        controller.tap(Square::B7);
        controller.tap(Square::B8);

        assert_eq!(
            controller.state(),
            InteractionState::PendingPromotion(PendingPromotion {
                from: Square::B7,
                to: Square::B8
            })
        );
        assert_eq!(controller.game().snapshot().move_history.len(), 8);
        assert!(cues(&controller).is_empty());

        controller.confirm_promotion(PieceKind::Rook);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(
            controller.game().piece_at(Square::B8),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
        assert_eq!(cues(&controller), vec![SoundCue::Move]);
    }

    #[test]
    fn test_black_promotion_waits_for_choice() {
        let fen: Fen = "4k3/8/8/8/8/8/p7/4K3 b - - 0 1".parse().unwrap();
        let position: Chess = fen.into_position(CastlingMode::Standard).unwrap();
        let mut controller = BoardController::new(
            GameModel::from_position(position),
            RecordingSink::default(),
            DELAY,
        );

        controller.tap(Square::A2);
        controller.tap(Square::A1);
        assert_eq!(
            controller.state(),
            InteractionState::PendingPromotion(PendingPromotion {
                from: Square::A2,
                to: Square::A1
            })
        );
        assert!(cues(&controller).is_empty());

        controller.confirm_promotion(PieceKind::Knight);
        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(
            controller.game().piece_at(Square::A1),
            Some(Piece::new(PieceKind::Knight, PieceColor::Black))
        );
        assert_eq!(cues(&controller), vec![SoundCue::Move]);
    }

    #[test]
    fn test_capturing_promotion_plays_capture() {
        let mut controller = controller_with_pawn_on_b7();
        controller.tap(Square::B7);
        controller.tap(Square::A8);
        controller.confirm_promotion(PieceKind::Queen);

        assert_eq!(
            controller.game().piece_at(Square::A8),
            Some(Piece::new(PieceKind::Queen, PieceColor::White))
        );
        assert_eq!(cues(&controller).first(), Some(&SoundCue::Capture));
    }

    #[test]
    fn test_cancel_promotion() {
        let mut controller = controller_with_pawn_on_b7();
        controller.tap(Square::B7);
        controller.tap(Square::B8);
        controller.cancel_promotion();

        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.game().snapshot().move_history.len(), 8);
        assert_eq!(
            controller.game().piece_at(Square::B7),
            Some(Piece::new(PieceKind::Pawn, PieceColor::White))
        );
    }

    #[test]
    fn test_tap_during_promotion_cancels_it() {
        let mut controller = controller_with_pawn_on_b7();
        controller.tap(Square::B7);
        controller.tap(Square::B8);
        controller.tap(Square::E1);

        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.pending_promotion, None);
    }

    #[test]
    fn test_rejected_promotion_still_clears_pending() {
        let mut controller = controller_with_pawn_on_b7();
        controller.tap(Square::B7);
        controller.tap(Square::B8);
        controller.confirm_promotion(PieceKind::King);

        assert_eq!(controller.state(), InteractionState::Idle);
        assert_eq!(controller.game().snapshot().move_history.len(), 8);
        assert_eq!(cues(&controller), vec![SoundCue::Illegal]);
    }

    #[test]
    fn test_confirm_without_pending_does_nothing() {
        let mut controller = controller();
        controller.confirm_promotion(PieceKind::Queen);
        assert!(controller.game().snapshot().move_history.is_empty());
        assert!(cues(&controller).is_empty());
    }

    #[test]
    fn test_undo_and_new_game_clear_pending() {
        let mut controller = controller_with_pawn_on_b7();
        controller.tap(Square::B7);
        controller.tap(Square::B8);
        controller.undo();
        assert_eq!(controller.pending_promotion, None);
        assert_eq!(controller.game().snapshot().move_history.len(), 7);

        controller.tap(Square::B8);
        controller.tap(Square::D7);
        controller.tap(Square::B7);
        controller.tap(Square::C8);
        assert!(controller.pending_promotion.is_some());
        controller.new_game();
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(controller.game().snapshot().move_history.is_empty());
    }

    #[test]
    fn test_toggle_sound_mutes_cues() {
        let mut controller = controller();
        assert!(controller.sound_enabled());
        controller.toggle_sound();
        assert!(!controller.sound_enabled());

        controller.tap(Square::E7);
        assert!(cues(&controller).is_empty());
    }
}
