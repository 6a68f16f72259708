//! Top-level view: player setup first, then the board.

use gpui::{AnyView, Context, Entity, Subscription, Window, prelude::*};
use tracing::info;

use crate::config::PlayerNames;
use crate::models::ChessSession;
use crate::ui::views::board_view::{ChangePlayers, ChessBoardView};
use crate::ui::views::player_setup::{PlayerSetupView, PlayersChosen};

enum Screen {
    Setup(Entity<PlayerSetupView>),
    Playing(Entity<ChessBoardView>),
}

pub struct ChessAppView {
    session: Entity<ChessSession>,
    screen: Screen,
    _subscription: Subscription,
}

impl ChessAppView {
    pub fn new(
        session: Entity<ChessSession>,
        prefill: PlayerNames,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let (screen, _subscription) = Self::setup_screen(&prefill, window, cx);
        Self {
            session,
            screen,
            _subscription,
        }
    }

    fn setup_screen(
        prefill: &PlayerNames,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> (Screen, Subscription) {
        let setup = cx.new(|cx| PlayerSetupView::new(prefill, window, cx));
        let subscription = cx.subscribe_in(
            &setup,
            window,
            |this, _, PlayersChosen(names): &PlayersChosen, window, cx| {
                this.start_game(names.clone(), window, cx)
            },
        );
        (Screen::Setup(setup), subscription)
    }

    fn start_game(&mut self, players: PlayerNames, window: &mut Window, cx: &mut Context<Self>) {
        info!(white = %players.white, black = %players.black, "starting game");
        let session = self.session.clone();
        let board = cx.new(|cx| ChessBoardView::new(session, players, cx));
        self._subscription = cx.subscribe_in(
            &board,
            window,
            |this, board, _: &ChangePlayers, window, cx| {
                let prefill = board.read(cx).players().clone();
                this.change_players(prefill, window, cx)
            },
        );
        self.screen = Screen::Playing(board);
        cx.notify();
    }

    /// Abandon the current game and go back to name entry
    fn change_players(
        &mut self,
        prefill: PlayerNames,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.session.update(cx, |session, cx| {
            session.new_game();
            cx.notify();
        });
        let (screen, subscription) = Self::setup_screen(&prefill, window, cx);
        self.screen = screen;
        self._subscription = subscription;
        cx.notify();
    }
}

impl Render for ChessAppView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        match &self.screen {
            Screen::Setup(setup) => AnyView::from(setup.clone()),
            Screen::Playing(board) => AnyView::from(board.clone()),
        }
    }
}
