//! AI-vs-AI games
//!
//! Both sides are driven by [`select_move`] and the sticks are thrown with
//! the same random source, so a seeded match replays exactly.

use rand::Rng;
use tracing::{debug, info};

use crate::board::Side;
use crate::config::MatchConfig;
use crate::engine::select_move;
use crate::error::GameError;
use crate::game::{Game, PlayOutcome, ThrowOutcome};
use crate::throw::StickThrow;

/// How one game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// `None` when the throw cap was reached
    pub winner: Option<Side>,
    pub throws: u32,
    pub moves: u32,
    pub captures: u32,
}

/// Tally over a series of games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub side_a_wins: u32,
    pub side_b_wins: u32,
    pub draws: u32,
    pub games: Vec<GameReport>,
}

impl MatchReport {
    fn record(&mut self, report: GameReport) {
        match report.winner {
            Some(Side::SideA) => self.side_a_wins += 1,
            Some(Side::SideB) => self.side_b_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(report);
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::SideA => self.side_a_wins,
            Side::SideB => self.side_b_wins,
        }
    }
}

/// Play one game to the end or to the throw cap.
///
/// `on_move` sees the game after every played move.
pub fn play_game<R, F>(
    config: &MatchConfig,
    rng: &mut R,
    mut on_move: F,
) -> Result<GameReport, GameError>
where
    R: Rng + ?Sized,
    F: FnMut(&Game, &PlayOutcome),
{
    let mut game = Game::new(config.columns, config.first)?;
    let mut moves = 0;
    let mut captures = 0;

    while !game.is_over() && game.throws() < config.max_throws {
        let side = game.to_act();
        let throw = StickThrow::roll(rng);
        if game.throw_sticks(throw.value())? != ThrowOutcome::MustMove {
            continue;
        }

        let ai = config.player(side).ai();
        let result = select_move(game.board(), side, throw.value(), ai, rng);
        let Some(mov) = result.best_move else {
            game.pass()?;
            continue;
        };

        let played = game.play(mov.piece, Some(mov.to))?;
        moves += 1;
        if played.mov.is_capture() {
            captures += 1;
        }
        on_move(&game, &played);
    }

    let report = GameReport {
        winner: game.winner(),
        throws: game.throws(),
        moves,
        captures,
    };
    debug!(?report, "game finished");
    Ok(report)
}

/// Play `config.games` games.
pub fn play_match<R, F>(
    config: &MatchConfig,
    rng: &mut R,
    mut on_move: F,
) -> Result<MatchReport, GameError>
where
    R: Rng + ?Sized,
    F: FnMut(&Game, &PlayOutcome),
{
    let mut report = MatchReport::default();
    for index in 0..config.games {
        let game = play_game(config, rng, &mut on_move)?;
        info!(
            game = index + 1,
            winner = ?game.winner,
            throws = game.throws,
            moves = game.moves,
            "game over"
        );
        report.record(game);
    }
    Ok(report)
}
