use crate::*;

/// Phase of the start/restart flow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// Owns the current board and drives `Idle -> Loading -> Ready`.
///
/// A failed build lands back in `Idle` with the error kept for display, and the board cleared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Controller {
    board: Option<Board>,
    error: Option<TriviaError>,
    loading: bool,
    boards_built: u32,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.board.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn error(&self) -> Option<&TriviaError> {
        self.error.as_ref()
    }

    pub fn boards_built(&self) -> u32 {
        self.boards_built
    }

    /// Label for the start control in the current phase.
    pub fn control_label(&self) -> &'static str {
        match self.phase() {
            Phase::Idle if self.error().is_some_and(TriviaError::is_recoverable) => "Retry",
            Phase::Idle => "Start",
            Phase::Loading => "Loading ...",
            Phase::Ready => "Restart",
        }
    }

    /// Enters `Loading`, dropping the previous board and error.
    ///
    /// Returns `false` if a build is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            log::debug!("start ignored, already loading");
            return false;
        }
        self.loading = true;
        self.board = None;
        self.error = None;
        true
    }

    /// Leaves `Loading` with the outcome of the build started by [`Self::begin`].
    ///
    /// Returns `false` when not loading, in which case the result is dropped.
    pub fn finish(&mut self, result: Result<Board>) -> bool {
        if !self.loading {
            log::warn!("dropping board result, no build in flight");
            return false;
        }
        self.loading = false;
        match result {
            Ok(board) => {
                self.boards_built += 1;
                log::info!("board ready ({}x{})", board.columns(), board.rows());
                self.board = Some(board);
            }
            Err(err) => {
                log::error!("failed to build board: {}", err);
                self.error = Some(err);
            }
        }
        true
    }

    /// Enters `Loading` and hands back the build to drive; feed its output to [`Self::finish`].
    ///
    /// Returns `None` if a build is already in flight.
    pub fn start<S: TriviaSource>(
        &mut self,
        source: S,
        mut sampler: Sampler,
        config: BoardConfig,
    ) -> Option<impl Future<Output = Result<Board>> + use<S>> {
        if !self.begin() {
            return None;
        }
        Some(async move { build_board(&source, &mut sampler, &config).await })
    }

    /// Runs a whole start/restart in place: [`Self::start`], await, [`Self::finish`].
    pub async fn restart<S: TriviaSource>(
        &mut self,
        source: S,
        sampler: Sampler,
        config: BoardConfig,
    ) -> Phase {
        if let Some(build) = self.start(source, sampler, config) {
            let result = build.await;
            self.finish(result);
        }
        self.phase()
    }

    /// Reveals the clue behind a clicked cell.
    pub fn reveal(&mut self, key: CellKey) -> Result<RevealOutcome> {
        if self.loading {
            return Err(TriviaError::NotReady);
        }
        self.board
            .as_mut()
            .ok_or(TriviaError::NotReady)?
            .reveal(key)
    }
}
