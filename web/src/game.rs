use std::rc::Rc;

use chrono::prelude::*;
use clap::Args;
use jeopardy_core::protocol::{DEFAULT_API_BASE, DEFAULT_CATEGORY_POOL_SIZE};
use jeopardy_core::{
    Board, BoardConfig, CellKey, Controller, MemorySource, RevealState, Sampler, view,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{JServiceSource, Source, demo_categories};
use crate::utils::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Seed for the first board instead of a random one
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Categories per board
    #[arg(long, default_value_t = BoardConfig::NUM_CATEGORIES)]
    pub categories: usize,

    /// Clues per category
    #[arg(long, default_value_t = BoardConfig::NUM_QUESTIONS_PER_CAT)]
    pub clues: usize,

    /// Base URL of the jService API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Number of categories the API can list by offset
    #[arg(long, default_value_t = DEFAULT_CATEGORY_POOL_SIZE)]
    pub pool_size: u32,

    /// Give up picking categories after this many requests
    #[arg(long, default_value_t = BoardConfig::MAX_CATEGORY_ATTEMPTS)]
    pub max_attempts: u32,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u32,

    /// Play with the bundled categories instead of the API
    #[arg(long)]
    pub offline: bool,
}

impl GameProps {
    pub(crate) fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.categories, self.clues)
            .with_pool_size(self.pool_size)
            .with_max_attempts(self.max_attempts)
    }

    fn source(&self) -> (Source, BoardConfig) {
        let config = self.board_config();
        if !self.offline {
            let source = JServiceSource::new(self.api_base.clone(), self.timeout_ms);
            return (Source::Remote(source), config);
        }

        let categories = demo_categories().unwrap_or_else(|err| {
            log::error!("bundled categories are unreadable: {}", err);
            Vec::new()
        });
        let source = MemorySource::new(categories);
        let config = config.with_pool_size(source.pool_size());
        (Source::Offline(source), config)
    }
}

pub(crate) enum Msg {
    Start,
    Loaded(jeopardy_core::Result<Board>),
    Reveal(CellKey),
}

fn cell_class(cell: &view::BodyCell<'_>) -> Classes {
    use RevealState::*;
    let mut class = classes!(
        "clue",
        match cell.state {
            Hidden => classes!("hidden"),
            Question => classes!("question"),
            Answer => classes!("answer", "answered"),
        }
    );
    if !cell.is_clickable() {
        class.push("locked");
    }
    class
}

#[derive(Properties, Clone, PartialEq)]
struct ClueCellProps {
    cell: CellKey,
    class: Classes,
    text: String,
    callback: Callback<CellKey>,
}

#[function_component(ClueCell)]
fn clue_cell(props: &ClueCellProps) -> Html {
    let ClueCellProps {
        cell,
        class,
        text,
        callback,
    } = props.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", cell.row, cell.column);
        callback.emit(cell);
    });

    html! {
        <td {class} {onclick}><div><p>{text}</p></div></td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: Controller,
    source: Rc<Source>,
    config: BoardConfig,
    first_seed: Option<u64>,
    load_started_at: Option<DateTime<Utc>>,
}

impl GameView {
    fn start(&mut self, ctx: &Context<Self>) -> bool {
        let seed = self.first_seed.unwrap_or_else(js_random_seed);
        let sampler = Sampler::seeded(seed);
        let Some(build) = self
            .controller
            .start(Rc::clone(&self.source), sampler, self.config)
        else {
            return false;
        };

        log::debug!("seed: {}", seed);
        self.first_seed = None;
        self.load_started_at = Some(utc_now());

        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(build.await));
        });
        true
    }

    fn view_board(&self, ctx: &Context<Self>, board: &Board) -> Html {
        let callback = ctx.link().callback(Msg::Reveal);
        html! {
            <table id="jeopardy">
                <thead>
                    <tr>
                        { for view::header(board).map(|cell| html! { <th>{cell.title.to_string()}</th> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for view::body(board).into_iter().map(|row| html! {
                            <tr>
                                {
                                    for row.into_iter().map(|cell| html! {
                                        <ClueCell
                                            cell={cell.key}
                                            class={cell_class(&cell)}
                                            text={cell.text.to_string()}
                                            callback={callback.clone()}
                                        />
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (source, config) = ctx.props().source();
        if let Err(err) = config.validate() {
            log::warn!("board settings will not build: {}", err);
        }
        Self {
            controller: Controller::new(),
            source: Rc::new(source),
            config,
            first_seed: ctx.props().seed,
            load_started_at: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start(ctx),
            Loaded(result) => {
                if let Some(started_at) = self.load_started_at.take() {
                    let elapsed = utc_now() - started_at;
                    log::info!("board load took {} ms", elapsed.num_milliseconds());
                }
                self.controller.finish(result)
            }
            Reveal(cell) => match self.controller.reveal(cell) {
                Ok(outcome) => {
                    log::debug!("reveal {:?}: {:?}", cell, outcome);
                    outcome.has_update()
                }
                Err(err) => {
                    log::warn!("ignored click: {}", err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.controller.is_loading();
        let label = self.controller.control_label();
        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });

        html! {
            <div class="jeopardy">
                <nav>
                    <button
                        id="start"
                        class={classes!(loading.then_some("loading"))}
                        disabled={loading}
                        onclick={cb_start}
                    >
                        {label}
                    </button>
                    {
                        for self.controller.board().into_iter().map(|board| html! {
                            <aside class={classes!(board.is_complete().then_some("complete"))}>
                                {format!("{}/{}", board.answered_count(), board.rows() * board.columns())}
                            </aside>
                        })
                    }
                </nav>
                <div class="loader" hidden={!loading}/>
                {
                    for self.controller.error().into_iter().map(|err| html! {
                        <p class="error" role="alert">{err.to_string()}</p>
                    })
                }
                {
                    for self.controller.board().into_iter().map(|board| self.view_board(ctx, board))
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> GameProps {
        GameProps {
            seed: None,
            categories: 6,
            clues: 5,
            api_base: DEFAULT_API_BASE.to_string(),
            pool_size: DEFAULT_CATEGORY_POOL_SIZE,
            max_attempts: BoardConfig::MAX_CATEGORY_ATTEMPTS,
            timeout_ms: 10_000,
            offline: false,
        }
    }

    #[test]
    fn cell_class_marks_answered_cells_locked() {
        let cell = |state| view::BodyCell {
            key: CellKey::new(0, 0),
            state,
            text: view::PLACEHOLDER,
        };

        assert_eq!(
            cell_class(&cell(RevealState::Hidden)),
            classes!("clue", "hidden")
        );
        assert_eq!(
            cell_class(&cell(RevealState::Question)),
            classes!("clue", "question")
        );
        assert_eq!(
            cell_class(&cell(RevealState::Answer)),
            classes!("clue", "answer", "answered", "locked")
        );
    }

    #[test]
    fn remote_source_keeps_configured_pool() {
        let (source, config) = props().source();

        assert!(matches!(source, Source::Remote(_)));
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn offline_source_sizes_pool_to_bundled_categories() {
        let (source, config) = GameProps {
            offline: true,
            ..props()
        }
        .source();

        let Source::Offline(memory) = source else {
            panic!("expected offline source");
        };
        assert_eq!(config.category_pool_size, memory.pool_size());
        assert_eq!(config.validate(), Ok(()));
    }
}
