use crate::canvas::CanvasSurface;
use crate::utils::*;
use clap::Args;
use minecanvas_core as game;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Edge length of one cell in pixels
    #[arg(long, default_value_t = 40)]
    pub(crate) cell_size: u32,

    /// Cells per side of the board
    #[arg(long, default_value_t = 20)]
    pub(crate) grid_size: game::Coord,

    /// Mine target, met on average unless --exact-mines is given
    #[arg(long, default_value_t = 20)]
    pub(crate) mine_count: game::CellCount,

    /// Place exactly the mine target instead of rolling every cell
    #[arg(long)]
    pub(crate) exact_mines: bool,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,
}

impl GameProps {
    pub(crate) fn game_config(&self) -> game::GameConfig {
        let placement = if self.exact_mines {
            game::MinePlacement::ExactCount
        } else {
            game::MinePlacement::PerCellChance
        };
        game::GameConfig::new(self.cell_size, self.grid_size, self.mine_count)
            .with_placement(placement)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Command(game::Command),
}

fn pointer_msg(button: game::PointerButton, event: &MouseEvent, cell_size: u32) -> Option<Msg> {
    let px = event.offset_x() as f64;
    let py = event.offset_y() as f64;
    let command = game::Command::from_pointer(button, px, py, cell_size);
    if command.is_none() {
        log::trace!("pointer ({}, {}) outside any cell", px, py);
    }
    command.map(Msg::Command)
}

/// Hosts one engine on a canvas. The canvas is painted by the engine, so yew never re-renders it after mounting.
#[derive(Debug)]
pub(crate) struct GameView {
    canvas_ref: NodeRef,
    engine: Option<game::BoardEngine<CanvasSurface, AlertNotifier>>,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            engine: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let props = ctx.props();
        let surface = self
            .canvas_ref
            .cast::<HtmlCanvasElement>()
            .and_then(CanvasSurface::from_canvas);
        if surface.is_none() {
            log::error!("no 2d canvas context, playing without drawing");
        }

        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        self.engine = Some(game::create_engine(
            props.game_config(),
            surface,
            AlertNotifier,
            seed,
        ));
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Msg::Command(command) = msg;

        match self.engine.as_mut() {
            Some(engine) => {
                if let Some(outcome) = engine.dispatch(command) {
                    log::debug!("round {} ended: {:?}", engine.round(), outcome);
                }
            }
            None => log::warn!("{:?} before the board was mounted", command),
        }

        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::PointerButton::*;

        let config = ctx.props().game_config();
        let cell_size = config.cell_size;
        let pixels = config.board_pixels().to_string();

        let onclick = ctx
            .link()
            .batch_callback(move |e: MouseEvent| pointer_msg(Primary, &e, cell_size));
        let oncontextmenu = ctx.link().batch_callback(move |e: MouseEvent| {
            e.prevent_default();
            pointer_msg(Secondary, &e, cell_size)
        });

        html! {
            <canvas
                ref={self.canvas_ref.clone()}
                width={pixels.clone()}
                height={pixels}
                {onclick}
                {oncontextmenu}
            />
        }
    }
}
