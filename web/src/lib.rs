use clap::Parser;
use wasm_bindgen::prelude::*;

mod canvas;
mod game;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

impl Args {
    /// Reads arguments from a location hash such as `#--grid-size=10&--seed=7&-vv`.
    fn from_location_hash(location_hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(location_hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use minecanvas_core::{GameConfig, MinePlacement};

    #[test]
    fn empty_hash_gives_reference_setup() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.game.game_config(), GameConfig::new(40, 20, 20));
        assert_eq!(args.game.seed, None);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_options_override_defaults() {
        let args = Args::from_location_hash(
            "#--cell-size=32&--grid-size=9&--mine-count=10&--exact-mines&--seed=7&-vv",
        )
        .unwrap();

        assert_eq!(
            args.game.game_config(),
            GameConfig::new(32, 9, 10).with_placement(MinePlacement::ExactCount)
        );
        assert_eq!(args.game.seed, Some(7));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(Args::from_location_hash("#--grid-size=lots").is_err());
        assert!(Args::from_location_hash("#--no-such-flag").is_err());
    }
}
