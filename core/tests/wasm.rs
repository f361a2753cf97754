#![cfg(target_arch = "wasm32")]

use minecanvas_core::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn mine_free_board_is_won_by_clicking_every_cell() {
    let config = GameConfig::new(40, 3, 0);
    let mut engine = create_engine(
        config,
        Some(RecordingSurface::new()),
        Vec::<GameOutcome>::new(),
        3,
    );

    let clicks = (0..3u8).flat_map(|y| {
        (0..3u8).map(move |x| {
            let px = x as f64 * 40.0 + 20.0;
            let py = y as f64 * 40.0 + 20.0;
            Command::from_pointer(PointerButton::Primary, px, py, config.cell_size).unwrap()
        })
    });

    assert_eq!(engine.replay(clicks), [GameOutcome::Won]);
    assert_eq!(engine.notifier(), &[GameOutcome::Won]);
    assert_eq!(engine.round(), 1);
}

#[wasm_bindgen_test]
fn click_outside_grid_is_ignored() {
    let mut engine = create_engine(
        GameConfig::new(40, 2, 0),
        Some(RecordingSurface::new()),
        (),
        3,
    );
    let command = Command::from_pointer(PointerButton::Primary, 100.0, 10.0, 40).unwrap();

    assert_eq!(engine.dispatch(command), None);
    assert_eq!(engine.board().revealed_count(), 0);
    assert_eq!(engine.surface().map(RecordingSurface::frames), Some(1));
}
