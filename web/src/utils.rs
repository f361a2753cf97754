use minecanvas_core as game;

/// Shows round endings with the browser's blocking `alert` dialog.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct AlertNotifier;

impl game::Notifier for AlertNotifier {
    fn notify(&mut self, outcome: game::GameOutcome, board: &game::Board) {
        log::info!(
            "{:?} with {} of {} cells revealed",
            outcome,
            board.revealed_count(),
            board.iter().count()
        );
        gloo::dialogs::alert(outcome.message());
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
