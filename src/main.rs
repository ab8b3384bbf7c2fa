//! Terminal bblock runner (default binary).
//!
//! Blocks fall down four lanes; click them before they reach the floor.
//! Input comes from crossterm (keyboard + mouse capture), frames go through a
//! custom framebuffer renderer, and the loop is paced at a fixed 60 Hz.

use std::time::{Duration, Instant};

use anyhow::Result;

use bblock::core::{AudioSink, Flow, GameController, HighScore, HighScoreStore};
use bblock::host::{logging, FileHighScoreStore, GameConfig};
use bblock::input::InputPoller;
use bblock::term::{BellAudio, FrameBuffer, GameView, TerminalRenderer, Viewport};
use bblock::types::TICK_MICROS;

fn main() -> Result<()> {
    // Configuration and the stored high score are validated before the
    // terminal is touched, so startup errors print normally.
    let config = GameConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;
    log::info!(
        "bblock starting: difficulty={} sound={} invincible={} high_score_file={}",
        config.difficulty.get(),
        config.sound,
        config.invincible,
        config.high_score_path().display()
    );

    let mut store = FileHighScoreStore::new(config.high_score_path());
    let high_score = store.load()?;

    let controller = GameController::new(
        config.profile(),
        HighScore::new(high_score),
        config.seed_source(),
    )
    .with_invincible(config.invincible);
    let mut audio = BellAudio::new(config.sound);

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        return Err(e);
    }

    let result = run(&mut term, controller, &mut audio, &mut store);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("fatal: {:#}", e);
    }
    result
}

fn run<A, S>(
    term: &mut TerminalRenderer,
    mut controller: GameController,
    audio: &mut A,
    store: &mut S,
) -> Result<()>
where
    A: AudioSink,
    S: HighScoreStore,
{
    let view = GameView::default();
    let mut poller = InputPoller::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport(&view);

    let tick = Duration::from_micros(TICK_MICROS);
    let mut deadline = Instant::now();
    let mut shown: Option<u64> = None;

    loop {
        let frame = controller.frame();
        let print = frame.fingerprint();
        if shown != Some(print) {
            view.render_into(&frame, viewport, &mut fb);
            term.present(&mut fb)?;
            shown = Some(print);
        }

        // Fixed-rate limiter; after a stall, resume from now instead of
        // replaying the missed ticks.
        deadline += tick;
        let now = Instant::now();
        if deadline < now {
            deadline = now;
        }

        let input = poller.collect_until(deadline, |col, row| {
            view.cell_to_field(viewport, col, row)
        })?;

        if input.resized {
            viewport = current_viewport(&view);
            term.invalidate();
            shown = None;
        }

        if controller.step(&input, audio, store) == Flow::Quit {
            log::info!(
                "quit after {} sessions ({} input events)",
                controller.sessions_started(),
                poller.events_seen()
            );
            return Ok(());
        }
    }
}

fn current_viewport(view: &GameView) -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let need = view.required_size();
    if w < need.width || h < need.height {
        log::warn!(
            "terminal {}x{} is smaller than the {}x{} playfield; output will be clipped",
            w,
            h,
            need.width,
            need.height
        );
    }
    Viewport::new(w, h)
}
