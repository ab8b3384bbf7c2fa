//! Game controller - the Title / Playing / GameOver state machine
//!
//! The controller owns the high score and, while playing, the active
//! [`Session`]. Collaborators (audio and high score storage) are passed into
//! every [`GameController::step`] call rather than held globally.

use rand::Rng;

use crate::frame::FrameState;
use crate::high_score::{AudioSink, HighScore, HighScoreStore};
use crate::session::Session;
use crate::spawner::seeded_rng;
use crate::types::{
    DifficultyProfile, HitResult, InputSnapshot, KeyInput, Phase, PointerButton, SoundCue,
    TickResult, TITLE_BLINK_TICKS,
};

/// What the outer loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Where session seeds come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Every session replays the same spawn sequence.
    Fixed(u64),
    /// Fresh seed per session from the thread RNG.
    Entropy,
}

impl SeedSource {
    fn next_seed(&self) -> u64 {
        match self {
            SeedSource::Fixed(seed) => *seed,
            SeedSource::Entropy => rand::rng().random(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameController {
    profile: DifficultyProfile,
    phase: Phase,
    session: Option<Session>,
    high_score: HighScore,
    blink: i32,
    invincible: bool,
    seeds: SeedSource,
    sessions_started: u32,
}

impl GameController {
    pub fn new(profile: DifficultyProfile, high_score: HighScore, seeds: SeedSource) -> Self {
        Self {
            profile,
            phase: Phase::Title,
            session: None,
            high_score,
            blink: -TITLE_BLINK_TICKS,
            invincible: false,
            seeds,
            sessions_started: 0,
        }
    }

    pub fn with_invincible(mut self, invincible: bool) -> Self {
        self.invincible = invincible;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Direct access to the running session (scripted play and tests).
    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score.value()
    }

    pub fn blink(&self) -> i32 {
        self.blink
    }

    pub fn invincible(&self) -> bool {
        self.invincible
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    /// Run one control cycle: handle the drained input, then advance the
    /// current phase by one tick.
    pub fn step<A, S>(&mut self, input: &InputSnapshot, audio: &mut A, store: &mut S) -> Flow
    where
        A: AudioSink + ?Sized,
        S: HighScoreStore + ?Sized,
    {
        if input.quit_requested || input.escape_pressed() {
            if let Some(session) = &self.session {
                log::info!("quit while playing; score {} discarded", session.score());
            }
            return Flow::Quit;
        }

        match self.phase {
            Phase::Title => self.step_title(input, audio),
            Phase::Playing => self.step_playing(input, audio, store),
            // Not reachable between steps.
            Phase::GameOver => self.enter_title(),
        }

        Flow::Continue
    }

    pub fn frame(&self) -> FrameState<'_> {
        let (blocks, score) = match &self.session {
            Some(s) => (s.blocks(), s.score()),
            None => (&[][..], 0),
        };
        FrameState {
            phase: self.phase,
            blocks,
            block_height: self.profile.block_height,
            score,
            // A record run shows as the best score while it is being played.
            high_score: self.high_score.value().max(score),
            blink_visible: self.blink < 0,
            invincible: self.invincible,
        }
    }

    fn step_title<A: AudioSink + ?Sized>(&mut self, input: &InputSnapshot, audio: &mut A) {
        self.blink += 1;
        if self.blink == TITLE_BLINK_TICKS {
            self.blink = -TITLE_BLINK_TICKS;
        }

        let any_key = input.keys_down.iter().any(|k| *k != KeyInput::Modifier);
        if any_key || !input.pointer_down.is_empty() {
            self.start_session(audio);
        }
    }

    fn start_session<A: AudioSink + ?Sized>(&mut self, audio: &mut A) {
        let seed = self.seeds.next_seed();
        audio.play(SoundCue::Begin);
        self.session =
            Some(Session::new(self.profile, seeded_rng(seed)).with_invincible(self.invincible));
        self.sessions_started += 1;
        self.phase = Phase::Playing;
        log::info!(
            "session {} started (seed={}, block_height={}, fall_rate={})",
            self.sessions_started,
            seed,
            self.profile.block_height,
            self.profile.fall_rate
        );
    }

    fn step_playing<A, S>(&mut self, input: &InputSnapshot, audio: &mut A, store: &mut S)
    where
        A: AudioSink + ?Sized,
        S: HighScoreStore + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            log::error!("playing without a session; returning to title");
            self.enter_title();
            return;
        };

        for press in &input.pointer_down {
            match press.button {
                PointerButton::Primary => {
                    if let HitResult::Hit(score) = session.resolve_click(press.position) {
                        audio.play(SoundCue::Click);
                        log::trace!("hit, score={}", score);
                    }
                }
                PointerButton::Secondary => {
                    self.invincible = !self.invincible;
                    session.set_invincible(self.invincible);
                    log::info!("invincibility toggle: {}", self.invincible);
                }
                PointerButton::Middle => {}
            }
        }

        if session.tick() == TickResult::Lost {
            let score = session.score();
            let ticks = session.ticks();
            self.phase = Phase::GameOver;
            log::info!("session lost after {} ticks with score {}", ticks, score);
            self.game_over(score, audio, store);
        }
    }

    fn game_over<A, S>(&mut self, score: u32, audio: &mut A, store: &mut S)
    where
        A: AudioSink + ?Sized,
        S: HighScoreStore + ?Sized,
    {
        debug_assert_eq!(self.phase, Phase::GameOver);
        audio.play(SoundCue::End);

        if self.high_score.record(score) {
            match store.save(self.high_score.value()) {
                Ok(()) => log::info!("new high score {}", self.high_score.value()),
                Err(e) => log::error!("failed to save high score {}: {}", score, e),
            }
        }

        self.enter_title();
    }

    fn enter_title(&mut self) {
        self.session = None;
        self.blink = -TITLE_BLINK_TICKS;
        self.phase = Phase::Title;
    }
}
