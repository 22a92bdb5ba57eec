//! Screen sessions: one screen, its tick/clock scheduler and its random source.

use crate::analysis::{AnalysisConfig, AnalysisState};
use crate::constants::CLOCK_TICK_MS;
use crate::display::{DisplaySink, Region};
use crate::format::{system_time_banner, WallClock};
use crate::gauge::ConfigError;
use crate::rng;
use crate::scene::{SceneRenderer, SphereRig};
use crate::schedule::{Fired, Job, Scheduler};
use crate::tactical::{TacticalConfig, TacticalState};
use crate::waves::{Surface2d, WaveAnimator};
use rand::rngs::StdRng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Fixed seed for a reproducible run; entropy when absent.
    pub seed: Option<u64>,
    pub clock_period: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            clock_period: Duration::from_millis(CLOCK_TICK_MS),
        }
    }
}

/// One panel screen as seen by the session loop.
pub trait Screen {
    /// What the per-frame animation draws into.
    type Canvas: ?Sized;

    fn data_period(&self) -> Duration;
    fn clock_region(&self) -> Region;
    fn boot(&mut self, rng: &mut StdRng, now: WallClock, sink: &mut dyn DisplaySink);
    /// One data tick: compute, then write.
    fn update_and_render(&mut self, rng: &mut StdRng, now: WallClock, sink: &mut dyn DisplaySink);
    fn frame(&mut self, rng: &mut StdRng, canvas: &mut Self::Canvas);
}

pub struct TacticalScreen {
    pub state: TacticalState,
    pub waves: WaveAnimator,
    data_period: Duration,
}

impl TacticalScreen {
    pub fn new(config: &TacticalConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: TacticalState::new(config)?,
            waves: WaveAnimator::new(),
            data_period: config.data_period,
        })
    }
}

impl Screen for TacticalScreen {
    type Canvas = dyn Surface2d;

    fn data_period(&self) -> Duration {
        self.data_period
    }

    fn clock_region(&self) -> Region {
        Region::SystemTime
    }

    fn boot(&mut self, rng: &mut StdRng, now: WallClock, sink: &mut dyn DisplaySink) {
        self.state.boot(rng, now, sink);
    }

    fn update_and_render(
        &mut self,
        rng: &mut StdRng,
        now: WallClock,
        sink: &mut dyn DisplaySink,
    ) {
        let view = self.state.update(rng, now);
        self.state.render(&view, sink);
    }

    fn frame(&mut self, rng: &mut StdRng, canvas: &mut Self::Canvas) {
        self.waves.draw(canvas, rng);
    }
}

pub struct AnalysisScreen {
    pub state: AnalysisState,
    pub rig: SphereRig,
    data_period: Duration,
}

impl AnalysisScreen {
    pub fn new(config: &AnalysisConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: AnalysisState::new(config)?,
            rig: SphereRig::new(),
            data_period: config.data_period,
        })
    }
}

impl Screen for AnalysisScreen {
    type Canvas = dyn SceneRenderer;

    fn data_period(&self) -> Duration {
        self.data_period
    }

    fn clock_region(&self) -> Region {
        Region::AnalysisTime
    }

    fn boot(&mut self, rng: &mut StdRng, now: WallClock, sink: &mut dyn DisplaySink) {
        self.state.boot(rng, now, sink);
    }

    fn update_and_render(
        &mut self,
        rng: &mut StdRng,
        now: WallClock,
        sink: &mut dyn DisplaySink,
    ) {
        let view = self.state.update(rng, now);
        self.state.render(&view, sink);
    }

    fn frame(&mut self, _rng: &mut StdRng, canvas: &mut Self::Canvas) {
        self.rig.advance();
        canvas.draw(self.rig.model_matrix());
    }
}

/// Owns a screen plus everything that drives it.
pub struct Session<S: Screen> {
    screen: S,
    scheduler: Scheduler<Job>,
    rng: StdRng,
    frames: u64,
    ticks: u64,
}

impl<S: Screen> Session<S> {
    pub fn new(screen: S, config: &SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => rng::seeded(seed),
            None => rng::from_entropy(),
        };
        let scheduler = Scheduler::new()
            .every(Job::Data, screen.data_period())
            .every(Job::Clock, config.clock_period);
        Self {
            screen,
            scheduler,
            rng,
            frames: 0,
            ticks: 0,
        }
    }

    /// Initial population: clock first, then the screen's first tick and
    /// start-up log lines.
    pub fn boot(&mut self, now: WallClock, sink: &mut dyn DisplaySink) {
        sink.set_text(self.screen.clock_region(), &system_time_banner(now));
        self.screen.boot(&mut self.rng, now, sink);
        self.ticks += 1;
    }

    /// Advance by one frame of `dt`: run due jobs, then redraw the canvas.
    pub fn advance(
        &mut self,
        dt: Duration,
        now: WallClock,
        sink: &mut dyn DisplaySink,
        canvas: &mut S::Canvas,
    ) -> Fired<Job> {
        let mut fired = Fired::new();
        self.scheduler.advance(dt, &mut fired);
        for job in &fired {
            match job {
                Job::Data => {
                    self.screen.update_and_render(&mut self.rng, now, sink);
                    self.ticks += 1;
                }
                Job::Clock => {
                    sink.set_text(self.screen.clock_region(), &system_time_banner(now));
                }
            }
        }
        self.screen.frame(&mut self.rng, canvas);
        self.frames += 1;
        fired
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Data ticks run so far, including the boot tick.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
