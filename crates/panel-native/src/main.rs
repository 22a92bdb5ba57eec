//! Headless driver: runs a panel screen against simulated time and prints
//! what the display would show.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use panel_core::{
    AnalysisConfig, AnalysisScreen, Blend, RecordingSink, Rect, Region, Rgba, SceneRenderer,
    Screen, Session, SessionConfig, Stroke, Surface2d, TacticalConfig, TacticalScreen, WallClock,
    WireframeCanvas,
};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(
    name = "panel-sim",
    version,
    about = "Run the MAGI panel simulation without a browser"
)]
struct Cli {
    /// Which screen to drive.
    #[arg(long, value_enum, default_value = "tactical")]
    screen: ScreenKind,

    /// Fixed seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulated run length.
    #[arg(long, default_value_t = 60)]
    seconds: u64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Print a snapshot every N simulated seconds.
    #[arg(long, default_value_t = 10)]
    every: u64,

    /// Start the simulated clock at HH:MM:SS (defaults to the current UTC time).
    #[arg(long)]
    start: Option<String>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ScreenKind {
    Tactical,
    Analysis,
}

/// Off-screen surface that only counts draw calls.
#[derive(Debug, Default)]
struct TraceSurface {
    strokes: usize,
    tints: usize,
    fills: usize,
}

impl Surface2d for TraceSurface {
    fn size(&self) -> (f64, f64) {
        (800.0, 200.0)
    }

    fn clear(&mut self) {}

    fn stroke_path(&mut self, _points: &[(f64, f64)], _stroke: Stroke) {
        self.strokes += 1;
    }

    fn fill_rect(&mut self, _rect: Rect, _color: Rgba, blend: Blend) {
        match blend {
            Blend::Difference => self.tints += 1,
            Blend::SourceOver => self.fills += 1,
        }
    }
}

fn parse_clock(raw: &str) -> Result<WallClock> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [h, m, s] = parts.as_slice() else {
        bail!("expected HH:MM:SS, got {:?}", raw);
    };
    let (h, m, s): (u8, u8, u8) = (h.parse()?, m.parse()?, s.parse()?);
    if h > 23 || m > 59 || s > 59 {
        bail!("clock out of range: {:?}", raw);
    }
    Ok(WallClock::new(h, m, s))
}

fn start_clock(cli: &Cli) -> Result<WallClock> {
    match &cli.start {
        Some(raw) => parse_clock(raw),
        None => {
            let secs = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
            Ok(WallClock::from_seconds_of_day(secs))
        }
    }
}

fn print_snapshot(label: &str, sink: &RecordingSink, regions: &[Region], log_region: Region) {
    println!("== {} ==", label);
    for &region in regions {
        if region == log_region {
            continue;
        }
        let text = sink.text(region).unwrap_or("-");
        match sink.class(region) {
            Some(class) => println!("  {:<20} {:<28} [{}]", region.element_id(), text, class),
            None => println!("  {:<20} {}", region.element_id(), text),
        }
    }
    for line in sink.log(log_region).iter().take(5) {
        println!("  > {}", line.text);
    }
}

fn run<S: Screen>(
    cli: &Cli,
    mut session: Session<S>,
    canvas: &mut S::Canvas,
    regions: &[Region],
    log_region: Region,
) -> Result<RecordingSink> {
    let start = start_clock(cli)?;
    let mut sink = RecordingSink::new();
    session.boot(start, &mut sink);
    print_snapshot(&format!("boot {}", start), &sink, regions, log_region);

    let fps = cli.fps.max(1);
    let dt = Duration::from_secs(1) / fps;
    let every = cli.every.max(1);
    let mut elapsed = Duration::ZERO;
    let mut next_snapshot = every;
    for _ in 0..cli.seconds * fps as u64 {
        elapsed += dt;
        let now = start.advanced(elapsed.as_secs());
        session.advance(dt, now, &mut sink, canvas);
        if elapsed.as_secs() >= next_snapshot {
            print_snapshot(&format!("t+{}s {}", next_snapshot, now), &sink, regions, log_region);
            next_snapshot += every;
        }
    }
    log::info!(
        "ran {} frames, {} data ticks, {} display writes",
        session.frames(),
        session.ticks(),
        sink.writes()
    );
    Ok(sink)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let session_config = SessionConfig {
        seed: cli.seed,
        ..SessionConfig::default()
    };
    log::info!("panel-sim: {:?} for {}s at {} fps", cli.screen, cli.seconds, cli.fps);

    match cli.screen {
        ScreenKind::Tactical => {
            let screen = TacticalScreen::new(&TacticalConfig::default())?;
            let mut surface = TraceSurface::default();
            let canvas: &mut (dyn Surface2d + 'static) = &mut surface;
            run(
                &cli,
                Session::new(screen, &session_config),
                canvas,
                &Region::TACTICAL,
                Region::AlertLog,
            )?;
            log::info!(
                "wave canvas: {} strokes, {} glitch frames, {} glitch bars",
                surface.strokes,
                surface.tints,
                surface.fills
            );
        }
        ScreenKind::Analysis => {
            let screen = AnalysisScreen::new(&AnalysisConfig::default())?;
            let mut renderer = WireframeCanvas::new(TraceSurface::default());
            let canvas: &mut (dyn SceneRenderer + 'static) = &mut renderer;
            run(
                &cli,
                Session::new(screen, &session_config),
                canvas,
                &Region::ANALYSIS,
                Region::AnalysisLog,
            )?;
            log::info!(
                "sphere canvas: {} visible edges drawn",
                renderer.surface.strokes
            );
        }
    }
    Ok(())
}
