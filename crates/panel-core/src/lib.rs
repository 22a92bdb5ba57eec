pub mod analysis;
pub mod chatter;
pub mod constants;
pub mod countdown;
pub mod damage;
pub mod display;
pub mod format;
pub mod gauge;
pub mod logbook;
pub mod magi;
pub mod power;
pub mod rng;
pub mod scene;
pub mod schedule;
pub mod session;
pub mod tactical;
pub mod thresholds;
pub mod waves;

pub static WIREFRAME_WGSL: &str = include_str!("../shaders/wireframe.wgsl");

pub use analysis::*;
pub use countdown::Countdown;
pub use display::*;
pub use format::WallClock;
pub use gauge::*;
pub use logbook::*;
pub use magi::*;
pub use power::*;
pub use scene::*;
pub use schedule::*;
pub use session::*;
pub use tactical::*;
pub use thresholds::*;
pub use waves::*;
