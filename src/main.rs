//! Windowed raycaster.
//!
//! Controls  W/↑ = forward  S/↓ = back  A/← = turn left  D/→ = turn right
//! Esc = quit
//!
//! ```bash
//! RUST_LOG=debug cargo run --release -- --fps 60 --scale 2
//! ```

use anyhow::Context;
use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use std::time::{Duration, Instant};

use raycast_rs::{
    config::Config,
    engine::Engine,
    platform::Platform,
    renderer::{Pixel, Software},
    sim::HeldKeys,
    world::Grid,
};

#[derive(Parser, Debug)]
#[command(version, about = "First-person grid raycaster")]
struct Args {
    /// Target frame rate; movement speeds are per frame.
    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Window pixel scale (1, 2 or 4).
    #[arg(long, default_value_t = 1, value_parser = parse_scale)]
    scale: u8,

    /// Hide the top-down overlay.
    #[arg(long)]
    no_minimap: bool,
}

fn parse_scale(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(v @ (1 | 2 | 4)) => Ok(v),
        _ => Err(format!("scale must be 1, 2 or 4, got `{s}`")),
    }
}

/// `minifb` window plus frame-time bookkeeping.
struct MinifbPlatform {
    win: Window,
    // ────────────────── benchmarking state ──────────────────────────────
    frame_start: Instant,
    acc_time: Duration,
    acc_frames: usize,
    last_print: Instant,
}

impl MinifbPlatform {
    fn new(title: &str, cfg: &Config, args: &Args) -> anyhow::Result<Self> {
        let scale = match args.scale {
            2 => Scale::X2,
            4 => Scale::X4,
            _ => Scale::X1,
        };
        let opts = WindowOptions {
            scale,
            ..WindowOptions::default()
        };
        let mut win = Window::new(title, cfg.screen_w, cfg.screen_h, opts)
            .context("failed to open window")?;
        win.set_target_fps(args.fps);
        let now = Instant::now();
        Ok(Self {
            win,
            frame_start: now,
            acc_time: Duration::ZERO,
            acc_frames: 0,
            last_print: now,
        })
    }

    /// Accumulate & report every ~3 s.
    fn tally(&mut self) {
        self.acc_time += self.frame_start.elapsed();
        self.acc_frames += 1;
        if self.last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = self.acc_time.as_secs_f64() * 1000.0 / self.acc_frames as f64;
            log::info!("avg frame: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            self.acc_time = Duration::ZERO;
            self.acc_frames = 0;
            self.last_print = Instant::now();
        }
    }
}

impl Platform for MinifbPlatform {
    type Error = anyhow::Error;

    fn held_keys(&mut self) -> HeldKeys {
        self.frame_start = Instant::now();

        let down = |a: Key, b: Key| self.win.is_key_down(a) || self.win.is_key_down(b);
        let mut keys = HeldKeys::empty();
        keys.set(HeldKeys::FORWARD, down(Key::W, Key::Up));
        keys.set(HeldKeys::BACKWARD, down(Key::S, Key::Down));
        keys.set(HeldKeys::TURN_LEFT, down(Key::A, Key::Left));
        keys.set(HeldKeys::TURN_RIGHT, down(Key::D, Key::Right));
        keys
    }

    fn quit_requested(&self) -> bool {
        !self.win.is_open() || self.win.is_key_down(Key::Escape)
    }

    fn present(&mut self, frame: &[Pixel], width: usize, height: usize) -> anyhow::Result<()> {
        self.win
            .update_with_buffer(frame, width, height)
            .context("failed to present frame")?;
        self.tally();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = Config::default();
    let mut engine = Engine::new(Software::new(cfg.screen_w, cfg.screen_h), Grid::builtin(), cfg)?;
    engine.show_minimap = !args.no_minimap;

    let mut platform = MinifbPlatform::new("Raycaster", &cfg, &args)?;
    engine.run(&mut platform)?;
    Ok(())
}
