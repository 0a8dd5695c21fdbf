//! Void Runner entry point
//!
//! Headless host: runs a scripted session against the simulation core,
//! logging every host event, and prints a summary at the end.
//!
//! `VOID_RUNNER_SETTINGS` points at a settings file and
//! `VOID_RUNNER_QUALITY` (`low`, `medium`, `high`) overrides its preset.

use std::path::PathBuf;
use std::process::ExitCode;

use glam::Vec2;
use void_runner::Viewport;
use void_runner::renderer::draw_scene;
use void_runner::settings::Settings;
use void_runner::sim::{EffectColor, GameState, HostSink, Key};

/// Frames to simulate (about 30 seconds)
const DEMO_FRAMES: u32 = 1800;
/// Tap jump this often
const JUMP_EVERY: u32 = 45;
/// Pause at this frame and resume after `PAUSE_LENGTH` host frames
const PAUSE_AT: u32 = 600;
const PAUSE_LENGTH: u32 = 90;

/// Host sink that writes events to the log
#[derive(Default)]
struct LogSink {
    score: u64,
    effects: usize,
    messages: Vec<String>,
}

impl HostSink for LogSink {
    fn show_message(&mut self, text: &str, hide_after_ms: Option<u32>) {
        match hide_after_ms {
            Some(ms) => log::info!("[message] {text} (hides after {ms} ms)"),
            None => log::info!("[message] {text}"),
        }
        self.messages.push(text.to_string());
    }

    fn hide_message(&mut self) {
        log::debug!("[message] hidden");
    }

    fn score_changed(&mut self, score: u64) {
        log::debug!("[score] {score}");
        self.score = score;
    }

    fn effect(&mut self, pos: Vec2, color: EffectColor) {
        log::trace!("[effect] {} at ({:.0}, {:.0})", color.as_hex(), pos.x, pos.y);
        self.effects += 1;
    }

    fn paused_changed(&mut self, paused: bool) {
        log::info!("[pause] {paused}");
    }
}

fn settings_path() -> PathBuf {
    std::env::var_os("VOID_RUNNER_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("void-runner.json"))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Void Runner (headless) starting...");

    let mut settings = Settings::load_from(&settings_path());
    if let Ok(name) = std::env::var("VOID_RUNNER_QUALITY") {
        settings.override_quality(&name);
    }
    let mut state = match GameState::new(Viewport::new(1280.0, 800.0), settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("Could not build level: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Game initialized with seed: {}", state.seed);

    let mut sink = LogSink::default();
    let mut vertices = 0;
    state.key_down(Key::Right);

    for frame in 0..DEMO_FRAMES {
        // The host keeps its own clock; the pause key is the only input
        // that still matters while the core is idle
        if frame == PAUSE_AT || frame == PAUSE_AT + PAUSE_LENGTH {
            state.key_down(Key::Pause);
        }
        if state.wants_frames() {
            if frame % JUMP_EVERY == 0 {
                state.key_down(Key::Jump);
            }
            state.tick();
            vertices = draw_scene(&state).len();
        }
        state.flush_events(&mut sink);

        if !state.gate_active() {
            log::info!("Mission complete at frame {frame}");
            break;
        }
    }
    state.key_up(Key::Right);

    println!("Score:          {}", sink.score);
    println!(
        "Checkpoints:    {}/{}",
        state.last_claimed_id(),
        state.checkpoints.len()
    );
    println!(
        "Fragments:      {}/{}",
        state.fragments.iter().filter(|f| f.collected).count(),
        state.fragments.len()
    );
    println!("Scroll offset:  {:.0}", state.scroll_offset());
    println!("Frames ticked:  {}", state.time_ticks);
    println!("Effects:        {}", sink.effects);
    println!("Messages:       {}", sink.messages.len());
    println!("Last frame:     {vertices} vertices");

    ExitCode::SUCCESS
}
