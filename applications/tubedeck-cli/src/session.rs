//! Interactive session: routes prompt commands and engine reports into the controller

use crate::command::{Command, HELP};
use crate::config::CliConfig;
use crate::engine::{EngineClock, EngineReport, SimulatedEngine};
use crate::error::Result;
use std::time::Duration;
use tubedeck_playback::{PlayerController, PlayerEvent};

/// What the event loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Session {
    player: PlayerController,
    clock: EngineClock,
}

impl Session {
    pub fn new(config: &CliConfig) -> Result<Self> {
        let mut player = PlayerController::new(config.tracks(), config.player.clone())?;
        let (engine, clock) = SimulatedEngine::new(config.engine.clone());
        player.set_engine(Box::new(engine));

        Ok(Self { player, clock })
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    /// Run one prompt command
    ///
    /// Player errors are reported in the output line, not returned; a typo
    /// at the prompt should not end the session.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let message = match command {
            Command::Play => {
                self.player.play();
                self.status()
            }
            Command::Pause => {
                self.player.pause();
                self.status()
            }
            Command::Toggle => {
                self.player.toggle_play_pause();
                self.status()
            }
            Command::Next => {
                self.player.next();
                self.status()
            }
            Command::Previous => {
                self.player.previous();
                self.status()
            }
            Command::Select(index) => match self.player.select(index) {
                Ok(_) => self.status(),
                Err(e) => format!("error: {}", e),
            },
            Command::Seek(fraction) => match self.player.seek_to(fraction) {
                Ok(_) => {
                    self.tick(Duration::ZERO);
                    self.status()
                }
                Err(e) => format!("error: {}", e),
            },
            Command::Drag(positions) => self.drag(&positions),
            Command::Volume(level) => match self.player.set_volume(level) {
                Ok(()) => self.status(),
                Err(e) => format!("error: {}", e),
            },
            Command::Mute => {
                self.player.toggle_mute();
                self.status()
            }
            Command::Status => self.status(),
            Command::Params => serde_json::to_string_pretty(&self.player.engine_params())
                .unwrap_or_else(|e| format!("error: {}", e)),
            Command::List => self.list(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };

        self.log_events();
        Outcome::Continue(message)
    }

    /// Scrub through `positions`, letting the engine report between moves
    fn drag(&mut self, positions: &[f64]) -> String {
        self.player.begin_seek();

        for &fraction in positions {
            if let Err(e) = self.player.update_seek_preview(fraction) {
                // Release on the last valid position
                tracing::warn!(error = %e, "Ignoring invalid scrub position");
                continue;
            }
            // The engine keeps reporting while the pointer is down
            self.tick(Duration::ZERO);
        }

        match self.player.commit_seek() {
            Ok(_) => {
                self.tick(Duration::ZERO);
                self.status()
            }
            Err(e) => format!("error: {}", e),
        }
    }

    /// Advance the simulated engine and deliver its reports
    pub fn tick(&mut self, elapsed: Duration) {
        for report in self.clock.tick(elapsed) {
            let result = match report {
                EngineReport::Duration(seconds) => self.player.on_duration_reported(seconds),
                EngineReport::Progress(fraction) => self.player.on_progress_reported(fraction),
            };
            if let Err(e) = result {
                tracing::warn!(error = %e, "Engine report rejected");
            }
        }
        self.log_events();
    }

    fn log_events(&mut self) {
        for event in self.player.drain_events() {
            match &event {
                PlayerEvent::Error { message } => tracing::warn!(%message, "Player error"),
                _ => tracing::info!(event = ?event, "Player event"),
            }
        }
    }

    /// One-line player status
    pub fn status(&self) -> String {
        let player = &self.player;
        let state = if player.is_playing() { "playing" } else { "paused" };
        let volume = if player.is_muted() {
            "muted".to_string()
        } else {
            format!("vol {:.0}%", player.volume() * 100.0)
        };

        let mut line = format!(
            "[{}/{}] {} {} {} {}",
            player.current_index() + 1,
            player.playlist().len(),
            player.current_track(),
            state,
            player.time_display(),
            volume,
        );
        if let Some(error) = player.load_error() {
            line.push_str(&format!(" (unavailable: {})", error));
        }
        line
    }

    fn list(&self) -> String {
        self.player
            .playlist()
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let marker = if i == self.player.current_index() { '>' } else { ' ' };
                format!("{} {}: {}", marker, i, id)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether the simulated engine is currently producing sound
    pub fn is_audible(&self) -> bool {
        self.clock.is_audible()
    }
}
