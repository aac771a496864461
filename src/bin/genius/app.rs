//! Genius - application builder and runner

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use log::{info, warn};
use std::io::stdout;

use super::ui::{BoardView, UiApp};

use genius::{
    io::AudioOutput,
    synth::{message::TONE_QUEUE_SIZE, pad_voice, ToneHandle, ToneSynth},
    EngineConfig, RoundEngine,
};

/// Voices in the tone pool; playback never overlaps more than two tones
const MAX_VOICES: usize = 4;

/// Main application builder
pub struct Genius {
    config: EngineConfig,
    muted: bool,
}

impl Genius {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            muted: false,
        }
    }

    /// Replace the whole timing config
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Run without opening an audio device
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Open audio (if any), then run the TUI until the player quits
    pub fn run(self) -> EyreResult<()> {
        // Keep the stream alive for the whole session
        let (_audio, tones) = if self.muted {
            info!("audio muted");
            (None, None)
        } else {
            let (handle, rx) = ToneHandle::channel(TONE_QUEUE_SIZE);
            match AudioOutput::open(|sample_rate| {
                ToneSynth::new(sample_rate, MAX_VOICES, pad_voice, rx)
            }) {
                Ok(output) => (Some(output), Some(handle)),
                Err(err) => {
                    warn!("running without sound: {}", err);
                    (None, None)
                }
            }
        };

        info!("starting with {:?}", self.config);
        let engine = RoundEngine::new(self.config);
        let mut app = UiApp::new(engine, BoardView::new(tones));

        let mut terminal = ratatui::init();
        execute!(stdout(), EnableMouseCapture).wrap_err("failed to enable mouse capture")?;

        let res = app.run(&mut terminal);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        res
    }
}

impl Default for Genius {
    fn default() -> Self {
        Self::new()
    }
}
