//! Audio output - runs a tone synth inside the cpal callback

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};
use thiserror::Error;

use crate::{
    synth::{MessageReceiver, ToneSynth, VoiceFactory},
    MAX_BLOCK_SIZE,
};

/// Failures while opening the audio device
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no default output device available")]
    NoOutputDevice,
    #[error("failed to fetch default output config")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream")]
    PlayStream(#[from] cpal::PlayStreamError),
}

/// An open, playing output stream. Audio stops when this is dropped.
pub struct AudioOutput {
    _stream: cpal::Stream,
    sample_rate: f32,
    channels: usize,
}

impl AudioOutput {
    /// Open the default output device and start rendering.
    ///
    /// `build` receives the device sample rate and returns the synth to run
    /// in the callback.
    pub fn open<F, R>(build: impl FnOnce(f32) -> ToneSynth<F, R>) -> Result<Self, AudioError>
    where
        F: VoiceFactory + 'static,
        R: MessageReceiver + Send + 'static,
    {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        info!(
            "audio output: {} ({} Hz, {} channels)",
            device.name().unwrap_or_else(|_| "unknown".into()),
            sample_rate,
            channels
        );

        let mut synth = build(sample_rate);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_remaining = total_frames - frames_written;
                    let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                    let block = &mut render_buf[..frames_to_render];
                    synth.render_block(block);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| error!("audio stream error: {}", err),
            None,
        )?;

        stream.play()?;

        Ok(Self {
            _stream: stream,
            sample_rate,
            channels,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}
