use crate::{
    synth::{
        factory::VoiceFactory,
        message::{MessageReceiver, ToneMessage},
        voice::Voice,
    },
    MAX_BLOCK_SIZE,
};

/// Headroom so four overlapping full-level tones cannot clip
const DEFAULT_MASTER_GAIN: f32 = 0.25;

/// Fixed pool of tone voices driven by `ToneMessage`s.
///
/// Lives in the audio callback: allocation happens once in `new`, never in
/// `render_block`.
pub struct ToneSynth<F: VoiceFactory, R: MessageReceiver> {
    voices: Vec<Voice<F::Voice>>,
    rx: R,
    temp_buffer: Vec<f32>,
    frame_counter: u64,
    master_gain: f32,
}

impl<F: VoiceFactory, R: MessageReceiver> ToneSynth<F, R> {
    pub fn new(sample_rate: f32, max_voices: usize, factory: F, rx: R) -> Self {
        let voices = (0..max_voices.max(1))
            .map(|_| Voice::new(factory.create_voice(), sample_rate))
            .collect();

        Self {
            voices,
            rx,
            temp_buffer: vec![0.0; MAX_BLOCK_SIZE],
            frame_counter: 0,
            master_gain: DEFAULT_MASTER_GAIN,
        }
    }

    pub fn with_master_gain(mut self, gain: f32) -> Self {
        self.master_gain = gain.clamp(0.0, 1.0);
        self
    }

    /// Render one block (at most `MAX_BLOCK_SIZE` frames) of mono output
    pub fn render_block(&mut self, out: &mut [f32]) {
        // Process control messages
        while let Some(msg) = self.rx.pop() {
            match msg {
                ToneMessage::Play { frequency, length } => {
                    let age = self.frame_counter;
                    let voice = self.allocate_voice();
                    voice.start(frequency, length, age);
                }
                ToneMessage::Silence => {
                    for voice in &mut self.voices {
                        voice.free();
                    }
                }
            }
        }

        // Mix voices
        out.fill(0.0);
        for voice in &mut self.voices {
            if voice.is_active() {
                let frames = &mut self.temp_buffer[..out.len()];
                frames.fill(0.0);
                voice.render(frames);

                for (o, v) in out.iter_mut().zip(frames.iter()) {
                    *o += v * self.master_gain;
                }
            }
        }

        self.frame_counter += out.len() as u64;
    }

    /// Number of voices currently sounding
    pub fn active_voices(&self) -> usize {
        self.voices.iter().filter(|v| v.is_active()).count()
    }

    fn allocate_voice(&mut self) -> &mut Voice<F::Voice> {
        // First pass: a free voice. Otherwise steal the oldest tone.
        let idx = self
            .voices
            .iter()
            .position(|v| v.is_free())
            .or_else(|| {
                self.voices
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, v)| v.age())
                    .map(|(idx, _)| idx)
            })
            .unwrap_or(0);

        &mut self.voices[idx]
    }
}
