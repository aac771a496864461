use crate::{graph::node::RenderCtx, MIN_TIME};

/*
Percussive Decay Envelope
=========================

Each pad press is a short "ping": the tone starts at full level and fades
away on its own. There is no sustain and no gate-off. Once triggered,
the envelope runs to completion.

Vocabulary
----------

  level       The envelope's current output value (0.0 to 1.0). This multiplies
              the oscillator to control its amplitude over time.

  floor       The level the decay aims for at the end of the note (0.001,
              about -60 dB). Exponential curves never reach zero, so we stop
              there and drop to silence.

  length      Seconds from trigger until the level reaches the floor.

  ratio       Per-sample multiplier during decay.


The Shape: Exponential Decay
----------------------------

  Level
    1.0 ┐╱╲
        │  ╲
        │   ╲_
        │     ╲__
    0.0 └────────╲______──→ Time
        A  Decay       Idle

A tiny linear attack (a couple of milliseconds) avoids the click a hard
jump from 0 to 1 would make. After that the level is multiplied by the
same ratio every sample:

    ratio = floor ^ (1 / decay_samples)

Example: 0.3 s decay at 48 kHz, floor 0.001
  - decay_samples = 14_400
  - ratio = 0.001 ^ (1 / 14_400) ≈ 0.99952
  - after 14_400 samples: 1.0 * ratio^14_400 = 0.001 ✓

Why exponential? Loudness is perceived logarithmically, so an exponential
fade sounds like a steady fade-out. A linear ramp sounds like it hangs
and then drops off a cliff.


The State Machine
-----------------

    ┌──────┐  note_on   ┌────────┐  level=1   ┌───────┐
    │ Idle │ ─────────→ │ Attack │ ─────────→ │ Decay │
    └──────┘            └────────┘            └───────┘
        ↑                                         │
        │              level=floor                │
        └─────────────────────────────────────────┘

note_on while already sounding restarts from zero, so repeated presses of
the same pad sound distinct. note_off is a no-op: the length is fixed at
trigger time.
*/

/// Level the decay reaches at the end of the note
pub const DECAY_FLOOR: f32 = 0.001;

/// Default attack, short enough to be inaudible as a fade-in
pub const DEFAULT_ATTACK: f32 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeState {
    Idle,   // Silent, level = 0
    Attack, // Ramping up to 1.0
    Decay,  // Falling exponentially toward the floor
}

pub struct Envelope {
    attack_time: f32, // seconds to ramp 0 → 1
    length: f32,      // seconds from trigger to floor (default when ctx has none)

    stage: EnvelopeState,
    level: f32,

    // Decay bookkeeping, fixed when the decay starts
    ratio: f32,
    decay_total_samples: u32,
    decay_elapsed_samples: u32,
}

impl Envelope {
    pub fn new() -> Self {
        Self::decay(0.3)
    }

    /// Envelope that fades to the floor `length` seconds after each trigger.
    pub fn decay(length: f32) -> Self {
        Self::with_attack(DEFAULT_ATTACK, length)
    }

    pub fn with_attack(attack: f32, length: f32) -> Self {
        Self {
            attack_time: attack.max(MIN_TIME),
            length: length.max(MIN_TIME),
            stage: EnvelopeState::Idle,
            level: 0.0,
            ratio: 1.0,
            decay_total_samples: 1,
            decay_elapsed_samples: 0,
        }
    }

    /// Trigger: restart from silence.
    ///
    /// A positive `ctx.length` overrides the envelope's own length for this
    /// note only.
    pub fn note_on(&mut self, ctx: &RenderCtx) {
        if ctx.length > 0.0 {
            self.length = ctx.length.max(MIN_TIME);
        }
        self.level = 0.0;
        self.stage = EnvelopeState::Attack;
        self.decay_elapsed_samples = 0;
    }

    /// Fixed-length envelopes ignore note-off.
    pub fn note_off(&mut self, _ctx: &RenderCtx) {}

    fn begin_decay(&mut self, sample_rate: f32) {
        let decay_time = (self.length - self.attack_time).max(MIN_TIME);
        self.decay_total_samples = (decay_time * sample_rate).round().max(1.0) as u32;
        self.ratio = DECAY_FLOOR.powf(1.0 / self.decay_total_samples as f32);
        self.decay_elapsed_samples = 0;
        self.level = 1.0;
        self.stage = EnvelopeState::Decay;
    }

    /// Advance the envelope by one sample. Called once per sample.
    pub fn next_sample(&mut self, ctx: &RenderCtx) {
        match self.stage {
            EnvelopeState::Idle => {
                self.level = 0.0;
            }

            EnvelopeState::Attack => {
                let increment = 1.0 / (self.attack_time * ctx.sample_rate);
                self.level += increment;

                if self.level >= 1.0 {
                    self.begin_decay(ctx.sample_rate);
                }
            }

            EnvelopeState::Decay => {
                self.level *= self.ratio;
                self.decay_elapsed_samples = self.decay_elapsed_samples.saturating_add(1);

                if self.decay_elapsed_samples >= self.decay_total_samples {
                    self.level = 0.0;
                    self.stage = EnvelopeState::Idle;
                }
            }
        }

        debug_assert!((0.0..=1.0).contains(&self.level));
    }

    /// Render a block of envelope values into the buffer.
    pub fn render(&mut self, buffer: &mut [f32], ctx: &RenderCtx) {
        for sample in buffer.iter_mut() {
            self.next_sample(ctx);
            *sample = self.level;
        }
    }

    /// Returns true if the envelope is producing output (not idle).
    pub fn is_active(&self) -> bool {
        !matches!(self.stage, EnvelopeState::Idle)
    }

    pub fn reset(&mut self) {
        self.stage = EnvelopeState::Idle;
        self.level = 0.0;
        self.decay_elapsed_samples = 0;
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn state(&self) -> EnvelopeState {
        self.stage
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}
