#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, PushError, RingBuffer};

use std::collections::VecDeque;

/// Commands sent from the game thread to the audio thread
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ToneMessage {
    /// Start a tone that fades out by itself after `length` seconds
    Play { frequency: f32, length: f32 },
    /// Cut every sounding voice
    Silence,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ToneMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        Consumer::pop(self).ok()
    }
}

/// Single-threaded receiver for offline rendering and tests
impl MessageReceiver for VecDeque<ToneMessage> {
    fn pop(&mut self) -> Option<ToneMessage> {
        self.pop_front()
    }
}

/// Default ring capacity: far more than a round ever sends between callbacks
#[cfg(feature = "rtrb")]
pub const TONE_QUEUE_SIZE: usize = 64;

/// Game-side end of the tone ring
#[cfg(feature = "rtrb")]
pub struct ToneHandle {
    tx: Producer<ToneMessage>,
}

#[cfg(feature = "rtrb")]
impl ToneHandle {
    /// Create a connected handle/receiver pair
    pub fn channel(capacity: usize) -> (Self, Consumer<ToneMessage>) {
        let (tx, rx) = RingBuffer::<ToneMessage>::new(capacity);
        (Self { tx }, rx)
    }

    /// Queue a tone. Returns `false` if the ring is full and the tone was dropped.
    pub fn play(&mut self, frequency: f32, length: f32) -> bool {
        self.send(ToneMessage::Play { frequency, length })
    }

    pub fn silence(&mut self) -> bool {
        self.send(ToneMessage::Silence)
    }

    fn send(&mut self, msg: ToneMessage) -> bool {
        match self.tx.push(msg) {
            Ok(()) => true,
            Err(PushError::Full(dropped)) => {
                log::debug!("tone queue full, dropped {:?}", dropped);
                false
            }
        }
    }
}
