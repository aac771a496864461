use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One pad of the board: a color paired with a fixed tone.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Green,
    Red,
    Yellow,
    Blue,
}

impl Signal {
    /// Every signal in board order (top-left, top-right, bottom-left, bottom-right).
    pub const ALL: [Signal; 4] = [Signal::Green, Signal::Red, Signal::Yellow, Signal::Blue];

    /// Tone frequency in Hz.
    ///
    /// The four pads form a C major seventh spread: C4, E4, G4, B4.
    pub fn frequency(self) -> f32 {
        match self {
            Signal::Green => 261.63,
            Signal::Red => 329.63,
            Signal::Yellow => 392.00,
            Signal::Blue => 493.88,
        }
    }

    /// Position in `Signal::ALL`.
    pub fn index(self) -> usize {
        match self {
            Signal::Green => 0,
            Signal::Red => 1,
            Signal::Yellow => 2,
            Signal::Blue => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Map a key to a pad: color initials or the digits 1-4.
    ///
    /// Unmapped keys return `None` and are meant to be ignored.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'g' | '1' => Some(Signal::Green),
            'r' | '2' => Some(Signal::Red),
            'y' | '3' => Some(Signal::Yellow),
            'b' | '4' => Some(Signal::Blue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Yellow => "yellow",
            Signal::Blue => "blue",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform choice over the four pads, so `rng.gen::<Signal>()` works.
impl Distribution<Signal> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Signal {
        Signal::ALL[rng.gen_range(0..Signal::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn index_round_trips_through_all() {
        for (i, signal) in Signal::ALL.iter().enumerate() {
            assert_eq!(signal.index(), i);
            assert_eq!(Signal::from_index(i), Some(*signal));
        }
        assert_eq!(Signal::from_index(4), None);
    }

    #[test]
    fn keys_map_to_pads() {
        assert_eq!(Signal::from_key('g'), Some(Signal::Green));
        assert_eq!(Signal::from_key('R'), Some(Signal::Red));
        assert_eq!(Signal::from_key('3'), Some(Signal::Yellow));
        assert_eq!(Signal::from_key('4'), Some(Signal::Blue));
        assert_eq!(Signal::from_key('x'), None);
        assert_eq!(Signal::from_key(' '), None);
    }

    #[test]
    fn frequencies_ascend_in_board_order() {
        let freqs: Vec<f32> = Signal::ALL.iter().map(|s| s.frequency()).collect();
        assert!(freqs.windows(2).all(|w| w[0] < w[1]));
        assert!((Signal::Green.frequency() - 261.63).abs() < 1e-3);
        assert!((Signal::Blue.frequency() - 493.88).abs() < 1e-3);
    }

    #[test]
    fn sampling_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let draws = 40_000;
        let mut counts = [0usize; 4];
        for _ in 0..draws {
            let signal: Signal = rng.gen();
            counts[signal.index()] += 1;
        }

        let expected = draws as f64 / 4.0;
        for (i, &count) in counts.iter().enumerate() {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "signal {i} drawn {count} times, expected about {expected}"
            );
        }
    }
}
