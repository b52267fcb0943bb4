//! Stick throws
//!
//! Four two-faced sticks are thrown together. The number of light faces
//! showing decides how far a piece moves and whether the thrower goes again.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of sticks thrown each turn
pub const STICKS: u8 = 4;

/// Outcome of one throw of the sticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickThrow {
    light_faces: u8,
}

impl StickThrow {
    /// Throw with the given number of light faces, `None` above [`STICKS`].
    pub fn from_light_faces(light_faces: u8) -> Option<Self> {
        (light_faces <= STICKS).then_some(Self { light_faces })
    }

    /// Throw the sticks. Each face lands light with probability one half.
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let light_faces = (0..STICKS).filter(|_| rng.random_bool(0.5)).count() as u8;
        Self { light_faces }
    }

    #[inline]
    pub fn light_faces(self) -> u8 {
        self.light_faces
    }

    /// Steps a piece moves
    #[inline]
    pub fn value(self) -> u8 {
        match self.light_faces {
            0 => 6,
            n => n,
        }
    }

    pub fn name(self) -> &'static str {
        match self.light_faces {
            0 => "Sitteh",
            1 => "Tâb",
            2 => "Itneyn",
            3 => "Teláteh",
            _ => "Arba'ah",
        }
    }

    /// Whether the thrower throws again after this throw
    #[inline]
    pub fn repeats(self) -> bool {
        matches!(self.light_faces, 0 | 1 | 4)
    }
}

impl std::fmt::Display for StickThrow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

/// Whether a throw value grants another throw
#[inline]
pub fn value_repeats(value: u8) -> bool {
    matches!(value, 1 | 4 | 6)
}
