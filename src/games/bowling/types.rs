//! Core domain types for ten-pin bowling.

use serde::{Deserialize, Serialize};

/// Most pins that can fall on one rack.
pub const PINS_PER_FRAME_MAX: u8 = 10;

/// Frames each player bowls in a game.
pub const FRAMES_PER_GAME: usize = 10;

/// Most players a single game accepts.
pub const MAX_PLAYERS: usize = 2;

/// Pinfall of a single ball (0-10).
///
/// A `Pins` value is always within range, so code holding one never
/// needs to re-check it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pins(u8);

impl Pins {
    /// No pins knocked down.
    pub const GUTTER: Pins = Pins(0);

    /// Every pin on the rack knocked down.
    pub const ALL: Pins = Pins(PINS_PER_FRAME_MAX);

    /// Creates a pinfall, returning `None` when outside 0-10.
    pub fn new(pins: i64) -> Option<Self> {
        u8::try_from(pins)
            .ok()
            .filter(|p| *p <= PINS_PER_FRAME_MAX)
            .map(Pins)
    }

    /// Returns the pin count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns true if every pin fell.
    pub fn is_all(self) -> bool {
        self.0 == PINS_PER_FRAME_MAX
    }
}

impl TryFrom<u8> for Pins {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pins::new(i64::from(value)).ok_or_else(|| format!("{} is not a pin count (0-10)", value))
    }
}

impl From<Pins> for u8 {
    fn from(pins: Pins) -> Self {
        pins.0
    }
}

/// Position of a frame within a game (1-10).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct FrameNumber(u8);

impl FrameNumber {
    /// Opening frame.
    pub const FIRST: FrameNumber = FrameNumber(1);

    /// Tenth frame, the one with bonus balls.
    pub const LAST: FrameNumber = FrameNumber(FRAMES_PER_GAME as u8);

    /// Creates a frame number, returning `None` outside 1-10.
    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::LAST.0).contains(&number).then_some(FrameNumber(number))
    }

    /// Frame number for a zero-based position in a player's frame list.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index + 1).ok().and_then(Self::new)
    }

    /// Returns the number (1-10).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position of this frame in a player's frame list.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Returns true for the tenth frame.
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Returns the following frame, or `None` after the tenth.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl TryFrom<u8> for FrameNumber {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FrameNumber::new(value).ok_or_else(|| format!("{} is not a frame number (1-10)", value))
    }
}

impl From<FrameNumber> for u8 {
    fn from(number: FrameNumber) -> Self {
        number.0
    }
}

/// How a frame ended, for bonus purposes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Classification {
    /// Pins left standing after two balls.
    Open,
    /// All ten pins down across two balls.
    Spare,
    /// All ten pins down with the first ball.
    Strike,
}

impl Classification {
    /// Number of following balls added to the frame as a bonus.
    pub fn bonus_balls(self) -> usize {
        match self {
            Classification::Open => 0,
            Classification::Spare => 1,
            Classification::Strike => 2,
        }
    }

    /// Returns true for spares and strikes.
    pub fn earns_bonus(self) -> bool {
        self.bonus_balls() > 0
    }
}
