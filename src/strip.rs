//! LED strips of the tree and the shift register that moves colors along them

use core::fmt;

use heapless::Vec;

use crate::color::{BLACK, Rgb};
use crate::error::ConfigError;

const STRIP_NAME_TRUNK: &str = "trunk";
const STRIP_NAME_BRANCH1_LEFT: &str = "branch1_left";
const STRIP_NAME_BRANCH1_RIGHT: &str = "branch1_right";
const STRIP_NAME_BRANCH2_LEFT: &str = "branch2_left";
const STRIP_NAME_BRANCH2_RIGHT: &str = "branch2_right";
const STRIP_NAME_BRANCH3_LEFT: &str = "branch3_left";
const STRIP_NAME_BRANCH3_RIGHT: &str = "branch3_right";

const STRIP_ID_TRUNK: u8 = 0;
const STRIP_ID_BRANCH1_LEFT: u8 = 1;
const STRIP_ID_BRANCH1_RIGHT: u8 = 2;
const STRIP_ID_BRANCH2_LEFT: u8 = 3;
const STRIP_ID_BRANCH2_RIGHT: u8 = 4;
const STRIP_ID_BRANCH3_LEFT: u8 = 5;
const STRIP_ID_BRANCH3_RIGHT: u8 = 6;

/// Number of physical strips in the tree
pub const STRIP_COUNT: usize = 7;

/// Identifier of a physical strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StripId {
    Trunk = STRIP_ID_TRUNK,
    Branch1Left = STRIP_ID_BRANCH1_LEFT,
    Branch1Right = STRIP_ID_BRANCH1_RIGHT,
    Branch2Left = STRIP_ID_BRANCH2_LEFT,
    Branch2Right = STRIP_ID_BRANCH2_RIGHT,
    Branch3Left = STRIP_ID_BRANCH3_LEFT,
    Branch3Right = STRIP_ID_BRANCH3_RIGHT,
}

impl StripId {
    /// All strips in output order
    pub const ALL: [Self; STRIP_COUNT] = [
        Self::Trunk,
        Self::Branch1Left,
        Self::Branch1Right,
        Self::Branch2Left,
        Self::Branch2Right,
        Self::Branch3Left,
        Self::Branch3Right,
    ];

    /// Position of the strip in [`StripId::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable name of the strip
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trunk => STRIP_NAME_TRUNK,
            Self::Branch1Left => STRIP_NAME_BRANCH1_LEFT,
            Self::Branch1Right => STRIP_NAME_BRANCH1_RIGHT,
            Self::Branch2Left => STRIP_NAME_BRANCH2_LEFT,
            Self::Branch2Right => STRIP_NAME_BRANCH2_RIGHT,
            Self::Branch3Left => STRIP_NAME_BRANCH3_LEFT,
            Self::Branch3Right => STRIP_NAME_BRANCH3_RIGHT,
        }
    }

    /// Parse a name produced by [`StripId::as_str`]
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STRIP_NAME_TRUNK => Some(Self::Trunk),
            STRIP_NAME_BRANCH1_LEFT => Some(Self::Branch1Left),
            STRIP_NAME_BRANCH1_RIGHT => Some(Self::Branch1Right),
            STRIP_NAME_BRANCH2_LEFT => Some(Self::Branch2Left),
            STRIP_NAME_BRANCH2_RIGHT => Some(Self::Branch2Right),
            STRIP_NAME_BRANCH3_LEFT => Some(Self::Branch3Left),
            STRIP_NAME_BRANCH3_RIGHT => Some(Self::Branch3Right),
            _ => None,
        }
    }
}

impl fmt::Display for StripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Move every color one slot toward the tail, dropping the last one
///
/// Index 0 keeps its old value; the caller overwrites it afterwards.
pub fn shift_toward_tail<T: Copy>(leds: &mut [T]) {
    let len = leds.len();
    if len < 2 {
        return;
    }
    leds.copy_within(0..len - 1, 1);
}

/// Colors of one physical strip
///
/// The length is fixed at construction and never changes afterwards.
/// N is the buffer capacity.
#[derive(Debug, Clone)]
pub struct Strip<const N: usize> {
    id: StripId,
    leds: Vec<Rgb, N>,
}

impl<const N: usize> Strip<N> {
    /// Create a black strip of `len` LEDs
    pub fn new(id: StripId, len: usize) -> Result<Self, ConfigError> {
        let mut leds = Vec::new();
        leds.resize(len, BLACK)
            .map_err(|()| ConfigError::StripTooLong {
                strip: id,
                len,
                capacity: N,
            })?;
        Ok(Self { id, leds })
    }

    pub const fn id(&self) -> StripId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Colors from head to tail
    pub fn colors(&self) -> &[Rgb] {
        &self.leds
    }

    /// Color at `index`, if it lies within the strip
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.leds.get(index).copied()
    }

    /// Shift all colors one slot toward the tail
    pub fn shift(&mut self) {
        shift_toward_tail(&mut self.leds);
    }

    /// Shift the strip and place `color` at the head
    pub fn push_head(&mut self, color: Rgb) {
        self.shift();
        if let Some(head) = self.leds.first_mut() {
            *head = color;
        }
    }

    /// Turn every LED black, keeping the length
    pub fn clear(&mut self) {
        self.leds.fill(BLACK);
    }
}
