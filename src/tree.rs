//! Trunk-and-branches rainbow animation
//!
//! Each frame the trunk shifts one LED toward its tail and receives a fresh
//! hue at its head. Every branch pair then shifts and copies the trunk color
//! at its tap into both heads, so the rainbow fans out from the trunk with a
//! lag matching the tap position.

use crate::color::{Rgb, hsv_to_rgb};
use crate::config::{BRANCH_COUNT, BranchConfig, TreeConfig};
use crate::error::ConfigError;
use crate::hue::HueCursor;
use crate::strip::{Strip, StripId};

/// Two branch strips seeded from the same trunk index
#[derive(Debug, Clone)]
pub struct BranchPair<const N: usize> {
    tap: usize,
    left: Strip<N>,
    right: Strip<N>,
}

impl<const N: usize> BranchPair<N> {
    pub const fn tap(&self) -> usize {
        self.tap
    }

    pub const fn left(&self) -> &Strip<N> {
        &self.left
    }

    pub const fn right(&self) -> &Strip<N> {
        &self.right
    }

    /// Shift both strips and seed their heads from the updated trunk
    ///
    /// `tap` is checked against the trunk length when the tree is built.
    pub fn advance(&mut self, trunk: &Strip<N>) {
        let seed = trunk.colors()[self.tap];
        self.left.push_head(seed);
        self.right.push_head(seed);
    }
}

/// Animation state of the whole tree
#[derive(Debug, Clone)]
pub struct RainbowTree<const N: usize> {
    hue: HueCursor,
    saturation: u8,
    value: u8,
    trunk: Strip<N>,
    branches: [BranchPair<N>; BRANCH_COUNT],
}

impl<const N: usize> RainbowTree<N> {
    /// Build an all-black tree
    pub fn new(config: &TreeConfig) -> Result<Self, ConfigError> {
        config.validate(N)?;

        let trunk = Strip::new(StripId::Trunk, config.trunk_len)?;
        let [b1, b2, b3] = config.branches;
        let branches = [
            Self::branch_pair(StripId::Branch1Left, StripId::Branch1Right, b1)?,
            Self::branch_pair(StripId::Branch2Left, StripId::Branch2Right, b2)?,
            Self::branch_pair(StripId::Branch3Left, StripId::Branch3Right, b3)?,
        ];

        Ok(Self {
            hue: HueCursor::new(),
            saturation: config.saturation,
            value: config.value,
            trunk,
            branches,
        })
    }

    fn branch_pair(
        left: StripId,
        right: StripId,
        config: BranchConfig,
    ) -> Result<BranchPair<N>, ConfigError> {
        Ok(BranchPair {
            tap: config.tap,
            left: Strip::new(left, config.left_len)?,
            right: Strip::new(right, config.right_len)?,
        })
    }

    /// Advance the animation by one frame
    ///
    /// The trunk is fully updated before any branch reads its tap.
    pub fn advance(&mut self) {
        let color = hsv_to_rgb(self.hue.advance(), self.saturation, self.value);
        self.trunk.push_head(color);

        for pair in &mut self.branches {
            pair.advance(&self.trunk);
        }
    }

    /// Black out every strip and rewind the hue
    pub fn reset(&mut self) {
        self.hue.reset();
        self.trunk.clear();
        for pair in &mut self.branches {
            pair.left.clear();
            pair.right.clear();
        }
    }

    /// Hue that the next frame will inject
    pub const fn hue(&self) -> u16 {
        self.hue.get()
    }

    pub const fn trunk(&self) -> &Strip<N> {
        &self.trunk
    }

    /// Branch pair by 0-based index
    pub fn branch(&self, index: usize) -> Option<&BranchPair<N>> {
        self.branches.get(index)
    }

    pub fn strip(&self, id: StripId) -> &Strip<N> {
        match id {
            StripId::Trunk => &self.trunk,
            StripId::Branch1Left => &self.branches[0].left,
            StripId::Branch1Right => &self.branches[0].right,
            StripId::Branch2Left => &self.branches[1].left,
            StripId::Branch2Right => &self.branches[1].right,
            StripId::Branch3Left => &self.branches[2].left,
            StripId::Branch3Right => &self.branches[2].right,
        }
    }

    /// All strips in [`StripId::ALL`] order
    pub fn strips(&self) -> impl Iterator<Item = &Strip<N>> {
        StripId::ALL.into_iter().map(|id| self.strip(id))
    }

    /// Colors of a strip
    pub fn colors(&self, id: StripId) -> &[Rgb] {
        self.strip(id).colors()
    }
}
