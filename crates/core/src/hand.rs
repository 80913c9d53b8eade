//! The player's hand: empty, or holding 1 to 3 blocks of one color.

use crate::types::{BlockColor, MAX_HELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hand {
    #[default]
    Empty,
    Holding { color: BlockColor, count: u8 },
}

impl Hand {
    /// Hold `count` blocks, clamped to 1..=MAX_HELD
    pub fn holding(color: BlockColor, count: u8) -> Self {
        Hand::Holding {
            color,
            count: count.clamp(1, MAX_HELD),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Hand::Empty)
    }

    pub fn color(&self) -> Option<BlockColor> {
        match self {
            Hand::Empty => None,
            Hand::Holding { color, .. } => Some(*color),
        }
    }

    pub fn count(&self) -> u8 {
        match self {
            Hand::Empty => 0,
            Hand::Holding { count, .. } => *count,
        }
    }

    /// Empty the hand, returning what it held
    pub fn take(&mut self) -> Hand {
        std::mem::take(self)
    }
}
