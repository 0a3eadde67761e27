//! Axis-aligned collision footprints
//!
//! Every entity collides through a footprint: its nominal 101x171 sprite
//! rectangle shrunk by per-type insets down to the region that visually
//! counts as a hit. Footprints are recomputed whenever a position changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SPRITE_HEIGHT, SPRITE_WIDTH};

/// Per-entity-type insets `[left, top, right, bottom]` applied to the sprite
/// bounds when deriving the footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Collision footprint: an AABB inset from the sprite's nominal bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Footprint {
    /// Footprint of a sprite anchored at `pos`, shrunk by `insets`.
    pub fn for_sprite(pos: Vec2, insets: Insets) -> Self {
        Self {
            x: pos.x + insets.left,
            y: pos.y + insets.top,
            w: SPRITE_WIDTH - insets.left - insets.right,
            h: SPRITE_HEIGHT - insets.top - insets.bottom,
        }
    }

    /// AABB overlap with strict inequalities: footprints that merely share an
    /// edge do not collide.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
