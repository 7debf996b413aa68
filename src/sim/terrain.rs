//! Effective ground height resolution
//!
//! A `TerrainQuery` is rebuilt each tick from the flat baseline and the slope
//! segments as they stand at that moment, then consulted by every vehicle at
//! its horizontal center.

use super::state::Slope;
use crate::Track;

/// Resolves ground height at a horizontal position
#[derive(Debug)]
pub struct TerrainQuery<'a> {
    baseline: f32,
    slopes: &'a [Slope],
}

impl<'a> TerrainQuery<'a> {
    pub fn new(track: &Track, slopes: &'a [Slope]) -> Self {
        let baseline = track.baseline();
        // Baseline is defined by construction; a non-finite value means the
        // track config is broken, not a condition to branch on.
        debug_assert!(baseline.is_finite());
        Self { baseline, slopes }
    }

    /// Ground height at `x`: the first slope whose span contains `x` wins,
    /// otherwise the flat baseline.
    ///
    /// First-match-wins under overlapping segments is a carried
    /// simplification; spawn spacing keeps segments far apart in practice.
    pub fn ground_at(&self, x: f32) -> f32 {
        self.slopes
            .iter()
            .find_map(|slope| slope.surface_at(x))
            .unwrap_or(self.baseline)
    }
}
