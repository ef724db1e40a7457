/// Distance from the bottom, in content units, that counts as "near".
pub const DEFAULT_NEAR_BOTTOM_THRESHOLD: f64 = 75.0;

/// Detects when the viewport crosses into the near-bottom zone.
///
/// Fires once per crossing: consecutive positions that stay near the
/// bottom do not fire again until the viewport has left the zone.
#[derive(Debug, Clone)]
pub struct NearBottom {
    threshold: f64,
    near: Option<bool>,
}

impl NearBottom {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            near: None,
        }
    }

    /// Feed a scroll position. Returns true when a load-more signal
    /// should be emitted.
    pub fn observe(&mut self, content_height: f64, viewport_height: f64, offset: f64) -> bool {
        let from_bottom = content_height - viewport_height - offset;
        let near = from_bottom < self.threshold;
        let changed = self.near != Some(near);
        self.near = Some(near);
        changed && near
    }
}

impl Default for NearBottom {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_BOTTOM_THRESHOLD)
    }
}
