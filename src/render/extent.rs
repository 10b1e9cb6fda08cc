/// Pixel sizes of the offscreen targets for one canvas size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TargetExtents {
    pub full: (u32, u32),
    /// Bloom ping-pong runs at half resolution.
    pub bloom: (u32, u32),
}

impl TargetExtents {
    pub fn for_canvas(width: u32, height: u32) -> Self {
        let full = (width.max(1), height.max(1));
        Self {
            full,
            bloom: ((full.0 / 2).max(1), (full.1 / 2).max(1)),
        }
    }

    pub fn bloom_resolution(&self) -> [f32; 2] {
        [self.bloom.0 as f32, self.bloom.1 as f32]
    }
}
