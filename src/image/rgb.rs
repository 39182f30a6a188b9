/// Borrowed view over interleaved 8-bit RGB pixels.
#[derive(Clone, Copy, Debug)]
pub struct RgbU8<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between consecutive rows (equals `3 * w` when tightly packed).
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> RgbU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Raw bytes of row `y`, exactly `3 * w` long.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 3]
    }
}
