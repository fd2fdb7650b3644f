//! Fixed-capacity stereo delay line for the interaural time difference.

/// Capacity of each channel in samples. Bounds the ITD at any sample rate.
pub const MAX_DELAY_SAMPLES: usize = 64;

/// Two circular buffers sharing one write cursor.
///
/// Storage is inline, so the line never allocates and never resizes. Each sample is
/// written with [`write`](Self::write), read back with per-channel delays, then the
/// cursor is moved with [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct StereoDelayLine {
    left: [f32; MAX_DELAY_SAMPLES],
    right: [f32; MAX_DELAY_SAMPLES],
    write_pos: usize,
}

impl StereoDelayLine {
    pub fn new() -> Self {
        Self {
            left: [0.0; MAX_DELAY_SAMPLES],
            right: [0.0; MAX_DELAY_SAMPLES],
            write_pos: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        MAX_DELAY_SAMPLES
    }

    #[inline]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    #[inline]
    pub fn write(&mut self, left: f32, right: f32) {
        self.left[self.write_pos] = left;
        self.right[self.write_pos] = right;
    }

    /// Read each channel `delay` samples behind the cursor.
    ///
    /// A delay of 0 returns the sample just written. Delays are capped at the
    /// capacity, and a delay equal to the capacity wraps onto the cursor.
    #[inline]
    pub fn read(&self, left_delay: usize, right_delay: usize) -> (f32, f32) {
        let cap = MAX_DELAY_SAMPLES;
        let left_pos = (self.write_pos + cap - left_delay.min(cap)) % cap;
        let right_pos = (self.write_pos + cap - right_delay.min(cap)) % cap;
        (self.left[left_pos], self.right[right_pos])
    }

    #[inline]
    pub fn advance(&mut self) {
        self.write_pos = (self.write_pos + 1) % MAX_DELAY_SAMPLES;
    }

    pub fn clear(&mut self) {
        self.left.fill(0.0);
        self.right.fill(0.0);
        self.write_pos = 0;
    }

    pub(crate) fn is_silent(&self) -> bool {
        self.left.iter().chain(self.right.iter()).all(|&s| s == 0.0)
    }
}

impl Default for StereoDelayLine {
    fn default() -> Self {
        Self::new()
    }
}
