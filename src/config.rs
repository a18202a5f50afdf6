/// Smallest accepted wide to narrow bar ratio.
pub const MIN_RATIO: f64 = 2.0;
/// Largest accepted wide to narrow bar ratio.
pub const MAX_RATIO: f64 = 3.0;
/// Ratio used when none is configured.
pub const DEFAULT_RATIO: f64 = 3.0;

pub const DEFAULT_NARROW_WIDTH: u32 = 2;
pub const DEFAULT_HEIGHT: u32 = 50;

/// Rendering parameters of a [Generator](crate::Generator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    narrow_width: u32,
    height: u32,
    ratio: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfig {
    pub const fn new() -> Self {
        Self {
            narrow_width: DEFAULT_NARROW_WIDTH,
            height: DEFAULT_HEIGHT,
            ratio: DEFAULT_RATIO,
        }
    }

    /// Width of narrow bars and gaps in pixels.
    #[inline]
    pub const fn narrow_width(&self) -> u32 {
        self.narrow_width
    }

    /// Width of wide bars and gaps in pixels, `narrow_width * ratio`
    /// rounded down.
    #[inline]
    pub fn wide_width(&self) -> usize {
        wide_width(self.narrow_width, self.ratio)
    }

    /// Bitmap height in pixels.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Wide to narrow bar ratio, always within [MIN_RATIO, MAX_RATIO].
    #[inline]
    pub const fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Sets the wide to narrow ratio, silently clamped to
    /// [MIN_RATIO, MAX_RATIO].
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = clamp_ratio(ratio);
        self
    }

    pub const fn with_narrow_width(mut self, narrow_width: u32) -> Self {
        self.narrow_width = narrow_width;
        self
    }

    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }
}

pub(crate) fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        MIN_RATIO
    } else {
        ratio.clamp(MIN_RATIO, MAX_RATIO)
    }
}

pub(crate) fn wide_width(narrow_width: u32, ratio: f64) -> usize {
    (narrow_width as f64 * ratio) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.ratio(), DEFAULT_RATIO);
        assert_eq!(config.narrow_width(), DEFAULT_NARROW_WIDTH);
        assert_eq!(config.height(), DEFAULT_HEIGHT);
        assert_eq!(config.wide_width(), 6);
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(GeneratorConfig::new().with_ratio(1.0).ratio(), 2.0);
        assert_eq!(GeneratorConfig::new().with_ratio(5.0).ratio(), 3.0);
        assert_eq!(GeneratorConfig::new().with_ratio(2.5).ratio(), 2.5);
        assert_eq!(GeneratorConfig::new().with_ratio(f64::NAN).ratio(), MIN_RATIO);
        assert_eq!(GeneratorConfig::new().with_ratio(f64::INFINITY).ratio(), MAX_RATIO);
    }

    #[test]
    fn test_wide_width_truncates() {
        let config = GeneratorConfig::new().with_narrow_width(3).with_ratio(2.5);
        assert_eq!(config.wide_width(), 7);
        assert_eq!(config.with_ratio(3.0).wide_width(), 9);
        assert_eq!(config.with_narrow_width(0).wide_width(), 0);
        assert_eq!(config.with_ratio(3.0).with_narrow_width(u32::MAX).wide_width(), 3 * u32::MAX as usize);
    }
}
