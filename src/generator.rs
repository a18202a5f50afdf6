use tracing::{debug, trace};

use crate::canvas::Canvas;
use crate::config::{self, GeneratorConfig};
use crate::pattern::Pattern;
use crate::tables::{self, DELIMITER};
use crate::{symbol_width, Error};

/// Code 39 barcode generator. Holds its own [GeneratorConfig] and the
/// bitmap of the last successful call.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
    bitmap: Canvas,
}

/// Horizontal drawing position, moving left to right over a canvas.
struct Pen<'a> {
    canvas: &'a mut Canvas,
    x: usize,
    narrow: usize,
    wide: usize,
}

impl Pen<'_> {
    fn advance(&mut self, width: usize) {
        self.x += width;
    }

    /// Paints the bars of `pattern` and leaves the pen right after its last
    /// element.
    fn draw(&mut self, pattern: Pattern) {
        for element in pattern {
            let width = if element.is_wide() { self.wide } else { self.narrow };
            if element.is_bar() {
                self.canvas.fill_run(self.x, width);
            }
            self.advance(width);
        }
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: GeneratorConfig) -> Self {
        Self { config, bitmap: Canvas::empty() }
    }

    #[inline]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline]
    pub const fn wide_to_narrow_ratio(&self) -> f64 {
        self.config.ratio()
    }

    /// Ratio between wide and narrow bars, clamped to [2, 3]. Applies to
    /// subsequent calls only.
    pub fn set_wide_to_narrow_ratio(&mut self, ratio: f64) {
        self.config = self.config.with_ratio(ratio);
    }

    pub fn set_height(&mut self, height: u32) {
        self.config = self.config.with_height(height);
    }

    pub fn set_narrow_width(&mut self, narrow_width: u32) {
        self.config = self.config.with_narrow_width(narrow_width);
    }

    /// Bitmap of the last successful call, invalid if there was none or the
    /// last call failed.
    #[inline]
    pub const fn bitmap(&self) -> &Canvas {
        &self.bitmap
    }

    pub fn into_bitmap(self) -> Canvas {
        self.bitmap
    }

    /// Same as [Generator::generate] with the height and narrow bar width of
    /// the configuration.
    pub fn encode(&mut self, text: &str) -> Result<(), Error> {
        self.generate(text, self.config.height(), self.config.narrow_width())
    }

    /// Draws `text` framed by start/stop delimiters into a fresh bitmap of
    /// `height` pixels, with narrow bars `narrow_width` pixels wide. On
    /// failure no bitmap is kept.
    pub fn generate(&mut self, text: &str, height: u32, narrow_width: u32) -> Result<(), Error> {
        self.bitmap = Canvas::empty();
        self.bitmap = self.render(text, height, narrow_width)?;
        Ok(())
    }

    fn render(&self, text: &str, height: u32, narrow_width: u32) -> Result<Canvas, Error> {
        if height < 1 || narrow_width < 1 {
            debug!(height, narrow_width, "rejecting barcode geometry");
            return Err(Error::BadInput);
        }

        let narrow = narrow_width as usize;
        let wide = config::wide_width(narrow_width, self.config.ratio());
        let len = text.chars().count();

        let width = symbol_width(len, narrow, wide).ok_or(Error::OutOfMemory)?;
        debug!(width, height, narrow, wide, chars = len + 2, "allocating barcode bitmap");
        let mut canvas = Canvas::new(width, height as usize).map_err(|err| {
            debug!(width, height, "barcode bitmap allocation failed");
            err
        })?;

        let delimiter = tables::lookup(DELIMITER).ok_or(Error::InvalidCharacter(DELIMITER))?;
        let mut pen = Pen { canvas: &mut canvas, x: narrow, narrow, wide };

        pen.draw(delimiter);
        pen.advance(narrow);
        for c in text.chars() {
            let Some(pattern) = tables::lookup(c) else {
                debug!(?c, "character can not be encoded in Code 39");
                return Err(Error::InvalidCharacter(c));
            };
            trace!(?c, x = pen.x, "drawing character");
            pen.draw(pattern);
            pen.advance(narrow);
        }
        pen.draw(delimiter);

        debug_assert_eq!(pen.x + narrow, width);
        Ok(canvas)
    }
}
