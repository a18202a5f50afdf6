//! Monochrome bitmap stored directly as XPM text.
//!
//! The pixel rows live inside the XPM document itself, so painting a pixel
//! means overwriting one byte of the text and serializing is free.

use crate::Error;

const BLACK: u8 = b'*';
const WHITE: u8 = b'.';

// Per row: leading '"', then trailing '",' and a newline.
const ROW_OVERHEAD: usize = 4;
const FOOTER: &[u8] = b"}\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    data: Vec<u8>,
    width: usize,
    height: usize,
    /// Offset of the first pixel row within `data`.
    header_len: usize,
}

fn header(width: usize, height: usize) -> String {
    format!(
        "/* XPM */\n\
         static char *[] = {{\n\
         \"{width} {height} 2 1\",\n\
         \"* c #000000\",\n\
         \". c #ffffff\",\n"
    )
}

impl Canvas {
    /// An invalid canvas: no pixels and nothing to serialize.
    pub const fn empty() -> Self {
        Self { data: Vec::new(), width: 0, height: 0, header_len: 0 }
    }

    /// Allocates a white canvas. Fails with [Error::BadInput] if a dimension
    /// is zero and with [Error::OutOfMemory] if the text can not be
    /// allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(Error::BadInput);
        }

        let header = header(width, height);
        // the last row has no trailing ','
        let len = width
            .checked_add(ROW_OVERHEAD)
            .and_then(|row| row.checked_mul(height))
            .and_then(|rows| rows.checked_add(header.len() + FOOTER.len() - 1))
            .ok_or(Error::OutOfMemory)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::OutOfMemory)?;

        data.extend_from_slice(header.as_bytes());
        for y in 0..height {
            data.push(b'"');
            data.resize(data.len() + width, WHITE);
            let end: &[u8] = if y + 1 < height { b"\",\n" } else { b"\"\n" };
            data.extend_from_slice(end);
        }
        data.extend_from_slice(FOOTER);
        debug_assert_eq!(data.len(), len);

        Ok(Self { data, width, height, header_len: header.len() })
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the canvas holds pixels (both dimensions non zero).
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.data.is_empty()
    }

    /// Position of pixel (x, y) in the XPM text.
    #[inline]
    pub(crate) const fn offset(&self, x: usize, y: usize) -> usize {
        self.header_len +               // skip the header
            (self.width + ROW_OVERHEAD) * y +
            x + 1                       // leading '"'
    }

    /// Paints a black bar `width` pixels wide starting at column `x`, over
    /// the whole height of the canvas. Out of range arguments are clamped
    /// into the canvas; on an invalid canvas this does nothing.
    pub fn fill_run(&mut self, x: usize, width: usize) {
        if !self.is_valid() {
            return;
        }

        let x = x.min(self.width - 1);
        let width = width.min(self.width - x);

        for y in 0..self.height {
            let begin = self.offset(x, y);
            self.data[begin..begin + width].fill(BLACK);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        match self.data[self.offset(x, y)] {
            BLACK => Some(Color::Black),
            _ => Some(Color::White),
        }
    }

    /// All pixels as `(x, y, color)`, row by row.
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        (0..self.height).flat_map(move |y| {
            let begin = self.offset(0, y);
            self.data[begin..begin + self.width]
                .iter()
                .enumerate()
                .map(move |(x, &b)| (x, y, if b == BLACK { Color::Black } else { Color::White }))
        })
    }

    /// The image as XPM text, or `None` if the canvas is invalid.
    pub fn to_xpm(&self) -> Option<&str> {
        if self.is_valid() {
            core::str::from_utf8(&self.data).ok()
        } else {
            None
        }
    }

    /// Same as [Canvas::to_xpm], as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        if self.is_valid() { Some(self.data.as_slice()) } else { None }
    }
}

#[cfg(feature = "embedded-graphics")]
mod graphics {
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::{DrawTarget, Drawable, OriginDimensions, Pixel, Point, Size};

    use super::{Canvas, Color};

    impl From<Color> for BinaryColor {
        fn from(color: Color) -> Self {
            match color {
                Color::Black => BinaryColor::On,
                Color::White => BinaryColor::Off,
            }
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(self.width as u32, self.height as u32)
        }
    }

    impl Drawable for Canvas {
        type Color = BinaryColor;
        type Output = ();

        fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
        where
            D: DrawTarget<Color = Self::Color>,
        {
            target.draw_iter(
                self.pixels()
                    .map(|(x, y, c)| Pixel(Point::new(x as i32, y as i32), c.into())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_is_unavailable() {
        let canvas = Canvas::empty();
        assert!(!canvas.is_valid());
        assert_eq!(canvas.to_xpm(), None);
        assert_eq!(canvas.as_bytes(), None);
        assert_eq!(Canvas::default(), canvas);
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert_eq!(Canvas::new(0, 5), Err(Error::BadInput));
        assert_eq!(Canvas::new(5, 0), Err(Error::BadInput));
    }

    #[test]
    fn test_huge_canvas_is_out_of_memory() {
        assert_eq!(Canvas::new(usize::MAX, 2), Err(Error::OutOfMemory));
        assert_eq!(Canvas::new(usize::MAX / 8, 4), Err(Error::OutOfMemory));
    }

    #[test]
    fn test_single_pixel_layout() {
        let canvas = Canvas::new(1, 1).unwrap();
        assert_eq!(canvas.to_xpm().unwrap(), concat!(
            "/* XPM */\n",
            "static char *[] = {\n",
            "\"1 1 2 1\",\n",
            "\"* c #000000\",\n",
            "\". c #ffffff\",\n",
            "\".\"\n",
            "}\n",
        ));
    }

    #[test]
    fn test_rows_layout() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.fill_run(1, 2);
        assert_eq!(canvas.to_xpm().unwrap(), concat!(
            "/* XPM */\n",
            "static char *[] = {\n",
            "\"4 3 2 1\",\n",
            "\"* c #000000\",\n",
            "\". c #ffffff\",\n",
            "\".**.\",\n",
            "\".**.\",\n",
            "\".**.\"\n",
            "}\n",
        ));
    }

    #[test]
    fn test_corner_offsets() {
        let canvas = Canvas::new(5, 3).unwrap();
        let bytes = canvas.as_bytes().unwrap();
        // "/* XPM */\n" + "static char *[] = {\n" + "\"5 3 2 1\",\n" + 2 * colors
        let header_len = 10 + 20 + 11 + 15 + 15;

        assert_eq!(canvas.offset(0, 0), header_len + 1);
        assert_eq!(canvas.offset(4, 0), header_len + 5);
        assert_eq!(canvas.offset(0, 2), header_len + 2 * 9 + 1);
        assert_eq!(canvas.offset(4, 2), header_len + 2 * 9 + 5);

        for y in [0, 2] {
            assert_eq!(bytes[canvas.offset(0, y) - 1], b'"');
            assert_eq!(bytes[canvas.offset(4, y) + 1], b'"');
        }
        assert_eq!(&bytes[canvas.offset(4, 0) + 1..canvas.offset(0, 1)], b"\",\n\"");
        assert_eq!(&bytes[canvas.offset(4, 2) + 1..], b"\"\n}\n");
    }

    #[test]
    fn test_corner_pixels() {
        let mut canvas = Canvas::new(5, 3).unwrap();
        canvas.fill_run(0, 1);
        canvas.fill_run(4, 1);

        for (x, y) in [(0, 0), (4, 0), (0, 2), (4, 2)] {
            assert_eq!(canvas.pixel(x, y), Some(Color::Black), "({x}, {y})");
        }
        for x in 1..4 {
            assert_eq!(canvas.pixel(x, 1), Some(Color::White));
        }
        assert_eq!(canvas.pixel(5, 0), None);
        assert_eq!(canvas.pixel(0, 3), None);
    }

    #[test]
    fn test_fill_run_clamps() {
        let mut canvas = Canvas::new(6, 2).unwrap();
        let before = canvas.to_xpm().unwrap().len();

        // past the right edge: clamped to the last column
        canvas.fill_run(100, 3);
        let row: Vec<Color> = (0..6).map(|x| canvas.pixel(x, 1).unwrap()).collect();
        assert_eq!(&row[..5], &[Color::White; 5]);
        assert_eq!(row[5], Color::Black);

        // too wide: truncated at the right edge
        canvas.fill_run(2, 100);
        let row: Vec<Color> = (0..6).map(|x| canvas.pixel(x, 0).unwrap()).collect();
        assert_eq!(row, [Color::White, Color::White, Color::Black, Color::Black, Color::Black, Color::Black]);

        // the text never grows
        assert_eq!(canvas.to_xpm().unwrap().len(), before);
        assert!(canvas.to_xpm().unwrap().ends_with("\"..****\"\n}\n"));
    }

    #[test]
    fn test_fill_run_on_empty_canvas() {
        let mut canvas = Canvas::empty();
        canvas.fill_run(0, 10);
        assert_eq!(canvas, Canvas::empty());
    }

    #[test]
    fn test_pixels_row_major() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.fill_run(1, 1);
        let pixels: Vec<_> = canvas.pixels().collect();
        assert_eq!(pixels, [
            (0, 0, Color::White), (1, 0, Color::Black), (2, 0, Color::White),
            (0, 1, Color::White), (1, 1, Color::Black), (2, 1, Color::White),
        ]);
    }

    #[cfg(feature = "embedded-graphics")]
    #[test]
    fn test_draw_on_target() {
        use core::convert::Infallible;
        use embedded_graphics::pixelcolor::BinaryColor;
        use embedded_graphics::prelude::*;

        struct Collect {
            size: Size,
            on: Vec<Point>,
        }

        impl OriginDimensions for Collect {
            fn size(&self) -> Size {
                self.size
            }
        }

        impl DrawTarget for Collect {
            type Color = BinaryColor;
            type Error = Infallible;

            fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
            where
                I: IntoIterator<Item = Pixel<Self::Color>>,
            {
                for Pixel(p, c) in pixels {
                    if c.is_on() {
                        self.on.push(p);
                    }
                }
                Ok(())
            }
        }

        let mut canvas = Canvas::new(4, 2).unwrap();
        canvas.fill_run(2, 1);
        assert_eq!(canvas.size(), Size::new(4, 2));

        let mut target = Collect { size: canvas.size(), on: Vec::new() };
        canvas.draw(&mut target).unwrap();
        assert_eq!(target.on, [Point::new(2, 0), Point::new(2, 1)]);
    }
}
