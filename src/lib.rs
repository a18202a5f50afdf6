//! Code 39 barcode encoder.
//!
//! Text is framed by `*` delimiters, each character is drawn as its 9
//! wide/narrow bars and gaps, and the result is kept as a monochrome bitmap
//! that serializes to XPM.
//!
//! ```
//! use code39::Generator;
//!
//! let mut generator = Generator::new();
//! generator.generate("HELLO-39", 40, 2).unwrap();
//! let xpm = generator.bitmap().to_xpm().unwrap();
//! assert!(xpm.starts_with("/* XPM */"));
//! ```

pub mod canvas;
pub mod config;
mod error;
mod generator;
pub mod pattern;
pub mod tables;

pub use canvas::{Canvas, Color};
pub use config::GeneratorConfig;
pub use error::Error;
pub use generator::Generator;
pub use pattern::{Element, Pattern, Width};

use pattern::{NARROW_PER_CHAR, WIDE_PER_CHAR};

/// Width in pixels of the bitmap for a message of `len` characters: the
/// characters plus both delimiters, a narrow gap between characters and a
/// narrow margin on each side. `None` if it does not fit in a `usize`.
pub fn symbol_width(len: usize, narrow: usize, wide: usize) -> Option<usize> {
    let chars = len.checked_add(2)?;
    let gaps = chars - 1;

    let per_char = NARROW_PER_CHAR
        .checked_mul(narrow)?
        .checked_add(WIDE_PER_CHAR.checked_mul(wide)?)?;

    chars
        .checked_mul(per_char)?
        .checked_add(gaps.checked_mul(narrow)?)?
        .checked_add(narrow.checked_mul(2)?)
}
