use core::{fmt, iter};

/// Number of elements (bars and gaps) in every Code 39 character.
pub const PATTERN_LEN: usize = 9;
/// Number of wide elements in every Code 39 character.
pub const WIDE_PER_CHAR: usize = 3;
/// Number of narrow elements in every Code 39 character.
pub const NARROW_PER_CHAR: usize = PATTERN_LEN - WIDE_PER_CHAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Narrow,
    Wide,
}

/// One bar or gap of a [Pattern]. Even positions are bars, odd positions
/// are gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    pub position: u8,
    pub width: Width,
}

impl Element {
    #[inline]
    pub const fn is_bar(&self) -> bool {
        self.position % 2 == 0
    }

    #[inline]
    pub const fn is_wide(&self) -> bool {
        matches!(self.width, Width::Wide)
    }
}

/// The 9 wide/narrow elements of one Code 39 character, packed as a mask
/// where bit `i` is set when element `i` is wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u16);

impl Pattern {
    /// Builds a pattern from its Format-1 notation: `W`/`N` for wide/narrow
    /// bars and `w`/`n` for wide/narrow gaps. Panics (at compile time when
    /// used in a const) if the notation is malformed.
    pub const fn from_format1(s: &str) -> Self {
        let s = s.as_bytes();
        assert!(s.len() == PATTERN_LEN, "a Code 39 pattern has exactly 9 elements");

        let mut mask = 0u16;
        let mut i = 0;
        while i < PATTERN_LEN {
            let bar = i % 2 == 0;
            match s[i] {
                b'W' if bar => mask |= 1 << i,
                b'w' if !bar => mask |= 1 << i,
                b'N' if bar => (),
                b'n' if !bar => (),
                _ => panic!("bars must be `W`/`N` and gaps must be `w`/`n`"),
            }
            i += 1;
        }

        assert!(mask.count_ones() as usize == WIDE_PER_CHAR,
            "a Code 39 pattern has exactly 3 wide elements");
        Self(mask)
    }

    #[inline]
    pub const fn mask(&self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn is_wide(&self, position: usize) -> bool {
        position < PATTERN_LEN && (self.0 >> position) & 1 != 0
    }

    #[inline]
    pub const fn wide_count(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn narrow_count(&self) -> usize {
        PATTERN_LEN - self.wide_count()
    }

    /// Total width in pixels of the pattern's bars and gaps.
    pub const fn width(&self, narrow: usize, wide: usize) -> usize {
        self.narrow_count() * narrow + self.wide_count() * wide
    }

    pub const fn elements(&self) -> Elements {
        Elements { mask: self.0, front: 0, back: PATTERN_LEN as u8 }
    }
}

impl iter::IntoIterator for Pattern {
    type Item = Element;
    type IntoIter = Elements;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in self.elements() {
            let c = match (e.is_bar(), e.width) {
                (true, Width::Wide) => 'W',
                (true, Width::Narrow) => 'N',
                (false, Width::Wide) => 'w',
                (false, Width::Narrow) => 'n',
            };
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Elements {
    mask: u16,
    front: u8,
    back: u8,
}

impl Elements {
    #[inline]
    fn element(&self, position: u8) -> Element {
        let width = if (self.mask >> position) & 1 != 0 { Width::Wide } else { Width::Narrow };
        Element { position, width }
    }
}

impl iter::Iterator for Elements {
    type Item = Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let e = self.element(self.front);
            self.front += 1;
            Some(e)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = (self.back - self.front) as usize;
        (count, Some(count))
    }
}

impl iter::DoubleEndedIterator for Elements {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.element(self.back))
        } else {
            None
        }
    }
}

impl iter::ExactSizeIterator for Elements {}
impl iter::FusedIterator for Elements {}
