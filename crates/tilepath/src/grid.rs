//! The walkability map searched by both A* variants.
//!
//! Each tile carries a one-byte walk code: `0` is blocked,
//! [`INVALID_WALK_CODE`] (`255`) is reserved for "outside the map", and every
//! other value is walkable at uniform cost.

use std::fmt;

use tilepath_core::{Point, Range};

/// Walk code of a blocked tile.
pub const BLOCKED_WALK_CODE: u8 = 0;

/// Reserved walk code. Also returned by [`WalkabilityGrid::tile_at`] for
/// points outside the grid.
pub const INVALID_WALK_CODE: u8 = 255;

/// Errors raised while building a [`WalkabilityGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The cell buffer does not hold exactly `width * height` codes, or the
    /// dimensions cannot be addressed with `i32` coordinates.
    InvalidDimensions { width: u32, height: u32, len: usize },
    /// A line of an ASCII map differs in width from the first line.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// An ASCII map contains a character with no walk-code mapping.
    InvalidTile { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height, len } => write!(
                f,
                "invalid grid dimensions: {width}x{height} does not match {len} cells"
            ),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "ascii map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidTile { ch, pos } => {
                write!(f, "ascii map: invalid tile \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular map of walk codes, stored row-major.
///
/// The grid is read-only once built; [`configure`](Self::configure) is the
/// only way to change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkabilityGrid {
    rng: Range,
    cells: Vec<u8>,
}

impl WalkabilityGrid {
    /// Build a grid from `width * height` walk codes in row-major order.
    pub fn new(width: u32, height: u32, cells: &[u8]) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidDimensions {
            width,
            height,
            len: cells.len(),
        };
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        let expected = (width as usize).checked_mul(height as usize).ok_or_else(invalid)?;
        if cells.len() != expected {
            return Err(invalid());
        }
        Ok(Self {
            rng: Range::with_size(w, h),
            cells: cells.to_vec(),
        })
    }

    /// Replace this grid with a new map.
    ///
    /// On error the previous map is left untouched.
    pub fn configure(&mut self, width: u32, height: u32, cells: &[u8]) -> Result<(), GridError> {
        match Self::new(width, height, cells) {
            Ok(grid) => {
                *self = grid;
                log::info!(
                    "walkability grid configured: {}x{}, {} walkable tiles",
                    width,
                    height,
                    self.walkable_count()
                );
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected walkability grid: {e}");
                Err(e)
            }
        }
    }

    /// Parse an ASCII map.
    ///
    /// `#` is blocked, `.` is walkable (code 1), the digits `1`-`9` are
    /// walkable with that code and `X` is the reserved invalid code. All
    /// lines must have the same width; surrounding whitespace of the whole
    /// string is ignored.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        let mut cells = Vec::with_capacity(s.len());
        let mut width = 0usize;
        let mut height = 0usize;

        for (y, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let found = line.chars().count();
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let code = match ch {
                    '#' => BLOCKED_WALK_CODE,
                    '.' => 1,
                    'X' => INVALID_WALK_CODE,
                    '1'..='9' => ch as u8 - b'0',
                    _ => {
                        return Err(GridError::InvalidTile {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(code);
            }
            height += 1;
        }

        Self::new(width as u32, height as u32, &cells)
    }

    /// Width in tiles.
    #[inline]
    pub fn width(&self) -> u32 {
        self.rng.width() as u32
    }

    /// Height in tiles.
    #[inline]
    pub fn height(&self) -> u32 {
        self.rng.height() as u32
    }

    /// The `[0, width) × [0, height)` range covered by the grid.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid. Both upper bounds are exclusive.
    #[inline]
    pub fn is_in_bounds(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// The raw walk code at `p`, or [`INVALID_WALK_CODE`] outside the grid.
    #[inline]
    pub fn tile_at(&self, p: Point) -> u8 {
        match self.rng.index_of(p) {
            Some(i) => self.cells[i],
            None => INVALID_WALK_CODE,
        }
    }

    /// Whether `p` is inside the grid and its code is neither blocked nor
    /// invalid.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        let t = self.tile_at(p);
        t != BLOCKED_WALK_CODE && t != INVALID_WALK_CODE
    }

    /// Count of walkable tiles.
    pub fn walkable_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c != BLOCKED_WALK_CODE && c != INVALID_WALK_CODE)
            .count()
    }

    /// Row-major walk codes.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
