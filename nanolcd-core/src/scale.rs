//! Glyph scratch buffer and edge-preserving magnification
//!
//! [`PixelBuffer`] is a fixed arena big enough for the largest glyph the
//! renderer produces (8x16 tripled to 24x48). The Scale2x/Scale3x passes
//! expand its active region in place: source pixels are visited from the
//! highest index to the lowest so every neighbourhood is read before any
//! destination write can land on it.
//!
//! Neighbourhood naming used below:
//!
//! ```text
//! A B C
//! D E F
//! G H I
//! ```
//!
//! Neighbours outside the active region are a sentinel that never compares
//! equal to anything, not even another sentinel.

use crate::color::Rgb565;

/// Scratch buffer width in pixels
pub const BUFFER_WIDTH: usize = 24;

/// Scratch buffer height in pixels
pub const BUFFER_HEIGHT: usize = 48;

/// Requested dimensions exceed the scratch buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BufferOverflow {
    pub width: usize,
    pub height: usize,
}

/// Neighbour value, `None` outside the active region
type Neighbor = Option<Rgb565>;

/// Sentinel-aware equality
fn same(a: Neighbor, b: Neighbor) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// `a` when it matches `b`, otherwise `e`
fn pick(a: Neighbor, b: Neighbor, e: Rgb565) -> Rgb565 {
    match (a, b) {
        (Some(a), Some(b)) if a == b => a,
        _ => e,
    }
}

/// `value` when `cond` holds, otherwise `e`
///
/// Callers only pass `cond = true` when `value` came out of a successful
/// [`same`] check, so it is never the sentinel.
fn pick_if(cond: bool, value: Neighbor, e: Rgb565) -> Rgb565 {
    match value {
        Some(v) if cond => v,
        _ => e,
    }
}

/// Fixed-capacity RGB565 scratch image
#[derive(Clone)]
pub struct PixelBuffer {
    pixels: [[Rgb565; BUFFER_WIDTH]; BUFFER_HEIGHT],
    width: usize,
    height: usize,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            pixels: [[Rgb565::BLACK; BUFFER_WIDTH]; BUFFER_HEIGHT],
            width: 0,
            height: 0,
        }
    }

    /// Active width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Active height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Replace the contents with a `width` x `height` image
    ///
    /// `pixel(x, y)` is called row-major for every pixel.
    pub fn load<F>(&mut self, width: usize, height: usize, mut pixel: F) -> Result<(), BufferOverflow>
    where
        F: FnMut(usize, usize) -> Rgb565,
    {
        check_capacity(width, height)?;
        for y in 0..height {
            for x in 0..width {
                self.pixels[y][x] = pixel(x, y);
            }
        }
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Pixel inside the active region
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x < self.width && y < self.height {
            Some(self.pixels[y][x])
        } else {
            None
        }
    }

    /// Active rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb565]> + '_ {
        self.pixels[..self.height]
            .iter()
            .map(move |row| &row[..self.width])
    }

    /// Active pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgb565> + '_ {
        self.rows().flat_map(|row| row.iter().copied())
    }

    /// Signed lookup so border cells can ask for `x - 1`
    fn at(&self, x: isize, y: isize) -> Neighbor {
        if x < 0 || y < 0 {
            None
        } else {
            self.get(x as usize, y as usize)
        }
    }

    /// Full 3x3 neighbourhood `[A, B, C, D, E, F, G, H, I]` around `(x, y)`
    fn neighborhood(&self, x: usize, y: usize) -> [Neighbor; 9] {
        let (x, y) = (x as isize, y as isize);
        [
            self.at(x - 1, y - 1),
            self.at(x, y - 1),
            self.at(x + 1, y - 1),
            self.at(x - 1, y),
            self.at(x, y),
            self.at(x + 1, y),
            self.at(x - 1, y + 1),
            self.at(x, y + 1),
            self.at(x + 1, y + 1),
        ]
    }

    /// Double the active region with the Scale2x rule
    ///
    /// Leaves the buffer untouched if the result would not fit.
    pub fn scale2x(&mut self) -> Result<(), BufferOverflow> {
        let (width, height) = (self.width, self.height);
        check_capacity(width * 2, height * 2)?;

        for y in (0..height).rev() {
            for x in (0..width).rev() {
                let [_, b, _, d, _, f, _, h, _] = self.neighborhood(x, y);
                let e = self.pixels[y][x];

                let block = if !same(b, h) && !same(d, f) {
                    [
                        [pick(d, b, e), pick(f, b, e)],
                        [pick(d, h, e), pick(f, h, e)],
                    ]
                } else {
                    [[e; 2]; 2]
                };

                for (dy, row) in block.iter().enumerate() {
                    for (dx, &pixel) in row.iter().enumerate() {
                        self.pixels[2 * y + dy][2 * x + dx] = pixel;
                    }
                }
            }
        }

        self.width = width * 2;
        self.height = height * 2;
        Ok(())
    }

    /// Triple the active region with the Scale3x rule
    ///
    /// Leaves the buffer untouched if the result would not fit.
    pub fn scale3x(&mut self) -> Result<(), BufferOverflow> {
        let (width, height) = (self.width, self.height);
        check_capacity(width * 3, height * 3)?;

        for y in (0..height).rev() {
            for x in (0..width).rev() {
                let [a, b, c, d, e, f, g, h, i] = self.neighborhood(x, y);
                let ev = self.pixels[y][x];

                let block = if !same(b, h) && !same(d, f) {
                    let db = same(d, b);
                    let bf = same(b, f);
                    let dh = same(d, h);
                    let hf = same(h, f);
                    [
                        [
                            pick(d, b, ev),
                            pick_if((db && !same(e, c)) || (bf && !same(e, a)), b, ev),
                            pick(f, b, ev),
                        ],
                        [
                            pick_if((db && !same(e, g)) || (dh && !same(e, a)), d, ev),
                            ev,
                            pick_if((bf && !same(e, i)) || (hf && !same(e, c)), f, ev),
                        ],
                        [
                            pick(d, h, ev),
                            pick_if((dh && !same(e, i)) || (hf && !same(e, g)), h, ev),
                            pick(f, h, ev),
                        ],
                    ]
                } else {
                    [[ev; 3]; 3]
                };

                for (dy, row) in block.iter().enumerate() {
                    for (dx, &pixel) in row.iter().enumerate() {
                        self.pixels[3 * y + dy][3 * x + dx] = pixel;
                    }
                }
            }
        }

        self.width = width * 3;
        self.height = height * 3;
        Ok(())
    }
}

fn check_capacity(width: usize, height: usize) -> Result<(), BufferOverflow> {
    if width > BUFFER_WIDTH || height > BUFFER_HEIGHT {
        #[cfg(feature = "defmt")]
        defmt::debug!("scratch overflow: {}x{}", width, height);
        return Err(BufferOverflow { width, height });
    }
    Ok(())
}
