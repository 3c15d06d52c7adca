//! Rectangular sample grid shared by every image kind.
//!
//! Two bounds policies live side by side: [`PixelBuffer::get_checked`] and
//! [`PixelBuffer::set_checked`] report [`PnmError::OutOfBounds`], while
//! [`PixelBuffer::paint`] (used by the raster engine) silently clips.

use alloc::format;
use alloc::vec::Vec;

use crate::error::PnmError;

/// Row-major grid of `width * height` samples.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Copy + Default> PixelBuffer<T> {
    /// Buffer filled with `T::default()`.
    pub fn new(width: usize, height: usize) -> Result<Self, PnmError> {
        Self::filled(width, height, T::default())
    }

    /// Buffer filled with `value`.
    pub fn filled(width: usize, height: usize, value: T) -> Result<Self, PnmError> {
        let len = width
            .checked_mul(height)
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            data: alloc::vec![value; len],
            width,
            height,
        })
    }
}

impl<T: Copy> PixelBuffer<T> {
    /// Wrap row-major samples. `data.len()` must equal `width * height`.
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> Result<Self, PnmError> {
        let len = width
            .checked_mul(height)
            .ok_or(PnmError::DimensionsTooLarge { width, height })?;
        if data.len() != len {
            return Err(PnmError::InvalidDimensions(format!(
                "{} samples cannot form a {width}x{height} grid",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build from nested rows. Ragged input is rejected.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, PnmError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PnmError::InvalidDimensions(format!(
                    "row {y} has {} samples, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// All samples, row-major.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<T> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Sample at `(x, y)`; fails with [`PnmError::OutOfBounds`] outside the grid.
    pub fn get_checked(&self, x: usize, y: usize) -> Result<T, PnmError> {
        self.get(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Store `value` at `(x, y)`; fails with [`PnmError::OutOfBounds`] outside the grid.
    pub fn set_checked(&mut self, x: usize, y: usize, value: T) -> Result<(), PnmError> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }
        self.data[y * self.width + x] = value;
        Ok(())
    }

    /// Store `value` at `(x, y)` if it lies inside the grid; otherwise do nothing.
    ///
    /// Returns whether a sample was written.
    #[inline]
    pub fn paint(&mut self, x: i32, y: i32, value: T) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x] = value;
        true
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Iterate over rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; an empty grid has no rows either way
        self.data.chunks_exact(self.width.max(1)).take(self.height)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        let height = self.height;
        self.data.chunks_exact_mut(self.width.max(1)).take(height)
    }

    /// Apply `f` to every sample in place.
    pub fn for_each_mut(&mut self, f: impl FnMut(&mut T)) {
        self.data.iter_mut().for_each(f);
    }

    /// New buffer with `f` applied to every sample.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> PixelBuffer<U> {
        PixelBuffer {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Mirror horizontally: reverse the samples of every row.
    pub fn flip_horizontal(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Mirror vertically: reverse the row order.
    pub fn flip_vertical(&mut self) {
        let w = self.width;
        let h = self.height;
        for y in 0..h / 2 {
            let (top, bottom) = self.data.split_at_mut((h - 1 - y) * w);
            top[y * w..(y + 1) * w].swap_with_slice(&mut bottom[..w]);
        }
    }

    /// Rotated copy, 90 degrees clockwise.
    ///
    /// Output row `r`, column `c` is input row `height - 1 - c`, column `r`.
    pub fn rotated_90_cw(&self) -> Self {
        let (old_w, old_h) = (self.width, self.height);
        let mut data = Vec::with_capacity(self.data.len());
        for r in 0..old_w {
            for c in 0..old_h {
                data.push(self.data[(old_h - 1 - c) * old_w + r]);
            }
        }
        Self {
            data,
            width: old_h,
            height: old_w,
        }
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> PnmError {
        PnmError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(feature = "imgref")]
impl<T: Copy> PixelBuffer<T> {
    /// Zero-copy [`imgref::ImgRef`] view.
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, T> {
        imgref::ImgRef::new(&self.data, self.width, self.height)
    }

    /// Convert to an [`imgref::ImgVec`] without copying.
    pub fn into_imgvec(self) -> imgref::ImgVec<T> {
        imgref::ImgVec::new(self.data, self.width, self.height)
    }
}

#[cfg(feature = "imgref")]
impl<T: Copy> From<imgref::ImgVec<T>> for PixelBuffer<T> {
    fn from(img: imgref::ImgVec<T>) -> Self {
        let (data, width, height) = img.into_contiguous_buf();
        Self {
            data,
            width,
            height,
        }
    }
}
