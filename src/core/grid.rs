use super::dot::{Dot, DotStyle};
use glam::DVec2;
use rand::Rng;
use std::rc::Rc;

/// Row-major grid of dots covering a `width` x `height` area.
#[derive(Clone, Debug)]
pub struct DotGrid {
    rows: usize,
    cols: usize,
    width: f64,
    height: f64,
    dots: Vec<Dot>,
}

impl DotGrid {
    /// Lay out `floor(height / spacing)` rows and `floor(width / spacing)`
    /// columns, evenly subdividing the area so no dot sits on an edge.
    pub fn build(width: f64, height: f64, spacing: f64, style: Rc<DotStyle>, rng: &mut impl Rng) -> Self {
        let (rows, cols) = grid_dimensions(width, height, spacing);
        let row_step = height / (rows + 1) as f64;
        let col_step = width / (cols + 1) as f64;

        let mut dots = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            let top = row_step * (i + 1) as f64;
            for j in 0..cols {
                let left = col_step * (j + 1) as f64;
                dots.push(Dot::new(DVec2::new(left, top), style.clone(), rng));
            }
        }

        Self {
            rows,
            cols,
            width,
            height,
            dots,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Dot> {
        if row < self.rows && col < self.cols {
            self.dots.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[inline]
    pub fn dots_mut(&mut self) -> &mut [Dot] {
        &mut self.dots
    }
}

/// Number of (rows, cols) for an area; zero when the area or spacing is unusable.
pub fn grid_dimensions(width: f64, height: f64, spacing: f64) -> (usize, usize) {
    if !(spacing > 0.0) || !(width > 0.0) || !(height > 0.0) {
        return (0, 0);
    }
    let rows = (height / spacing).floor() as usize;
    let cols = (width / spacing).floor() as usize;
    (rows, cols)
}
