use ndarray::Array2;

/// Display-resolution record of which pixels the user has marked for editing.
///
/// Row-major, shape = (height, width). `true` means "regenerate this pixel".
/// Only the stroke rasterizer mutates the contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkBuffer {
    data: Array2<bool>,
}

impl MarkBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: Array2::from_elem((height as usize, width as usize), false),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        self.data.get([row, col]).copied()
    }

    /// Nearest-pixel lookup with coordinates clamped to the buffer edges.
    ///
    /// An empty buffer reads as unmarked everywhere.
    pub fn sample_clamped(&self, col: i64, row: i64) -> bool {
        let (h, w) = self.data.dim();
        if h == 0 || w == 0 {
            return false;
        }
        let c = col.clamp(0, w as i64 - 1) as usize;
        let r = row.clamp(0, h as i64 - 1) as usize;
        self.data[[r, c]]
    }

    pub fn data(&self) -> &Array2<bool> {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut Array2<bool> {
        &mut self.data
    }

    pub fn clear(&mut self) {
        self.data.fill(false);
    }

    pub fn marked_count(&self) -> usize {
        self.data.iter().filter(|&&m| m).count()
    }

    /// True when no pixel is marked.
    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&m| m)
    }

    /// Fraction of pixels marked, in [0.0, 1.0].
    pub fn coverage(&self) -> f64 {
        let total = self.data.len();
        if total == 0 {
            return 0.0;
        }
        self.marked_count() as f64 / total as f64
    }
}
