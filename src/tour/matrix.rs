//! Dense weight matrix.

use crate::error::{Result, TourError};

/// A dense n×n weight matrix stored in row-major order.
///
/// Entry `(from, to)` is the cost of travelling along the directed edge
/// `from → to`. The matrix may be asymmetric, and `f64::INFINITY` marks a
/// forbidden edge. NaN and negative entries (including `-∞`) are rejected at
/// construction, so every tour cost is non-negative.
///
/// # Examples
///
/// ```
/// use u_tour::tour::WeightMatrix;
///
/// let wm = WeightMatrix::from_rows(vec![
///     vec![0.0, 3.0],
///     vec![5.0, 0.0],
/// ]).unwrap();
/// assert_eq!(wm.get(0, 1), 3.0);
/// assert_eq!(wm.get(1, 0), 5.0);
/// assert!(!wm.is_symmetric(1e-10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    data: Vec<f64>,
    size: usize,
}

impl WeightMatrix {
    /// Creates a matrix from an explicit row-major grid of `size * size` entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        let expected = size * size;
        if data.len() != expected {
            return Err(TourError::NotSquare {
                expected,
                actual: data.len(),
            });
        }
        if let Some(pos) = data.iter().position(|w| w.is_nan()) {
            return Err(TourError::NanWeight {
                from: pos / size,
                to: pos % size,
            });
        }
        if let Some(pos) = data.iter().position(|&w| w < 0.0) {
            return Err(TourError::NegativeWeight {
                from: pos / size,
                to: pos % size,
                weight: data[pos],
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from nested rows.
    ///
    /// Every row must have as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(TourError::NotSquare {
                    expected: size * size,
                    actual: data.len() + row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a matrix by evaluating `weight(from, to)` for every pair.
    pub fn from_fn<F>(size: usize, mut weight: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(size * size);
        for from in 0..size {
            for to in 0..size {
                data.push(weight(from, to));
            }
        }
        Self::from_data(size, data)
    }

    /// Returns the weight of the edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries of the same sign count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a != b && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate reachable from `from` at the lowest weight.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest(
        &self,
        from: usize,
        candidates: impl IntoIterator<Item = usize>,
    ) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let w = self.get(from, c);
            match best {
                Some((_, bw)) if w >= bw => {}
                _ => best = Some((c, w)),
            }
        }
        best.map(|(c, _)| c)
    }
}
