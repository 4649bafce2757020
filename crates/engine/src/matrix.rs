//! Toy matrix algebra over rows of `f64`.
//!
//! Element-wise operations and the matrix product accept any rectangular
//! shape and never check compatibility: an entry missing from the other
//! operand reads as NaN. Determinant and inverse only handle 2x2 input.

use crate::error::{MathError, MathResult};
use std::fmt;
use std::ops::Index;

/// A matrix stored as its rows. Row lengths are not checked; the column
/// count is the length of the first row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn new(data: Vec<Vec<f64>>) -> Self {
        Self { data }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let data = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Self { data }
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, |row| row.len())
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.data.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        self.data.get(row).map(|r| r.as_slice())
    }

    pub fn to_array(&self) -> &[Vec<f64>] {
        &self.data
    }

    pub fn into_array(self) -> Vec<Vec<f64>> {
        self.data
    }

    pub fn map<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self
                .data
                .iter()
                .map(|row| row.iter().map(|&v| f(v)).collect())
                .collect(),
        }
    }

    /// True when every entry is within `tolerance` of the matching entry of
    /// `other` and both have the same row lengths.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.data.len() == other.data.len()
            && self.data.iter().zip(&other.data).all(|(a, b)| {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() <= tolerance)
            })
    }

    #[inline]
    fn entry(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).unwrap_or(f64::NAN)
    }

    fn is_2x2(&self) -> bool {
        self.rows() == 2 && self.cols() == 2
    }
}

impl From<Vec<Vec<f64>>> for Matrix {
    fn from(data: Vec<Vec<f64>>) -> Self {
        Matrix::new(data)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0][index.1]
    }
}

// JSON array notation, e.g. [[1,2],[3,4]]. Non-finite entries print as null.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ",")?;
                }
                if !value.is_finite() {
                    write!(f, "null")?;
                } else if *value == 0.0 {
                    write!(f, "0")?; // no "-0"
                } else {
                    write!(f, "{}", value)?;
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

/// Wraps row data into a [`Matrix`].
pub fn matrix(data: Vec<Vec<f64>>) -> Matrix {
    Matrix::new(data)
}

fn zip_with<F>(a: &Matrix, b: &Matrix, f: F) -> Matrix
where
    F: Fn(f64, f64) -> f64,
{
    let data = a
        .data
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &x)| f(x, b.entry(i, j)))
                .collect()
        })
        .collect();
    Matrix { data }
}

/// Element-wise sum over the shape of `a`.
pub fn add(a: &Matrix, b: &Matrix) -> Matrix {
    zip_with(a, b, |x, y| x + y)
}

/// Element-wise difference over the shape of `a`.
pub fn subtract(a: &Matrix, b: &Matrix) -> Matrix {
    zip_with(a, b, |x, y| x - y)
}

/// Multiplies every entry by `k`.
pub fn scale(a: &Matrix, k: f64) -> Matrix {
    a.map(|v| v * k)
}

/// Matrix product: `a.rows()` rows, `b.cols()` columns, summing over the
/// rows of `b`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let inner = b.rows();
    let cols = b.cols();

    let data = (0..a.rows())
        .map(|i| {
            (0..cols)
                .map(|j| (0..inner).map(|k| a.entry(i, k) * b.entry(k, j)).sum::<f64>())
                .collect()
        })
        .collect();
    Matrix { data }
}

pub fn transpose(a: &Matrix) -> Matrix {
    let data = (0..a.cols())
        .map(|i| (0..a.rows()).map(|j| a.entry(j, i)).collect())
        .collect();
    Matrix { data }
}

/// Determinant of a 2x2 matrix. Any other shape yields 0.0, which is not a
/// determinant; callers that care must check the shape themselves.
pub fn det(a: &Matrix) -> f64 {
    if a.is_2x2() {
        a.entry(0, 0) * a.entry(1, 1) - a.entry(0, 1) * a.entry(1, 0)
    } else {
        0.0
    }
}

/// Inverse of a 2x2 matrix.
pub fn inv(a: &Matrix) -> MathResult<Matrix> {
    if !a.is_2x2() {
        tracing::debug!(rows = a.rows(), cols = a.cols(), "inverse of non-2x2 matrix");
        return Err(MathError::UnsupportedShape {
            operation: "Inverse".to_string(),
            rows: a.rows(),
            cols: a.cols(),
        });
    }

    let d = det(a);
    if d == 0.0 {
        tracing::debug!(matrix = %a, "inverse of singular matrix");
        return Err(MathError::SingularMatrix);
    }

    Ok(Matrix::new(vec![
        vec![a.entry(1, 1) / d, -a.entry(0, 1) / d],
        vec![-a.entry(1, 0) / d, a.entry(0, 0) / d],
    ]))
}
