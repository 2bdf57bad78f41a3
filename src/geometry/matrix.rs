// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    array,
    ops::{Index, IndexMut, Mul},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

/// Generic row-major matrix R x C
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T: Scalar, const R: usize, const C: usize>(pub [[T; C]; R]);

pub type Matrix3<T> = Matrix<T, 3, 3>;
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ---------- Basics ----------
impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn new(data: [[T; C]; R]) -> Self {
        Matrix(data)
    }

    #[inline]
    pub fn zero() -> Self {
        Matrix([[T::zero(); C]; R])
    }

    /// Build from row vectors.
    #[inline]
    pub fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Matrix(array::from_fn(|i| rows[i].coords))
    }

    /// Transpose into C x R.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(array::from_fn(|j| array::from_fn(|i| self.0[i][j])))
    }

    /// Get a row as a Vector<T, C>.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<T, C> {
        Vector::from_vals(self.0[r])
    }

    /// Get a column as a Vector<T, R>.
    #[inline]
    pub fn col(&self, c: usize) -> Vector<T, R> {
        Vector::from_vals(array::from_fn(|i| self.0[i][c]))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| if i == j { T::one() } else { T::zero() })
        }))
    }

    /// In-place LU factorisation with partial pivoting.
    ///
    /// Returns the packed factors (unit-diagonal `L` below the diagonal, `U`
    /// on and above it) and the row permutation, or `None` when a pivot is
    /// tiny.
    pub fn lu(&self) -> Option<(Self, [usize; N])> {
        let mut a = self.0;
        let mut perm: [usize; N] = array::from_fn(|i| i);

        for k in 0..N {
            let mut pivot = k;
            for i in (k + 1)..N {
                if a[i][k].abs() > a[pivot][k].abs() {
                    pivot = i;
                }
            }
            if a[pivot][k].is_tiny() {
                return None;
            }
            if pivot != k {
                a.swap(pivot, k);
                perm.swap(pivot, k);
            }
            for i in (k + 1)..N {
                let f = a[i][k] / a[k][k];
                a[i][k] = f;
                for j in (k + 1)..N {
                    a[i][j] = a[i][j] - f * a[k][j];
                }
            }
        }
        Some((Matrix(a), perm))
    }

    /// Solves `self * x = b`, `None` for a singular system.
    pub fn solve(&self, b: &Vector<T, N>) -> Option<Vector<T, N>> {
        let (lu, perm) = self.lu()?;
        Some(lu_solve(&lu, &perm, b))
    }

    pub fn determinant(&self) -> T {
        match self.lu() {
            None => T::zero(),
            Some((lu, perm)) => {
                let mut det = T::one();
                for i in 0..N {
                    det = det * lu.0[i][i];
                }
                if permutation_is_odd(&perm) { -det } else { det }
            }
        }
    }

    pub fn inverse(&self) -> Option<Self> {
        let (lu, perm) = self.lu()?;
        let mut inv = Matrix::zero();
        for j in 0..N {
            let e = Vector::from_vals(array::from_fn(|i| if i == j { T::one() } else { T::zero() }));
            let x = lu_solve(&lu, &perm, &e);
            for i in 0..N {
                inv.0[i][j] = x[i];
            }
        }
        Some(inv)
    }
}

fn lu_solve<T: Scalar, const N: usize>(
    lu: &Matrix<T, N, N>,
    perm: &[usize; N],
    b: &Vector<T, N>,
) -> Vector<T, N> {
    let mut x: [T; N] = array::from_fn(|i| b[perm[i]]);
    for i in 0..N {
        for j in 0..i {
            x[i] = x[i] - lu.0[i][j] * x[j];
        }
    }
    for i in (0..N).rev() {
        for j in (i + 1)..N {
            x[i] = x[i] - lu.0[i][j] * x[j];
        }
        x[i] = x[i] / lu.0[i][i];
    }
    Vector::from_vals(x)
}

fn permutation_is_odd<const N: usize>(perm: &[usize; N]) -> bool {
    let mut seen = [false; N];
    let mut swaps = 0;
    for start in 0..N {
        if seen[start] {
            continue;
        }
        let mut len = 0;
        let mut i = start;
        while !seen[i] {
            seen[i] = true;
            i = perm[i];
            len += 1;
        }
        swaps += len - 1;
    }
    swaps % 2 == 1
}

// ---------- Indexing ----------
impl<T: Scalar, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl<T: Scalar, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;
    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        Vector::from_vals(array::from_fn(|i| self.row(i).dot(&v)))
    }
}

impl<T: Scalar, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, R, C> {
        Matrix(array::from_fn(|i| {
            array::from_fn(|j| {
                let mut s = T::zero();
                for k in 0..K {
                    s = s + self.0[i][k] * rhs.0[k][j];
                }
                s
            })
        }))
    }
}
