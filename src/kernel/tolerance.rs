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

//! Process-wide epsilon policy.
//!
//! The active [`Tolerance`] is fixed the first time it is read. Call [`init`]
//! once at start-up to override the defaults; afterwards the value is
//! read-only for the lifetime of the process.

use std::sync::OnceLock;

use log::{debug, warn};

use crate::{error::GeometryError, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Threshold below which determinants, cross products and lengths are
    /// treated as zero.
    pub tiny: f64,
    /// Möller–Trumbore determinant threshold for "ray parallel to triangle".
    pub parallel_det: f64,
    /// Epsilon handed to the concave polygon triangulator.
    pub triangulation_eps: f64,
}

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance {
        tiny: 1e-12,
        parallel_det: 1e-7,
        triangulation_eps: 1e-5,
    };

    pub fn validate(&self) -> Result<(), GeometryError> {
        for (field, value) in [
            ("tiny", self.tiny),
            ("parallel_det", self.parallel_det),
            ("triangulation_eps", self.triangulation_eps),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::InvalidTolerance { field, value });
            }
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}

static GLOBAL: OnceLock<Tolerance> = OnceLock::new();

/// Installs the process-wide tolerance. Fails if a value is already active,
/// including the implicit default installed by an earlier [`global`] call.
pub fn init(tolerance: Tolerance) -> Result<(), GeometryError> {
    if let Err(err) = tolerance.validate() {
        warn!("rejected tolerance {:?}: {}", tolerance, err);
        return Err(err);
    }
    GLOBAL.set(tolerance).map_err(|_| {
        warn!("tolerance already initialised, ignoring {:?}", tolerance);
        GeometryError::ToleranceAlreadySet
    })?;
    debug!(
        "tolerance initialised: tiny={:e} parallel_det={:e} triangulation_eps={:e}",
        tolerance.tiny, tolerance.parallel_det, tolerance.triangulation_eps
    );
    Ok(())
}

#[inline]
pub fn global() -> &'static Tolerance {
    GLOBAL.get_or_init(Tolerance::default)
}

#[inline(always)]
pub fn is_tiny<T: Scalar>(x: T) -> bool {
    is_tiny_with(x, global())
}

#[inline(always)]
pub fn is_tiny_with<T: Scalar>(x: T, tolerance: &Tolerance) -> bool {
    x.abs() < T::of(tolerance.tiny)
}
