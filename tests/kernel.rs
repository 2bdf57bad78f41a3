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

use isect::geometry::{Point2, Point3};
use isect::kernel::{Sign, Signs, Winding, orient2d, orient3d, signs, winding_order};
use isect::kernel::predicates::{are_collinear, are_equal};

#[test]
fn test_sign_classification_uses_closed_band() {
    assert_eq!(Sign::of(0.1, 0.1), Sign::Zero);
    assert_eq!(Sign::of(-0.1, 0.1), Sign::Zero);
    assert_eq!(Sign::of(0.11, 0.1), Sign::Positive);
    assert_eq!(Sign::of(-0.11, 0.1), Sign::Negative);
    assert_eq!(Sign::Negative.as_i32(), -1);
    assert_eq!(Sign::Positive.as_signs(), Signs::POSITIVE);
}

#[test]
fn test_signs_fold_and_mix() {
    let folded = [-1.0, 0.0, 0.0].iter().fold(Signs::NONE, |acc, h| acc | signs(*h, 1e-9));
    assert_eq!(folded, Signs::NON_POSITIVE);
    assert!(!folded.is_mixed());
    assert!(folded.contains(Signs::ZERO));

    let mixed = folded | signs(2.0, 1e-9);
    assert_eq!(mixed, Signs::ALL);
    assert!(mixed.is_mixed());
    assert_eq!(mixed & Signs::NON_ZERO, Signs::NON_ZERO);
    assert_eq!(Signs::NEGATIVE | Signs::POSITIVE, Signs::NON_ZERO);
    assert!(Signs::NONE.is_empty());
}

#[test]
fn test_orientation_2d() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(1.0, 0.0);
    let c = Point2::new(0.0, 1.0);
    assert_eq!(orient2d(&a, &b, &c), 1.0);
    assert_eq!(winding_order(&a, &b, &c), Some(Winding::Ccw));
    assert_eq!(winding_order(&a, &c, &b), Some(Winding::Cw));
    assert_eq!(winding_order(&a, &b, &Point2::new(2.0, 0.0)), None);
}

#[test]
fn test_orientation_3d_above_and_coplanar() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    assert!(orient3d(&a, &b, &c, &Point3::new(0.0, 0.0, 1.0)) > 0.0);
    assert!(orient3d(&a, &b, &c, &Point3::new(0.0, 0.0, -1.0)) < 0.0);
    let coplanar: f64 = orient3d(&a, &b, &c, &Point3::new(1.0, 1.0, 0.0));
    assert!(coplanar.abs() < 1e-12);
}

#[test]
fn test_equality_and_collinearity() {
    let p = Point2::new(1.0, 1.0);
    assert!(are_equal(&p, &Point2::new(1.0 + 1e-10, 1.0), 1e-9));
    assert!(!are_equal(&p, &Point2::new(1.1, 1.0), 1e-9));
    assert!(are_collinear(
        &Point2::new(0.0, 0.0),
        &Point2::new(1.0, 1.0),
        &Point2::new(3.0, 3.0),
        1e-9
    ));
    assert!(!are_collinear(
        &Point2::new(0.0, 0.0),
        &Point2::new(1.0, 1.0),
        &Point2::new(3.0, 2.0),
        1e-9
    ));
}
