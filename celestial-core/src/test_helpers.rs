//! Floating-point comparison helpers shared by the workspace test suites.

use crate::Vector3;

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts every component of `a` is within `tol` (absolute) of `b`.
#[track_caller]
pub fn assert_vec_close(a: Vector3, b: Vector3, tol: f64, ctx: &str) {
    let diff = a - b;
    for i in 0..3 {
        assert!(
            diff[i].abs() <= tol,
            "{}: component {} differs by {:.3e} (tol {:.1e}), a={} b={}",
            ctx,
            i,
            diff[i],
            tol,
            a,
            b
        );
    }
}
