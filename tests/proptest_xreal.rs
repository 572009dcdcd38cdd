//! Property tests for extended-exponent scalar arithmetic

use atmr::xreal::XReal;
use proptest::prelude::*;

/// Mantissas already inside the normalized band
fn band_mantissa() -> impl Strategy<Value = f64> {
    prop_oneof![1.0e-140..1.0e140, -1.0e140..-1.0e-140]
}

/// Any finite, nonzero mantissa an operation might produce
fn wide_mantissa() -> impl Strategy<Value = f64> {
    prop_oneof![1.0e-300..1.0e300, -1.0e300..-1.0e-300]
}

// Property 1: renormalization is idempotent
proptest! {
    #[test]
    fn prop_normalize_idempotent(p in wide_mantissa(), i in -100_000i32..100_000) {
        let once = XReal::new(p, i).normalize();
        let twice = once.normalize();
        prop_assert_eq!(once.mantissa, twice.mantissa);
        prop_assert_eq!(once.scale, twice.scale);
        prop_assert!(once.is_normalized());
    }
}

// Property 2: in-band values round-trip exactly through f64
proptest! {
    #[test]
    fn prop_roundtrip_in_band(f in band_mantissa()) {
        prop_assert_eq!(XReal::from(f).to_f64(), f);
    }
}

// Property 3: multiplying by one renormalizes and nothing else
proptest! {
    #[test]
    fn prop_mul_identity(p in wide_mantissa(), i in -1000i32..1000) {
        let x = XReal::new(p, i);
        let prod = x * XReal::ONE;
        let norm = x.normalize();
        prop_assert_eq!(prod.mantissa, norm.mantissa);
        prop_assert_eq!(prod.scale, norm.scale);
    }
}

// Property 4: ipow agrees with repeated multiplication
proptest! {
    #[test]
    fn prop_power_consistency(p in band_mantissa(), n in 0i32..10) {
        let x = XReal::new(p, 0);
        let mut repeated = XReal::ONE;
        for _ in 0..n {
            repeated = repeated * x;
        }
        let pow = x.ipow(n);
        let ratio = pow.try_div(repeated).unwrap().to_f64();
        prop_assert!((ratio - 1.0).abs() < 1e-12, "ratio {}", ratio);
    }
}

// Property 5: a negative power is the reciprocal of the positive power
proptest! {
    #[test]
    fn prop_negative_power_is_reciprocal(p in band_mantissa(), n in 1i32..10) {
        let x = XReal::new(p, 0);
        let neg = x.ipow(-n);
        let recip = XReal::ONE.try_div(x.ipow(n)).unwrap();
        let ratio = neg.try_div(recip).unwrap().to_f64();
        prop_assert!((ratio - 1.0).abs() < 1e-12, "ratio {}", ratio);
    }
}

// Property 6: a term two or more scale steps down vanishes from a sum
proptest! {
    #[test]
    fn prop_scale_gap_negligibility(
        px in band_mantissa(),
        py in band_mantissa(),
        i in -500i32..500,
        gap in 2i32..100,
    ) {
        let x = XReal::new(px, i);
        let y = XReal::new(py, i - gap);
        let sum = x + y;
        let norm = x.normalize();
        prop_assert_eq!(sum.mantissa, norm.mantissa);
        prop_assert_eq!(sum.scale, norm.scale);
    }
}

// Property 7: trichotomy and transitivity on same-sign values
proptest! {
    #[test]
    fn prop_ordering_same_sign(
        ps in prop::collection::vec(1.0e-140f64..1.0e140, 3),
        is in prop::collection::vec(-500i32..500, 3),
    ) {
        let x = XReal::new(ps[0], is[0]);
        let y = XReal::new(ps[1], is[1]);
        let z = XReal::new(ps[2], is[2]);

        // exactly one of <, ==, > holds
        let states = [x < y, x == y, x > y];
        prop_assert_eq!(states.iter().filter(|&&s| s).count(), 1);

        // antisymmetry
        prop_assert_eq!(x < y, y > x);
        prop_assert_eq!(x == y, y == x);

        // transitivity
        if x < y && y < z {
            prop_assert!(x < z);
        }
        if x > y && y > z {
            prop_assert!(x > z);
        }
    }
}

// Property 8: add is commutative across scale gaps
proptest! {
    #[test]
    fn prop_add_commutative(
        px in band_mantissa(),
        py in band_mantissa(),
        ix in -500i32..500,
        iy in -500i32..500,
    ) {
        let x = XReal::new(px, ix);
        let y = XReal::new(py, iy);
        let xy = x + y;
        let yx = y + x;
        prop_assert_eq!(xy.mantissa, yx.mantissa);
        prop_assert_eq!(xy.scale, yx.scale);
    }
}

// Property 9: decimal conversion lands in scientific-notation form
proptest! {
    #[test]
    fn prop_decimal_band(p in wide_mantissa(), i in -100i32..100) {
        let (m, _e) = XReal::new(p, i).to_decimal();
        prop_assert!((1.0..10.0).contains(&m.abs()), "mantissa {}", m);
    }
}
