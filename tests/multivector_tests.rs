use approx::assert_abs_diff_eq;
use cga_engine::blades;
use cga_engine::{Algebra, GaError, Multivector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn addition_is_commutative_and_associative_over_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..10_000 {
        let blades_a: Vec<u32> = (0..32).filter(|_| rng.gen_bool(0.3)).collect();
        let blades_b: Vec<u32> = (0..32).filter(|_| rng.gen_bool(0.3)).collect();
        let blades_c: Vec<u32> = (0..32).filter(|_| rng.gen_bool(0.3)).collect();
        let a = random_mv(&mut rng, &blades_a);
        let b = random_mv(&mut rng, &blades_b);
        let c = random_mv(&mut rng, &blades_c);

        let ab = &a + &b;
        let ba = &b + &a;
        for blade in 0..32 {
            assert_eq!(ab.get(blade), ba.get(blade));
        }

        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        for blade in 0..32 {
            assert_abs_diff_eq!(left.get(blade), right.get(blade), epsilon = 1e-12);
        }
    }
}

fn random_mv(rng: &mut StdRng, blades: &[u32]) -> Multivector {
    let coeffs: Vec<f64> = blades.iter().map(|_| rng.gen_range(-10.0..10.0)).collect();
    Multivector::with_shape(blades, &coeffs).unwrap()
}

#[test]
fn product_shape_is_structural() {
    let alg = Algebra::conformal();
    // coefficients that cancel numerically still leave their blade in shape
    let a = Multivector::from_terms(vec![(blades::E1, 1.0), (blades::E2, 1.0)]).unwrap();
    let b = Multivector::from_terms(vec![(blades::E1, 1.0), (blades::E2, -1.0)]).unwrap();
    let p = a.gp(&b, &alg);
    // (e1 + e2)(e1 - e2): the scalar parts cancel but the blade stays
    assert!(p.terms().iter().any(|&(b, _)| b == blades::E12));
    assert_abs_diff_eq!(p.get(blades::SCALAR), 0.0, epsilon = 1e-15);
    assert!(p.terms().iter().any(|&(b, _)| b == blades::SCALAR));
}

#[test]
fn reverse_is_an_involution() {
    let mut rng = StdRng::seed_from_u64(7);
    let blades: Vec<u32> = (0..32).collect();
    let a = random_mv(&mut rng, &blades);
    let back = a.reverse().reverse();
    for blade in 0..32 {
        assert_eq!(a.get(blade), back.get(blade));
    }
}

#[test]
fn inverse_undoes_the_geometric_product() {
    let alg = Algebra::conformal();
    let a = Multivector::from_terms(vec![(blades::SCALAR, 2.0), (blades::E12, 1.5)]).unwrap();
    let inv = a.inverse(&alg).unwrap();
    let prod = a.gp(&inv, &alg);
    assert_abs_diff_eq!(prod.scalar_part(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(prod.get(blades::E12), 0.0, epsilon = 1e-12);
}

#[test]
fn null_elements_are_not_invertible() {
    let alg = Algebra::conformal();
    let e0 = Multivector::from_blade(blades::E0, 1.0);
    assert!(matches!(e0.inverse(&alg), Err(GaError::NonInvertible(_))));
    assert_eq!(e0.norm(&alg), 0.0);
}

#[test]
fn dual_squares_to_a_sign() {
    let alg = Algebra::conformal();
    let a = Multivector::from_blade(blades::E12, 3.0);
    let d = a.dual(&alg).unwrap();
    let dd = d.dual(&alg).unwrap();
    // double dual is +/- identity depending on the pseudoscalar square
    assert_abs_diff_eq!(dd.get(blades::E12).abs(), 3.0, epsilon = 1e-12);
}

#[test]
fn narrowing_drops_noise_but_rejects_real_coefficients() {
    let wide = Multivector::from_terms(vec![
        (blades::SCALAR, 1.0),
        (blades::E12, 1e-13),
        (blades::E13, 0.0),
    ])
    .unwrap();
    let ok = wide.narrow(&[blades::SCALAR], 1e-9).unwrap();
    assert_eq!(ok.terms(), &[(blades::SCALAR, 1.0)]);

    let bad = Multivector::from_terms(vec![(blades::SCALAR, 1.0), (blades::E12, 0.1)]).unwrap();
    assert!(matches!(
        bad.narrow(&[blades::SCALAR], 1e-9),
        Err(GaError::ShapeMismatch(_))
    ));
}

#[test]
fn with_shape_checks_arity() {
    assert!(Multivector::with_shape(&[0, 1], &[1.0]).is_err());
    assert!(Multivector::from_terms(vec![(1, 1.0), (1, 2.0)]).is_err());
}

#[test]
fn display_uses_blade_names() {
    let alg = Algebra::conformal();
    let mv = Multivector::from_terms(vec![(blades::SCALAR, 2.0), (blades::E1I, -0.5)]).unwrap();
    assert_eq!(format!("{}", mv.display(&alg)), "2 - 0.5 e1i");
}
