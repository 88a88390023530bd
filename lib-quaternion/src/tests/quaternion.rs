use core::f32::consts::PI;

use crate::*;

const QS1: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);
const QS2: Quaternion = Quaternion::scalar(10.0);
const QS3: Quaternion = Quaternion::scalar(11.0);
const QS4: Quaternion = Quaternion::scalar(110.0);
const QV1: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);
const QV2: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 1.0);
const QV3: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 1.0);
const QV4: Quaternion = Quaternion::new(0.0, 2.0, 1.0, 2.0);
const Q1: Quaternion = Quaternion::new(1.0, -1.0, -1.0, 1.0);
const Q2: Quaternion = Quaternion::new(-1.0, 1.0, 1.0, -1.0);
const Q3: Quaternion = Quaternion::new(-1.0, -1.0, -1.0, 1.0);
const Q4: Quaternion = Quaternion::new(4.0, -4.0, -4.0, 4.0);

/// A handful of arbitrary non-zero quaternions.
fn samples() -> [Quaternion; 5] {
    [
        Quaternion::new(1.0, 2.0, 3.0, 4.0),
        Quaternion::new(-0.5, 3.0, 0.25, 7.0),
        Quaternion::new(0.24765262, 0.29400444, 0.39430461, 0.83471757),
        Quaternion::new(0.0, 0.0, -2.0, 0.0),
        Q4,
    ]
}

#[test]
fn test_scalar_sum() {
    assert_eq!(sum([QS1, QS2]), QS3);
}

#[test]
fn test_vector_sum() {
    assert_eq!(sum([QV1, QV2, QV3]), QV4);
}

#[test]
fn test_mixed_sum() {
    assert_eq!(sum([Q1, Q2]), Quaternion::zero());
}

#[test]
fn test_empty_sum_and_product() {
    assert_eq!(sum::<[Quaternion; 0]>([]), Quaternion::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(prod(Vec::<Quaternion>::new()), Quaternion::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(core::iter::empty::<Quaternion>().sum::<Quaternion>(), Quaternion::zero());
    assert_eq!(core::iter::empty::<Quaternion>().product::<Quaternion>(), Quaternion::identity());
}

#[test]
fn test_sum_is_order_independent() {
    let [a, b, c, d, e] = samples();
    let forward = sum([a, b, c, d, e]);
    let backward = sum([e, d, c, b, a]);
    let grouped = (a + (b + c)) + (d + e);
    assert!(forward.approx_eq(&backward, 1e-5));
    assert!(forward.approx_eq(&grouped, 1e-5));
}

#[test]
fn test_iterator_sum_and_product() {
    let quaternions = vec![Q1, Q2, Q3];
    assert_eq!(quaternions.iter().sum::<Quaternion>(), sum([Q1, Q2, Q3]));
    assert_eq!(quaternions.into_iter().product::<Quaternion>(), Q4);

    let mut total = QS1;
    total += QS2;
    assert_eq!(total, QS3);
}

#[test]
fn test_scalar_conj() {
    assert_eq!(conj(QS1), QS1);
}

#[test]
fn test_vector_conj() {
    assert_eq!(conj(QV4), Quaternion::new(0.0, -2.0, -1.0, -2.0));
}

#[test]
fn test_mixed_conj() {
    assert_eq!(conj(Q2), Q3);
}

#[test]
fn test_conj_is_an_involution() {
    for q in samples() {
        assert_eq!(conj(conj(q)), q);
    }
}

#[test]
fn test_scalar_prod() {
    assert_eq!(prod([QS1, QS2, QS3]), QS4);
}

#[test]
fn test_vector_prod() {
    assert_eq!(prod([QV1, QV2, QV3]), Quaternion::new(-1.0, -1.0, 1.0, 1.0));
}

#[test]
fn test_mixed_prod() {
    assert_eq!(prod([Q1, Q2, Q3]), Q4);
}

#[test]
fn test_prod_is_not_commutative() {
    assert_ne!(prod([QV1, QV2]), prod([QV2, QV1]));
    assert_eq!(QV1 * QV2, -(QV2 * QV1));
}

#[test]
fn test_prod_matches_operator() {
    assert_eq!(prod([Q1, Q2, Q3]), Q1 * Q2 * Q3);
    assert_eq!(&Q1 * &Q2, Q1.multiply(&Q2));
}

#[test]
fn test_scalar_norm() {
    assert_eq!(norm(QS4), 110.0);
    assert_eq!(norm2(QS4), 12100.0);
}

#[test]
fn test_vector_norm() {
    assert_eq!(norm(QV4), 3.0);
}

#[test]
fn test_mixed_norm() {
    assert_eq!(norm(Q4), 8.0);
    assert_eq!(norm2(Q4), 64.0);
}

#[test]
fn test_unit() {
    assert_eq!(unit(Q4), Quaternion::new(0.5, -0.5, -0.5, 0.5));
}

#[test]
fn test_unit_has_norm_one() {
    for q in samples() {
        assert!(abs(norm(unit(q)) - 1.0) <= 1e-6, "{:?}", q);
    }
}

#[test]
fn test_inv() {
    assert_eq!(inv(Q4), Quaternion::new(0.0625, 0.0625, 0.0625, -0.0625));
}

#[test]
fn test_prod_with_inverse_is_identity() {
    for q in samples() {
        let result = prod([q, inv(q)]);
        assert!(result.approx_eq(&Quaternion::identity(), 1e-6), "{:?} -> {:?}", q, result);
    }
}

#[test]
fn test_zero_quaternion_gives_nan() {
    let zero = Quaternion::zero();
    let u = unit(zero);
    let i = inv(zero);
    for value in [u.w, u.x, u.y, u.z, i.w, i.x, i.y, i.z] {
        assert!(value.is_nan());
    }
    // NaN never compares equal, not even to itself.
    assert_ne!(u, u);
}

#[test]
fn test_checked_operations() {
    assert_eq!(Q4.checked_unit(), Some(Quaternion::new(0.5, -0.5, -0.5, 0.5)));
    assert_eq!(Q4.checked_inverse(), Some(inv(Q4)));
    assert_eq!(Quaternion::zero().checked_unit(), None);
    assert_eq!(Quaternion::zero().checked_inverse(), None);
    assert_eq!(Quaternion::new(f32::INFINITY, 0.0, 0.0, 0.0).checked_unit(), None);
    assert_eq!(Quaternion::new(f32::NAN, 0.0, 0.0, 0.0).checked_inverse(), None);
}

#[test]
fn test_construction() {
    assert_eq!(scalar(3.0), Quaternion { w: 3.0, x: 0.0, y: 0.0, z: 0.0 });
    assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]), Quaternion::new(1.0, 2.0, 3.0, 4.0));
    let q = Quaternion::from_parts(1.0, Vector::new(2.0, 3.0, 4.0));
    assert_eq!(q, Quaternion::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(q.vector(), Vector::new(2.0, 3.0, 4.0));
    assert_eq!(Quaternion::default(), Quaternion::zero());
    assert_eq!(Q4 / 8.0, Q4 * 0.125);
}

#[test]
fn test_standing_up_gravity() {
    // Gravity acceleration in device frame when device is standing straight up.
    let device_gravity = Vector { x: 0.0, y: -1.0, z: 0.0 };

    // Gravity acceleration in world space.
    let expected_world_gravity = Vector { x: 0.0, y: 0.0, z: 1.0 };

    let device_quat = from_euler(PI / -2.0, 0.0, 0.0);
    let world_gravity = device_quat.rotate(&device_gravity);

    assert!(world_gravity.approx_eq(&expected_world_gravity, 0.0001), "{:?}", world_gravity);
}

#[test]
fn test_rotate_vector_90_deg_x_axis() {
    let rotation_quat = from_euler(PI / 2.0, 0.0, 0.0);
    let rotated_vector = rotation_quat.rotate(&Vector::new(0.0, 1.0, 0.0));
    let expected_vector = Vector { x: 0.0, y: 0.0, z: 1.0 };

    assert!(rotated_vector.approx_eq(&expected_vector, 0.0001), "{:?}", rotated_vector);
}

#[test]
fn test_rotate_negated_quaternion_is_same_rotation() {
    let q = unit(Quaternion::new(1.0, 2.0, 3.0, 4.0));
    let v = Vector::new(0.3, -1.2, 2.0);
    assert!(q.rotate(&v).approx_eq(&(-q).rotate(&v), 1e-5));
}
