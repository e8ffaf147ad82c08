use approx::assert_abs_diff_eq;
use hypercomplex::{
    AlgebraError, BinaryOp, Complex, DualNumber, DualQuaternion, Quaternion, Value, Vector3,
};

const EPSILON: f64 = 1e-12;

fn demo_dual_quaternions() -> (DualQuaternion, DualQuaternion) {
    let q1 = Quaternion::new(1.0, Vector3::new(0.2, 0.3, 0.4));
    let q2 = Quaternion::new(0.2, Vector3::new(0.1, 0.3, 0.5));
    let q3 = Quaternion::new(0.2, Vector3::new(0.3, 0.1, 0.2));
    let q4 = Quaternion::new(0.1, Vector3::new(0.2, 0.2, 0.3));
    (DualQuaternion::new(q1, q2), DualQuaternion::new(q3, q4))
}

#[test]
fn quaternion_built_from_vector_has_expected_magnitude() {
    let v1 = Vector3::new(0.2, 0.3, 0.4);
    let q1 = Quaternion::new(1.0, v1);
    assert_abs_diff_eq!(
        q1.magnitude(),
        (1.0_f64 + 0.04 + 0.09 + 0.16).sqrt(),
        epsilon = EPSILON
    );
}

#[test]
fn embedded_values_are_independent_copies() {
    let mut v1 = Vector3::new(0.2, 0.3, 0.4);
    let q1 = Quaternion::new(1.0, v1);
    let mut dq = DualQuaternion::new(q1, q1);

    v1.set_x(10.0);
    dq.real_mut().set_w(5.0);

    assert_eq!(q1.x(), 0.2);
    assert_eq!(q1.w(), 1.0);
    assert_eq!(dq.dual().w(), 1.0);
}

#[test]
fn inverting_demo_dual_quaternions_twice_restores_them() {
    let (dq1, dq2) = demo_dual_quaternions();
    for dq in [dq1, dq2] {
        let mut twice = dq;
        twice.inverse().unwrap();
        twice.inverse().unwrap();
        assert_abs_diff_eq!(twice, dq, epsilon = 1e-9);
    }
}

#[test]
fn normalized_demo_dual_quaternions_have_unit_norm() {
    let (dq1, dq2) = demo_dual_quaternions();
    for dq in [dq1, dq2] {
        let norm = dq.normalized().unwrap().norm().unwrap();
        assert_abs_diff_eq!(norm, DualNumber::new(1.0, 0.0), epsilon = 1e-9);
    }
}

#[test]
fn composing_rigid_transform_with_its_inverse_gives_identity() {
    let rotation = Quaternion::new(0.5, Vector3::new(0.5, 0.5, 0.5));
    let translation = Quaternion::from_imag(Vector3::new(1.0, -2.0, 3.0));
    let transform = DualQuaternion::new(rotation, 0.5 * translation * rotation);

    let inverse = transform.inverted().unwrap();

    assert_abs_diff_eq!(
        transform * inverse,
        DualQuaternion::identity(),
        epsilon = EPSILON
    );
    assert_abs_diff_eq!(
        inverse * transform,
        DualQuaternion::identity(),
        epsilon = EPSILON
    );
}

#[test]
fn inverting_dual_quaternion_with_zero_real_part_leaves_it_unchanged() {
    let mut dq = DualQuaternion::new(Quaternion::zero(), Quaternion::identity());
    let original = dq;
    assert!(matches!(
        dq.inverse(),
        Err(AlgebraError::DivisionByZero { .. })
    ));
    assert_eq!(dq, original);
}

#[test]
fn complex_magnitude_is_euclidean() {
    assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
}

#[test]
fn dynamic_values_follow_typed_rules() {
    let v = Value::from(Vector3::new(1.0, 2.0, 3.0));
    let q = Value::from(Quaternion::identity());

    assert_eq!(
        v.try_mul(&Value::from(2.0)),
        Ok(Value::from(Vector3::new(2.0, 4.0, 6.0)))
    );
    assert_eq!(
        v.try_div(&v),
        Err(AlgebraError::UnsupportedOperandType {
            op: BinaryOp::Div,
            lhs: "Vector3",
            rhs: "Vector3"
        })
    );
    assert_eq!(
        q.try_cross(&v),
        Err(AlgebraError::UnsupportedOperandType {
            op: BinaryOp::Cross,
            lhs: "Quaternion",
            rhs: "Vector3"
        })
    );
}
