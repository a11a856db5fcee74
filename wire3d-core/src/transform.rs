/// Rotation state and the 4x4 homogeneous transform operations
use nalgebra::{Matrix4, Point3, Vector4};

/// Upper bound of the angle range; angles are kept in degrees
pub const FULL_TURN: f32 = 360.0;

/// Rotation state around three axes (in degrees)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Bring every angle back into range.
    ///
    /// An angle above 360 jumps to 0 and an angle below 0 jumps to 360; the
    /// overshoot is discarded rather than carried over as a modulo would.
    pub fn wrap(&mut self) {
        wrap_angle(&mut self.x);
        wrap_angle(&mut self.y);
        wrap_angle(&mut self.z);
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

fn wrap_angle(angle: &mut f32) {
    if *angle > FULL_TURN {
        *angle = 0.0;
    }
    if *angle < 0.0 {
        *angle = FULL_TURN;
    }
}

/// Transform builder and the two homogeneous multiply modes.
///
/// Points are treated as row vectors `(x, y, z, 1)` multiplied on the left,
/// so component `i` of the result is `sum_k m[(k, i)] * p[k]`.
pub struct Transform;

impl Transform {
    /// Closed-form rotation Z, then Y, then X for angles in degrees.
    ///
    /// Row and column 3 stay zero, so the result is only meaningful through
    /// [`Transform::normal_multiply`].
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let (sin_x, cos_x) = rotation.x.to_radians().sin_cos();
        let (sin_y, cos_y) = rotation.y.to_radians().sin_cos();
        let (sin_z, cos_z) = rotation.z.to_radians().sin_cos();

        let mut m = Matrix4::zeros();

        m[(0, 0)] = cos_y * cos_z;
        m[(1, 0)] = cos_y * sin_z;
        m[(2, 0)] = -sin_y;

        m[(0, 1)] = -cos_x * sin_z + sin_x * sin_y * cos_z;
        m[(1, 1)] = cos_x * cos_z + sin_x * sin_y * sin_z;
        m[(2, 1)] = sin_x * cos_y;

        m[(0, 2)] = sin_x * sin_z + cos_x * sin_y * cos_z;
        m[(1, 2)] = -sin_x * cos_z + cos_x * sin_y * sin_z;
        m[(2, 2)] = cos_x * cos_y;

        m
    }

    /// Multiply without a perspective divide; the w component is dropped.
    pub fn normal_multiply(m: &Matrix4<f32>, point: &Point3<f32>) -> Point3<f32> {
        let sums = Self::homogeneous_sums(m, point);
        Point3::new(sums.x, sums.y, sums.z)
    }

    /// Multiply and divide by w.
    ///
    /// A zero w yields the origin instead of an error; callers relying on
    /// projected geometry should treat that point as degenerate.
    pub fn multiply_point(m: &Matrix4<f32>, point: &Point3<f32>) -> Point3<f32> {
        let sums = Self::homogeneous_sums(m, point);
        if sums.w == 0.0 {
            return Point3::origin();
        }
        Point3::new(sums.x / sums.w, sums.y / sums.w, sums.z / sums.w)
    }

    fn homogeneous_sums(m: &Matrix4<f32>, point: &Point3<f32>) -> Vector4<f32> {
        m.tr_mul(&point.to_homogeneous())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point3<f32>, b: Point3<f32>) {
        assert!((a - b).norm() < 1e-5, "{:?} != {:?}", a, b);
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(10.0, 20.0, 30.0);
        assert!((state.x - 10.0).abs() < 1e-6);
        assert!((state.y - 20.0).abs() < 1e-6);
        assert!((state.z - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_jumps_to_opposite_bound() {
        let mut state = RotationState::new(0.0, 359.95, 0.0);
        state.rotate(0.0, 0.1, 0.0);
        assert!(state.y > 360.0);
        state.wrap();
        assert_eq!(state.y, 0.0);

        let mut state = RotationState::new(-0.5, 360.0, 720.0);
        state.wrap();
        assert_eq!(state.x, 360.0);
        assert_eq!(state.y, 360.0);
        assert_eq!(state.z, 0.0);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Transform::rotation_matrix(&RotationState::zero());
        let p = Point3::new(1.5, -2.0, 0.25);
        assert_close(Transform::normal_multiply(&matrix, &p), p);

        let mut expected = Matrix4::identity();
        expected[(3, 3)] = 0.0;
        assert!((matrix - expected).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_keeps_row_and_column_three_zero() {
        let matrix = Transform::rotation_matrix(&RotationState::new(33.0, 71.0, 190.0));
        for i in 0..4 {
            assert_eq!(matrix[(3, i)], 0.0);
            assert_eq!(matrix[(i, 3)], 0.0);
        }
    }

    #[test]
    fn test_quarter_turns() {
        let p = Point3::new(1.0, 0.0, 0.0);

        // Row-vector convention: x maps onto row 0 of the matrix
        let about_z = Transform::rotation_matrix(&RotationState::new(0.0, 0.0, 90.0));
        assert_close(Transform::normal_multiply(&about_z, &p), Point3::new(0.0, -1.0, 0.0));

        let about_y = Transform::rotation_matrix(&RotationState::new(0.0, 90.0, 0.0));
        assert_close(Transform::normal_multiply(&about_y, &p), Point3::new(0.0, 0.0, 1.0));

        let about_x = Transform::rotation_matrix(&RotationState::new(90.0, 0.0, 0.0));
        let q = Point3::new(0.0, 1.0, 0.0);
        assert_close(Transform::normal_multiply(&about_x, &q), Point3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let matrix = Transform::rotation_matrix(&RotationState::new(12.0, 250.0, 47.0));
        let p = Point3::new(0.3, -1.7, 2.2);
        let rotated = Transform::normal_multiply(&matrix, &p);
        assert!((rotated.coords.norm() - p.coords.norm()).abs() < 1e-5);
    }

    #[test]
    fn test_multiply_point_divides_by_w() {
        let mut m = Matrix4::identity();
        m[(3, 3)] = 2.0;
        let p = Transform::multiply_point(&m, &Point3::new(2.0, 4.0, 6.0));
        assert_close(p, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_multiply_point_zero_w_is_origin() {
        let m = Transform::rotation_matrix(&RotationState::new(10.0, 20.0, 30.0));
        let p = Transform::multiply_point(&m, &Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Point3::origin());
    }
}
