//! glam <-> nalgebra at the engine boundary.

use bevy::prelude::*;

#[inline]
pub fn to_motor_vec2(v: Vec2) -> motor::Vec2 {
    motor::Vec2::new(v.x, v.y)
}

#[inline]
pub fn to_motor_vec3(v: Vec3) -> motor::Vec3 {
    motor::Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn from_motor_vec3(v: &motor::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn from_motor_quat(q: &motor::Quat) -> Quat {
    let c = q.quaternion().coords;
    Quat::from_xyzw(c.x, c.y, c.z, c.w)
}

#[inline]
pub fn to_motor_quat(q: Quat) -> motor::Quat {
    motor::Quat::from_quaternion(nalgebra::Quaternion::new(q.w, q.x, q.y, q.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quaternions_agree_on_rotated_vectors() {
        let bevy_q = Quat::from_rotation_y(0.7) * Quat::from_rotation_x(-0.3);
        let motor_q = to_motor_quat(bevy_q);
        let v = Vec3::new(0.0, 0.0, -1.0);
        let a = bevy_q * v;
        let b = from_motor_vec3(&(motor_q * to_motor_vec3(v)));
        assert!((a - b).length() < 1.0e-5);
        assert!(from_motor_quat(&motor_q).angle_between(bevy_q) < 1.0e-4);
    }
}
