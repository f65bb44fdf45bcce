use crate::geometry::Vec2;

/// Types that can be animated by interpolating between two values.
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Linear interpolation; `t` may leave `[0, 1]` for overshoot.
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Vec2 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Vec2 {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(f32::lerp(&0.0, &10.0, 0.0), 0.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 0.5), 5.0);
        assert_eq!(f32::lerp(&0.0, &10.0, 1.0), 10.0);
        // Overshoot
        assert_eq!(f32::lerp(&0.0, &10.0, 1.2), 12.0);
    }

    #[test]
    fn test_vec2_lerp() {
        let mid = Vec2::lerp(&Vec2::ZERO, &Vec2::new(10.0, -20.0), 0.5);
        assert_eq!(mid, Vec2::new(5.0, -10.0));
    }
}
