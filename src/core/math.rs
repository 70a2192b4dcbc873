// Math utilities shared by the character core

/// Clamp a value between min and max
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Horizontal sign of a sprite: +1 facing right, -1 when flipped
pub fn facing_sign(flip_x: bool) -> f32 {
    if flip_x {
        -1.0
    } else {
        1.0
    }
}

/// `|value| / max`, or 0 when `max` is not positive
pub fn speed_ratio(value: f32, max: f32) -> f32 {
    if max > 0.0 {
        value.abs() / max
    } else {
        0.0
    }
}
