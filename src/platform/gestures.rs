pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Classifies a touch that moved by (`dx`, `dy`). The dominant axis wins;
/// moves shorter than [`MIN_SWIPE_DISTANCE`] on both axes are taps.
pub fn classify_swipe(dx: f64, dy: f64) -> Option<SwipeDirection> {
    let (abs_x, abs_y) = (dx.abs(), dy.abs());
    if abs_x <= MIN_SWIPE_DISTANCE && abs_y <= MIN_SWIPE_DISTANCE {
        return None;
    }
    Some(if abs_x > abs_y {
        if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        }
    } else if dy > 0.0 {
        SwipeDirection::Down
    } else {
        SwipeDirection::Up
    })
}
