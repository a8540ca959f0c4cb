//! Fundamental geometric and simulation types.

use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::MOVE_PER_TICK;

/// Position in screen space (pixels, y grows downwards).
///
/// The float pair is the movement accumulator; the integer pair is its
/// rounded value and is what borders and row/column checks look at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub xf: f64,
    pub y: i32,
    pub yf: f64,
}

/// Stable handle of a tank inside its world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TankId(pub u64);

/// Stable handle of a projectile inside its world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u64);

impl TankId {
    /// Id of a tank that was never registered by a world.
    pub const UNASSIGNED: TankId = TankId(0);

    pub fn is_assigned(&self) -> bool {
        *self != Self::UNASSIGNED
    }
}

impl std::fmt::Display for TankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Position {
    /// Position with both representations set to the given integers.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            xf: x as f64,
            y,
            yf: y as f64,
        }
    }

    /// Overwrite both representations.
    pub fn set(&mut self, x: i32, y: i32) {
        *self = Self::new(x, y);
    }

    /// Move `MOVE_PER_TICK * speed` along `angle` (0 = North, clockwise).
    /// A negative speed moves backwards.
    pub fn update(&mut self, angle: i32, speed: i32) {
        if (self.x as f64 - self.xf).abs() > 1.0 {
            tracing::warn!(x = self.x, xf = self.xf, "position drift, resetting x accumulator");
            self.xf = self.x as f64;
        }
        if (self.y as f64 - self.yf).abs() > 1.0 {
            tracing::warn!(y = self.y, yf = self.yf, "position drift, resetting y accumulator");
            self.yf = self.y as f64;
        }

        let r = (angle - 90) as f64 * PI / 180.0;
        self.xf += MOVE_PER_TICK * speed as f64 * r.cos();
        self.yf += MOVE_PER_TICK * speed as f64 * r.sin();

        self.x = self.xf.round() as i32;
        self.y = self.yf.round() as i32;
    }

    fn as_vec(&self) -> DVec2 {
        DVec2::new(self.xf, self.yf)
    }

    /// Distance between the float coordinates of two positions.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }
}

/// Euclidean vector length.
pub fn length(x: f64, y: f64) -> f64 {
    DVec2::new(x, y).length()
}

/// Distance between the centers of two objects.
pub fn distance(a: Position, b: Position) -> f64 {
    a.distance_to(&b)
}

/// True if two circles overlap. Touching circles do not collide.
pub fn is_collided(pos1: Position, rad1: i32, pos2: Position, rad2: i32) -> bool {
    distance(pos1, pos2) < (rad1 + rad2) as f64
}

/// Point `length` away from `start` along `angle` (0 = North).
pub fn calc_pos_from_angle(start: Position, angle: i32, length: i32) -> Position {
    let angle_rad = (angle - 90).rem_euclid(360) as f64 * PI / 180.0;

    let x = start.xf + length as f64 * angle_rad.cos();
    let y = start.yf + length as f64 * angle_rad.sin();

    let mut end = Position::new(x.round() as i32, y.round() as i32);
    end.xf = x;
    end.yf = y;
    end
}

/// True if a circle of radius `r` at `p` leaves the screen.
pub fn check_borders(p: Position, r: i32, screen_width: i32, screen_height: i32) -> bool {
    p.y - r < 0 || p.y + r > screen_height || p.x - r < 0 || p.x + r > screen_width
}

/// Heading from `me` toward `other` in degrees, 0..=359 (0 = North, 90 = East).
pub fn relative_angle(me: Position, other: Position) -> i32 {
    let xd = me.xf - other.xf;
    let yd = me.yf - other.yf;

    let a = yd.atan2(xd) / PI * 180.0 - 90.0;
    (a as i32 + 360) % 360
}

/// Normalize any angle into 0..360.
pub fn normalize_angle(angle: i32) -> i32 {
    angle.rem_euclid(360)
}
