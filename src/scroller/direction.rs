//! Scroll directions and the axis they move along.

use std::fmt;
use std::str::FromStr;

use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

/// Direction the background images travel toward.
///
/// Directions are in screen terms: `Top` moves the images up the screen,
/// `Bottom` moves them down. `up` and `down` are accepted as aliases both on
/// the command line and in config files.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[value(alias = "up")]
    Top,
    #[value(alias = "down")]
    Bottom,
    Left,
    Right,
}

impl ScrollDirection {
    pub const ALL: [ScrollDirection; 4] = [
        ScrollDirection::Top,
        ScrollDirection::Bottom,
        ScrollDirection::Left,
        ScrollDirection::Right,
    ];

    /// Axis the images move along.
    pub fn axis(self) -> Axis {
        match self {
            ScrollDirection::Top | ScrollDirection::Bottom => Axis::Vertical,
            ScrollDirection::Left | ScrollDirection::Right => Axis::Horizontal,
        }
    }

    /// `+1.0` when moving toward growing coordinates, `-1.0` otherwise.
    ///
    /// Screen `y` grows downward, so `Bottom` is positive and `Top` negative.
    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Right | ScrollDirection::Bottom => 1.0,
            ScrollDirection::Left | ScrollDirection::Top => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScrollDirection::Top => "top",
            ScrollDirection::Bottom => "bottom",
            ScrollDirection::Left => "left",
            ScrollDirection::Right => "right",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" | "up" => Ok(ScrollDirection::Top),
            "bottom" | "down" => Ok(ScrollDirection::Bottom),
            "left" => Ok(ScrollDirection::Left),
            "right" => Ok(ScrollDirection::Right),
            other => Err(format!("unknown scroll direction '{}'", other)),
        }
    }
}

/// One of the two screen axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Read the coordinate of `v` on this axis.
    pub fn component(self, v: Vector2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Return `v` with its coordinate on this axis replaced by `value`.
    pub fn with_component(self, v: Vector2, value: f32) -> Vector2 {
        match self {
            Axis::Horizontal => Vector2 { x: value, y: v.y },
            Axis::Vertical => Vector2 { x: v.x, y: value },
        }
    }

    /// Build a point from a coordinate on this axis and one on the cross axis.
    pub fn point(self, along: f32, across: f32) -> Vector2 {
        match self {
            Axis::Horizontal => Vector2 { x: along, y: across },
            Axis::Vertical => Vector2 { x: across, y: along },
        }
    }
}
