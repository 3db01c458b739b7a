//! Rotation anchor for frames and static sprites.
//!
//! The anchor names the point of the source image that is placed at the draw
//! position and that rotation and scaling pivot around.

use raylib::prelude::Vector2;

/// Pivot point of a sprite image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    /// Rotation origin in source-image pixels for an image of `width` x `height`.
    ///
    /// Centers use integer halving, so odd sizes round toward the top-left.
    pub fn origin(self, width: i32, height: i32) -> Vector2 {
        let (half_w, half_h) = ((width / 2) as f32, (height / 2) as f32);
        let (w, h) = (width as f32, height as f32);
        let (x, y) = match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::TopCenter => (half_w, 0.0),
            Anchor::TopRight => (w, 0.0),
            Anchor::CenterLeft => (0.0, half_h),
            Anchor::Center => (half_w, half_h),
            Anchor::CenterRight => (w, half_h),
            Anchor::BottomLeft => (0.0, h),
            Anchor::BottomCenter => (half_w, h),
            Anchor::BottomRight => (w, h),
        };
        Vector2 { x, y }
    }

    /// Parse a config-style name such as `center`, `top_left` or `bottom-right`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "topleft" => Some(Anchor::TopLeft),
            "topcenter" => Some(Anchor::TopCenter),
            "topright" => Some(Anchor::TopRight),
            "centerleft" => Some(Anchor::CenterLeft),
            "center" => Some(Anchor::Center),
            "centerright" => Some(Anchor::CenterRight),
            "bottomleft" => Some(Anchor::BottomLeft),
            "bottomcenter" => Some(Anchor::BottomCenter),
            "bottomright" => Some(Anchor::BottomRight),
            _ => None,
        }
    }
}
