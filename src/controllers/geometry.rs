//! Anchor geometry for floating feedback (tooltips, popovers).

option_enum! {
    /// Side of the trigger a floating element attaches to
    #[derive(Default)]
    pub enum Placement {
        #[default]
        Top => "top",
        Bottom => "bottom",
        Left => "left",
        Right => "right",
    }
}

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A bounding rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Point on `rect`'s edge facing `placement`, pushed out by `offset`
pub fn anchor_point(rect: &Rect, placement: Placement, offset: f64) -> Point {
    match placement {
        Placement::Top => Point {
            x: rect.center_x(),
            y: rect.top - offset,
        },
        Placement::Bottom => Point {
            x: rect.center_x(),
            y: rect.bottom() + offset,
        },
        Placement::Left => Point {
            x: rect.left - offset,
            y: rect.center_y(),
        },
        Placement::Right => Point {
            x: rect.right() + offset,
            y: rect.center_y(),
        },
    }
}
