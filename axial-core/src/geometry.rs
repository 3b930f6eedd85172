//! Display-space geometry
//!
//! Maps joystick samples to cursor positions and defines the border
//! rectangles. Coordinates follow `embedded-graphics`: origin top-left,
//! x to the right, y downwards.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::axis::JoystickSample;
use crate::state::BorderStyle;

/// Pivot of the cursor mapping, half the 12-bit range
pub const CURSOR_PIVOT: i32 = 2048;

/// Default display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Default display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// Default cursor square edge in pixels
pub const CURSOR_SIZE: u32 = 8;

/// Outer border inset from the top-left corner
const OUTER_INSET: i32 = 3;

/// Gap between the two outlines of a double border
const DOUBLE_GAP: i32 = 2;

/// Display and cursor dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub cursor_size: u32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            cursor_size: CURSOR_SIZE,
        }
    }
}

/// Border outlines for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Border {
    Single(Rectangle),
    Double { outer: Rectangle, inner: Rectangle },
}

impl Border {
    /// Outline rectangles, outermost first
    pub fn outlines(&self) -> impl Iterator<Item = Rectangle> {
        let (first, second) = match *self {
            Border::Single(rect) => (rect, None),
            Border::Double { outer, inner } => (outer, Some(inner)),
        };
        core::iter::once(first).chain(second)
    }
}

impl Geometry {
    /// Top-left cursor position when the stick is centered
    pub fn center(&self) -> Point {
        Point::new(
            (self.width.saturating_sub(self.cursor_size) / 2) as i32,
            (self.height.saturating_sub(self.cursor_size) / 2) as i32,
        )
    }

    /// Top-left corner of the cursor square for a sample
    ///
    /// Horizontal displacement follows X; vertical follows Y inverted so
    /// pushing the stick up (larger Y) moves the cursor up. Integer
    /// division truncates toward zero.
    pub fn cursor_position(&self, sample: JoystickSample) -> Point {
        let center = self.center();
        Point::new(
            center.x + scale(sample.x as i32 - CURSOR_PIVOT, center.x),
            center.y + scale(CURSOR_PIVOT - sample.y as i32, center.y),
        )
    }

    /// Cursor square for a sample
    pub fn cursor(&self, sample: JoystickSample) -> Rectangle {
        Rectangle::new(
            self.cursor_position(sample),
            Size::new(self.cursor_size, self.cursor_size),
        )
    }

    /// Border outline(s) for the given style
    pub fn border(&self, style: BorderStyle) -> Border {
        let w = self.width as i32;
        let h = self.height as i32;
        match style {
            BorderStyle::Single => Border::Single(inset_rect(
                OUTER_INSET,
                w - 2 * OUTER_INSET,
                h - OUTER_INSET - 1,
            )),
            BorderStyle::Double => {
                let inner_inset = OUTER_INSET + DOUBLE_GAP;
                Border::Double {
                    outer: inset_rect(OUTER_INSET, w - 2 * OUTER_INSET, h - 2 * OUTER_INSET),
                    inner: inset_rect(inner_inset, w - 2 * inner_inset, h - 2 * inner_inset),
                }
            }
        }
    }

    /// Full display area
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(self.width, self.height))
    }
}

fn scale(offset: i32, half_span: i32) -> i32 {
    offset * half_span / CURSOR_PIVOT
}

fn inset_rect(inset: i32, width: i32, height: i32) -> Rectangle {
    Rectangle::new(
        Point::new(inset, inset),
        Size::new(width.max(0) as u32, height.max(0) as u32),
    )
}
