//! Per-frame rendering decisions
//!
//! One call per loop iteration: decide what the PWM LEDs should do for
//! the latest sample, then describe the frame to draw.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::axis::{Axis, AxisMapper, JoystickSample, RestZone};
use crate::geometry::{Border, Geometry};
use crate::state::UiState;
use crate::traits::{IndicatorOutputs, LedChannel};

/// What to do with the PWM LEDs this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedUpdate {
    /// Stick at rest: both channels off
    Off,
    /// Channels follow the stick
    Track { blue: u16, red: u16 },
    /// RGB tracking disabled: keep whatever is lit
    Hold,
}

impl LedUpdate {
    /// Write this update to the outputs
    pub fn apply<O: IndicatorOutputs>(self, outputs: &mut O) {
        match self {
            LedUpdate::Off => outputs.pwm_off(),
            LedUpdate::Track { blue, red } => {
                outputs.set_duty(LedChannel::Blue, blue);
                outputs.set_duty(LedChannel::Red, red);
            }
            LedUpdate::Hold => {}
        }
    }
}

/// Everything drawn in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub border: Border,
    pub cursor: Rectangle,
}

impl Frame {
    /// Draw border outlines and the filled cursor
    ///
    /// The cursor is not clipped against the border; the target is
    /// expected to drop pixels outside its own bounds.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let outline = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        for rect in self.border.outlines() {
            rect.into_styled(outline).draw(target)?;
        }
        self.cursor
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)
    }
}

/// Maps samples and UI state to LED updates and frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Renderer {
    mapper: AxisMapper,
    rest: RestZone,
    geometry: Geometry,
}

impl Renderer {
    pub fn new(mapper: AxisMapper, rest: RestZone, geometry: Geometry) -> Self {
        Self {
            mapper,
            rest,
            geometry,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// LED decision for one sample
    ///
    /// The rest zone wins over the RGB flag, so a centered stick always
    /// turns the LEDs off even while tracking is disabled.
    pub fn led_update(&self, sample: JoystickSample, ui: UiState) -> LedUpdate {
        if self.rest.contains(sample) {
            LedUpdate::Off
        } else if ui.rgb_enabled() {
            LedUpdate::Track {
                blue: self.mapper.duty(sample.axis(Axis::Y)),
                red: self.mapper.duty(sample.axis(Axis::X)),
            }
        } else {
            LedUpdate::Hold
        }
    }

    /// Frame contents for one sample
    pub fn frame(&self, sample: JoystickSample, ui: UiState) -> Frame {
        Frame {
            border: self.geometry.border(ui.border()),
            cursor: self.geometry.cursor(sample),
        }
    }

    /// Apply the LED update and draw the frame in one go
    pub fn step<O, D>(
        &self,
        sample: JoystickSample,
        ui: UiState,
        outputs: &mut O,
        target: &mut D,
    ) -> Result<Frame, D::Error>
    where
        O: IndicatorOutputs,
        D: DrawTarget<Color = BinaryColor>,
    {
        self.led_update(sample, ui).apply(outputs);
        let frame = self.frame(sample, ui);
        frame.draw(target)?;
        Ok(frame)
    }
}
