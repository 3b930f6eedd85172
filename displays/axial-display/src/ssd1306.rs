//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C. Drawing happens
//! in a [`FrameBuffer`]; [`Ssd1306::flush`] sends the whole frame in one
//! data transfer using horizontal addressing mode.

use embedded_hal_async::i2c::I2c;

use crate::backend::DisplayError;
use crate::framebuffer::{FrameBuffer, PAGES, WIDTH};

/// Default I2C address (0x3D on some modules)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte: following bytes are commands
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: following bytes are GDDRAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const RESUME_TO_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// Initialization sequence for a 128x64 panel with internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_MEMORY_MODE,
    0x00, // Horizontal addressing
    cmd::SET_START_LINE | 0x00,
    cmd::SET_SEG_REMAP,    // Column 127 mapped to SEG0
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_COM_SCAN_DEC, // Scan from COM[N-1]
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x30,
    cmd::SET_CONTRAST,
    0xFF,
    cmd::RESUME_TO_RAM,
    cmd::SET_NORMAL,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: FrameBuffer,
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Frame being drawn
    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Frame being drawn, as an `embedded-graphics` target
    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.buffer
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Flush the frame buffer to the display
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        // Full-screen window; the address pointer wraps back to (0, 0)
        self.command(cmd::SET_COLUMN_ADDR).await?;
        self.command(0).await?;
        self.command((WIDTH - 1) as u8).await?;
        self.command(cmd::SET_PAGE_ADDR).await?;
        self.command(0).await?;
        self.command((PAGES - 1) as u8).await?;

        let mut data = [0u8; WIDTH * PAGES + 1];
        data[0] = CONTROL_DATA;
        for (chunk, page) in data[1..].chunks_exact_mut(WIDTH).zip(self.buffer.pages()) {
            chunk.copy_from_slice(page);
        }
        self.i2c
            .write(self.address, &data)
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{Error, ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    #[derive(Debug)]
    struct MockError;

    impl Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Records every write; can be told to NAK
    struct MockI2c {
        writes: Vec<(u8, Vec<u8, 1025>), 64>,
        fail: bool,
    }

    impl MockI2c {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail: false,
            }
        }

        /// Command bytes in write order
        fn commands(&self) -> Vec<u8, 64> {
            self.writes
                .iter()
                .filter(|(_, w)| w[0] == CONTROL_COMMAND)
                .map(|(_, w)| w[1])
                .collect()
        }
    }

    impl ErrorType for MockI2c {
        type Error = MockError;
    }

    impl I2c for MockI2c {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        let bytes = Vec::from_slice(bytes).map_err(|_| MockError)?;
                        self.writes.push((address, bytes)).map_err(|_| MockError)?;
                    }
                    Operation::Read(buf) => buf.fill(0),
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_init_sequence() {
        let mut display = Ssd1306::new(MockI2c::new(), DEFAULT_ADDRESS);
        block_on(display.init()).unwrap();

        let i2c = display.release();
        assert!(i2c.writes.iter().all(|(addr, w)| *addr == 0x3C && w.len() == 2));
        assert_eq!(i2c.commands().as_slice(), INIT_SEQUENCE);
        assert_eq!(i2c.commands().first(), Some(&0xAE));
        assert_eq!(i2c.commands().last(), Some(&0xAF));
    }

    #[test]
    fn test_flush_requires_init() {
        let mut display = Ssd1306::new(MockI2c::new(), DEFAULT_ADDRESS);
        assert_eq!(block_on(display.flush()), Err(DisplayError::NotInitialized));
    }

    #[test]
    fn test_flush_framing() {
        let mut display = Ssd1306::new(MockI2c::new(), 0x3D);
        block_on(display.init()).unwrap();
        display.buffer_mut().set_pixel(0, 0, true);
        display.buffer_mut().set_pixel(127, 63, true);
        display.buffer_mut().set_pixel(1, 8, true);
        block_on(display.flush()).unwrap();

        let i2c = display.release();
        let skip = INIT_SEQUENCE.len();
        let window: Vec<u8, 8> = i2c.writes[skip..skip + 6].iter().map(|(_, w)| w[1]).collect();
        assert_eq!(window.as_slice(), &[0x21, 0, 127, 0x22, 0, 7]);

        let (addr, data) = &i2c.writes[skip + 6];
        assert_eq!(*addr, 0x3D);
        assert_eq!(data.len(), 1025);
        assert_eq!(data[0], 0x40);
        assert_eq!(data[1], 0b0000_0001);
        // Page 1, column 1
        assert_eq!(data[1 + WIDTH + 1], 0b0000_0001);
        // Last byte: page 7, column 127, bottom row
        assert_eq!(data[1024], 0b1000_0000);
        assert_eq!(data[1..].iter().filter(|b| **b != 0).count(), 3);
    }

    #[test]
    fn test_clear_keeps_bus_idle() {
        let mut display = Ssd1306::new(MockI2c::new(), DEFAULT_ADDRESS);
        display.buffer_mut().set_pixel(10, 10, true);
        display.clear();
        assert_eq!(display.buffer().lit_count(), 0);
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_bus_error_maps_to_communication() {
        let mut i2c = MockI2c::new();
        i2c.fail = true;
        let mut display = Ssd1306::new(i2c, DEFAULT_ADDRESS);
        assert_eq!(block_on(display.init()), Err(DisplayError::Communication));
        assert!(!display.is_initialized());
    }
}
