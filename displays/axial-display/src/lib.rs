//! Monochrome display support for Axial
//!
//! This crate provides:
//! - [`FrameBuffer`]: a 128x64 page-organized 1-bit buffer that implements
//!   `embedded-graphics`' `DrawTarget`
//! - [`Ssd1306`]: an async I2C driver that initializes the panel and
//!   flushes the buffer in a single transfer
//!
//! # Architecture
//!
//! Application code draws into the frame buffer with `embedded-graphics`
//! primitives while holding no bus; only [`Ssd1306::flush`] touches I2C.
//! The buffer layout matches the controller's GDDRAM so flushing is a
//! straight copy.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod framebuffer;
pub mod ssd1306;

// Re-export key types
pub use backend::DisplayError;
pub use framebuffer::{FrameBuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::Ssd1306;
