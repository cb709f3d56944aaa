//! Direct3D 11 setup for the engine.
//!
//! [`GraphicsDevice`] owns everything a frame needs before the first draw
//! call: the device/context pair, a swap chain sized to the target window, a
//! render-target view of the back buffer and a matching depth buffer that is
//! also readable from shaders. Construction is all-or-nothing; any failure
//! surfaces as a stage-tagged [`DeviceError`].

#![cfg(windows)]

mod device;
mod error;

pub use device::GraphicsDevice;
pub use error::DeviceError;
