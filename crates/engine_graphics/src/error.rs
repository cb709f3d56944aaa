//! Stage-tagged errors for device initialisation.

use thiserror::Error;

/// A failed stage of [`GraphicsDevice::new`](crate::GraphicsDevice::new).
///
/// Construction runs as a pipeline of fallible steps; the first failure
/// aborts the whole thing and names its stage here, with the underlying
/// API error as the source.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The window's client rectangle could not be read. The window must
    /// exist and have a determinate client size before device creation.
    #[error("querying window size")]
    QueryWindowSize(#[source] windows::core::Error),

    #[error("creating DXGI factory")]
    CreateFactory(#[source] windows::core::Error),

    #[error("creating Direct3D device and context")]
    CreateDeviceContext(#[source] windows::core::Error),

    #[error("creating swap chain")]
    CreateSwapChain(#[source] windows::core::Error),

    #[error("creating render target view")]
    CreateRenderTargetView(#[source] windows::core::Error),

    #[error("creating depth texture")]
    CreateDepthTexture(#[source] windows::core::Error),

    #[error("creating depth stencil view")]
    CreateDepthStencilView(#[source] windows::core::Error),

    #[error("creating depth shader resource view")]
    CreateDepthShaderView(#[source] windows::core::Error),
}
