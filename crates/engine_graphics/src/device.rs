//! Device, swap chain and depth buffer creation.

use crate::error::DeviceError;
use tracing::info;
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::Graphics::Direct3D::{
    D3D_DRIVER_TYPE_HARDWARE, D3D_FEATURE_LEVEL, D3D_FEATURE_LEVEL_9_1, D3D_FEATURE_LEVEL_9_2,
    D3D_FEATURE_LEVEL_9_3, D3D_FEATURE_LEVEL_10_0, D3D_FEATURE_LEVEL_10_1, D3D_FEATURE_LEVEL_11_0,
    D3D_FEATURE_LEVEL_11_1,
};
use windows::Win32::Graphics::Direct3D11::{
    D3D11_BIND_DEPTH_STENCIL, D3D11_BIND_SHADER_RESOURCE, D3D11_CREATE_DEVICE_BGRA_SUPPORT,
    D3D11_CREATE_DEVICE_DEBUG, D3D11_DEPTH_STENCIL_VIEW_DESC, D3D11_DSV_DIMENSION_TEXTURE2D,
    D3D11_RENDER_TARGET_VIEW_DESC, D3D11_RTV_DIMENSION_TEXTURE2D, D3D11_SDK_VERSION,
    D3D11_SHADER_RESOURCE_VIEW_DESC, D3D11_SHADER_RESOURCE_VIEW_DESC_0,
    D3D11_SRV_DIMENSION_TEXTURE2D, D3D11_TEX2D_SRV, D3D11_TEXTURE2D_DESC, D3D11_USAGE_DEFAULT,
    D3D11CreateDevice, ID3D11DepthStencilView, ID3D11Device, ID3D11DeviceContext,
    ID3D11RenderTargetView, ID3D11ShaderResourceView, ID3D11Texture2D,
};
use windows::Win32::Graphics::Dxgi::Common::{
    DXGI_FORMAT_D32_FLOAT, DXGI_FORMAT_R8G8B8A8_UNORM, DXGI_FORMAT_R8G8B8A8_UNORM_SRGB,
    DXGI_FORMAT_R32_FLOAT, DXGI_FORMAT_R32_TYPELESS, DXGI_SAMPLE_DESC,
};
use windows::Win32::Graphics::Dxgi::{
    CreateDXGIFactory2, DXGI_CREATE_FACTORY_FLAGS, DXGI_SWAP_CHAIN_DESC1,
    DXGI_SWAP_EFFECT_FLIP_DISCARD, DXGI_USAGE_RENDER_TARGET_OUTPUT, IDXGIFactory2, IDXGIFactory4,
    IDXGISwapChain1,
};
use windows::Win32::UI::WindowsAndMessaging::GetClientRect;
use windows::core::Interface;

/// Feature levels to negotiate, best first.
const FEATURE_LEVELS: [D3D_FEATURE_LEVEL; 7] = [
    D3D_FEATURE_LEVEL_11_1,
    D3D_FEATURE_LEVEL_11_0,
    D3D_FEATURE_LEVEL_10_1,
    D3D_FEATURE_LEVEL_10_0,
    D3D_FEATURE_LEVEL_9_3,
    D3D_FEATURE_LEVEL_9_2,
    D3D_FEATURE_LEVEL_9_1,
];

/// A fully-initialised Direct3D 11 device bound to one window.
///
/// Owns the device/context pair, a double-buffered flip-model swap chain
/// sized to the window's client area, a render-target view of the back
/// buffer, and a depth buffer of matching size that doubles as a shader
/// resource (for depth read-back, e.g. shadow mapping).
///
/// Single-threaded by design: the thread that owns the window owns this
/// device and its immediate context.
pub struct GraphicsDevice {
    // Field order is release order: views before the textures they
    // reference, textures before the swap chain, swap chain before the
    // context and device.
    back_buffer_view: ID3D11RenderTargetView,
    depth_stencil_view: ID3D11DepthStencilView,
    depth_shader_view: ID3D11ShaderResourceView,
    back_buffer: ID3D11Texture2D,
    depth_texture: ID3D11Texture2D,
    swap_chain: IDXGISwapChain1,
    context: ID3D11DeviceContext,
    device: ID3D11Device,
    back_buffer_width: u32,
    back_buffer_height: u32,
}

impl GraphicsDevice {
    /// Build every resource needed before the first draw call.
    ///
    /// The window must already exist with a determinate client size. Either
    /// the whole chain succeeds, or the first failing stage aborts the
    /// construction with its [`DeviceError`] tag; there is no
    /// partially-initialised state.
    pub fn new(window: HWND) -> Result<Self, DeviceError> {
        let (width, height) = client_size(window)?;

        // Factory first: lets DXGI inspect the hardware before the device exists.
        let factory: IDXGIFactory4 = unsafe { CreateDXGIFactory2(DXGI_CREATE_FACTORY_FLAGS(0)) }
            .map_err(DeviceError::CreateFactory)?;

        let (device, context, feature_level) = create_device_and_context()?;
        info!(feature_level = feature_level.0, "created Direct3D 11 device");

        let swap_chain = create_swap_chain(&factory, &device, window, width, height)?;

        let back_buffer: ID3D11Texture2D =
            unsafe { swap_chain.GetBuffer(0) }.map_err(DeviceError::CreateSwapChain)?;
        let back_buffer_view = create_back_buffer_view(&device, &back_buffer)?;

        let (depth_texture, depth_stencil_view, depth_shader_view) =
            create_depth_buffer(&device, width, height)?;

        info!(width, height, "swap chain and depth buffer ready");

        Ok(Self {
            back_buffer_view,
            depth_stencil_view,
            depth_shader_view,
            back_buffer,
            depth_texture,
            swap_chain,
            context,
            device,
            back_buffer_width: width,
            back_buffer_height: height,
        })
    }

    pub fn device(&self) -> &ID3D11Device {
        &self.device
    }

    pub fn context(&self) -> &ID3D11DeviceContext {
        &self.context
    }

    pub fn swap_chain(&self) -> &IDXGISwapChain1 {
        &self.swap_chain
    }

    /// Render-target view of the swap chain's back buffer (sRGB).
    pub fn render_target(&self) -> &ID3D11RenderTargetView {
        &self.back_buffer_view
    }

    pub fn depth_stencil(&self) -> &ID3D11DepthStencilView {
        &self.depth_stencil_view
    }

    /// Shader-readable view of the depth buffer.
    pub fn depth_shader_resource(&self) -> &ID3D11ShaderResourceView {
        &self.depth_shader_view
    }

    /// Back buffer (and depth buffer) dimensions in pixels.
    pub fn back_buffer_size(&self) -> (u32, u32) {
        (self.back_buffer_width, self.back_buffer_height)
    }

    /// The back-buffer texture itself. Rarely needed directly; prefer
    /// [`render_target`](Self::render_target).
    pub fn back_buffer(&self) -> &ID3D11Texture2D {
        &self.back_buffer
    }

    /// The depth texture backing both depth views.
    pub fn depth_texture(&self) -> &ID3D11Texture2D {
        &self.depth_texture
    }
}

impl Drop for GraphicsDevice {
    fn drop(&mut self) {
        // Unbind all pipeline state before the views are released; the
        // remaining resources then release through COM reference counting in
        // field order.
        unsafe { self.context.ClearState() };
    }
}

fn client_size(window: HWND) -> Result<(u32, u32), DeviceError> {
    let mut rect = RECT::default();
    unsafe { GetClientRect(window, &mut rect) }.map_err(DeviceError::QueryWindowSize)?;
    Ok((
        (rect.right - rect.left) as u32,
        (rect.bottom - rect.top) as u32,
    ))
}

fn create_device_and_context()
-> Result<(ID3D11Device, ID3D11DeviceContext, D3D_FEATURE_LEVEL), DeviceError> {
    // BGRA support is needed for surfaces whose colour-channel ordering
    // differs from the API default (e.g. Direct2D interop).
    let mut flags = D3D11_CREATE_DEVICE_BGRA_SUPPORT;
    if cfg!(debug_assertions) {
        flags |= D3D11_CREATE_DEVICE_DEBUG;
    }

    let mut device: Option<ID3D11Device> = None;
    let mut context: Option<ID3D11DeviceContext> = None;
    let mut feature_level = D3D_FEATURE_LEVEL::default();
    unsafe {
        D3D11CreateDevice(
            None, // default adapter
            D3D_DRIVER_TYPE_HARDWARE,
            None, // no software rasteriser
            flags,
            Some(&FEATURE_LEVELS),
            D3D11_SDK_VERSION,
            Some(&mut device),
            Some(&mut feature_level),
            Some(&mut context),
        )
    }
    .map_err(DeviceError::CreateDeviceContext)?;

    let device = device.ok_or_else(|| {
        DeviceError::CreateDeviceContext(windows::core::Error::from_win32())
    })?;
    let context = context.ok_or_else(|| {
        DeviceError::CreateDeviceContext(windows::core::Error::from_win32())
    })?;
    Ok((device, context, feature_level))
}

fn create_swap_chain(
    factory: &IDXGIFactory4,
    device: &ID3D11Device,
    window: HWND,
    width: u32,
    height: u32,
) -> Result<IDXGISwapChain1, DeviceError> {
    let desc = DXGI_SWAP_CHAIN_DESC1 {
        Width: width,
        Height: height,
        Format: DXGI_FORMAT_R8G8B8A8_UNORM,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
        BufferCount: 2,
        SwapEffect: DXGI_SWAP_EFFECT_FLIP_DISCARD,
        ..Default::default()
    };

    let factory: IDXGIFactory2 = factory.cast().map_err(DeviceError::CreateSwapChain)?;
    unsafe { factory.CreateSwapChainForHwnd(device, window, &desc, None, None) }
        .map_err(DeviceError::CreateSwapChain)
}

fn create_back_buffer_view(
    device: &ID3D11Device,
    back_buffer: &ID3D11Texture2D,
) -> Result<ID3D11RenderTargetView, DeviceError> {
    // The view applies gamma correction; the buffer itself stays linear.
    let desc = D3D11_RENDER_TARGET_VIEW_DESC {
        Format: DXGI_FORMAT_R8G8B8A8_UNORM_SRGB,
        ViewDimension: D3D11_RTV_DIMENSION_TEXTURE2D,
        ..Default::default()
    };

    let mut view = None;
    unsafe { device.CreateRenderTargetView(back_buffer, Some(&desc), Some(&mut view)) }
        .map_err(DeviceError::CreateRenderTargetView)?;
    view.ok_or_else(|| DeviceError::CreateRenderTargetView(windows::core::Error::from_win32()))
}

fn create_depth_buffer(
    device: &ID3D11Device,
    width: u32,
    height: u32,
) -> Result<(ID3D11Texture2D, ID3D11DepthStencilView, ID3D11ShaderResourceView), DeviceError> {
    // Typeless storage: the same 32-bit texels are viewed as D32_FLOAT by the
    // depth-stencil view and as R32_FLOAT by the shader-resource view.
    let texture_desc = D3D11_TEXTURE2D_DESC {
        Width: width,
        Height: height,
        MipLevels: 1,
        ArraySize: 1,
        Format: DXGI_FORMAT_R32_TYPELESS,
        SampleDesc: DXGI_SAMPLE_DESC {
            Count: 1,
            Quality: 0,
        },
        Usage: D3D11_USAGE_DEFAULT,
        BindFlags: (D3D11_BIND_DEPTH_STENCIL.0 | D3D11_BIND_SHADER_RESOURCE.0) as u32,
        CPUAccessFlags: 0,
        MiscFlags: 0,
    };

    let mut texture = None;
    unsafe { device.CreateTexture2D(&texture_desc, None, Some(&mut texture)) }
        .map_err(DeviceError::CreateDepthTexture)?;
    let texture =
        texture.ok_or_else(|| DeviceError::CreateDepthTexture(windows::core::Error::from_win32()))?;

    let stencil_desc = D3D11_DEPTH_STENCIL_VIEW_DESC {
        Format: DXGI_FORMAT_D32_FLOAT,
        ViewDimension: D3D11_DSV_DIMENSION_TEXTURE2D,
        ..Default::default()
    };
    let mut stencil_view = None;
    unsafe { device.CreateDepthStencilView(&texture, Some(&stencil_desc), Some(&mut stencil_view)) }
        .map_err(DeviceError::CreateDepthStencilView)?;
    let stencil_view = stencil_view
        .ok_or_else(|| DeviceError::CreateDepthStencilView(windows::core::Error::from_win32()))?;

    let shader_desc = D3D11_SHADER_RESOURCE_VIEW_DESC {
        Format: DXGI_FORMAT_R32_FLOAT,
        ViewDimension: D3D11_SRV_DIMENSION_TEXTURE2D,
        Anonymous: D3D11_SHADER_RESOURCE_VIEW_DESC_0 {
            Texture2D: D3D11_TEX2D_SRV {
                MostDetailedMip: 0,
                MipLevels: 1,
            },
        },
    };
    let mut shader_view = None;
    unsafe { device.CreateShaderResourceView(&texture, Some(&shader_desc), Some(&mut shader_view)) }
        .map_err(DeviceError::CreateDepthShaderView)?;
    let shader_view = shader_view
        .ok_or_else(|| DeviceError::CreateDepthShaderView(windows::core::Error::from_win32()))?;

    Ok((texture, stencil_view, shader_view))
}
