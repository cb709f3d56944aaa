//! Device initialisation against real and invalid windows.

#![cfg(windows)]

use engine_graphics::{DeviceError, GraphicsDevice};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, CreateWindowExW, DefWindowProcW, DestroyWindow, RegisterClassExW,
    WINDOW_EX_STYLE, WNDCLASSEXW, WS_POPUP,
};
use windows::core::w;

extern "system" fn test_wndproc(
    window: HWND,
    message: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(window, message, wparam, lparam) }
}

/// A hidden popup window: client area equals the window size exactly.
fn create_test_window(width: i32, height: i32) -> HWND {
    unsafe {
        let instance = GetModuleHandleW(None).expect("module handle");

        let class = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(test_wndproc),
            hInstance: instance.into(),
            lpszClassName: w!("GraphicsDeviceTestWindow"),
            ..Default::default()
        };
        RegisterClassExW(&class);

        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            w!("GraphicsDeviceTestWindow"),
            w!("graphics device test"),
            WS_POPUP,
            0,
            0,
            width,
            height,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .expect("test window")
    }
}

#[test]
fn null_window_fails_at_the_size_query_stage() {
    let error = GraphicsDevice::new(HWND::default()).expect_err("null window must be rejected");
    assert!(matches!(error, DeviceError::QueryWindowSize(_)));
    assert_eq!(error.to_string(), "querying window size");
}

#[test]
#[ignore = "requires a Direct3D 11 capable adapter"]
fn buffers_match_the_window_client_size() {
    let window = create_test_window(640, 480);
    {
        let device = GraphicsDevice::new(window).expect("device initialisation");
        assert_eq!(device.back_buffer_size(), (640, 480));

        let swap_desc = unsafe { device.swap_chain().GetDesc1() }.expect("swap chain desc");
        assert_eq!((swap_desc.Width, swap_desc.Height), (640, 480));
        assert_eq!(swap_desc.BufferCount, 2);

        let mut depth_desc = windows::Win32::Graphics::Direct3D11::D3D11_TEXTURE2D_DESC::default();
        unsafe { device.depth_texture().GetDesc(&mut depth_desc) };
        assert_eq!((depth_desc.Width, depth_desc.Height), (640, 480));
        // Dropping here must release every resource without panicking.
    }
    unsafe { DestroyWindow(window) }.expect("destroy test window");
}
