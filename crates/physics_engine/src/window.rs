//! Window class registration, window creation and the window procedure.

use windows::Win32::Foundation::{HMODULE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{BeginPaint, EndPaint, PAINTSTRUCT};
use windows::Win32::System::LibraryLoader::GetModuleHandleExW;
use windows::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRect, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW,
    GetDesktopWindow, GetWindowRect, IDC_ARROW, LoadCursorW, PostQuitMessage, RegisterClassExW,
    SW_SHOW, ShowWindow, UpdateWindow, WINDOW_EX_STYLE, WM_DESTROY, WM_PAINT, WNDCLASSEXW,
    WS_MAXIMIZE, WS_OVERLAPPEDWINDOW, WS_THICKFRAME,
};
use windows::core::{PCWSTR, Result, w};

/// Fixed class name and title bar text for the engine window.
pub const WINDOW_CLASS: PCWSTR = w!("Physics Engine");
pub const WINDOW_TITLE: PCWSTR = w!("Physics Engine");

/// Handle to the file used to create the calling process.
pub fn executable_module() -> Result<HMODULE> {
    let mut module = HMODULE::default();
    unsafe { GetModuleHandleExW(Default::default(), None, &mut module)? };
    Ok(module)
}

/// Desktop size in pixels; (0, 0) is the top-left corner.
pub fn desktop_resolution() -> Result<(i32, i32)> {
    let desktop = unsafe { GetDesktopWindow() };
    let mut rect = RECT::default();
    unsafe { GetWindowRect(desktop, &mut rect)? };
    Ok((rect.right, rect.bottom))
}

pub fn register_window_class(instance: HMODULE) -> Result<()> {
    // WNDCLASSEXW - https://learn.microsoft.com/en-us/windows/win32/api/winuser/ns-winuser-wndclassexw
    let class = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: CS_HREDRAW | CS_VREDRAW,
        lpfnWndProc: Some(wndproc),
        hInstance: instance.into(),
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        lpszClassName: WINDOW_CLASS,
        ..Default::default()
    };
    let atom = unsafe { RegisterClassExW(&class) };
    debug_assert_ne!(atom, 0, "Failed to register window class");
    Ok(())
}

/// Create and show the main window: overlapped and maximised, with the
/// resize border removed. `client_width`/`client_height` size the client
/// area; the overall window is larger (borders, title bar).
pub fn create_window(instance: HMODULE, client_width: i32, client_height: i32) -> Result<HWND> {
    let style = (WS_OVERLAPPEDWINDOW & !WS_THICKFRAME) | WS_MAXIMIZE;

    let mut rect = RECT {
        left: 0,
        top: 0,
        right: client_width,
        bottom: client_height,
    };
    // Calculates the required size of the window rectangle, based on the desired size of the client rectangle.
    unsafe { AdjustWindowRect(&mut rect, style, false)? };

    let window = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            WINDOW_CLASS,
            WINDOW_TITLE,
            style,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            rect.right - rect.left,
            rect.bottom - rect.top,
            None,                    // no parent window
            None,                    // no menus
            Some(instance.into()),
            None,
        )
    }?;

    unsafe {
        _ = ShowWindow(window, SW_SHOW);
        _ = UpdateWindow(window);
    }
    Ok(window)
}

/// Handles the messages we care about; everything else falls back to the
/// platform default handling.
extern "system" fn wndproc(window: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match message {
        WM_PAINT => {
            // Keep the window region valid; actual rendering happens in the
            // idle branch of the message loop.
            let mut paint = PAINTSTRUCT::default();
            unsafe {
                _ = BeginPaint(window, &mut paint);
                _ = EndPaint(window, &paint);
            }
            LRESULT(0)
        }
        WM_DESTROY => {
            unsafe { PostQuitMessage(0) };
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(window, message, wparam, lparam) },
    }
}
