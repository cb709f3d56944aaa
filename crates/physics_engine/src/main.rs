//! Application entry point: window setup and the message loop.

#[cfg(windows)]
mod window;

#[cfg(windows)]
fn main() -> eyre::Result<()> {
    use engine_graphics::GraphicsDevice;
    use tracing::{error, info};
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, MB_OK, MSG, MessageBoxW, PM_REMOVE, PeekMessageW, TranslateMessage,
        WM_QUIT,
    };
    use windows::core::w;

    color_eyre::install()?;
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();

    let module = window::executable_module()?;
    window::register_window_class(module)?;

    let (desktop_width, desktop_height) = window::desktop_resolution()?;
    let main_window = match window::create_window(module, desktop_width, desktop_height) {
        Ok(handle) => handle,
        Err(cause) => {
            // Nothing to run without a window: tell the user and exit cleanly.
            error!(%cause, "window creation failed");
            let _ = unsafe {
                MessageBoxW(
                    None,
                    w!("Failure Creating Window"),
                    window::WINDOW_TITLE,
                    MB_OK,
                )
            };
            return Ok(());
        }
    };

    let device = GraphicsDevice::new(main_window)?;
    let (width, height) = device.back_buffer_size();
    info!(width, height, "Direct3D 11 ready");

    let mut done = false;
    while !done {
        let mut message = MSG::default();

        // Non-blocking retrieval so the idle branch can run every frame.
        if unsafe { PeekMessageW(&mut message, None, 0, 0, PM_REMOVE) }.into() {
            unsafe {
                _ = TranslateMessage(&message);
                DispatchMessageW(&message);
            }

            if message.message == WM_QUIT {
                done = true;
            }
        } else {
            // Idle: per-frame update and render will live here.
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("physics_engine requires Windows (Direct3D 11)");
}
