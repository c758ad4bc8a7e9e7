use super::process::process_identity;
use super::{WindowSnapshot, WindowSource};
use windows_sys::Win32::Foundation::{BOOL, HWND, LPARAM};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindowVisible,
};

#[derive(Debug, Default, Clone, Copy)]
pub(super) struct Win32WindowSource;

impl WindowSource for Win32WindowSource {
    fn foreground(&self) -> Option<WindowSnapshot> {
        // SAFETY: no preconditions; returns null when no window has focus.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_null() {
            return None;
        }
        Some(snapshot(hwnd))
    }

    fn visible_windows(&self) -> Vec<WindowSnapshot> {
        let mut handles: Vec<HWND> = Vec::new();
        // SAFETY: the callback only runs during this call, while `handles` is alive.
        unsafe {
            EnumWindows(
                Some(collect_visible),
                &mut handles as *mut Vec<HWND> as LPARAM,
            );
        }
        handles.into_iter().map(snapshot).collect()
    }
}

unsafe extern "system" fn collect_visible(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let handles = &mut *(lparam as *mut Vec<HWND>);
    if IsWindowVisible(hwnd) != 0 {
        handles.push(hwnd);
    }
    1
}

fn snapshot(hwnd: HWND) -> WindowSnapshot {
    let window_title = window_title(hwnd);
    let mut pid: u32 = 0;
    // SAFETY: `pid` is a valid out pointer for the duration of the call.
    unsafe {
        GetWindowThreadProcessId(hwnd, &mut pid);
    }
    let (process_name, exe_path) = process_identity(pid);
    WindowSnapshot {
        window_title,
        process_name,
        exe_path,
        pid,
    }
}

fn window_title(hwnd: HWND) -> String {
    // SAFETY: the buffer is sized from GetWindowTextLengthW plus the terminator.
    unsafe {
        let len = GetWindowTextLengthW(hwnd);
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = GetWindowTextW(hwnd, buf.as_mut_ptr(), buf.len() as i32);
        String::from_utf16_lossy(&buf[..copied.max(0) as usize])
    }
}
