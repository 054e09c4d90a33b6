use windows::Win32::Foundation::{CloseHandle, HWND};
use windows::Win32::System::ProcessStatus::K32GetModuleFileNameExW;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE, TerminateProcess,
};
use windows::Win32::UI::WindowsAndMessaging::GetWindowThreadProcessId;

/// Checks whether a process with the given PID is still alive.
///
/// Uses `OpenProcess` with minimal access rights. If the handle can be
/// opened, the process exists. This is used to detect stale PID files
/// left behind when the daemon is killed without a clean shutdown.
pub fn is_process_alive(pid: u32) -> bool {
    // SAFETY: OpenProcess attempts to open an existing process.
    // PROCESS_QUERY_LIMITED_INFORMATION is the least-privilege access
    // right that still lets us confirm the process exists.
    let result = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

    match result {
        Ok(handle) => {
            // SAFETY: We only opened the handle to check existence,
            // so we close it immediately.
            unsafe {
                let _ = CloseHandle(handle);
            }
            true
        }
        Err(_) => false,
    }
}

/// Forcibly terminates a process. Returns whether termination succeeded.
///
/// Last-resort path for `bolsillo stop` when the daemon's IPC pipe has
/// stopped responding.
pub fn kill_process(pid: u32) -> bool {
    // SAFETY: OpenProcess with PROCESS_TERMINATE, then TerminateProcess.
    // The handle is closed regardless of the termination outcome.
    unsafe {
        let Ok(handle) = OpenProcess(PROCESS_TERMINATE, false, pid) else {
            return false;
        };
        let killed = TerminateProcess(handle, 1).is_ok();
        let _ = CloseHandle(handle);
        killed
    }
}

/// Returns the PID owning a window, or `None` if it cannot be determined.
pub fn window_pid(handle: usize) -> Option<u32> {
    let mut pid: u32 = 0;
    // SAFETY: GetWindowThreadProcessId reads the owning thread/process ids.
    unsafe { GetWindowThreadProcessId(HWND(handle as *mut _), Some(&mut pid)) };
    if pid == 0 { None } else { Some(pid) }
}

/// Resolves the full executable path of the process owning a window.
///
/// Returns `None` when the window is gone or the process cannot be opened
/// with limited query rights — protected system processes refuse even
/// those, and their windows are simply never auto-hidden.
pub fn window_exe_path(handle: usize) -> Option<String> {
    exe_path(window_pid(handle)?)
}

/// Returns the executable path for a process ID.
fn exe_path(pid: u32) -> Option<String> {
    // SAFETY: OpenProcess with limited query rights, then
    // K32GetModuleFileNameExW into a caller-provided buffer. The handle
    // is closed before returning.
    unsafe {
        let h = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid).ok()?;
        let mut buf = [0u16; 1024];
        let len = K32GetModuleFileNameExW(Some(h), None, &mut buf);
        let _ = CloseHandle(h);
        if len == 0 {
            return None;
        }
        String::from_utf16(&buf[..len as usize]).ok()
    }
}
