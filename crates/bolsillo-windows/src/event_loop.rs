//! The Win32 event thread.
//!
//! One dedicated thread hosts everything the OS insists on delivering to
//! a window or a message queue: the desktop-wide WinEvent hook, the two
//! global hotkeys, and the hidden sink window that receives tray icon
//! callbacks and menu commands. Nothing on this thread touches engine
//! state — every callback only builds a value and sends it through a
//! channel, so the daemon thread stays the single writer.

use std::sync::mpsc::Sender;
use std::thread;

use bolsillo_core::config::HotkeySettings;
use bolsillo_core::{Action, WindowEvent, WindowResult};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Accessibility::{HWINEVENTHOOK, SetWinEventHook, UnhookWinEvent};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, EVENT_OBJECT_DESTROY,
    EVENT_OBJECT_SHOW, GetMessageW, MSG, PostThreadMessageW, RegisterClassW,
    RegisterWindowMessageW, TranslateMessage, WINEVENT_OUTOFCONTEXT, WINEVENT_SKIPOWNPROCESS,
    WM_COMMAND, WM_HOTKEY, WM_LBUTTONDBLCLK, WM_LBUTTONUP, WM_QUIT, WM_RBUTTONUP, WNDCLASSW,
    WS_EX_TOOLWINDOW,
};
use windows::core::w;

use crate::event;
use crate::hotkey::Hotkeys;
use crate::tray;

// Thread-local senders for the WinEvent callback and the sink wndproc.
thread_local! {
    static EVENT_SENDER: std::cell::RefCell<Option<Sender<WindowEvent>>> =
        const { std::cell::RefCell::new(None) };
    static ACTION_SENDER: std::cell::RefCell<Option<Sender<Action>>> =
        const { std::cell::RefCell::new(None) };
    static TASKBAR_CREATED: std::cell::Cell<u32> = const { std::cell::Cell::new(0) };
}

/// Starts the Win32 event thread.
///
/// Registers the window event hook, the global hotkeys from `settings`,
/// and the tray sink window. Window events and user actions are sent
/// through the provided channels. Returns once the thread is ready; the
/// handle exposes the sink window (for creating tray icons against) and
/// any hotkey registration warnings.
pub fn start(
    event_tx: Sender<WindowEvent>,
    action_tx: Sender<Action>,
    settings: HotkeySettings,
) -> WindowResult<EventLoopHandle> {
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<Ready, String>>();

    let handle = thread::spawn(move || {
        EVENT_SENDER.with(|cell| {
            *cell.borrow_mut() = Some(event_tx);
        });
        ACTION_SENDER.with(|cell| {
            *cell.borrow_mut() = Some(action_tx.clone());
        });

        let thread_id = unsafe { windows::Win32::System::Threading::GetCurrentThreadId() };

        // SAFETY: SetWinEventHook registers our callback for system-wide
        // window events. WINEVENT_OUTOFCONTEXT means the callback runs in
        // our process. WINEVENT_SKIPOWNPROCESS ignores our own windows.
        let hook = unsafe {
            SetWinEventHook(
                EVENT_OBJECT_DESTROY,
                EVENT_OBJECT_SHOW,
                None,
                Some(win_event_proc),
                0,
                0,
                WINEVENT_OUTOFCONTEXT | WINEVENT_SKIPOWNPROCESS,
            )
        };

        if hook.is_invalid() {
            let _ = ready_tx.send(Err("Failed to set WinEvent hook".to_string()));
            return;
        }

        // Register hotkeys on this thread's message queue.
        let (hotkeys, warnings) = Hotkeys::register(action_tx, &settings);

        // Create the hidden window that receives tray callbacks. Without
        // it there is no way back from a hidden window, so this one is
        // fatal.
        let Some(sink) = create_tray_sink() else {
            let _ = ready_tx.send(Err("Failed to create tray sink window".to_string()));
            unsafe {
                let _ = UnhookWinEvent(hook);
            }
            return;
        };

        let _ = ready_tx.send(Ok(Ready {
            thread_id,
            sink: sink.0 as usize,
            warnings,
        }));

        run_message_pump(&hotkeys);

        // Cleanup: destroy the sink, hotkeys unregistered in Drop.
        unsafe {
            let _ = DestroyWindow(sink);
            let _ = UnhookWinEvent(hook);
        }
        drop(hotkeys);
    });

    let ready = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> {
            "event loop thread exited unexpectedly".into()
        })?
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    Ok(EventLoopHandle {
        thread_id: ready.thread_id,
        handle,
        sink: ready.sink,
        warnings: ready.warnings,
    })
}

struct Ready {
    thread_id: u32,
    sink: usize,
    warnings: Vec<String>,
}

/// Handle for controlling the event thread from the daemon.
pub struct EventLoopHandle {
    thread_id: u32,
    handle: thread::JoinHandle<()>,
    /// Raw handle of the tray sink window. Tray icons are created against
    /// this window so their callbacks land in the sink wndproc.
    pub sink: usize,
    /// Hotkey registration warnings to surface to the user once.
    pub warnings: Vec<String>,
}

impl EventLoopHandle {
    /// Signals the event thread to stop and waits for it to finish.
    pub fn stop(self) {
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = self.handle.join();
    }
}

/// The Win32 message pump. Dispatches hotkey messages and blocks
/// until WM_QUIT is received.
fn run_message_pump(hotkeys: &Hotkeys) {
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.message == WM_HOTKEY {
            hotkeys.dispatch(msg.wParam.0 as i32);
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// Creates the hidden window that owns the tray icons.
///
/// Must NOT be a message-only window (`HWND_MESSAGE` parent) because those
/// do not receive the `TaskbarCreated` broadcast we need to survive an
/// Explorer restart. Instead we create a regular hidden window with
/// `WS_EX_TOOLWINDOW` to keep it out of the taskbar.
fn create_tray_sink() -> Option<HWND> {
    unsafe {
        // Registered before window creation so the wndproc can compare
        // incoming messages against it from the first dispatch.
        let taskbar_created = RegisterWindowMessageW(w!("TaskbarCreated"));
        TASKBAR_CREATED.with(|cell| cell.set(taskbar_created));

        let class_name = w!("BolsilloTraySink");
        let wc = WNDCLASSW {
            lpfnWndProc: Some(tray_sink_proc),
            lpszClassName: class_name.into(),
            ..Default::default()
        };

        if RegisterClassW(&wc) == 0 {
            eprintln!("Failed to register BolsilloTraySink class");
            return None;
        }

        // WS_EX_TOOLWINDOW: no taskbar entry.
        // No WS_VISIBLE: window stays hidden.
        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW,
            class_name,
            w!("BolsilloTraySink"),
            Default::default(),
            0,
            0,
            0,
            0,
            None,
            None,
            None,
            None,
        );

        match hwnd {
            Ok(h) if !h.is_invalid() => Some(h),
            _ => {
                eprintln!("Failed to create BolsilloTraySink window");
                None
            }
        }
    }
}

fn send_action(action: Action) {
    ACTION_SENDER.with(|cell| {
        if let Some(sender) = cell.borrow().as_ref() {
            let _ = sender.send(action);
        }
    });
}

/// WNDPROC for the tray sink window.
///
/// Routes tray icon clicks and context menu selections to the daemon as
/// actions; everything else goes to `DefWindowProcW`. The menu itself is
/// shown on this thread (`TrackPopupMenu` needs the owning thread), but
/// the selected command still travels through the action channel.
unsafe extern "system" fn tray_sink_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        tray::WM_TRAYICON => {
            let icon_id = wparam.0 as u32;
            let mouse_msg = (lparam.0 as u32) & 0xFFFF;

            if icon_id == tray::APP_ICON_ID {
                match mouse_msg {
                    WM_LBUTTONUP | WM_LBUTTONDBLCLK => send_action(Action::OpenSettings),
                    WM_RBUTTONUP => tray::show_context_menu(hwnd),
                    _ => {}
                }
            } else if matches!(mouse_msg, WM_LBUTTONUP | WM_LBUTTONDBLCLK | WM_RBUTTONUP) {
                // Any click on a window icon restores that window.
                send_action(Action::Restore { icon_id });
            }
            return LRESULT(0);
        }
        WM_COMMAND => {
            match (wparam.0 as u32) & 0xFFFF {
                tray::MENU_RESTORE_ALL => send_action(Action::RestoreAll),
                tray::MENU_SETTINGS => send_action(Action::OpenSettings),
                tray::MENU_EXIT => send_action(Action::Exit),
                _ => {}
            }
            return LRESULT(0);
        }
        other => {
            // Explorer restarted: every tray icon is gone and must be
            // re-added before the user notices.
            if other != 0 && other == TASKBAR_CREATED.with(std::cell::Cell::get) {
                send_action(Action::RecreateIcons);
                return LRESULT(0);
            }
        }
    }
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// The WinEvent callback.
unsafe extern "system" fn win_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    hwnd: HWND,
    id_object: i32,
    _id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    if let Some(window_event) = event::translate(event, hwnd, id_object) {
        EVENT_SENDER.with(|cell| {
            if let Some(sender) = cell.borrow().as_ref() {
                let _ = sender.send(window_event);
            }
        });
    }
}
