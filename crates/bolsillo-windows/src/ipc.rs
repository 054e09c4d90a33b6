//! Named-pipe transport for CLI <-> daemon commands.
//!
//! One JSON line per direction: the client writes a serialized
//! [`Command`], the daemon answers with a serialized [`Response`], then
//! the connection is over. The daemon accepts one client at a time.

use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;

use bolsillo_core::WindowResult;
use bolsillo_core::ipc::{Command, PIPE_NAME, Response};
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

const GENERIC_READ_WRITE: u32 = 0x80000000 | 0x40000000;

/// RAII guard that closes a HANDLE on drop.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: CloseHandle releases the handle. The guard owns
        // this handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// The daemon's side of the pipe: accepts one command per connection.
pub struct PipeServer {
    handle: HANDLE,
}

impl PipeServer {
    /// Creates a fresh pipe instance without waiting for a client yet.
    pub fn create() -> WindowResult<Self> {
        let pipe_name = HSTRING::from(PIPE_NAME);

        // SAFETY: CreateNamedPipeW creates a new named pipe instance.
        // We pass valid parameters and check for INVALID_HANDLE_VALUE.
        let handle = unsafe {
            CreateNamedPipeW(
                &pipe_name,
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                512, // output buffer size
                512, // input buffer size
                0,   // default timeout
                None,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            return Err("Failed to create named pipe".into());
        }

        Ok(Self { handle })
    }

    /// Blocks until a client connects, then reads its command.
    pub fn accept_command(&self) -> WindowResult<Command> {
        // SAFETY: ConnectNamedPipe blocks until a client connects.
        unsafe {
            ConnectNamedPipe(self.handle, None)?;
        }

        let mut reader = BufReader::new(duplicate_as_file(self.handle)?);
        let mut line = String::new();
        reader.read_line(&mut line)?;

        Ok(serde_json::from_str(line.trim())?)
    }

    /// Sends the response back to the connected client and disconnects.
    pub fn send_response(&self, response: &Response) -> WindowResult<()> {
        let mut writer = duplicate_as_file(self.handle)?;
        writeln!(writer, "{}", serde_json::to_string(response)?)?;
        writer.flush()?;

        // SAFETY: FlushFileBuffers blocks until the client has read all
        // data from the pipe. Without this, DisconnectNamedPipe would
        // discard unread data and the client would see error 233.
        unsafe {
            let _ = FlushFileBuffers(self.handle);
        }

        // SAFETY: DisconnectNamedPipe frees this instance for the next
        // connection.
        unsafe {
            DisconnectNamedPipe(self.handle)?;
        }

        Ok(())
    }
}

impl Drop for PipeServer {
    fn drop(&mut self) {
        // SAFETY: CloseHandle releases the pipe handle when the server
        // is dropped.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Sends a command to the daemon and returns its response (client side).
pub fn send_command(command: &Command) -> WindowResult<Response> {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: CreateFileW opens an existing named pipe as a client.
    let handle = unsafe {
        CreateFileW(
            &pipe_name,
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )?
    };

    let _guard = HandleGuard(handle);

    let mut writer = duplicate_as_file(handle)?;
    writeln!(writer, "{}", serde_json::to_string(command)?)?;
    writer.flush()?;

    let mut reader = BufReader::new(duplicate_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(serde_json::from_str(line.trim())?)
}

/// Checks if the daemon's named pipe exists (i.e. the daemon is running).
///
/// Uses `WaitNamedPipeW` with a 1 ms timeout instead of `CreateFileW`.
/// This avoids consuming a pipe connection — it only checks whether the
/// pipe exists without actually connecting to it.
pub fn is_daemon_running() -> bool {
    let pipe_name = HSTRING::from(PIPE_NAME);

    // SAFETY: WaitNamedPipeW checks whether a pipe instance is available.
    // A timeout of 1 ms means we return almost immediately.
    unsafe { WaitNamedPipeW(&pipe_name, 1).as_bool() }
}

/// Duplicates a HANDLE and wraps it as a `std::fs::File`.
///
/// We duplicate instead of converting directly so that the original handle
/// and the File can be closed independently — avoids double-close bugs.
fn duplicate_as_file(handle: HANDLE) -> WindowResult<std::fs::File> {
    let mut dup = HANDLE::default();

    // SAFETY: DuplicateHandle creates a copy of the handle. The duplicate
    // is owned by the returned File and closed when it's dropped.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )?;

        Ok(std::fs::File::from_raw_handle(dup.0))
    }
}
