pub mod autostart;
pub mod daemon;
pub mod debug;
pub mod init;
pub mod restore_all;
pub mod start;
pub mod status;
pub mod stop;
pub mod target;
