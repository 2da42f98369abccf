mod command_result;
pub mod init;
pub mod update;

pub use command_result::*;
