//! Settings sources, lowest precedence first: global file, workspace file, environment.

pub mod environment;
pub mod global_file;
pub mod workspace_file;
