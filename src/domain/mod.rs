//! Core validation logic: the witness directory and the transfer validator
//! facade built on top of it.

mod validator;
pub use validator::*;

mod witness_directory;
pub use witness_directory::*;
