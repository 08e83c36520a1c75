mod account;
pub use account::*;

mod error;
pub use error::*;

mod status;
pub use status::*;

mod transfer;
pub use transfer::*;
