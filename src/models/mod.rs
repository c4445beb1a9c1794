pub mod request;
pub mod state;

pub use request::*;
pub use state::*;
