mod callback;
mod command;
mod event;
mod reducer;
mod source;
mod store;

pub use callback::*;
pub use reducer::*;
pub use source::*;
pub use store::*;
