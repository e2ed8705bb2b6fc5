mod callback;
mod command;
mod event;
mod source;

pub use callback::*;
pub use command::*;
pub use event::*;
pub use source::*;
