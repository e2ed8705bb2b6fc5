mod boot;
pub mod mock;
mod replay;
mod shell;
mod view;

pub use boot::*;
pub use replay::*;
pub use shell::*;
pub use view::*;
