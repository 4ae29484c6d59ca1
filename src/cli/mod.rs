mod args;
mod dispatch;

pub use args::{parse_args, Command};
pub use dispatch::{execute, Outcome};
