pub mod interpreter;
pub mod parser;

pub use interpreter::Interpreter;
pub use parser::{parse_command, Command};
