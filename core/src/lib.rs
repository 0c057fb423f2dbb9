pub use crate::error::{Error, Result};
pub use crate::instruction::Instr;
pub use crate::machine::{FrameBuffer, Machine};

pub mod constants;
mod error;
mod instruction;
mod machine;
mod opcode;
