use thiserror::Error;

/// Faults that stop the machine. None of them are recoverable: the run loop
/// reports the error and exits.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The fetched word matches no entry in the instruction table.
    #[error("invalid instruction {opcode:#06X} at address {addr:#05X}")]
    InvalidInstruction { addr: u16, opcode: u16 },

    /// CALL nested deeper than the stack allows.
    #[error("call stack overflow at address {addr:#05X}")]
    StackOverflow { addr: u16 },

    /// RET executed with no return address on the stack.
    #[error("return with an empty call stack at address {addr:#05X}")]
    StackUnderflow { addr: u16 },

    /// The ROM does not fit between the program start and the end of memory.
    #[error("ROM is {size} bytes but only {capacity} bytes fit in program memory")]
    RomTooLarge { size: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
