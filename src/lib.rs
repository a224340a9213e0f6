// Crate root: declare modules and control visibility
pub mod bsdl;
pub mod debug;
pub mod irlist;
pub mod opcode;
pub mod utils;

// Re-export commonly used API from the library for binaries/tests
pub use bsdl::OpcodeScanner;
pub use irlist::{extract, run};
pub use opcode::OpcodeEntry;
pub use utils::resolve_input_path;
