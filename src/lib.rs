pub mod automaton;
pub mod classify;
pub mod codegen;
pub mod error;
pub mod exceptions;
pub mod region;
pub mod stages;
pub mod stemmer;
pub mod word;

pub use automaton::SuffixTable;
pub use error::{Result, StemError, TableError};
pub use region::{Gate, Regions};
pub use stemmer::{Outcome, Porter2, StemTrace, Stemmer, stem};
