//! Recursive-descent parsers for Isabelle ROOT and theory files.

mod parser;
mod root;
mod structure;
mod theory;

pub use parser::Parser;
pub use root::{parse_root_file, RootParser, ALL_KEYWORDS};
pub use structure::{Chapter, DocumentFiles, ExportFiles, RootStructure, Session, Theories, TheoryStructure, UNSORTED_CHAPTER};
pub use theory::{parse_theory_file, TheoryParser};
