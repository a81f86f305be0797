//! Theory-grammar parser: `theory <name> [imports <name>+] begin`.
//!
//! Theory files are typically much larger than their header - the bulk of
//! the file is an Isabelle proof script this crate has no reason to parse.
//! [`parse_theory_file`] slices out just the header block(s) with a regex
//! before handing them to the tokenizer, mirroring how the reference
//! implementation avoids lexing the proof body at all.

use once_cell::sync::Lazy;
use regex::Regex;

use proofman_lex::{Lexer, TokenKind};
use proofman_util::ProofmanResult;

use crate::parser::Parser;
use crate::structure::TheoryStructure;

const THEORY: &str = "theory";
const IMPORTS: &str = "imports";
const BEGIN: &str = "begin";

static THEORY_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?sm)^theory(.+?)begin").expect("valid regex"));

/// Parses a single `theory ... begin` header, already isolated from its
/// surrounding proof script.
pub struct TheoryParser {
    parser: Parser,
}

impl TheoryParser {
    pub fn new(tokens: Vec<proofman_lex::Token>) -> Self {
        Self { parser: Parser::new(tokens) }
    }

    pub fn parse(tokens: Vec<proofman_lex::Token>) -> ProofmanResult<TheoryStructure> {
        let mut parser = Self::new(tokens);

        parser.parser.eat_keyword(&[THEORY])?;
        let name = parser.parser.eat(&[TokenKind::Identifier, TokenKind::StringLiteral])?.lexeme;

        let imports = parser.parser.maybe_qualified_string_array(IMPORTS, &[BEGIN])?.unwrap_or_default();

        parser.parser.eat_keyword(&[BEGIN])?;

        Ok(TheoryStructure { name, imports })
    }
}

/// Finds every `theory ... begin` header in `source` and parses each one,
/// ignoring everything after `begin` in each match.
pub fn parse_theory_file(source: &str) -> ProofmanResult<Vec<TheoryStructure>> {
    let mut output = Vec::new();

    for block in THEORY_BLOCK.find_iter(source) {
        let tokens = Lexer::tokenize(block.as_str())?;
        output.push(TheoryParser::parse(tokens)?);
    }

    Ok(output)
}
