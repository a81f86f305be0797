//! Root-grammar parser: tokens → [`RootStructure`].

use rustc_hash::FxHashMap;

use proofman_lex::TokenKind;
use proofman_util::{ProofmanError, ProofmanResult};

use crate::parser::Parser;
use crate::structure::{Chapter, DocumentFiles, ExportFiles, RootStructure, Session, Theories, UNSORTED_CHAPTER};

const CHAPTER_DEFINITION: &str = "chapter_definition";
const CHAPTER: &str = "chapter";
const SESSION: &str = "session";
const DESCRIPTION: &str = "description";
const DIRECTORIES: &str = "directories";
const OPTIONS: &str = "options";
const SESSIONS: &str = "sessions";
const THEORIES: &str = "theories";
const GLOBAL: &str = "global";
const DOCUMENT_THEORIES: &str = "document_theories";
const DOCUMENT_FILES: &str = "document_files";
const EXPORT_FILES: &str = "export_files";
const EXPORT_CLASSPATH: &str = "export_classpath";
const IN: &str = "in";

/// Every reserved identifier in the ROOT grammar. Used as the terminator set
/// for every "run of entries until a keyword" production.
pub const ALL_KEYWORDS: &[&str] = &[
    CHAPTER_DEFINITION,
    CHAPTER,
    SESSION,
    DESCRIPTION,
    DIRECTORIES,
    OPTIONS,
    SESSIONS,
    THEORIES,
    GLOBAL,
    DOCUMENT_THEORIES,
    DOCUMENT_FILES,
    EXPORT_FILES,
    EXPORT_CLASSPATH,
    IN,
];

/// Parses a full ROOT file into a [`RootStructure`].
pub struct RootParser {
    parser: Parser,
    current_chapter: String,
}

type OptionsMap = FxHashMap<String, Option<String>>;

impl RootParser {
    pub fn new(tokens: Vec<proofman_lex::Token>) -> Self {
        Self { parser: Parser::new(tokens), current_chapter: UNSORTED_CHAPTER.to_string() }
    }

    fn maybe_description(&mut self) -> ProofmanResult<Option<String>> {
        if self.parser.eat_keyword(&[DESCRIPTION]).is_err() {
            return Ok(None);
        }
        Ok(Some(self.parser.eat_name()?.lexeme))
    }

    fn maybe_groups(&mut self) -> ProofmanResult<Option<Vec<String>>> {
        if self.parser.eat(&[TokenKind::LeftParen]).is_err() {
            return Ok(None);
        }

        let mut items = Vec::new();
        loop {
            match self.parser.current() {
                None => return Err(ProofmanError::parse_eof("')'")),
                Some(t) if t.kind == TokenKind::RightParen => break,
                Some(_) => items.push(self.parser.eat_name()?.lexeme),
            }
        }
        self.parser.eat(&[TokenKind::RightParen])?;
        Ok(Some(items))
    }

    fn maybe_dir(&mut self) -> ProofmanResult<Option<String>> {
        if self.parser.eat_keyword(&[IN]).is_err() {
            return Ok(None);
        }
        Ok(Some(self.parser.eat_name()?.lexeme))
    }

    fn maybe_options_map(&mut self) -> ProofmanResult<Option<OptionsMap>> {
        if self.parser.eat(&[TokenKind::LeftSquareParen]).is_err() {
            return Ok(None);
        }

        let mut map = FxHashMap::default();
        loop {
            let current = self.parser.current().ok_or_else(|| ProofmanError::parse_eof("']'"))?;
            if current.kind == TokenKind::RightSquareParen {
                break;
            }

            let name = self.parser.eat_name()?.lexeme;
            let mut value = None;
            if matches!(self.parser.current(), Some(t) if t.kind == TokenKind::Equal) {
                self.parser.eat(&[TokenKind::Equal])?;
                value = Some(
                    self.parser
                        .eat(&[TokenKind::Identifier, TokenKind::StringLiteral, TokenKind::NumberLiteral])?
                        .lexeme,
                );
            }
            map.insert(name, value);

            let current = self.parser.current().ok_or_else(|| ProofmanError::parse_eof("',', ']'"))?;
            if current.kind == TokenKind::RightSquareParen {
                continue;
            }
            self.parser.eat(&[TokenKind::Comma])?;
        }
        self.parser.eat(&[TokenKind::RightSquareParen])?;
        Ok(Some(map))
    }

    fn maybe_options(&mut self) -> ProofmanResult<Option<OptionsMap>> {
        let Ok(options_kw) = self.parser.eat_keyword(&[OPTIONS]) else {
            return Ok(None);
        };

        match self.maybe_options_map()? {
            Some(map) => Ok(Some(map)),
            None => Err(ProofmanError::parse_mismatch("option name", "']'", options_kw.line)),
        }
    }

    fn maybe_theories(&mut self) -> ProofmanResult<Option<Theories>> {
        if self.parser.eat_keyword(&[THEORIES]).is_err() {
            return Ok(None);
        }

        let mut theories = Theories::default();
        if let Some(map) = self.maybe_options_map()? {
            theories.options = map;
        }

        loop {
            match self.parser.current() {
                None => break,
                Some(t) if t.kind == TokenKind::Identifier && ALL_KEYWORDS.contains(&t.lexeme.as_str()) => break,
                _ => {}
            }

            let entry = self.parser.eat_name()?.lexeme;

            let mut global = false;
            if matches!(self.parser.current(), Some(t) if t.kind == TokenKind::LeftParen) {
                self.parser.eat(&[TokenKind::LeftParen])?;
                self.parser.eat_keyword(&[GLOBAL])?;
                self.parser.eat(&[TokenKind::RightParen])?;
                global = true;
            }

            theories.is_global.insert(entry.clone(), global);
            theories.entries.push(entry);
        }

        Ok(Some(theories))
    }

    fn maybe_document_files(&mut self) -> ProofmanResult<Option<DocumentFiles>> {
        if self.parser.eat_keyword(&[DOCUMENT_FILES]).is_err() {
            return Ok(None);
        }

        let mut clause = DocumentFiles::default();
        if matches!(self.parser.current(), Some(t) if t.kind == TokenKind::LeftParen) {
            self.parser.eat(&[TokenKind::LeftParen])?;
            clause.dir = self.maybe_dir()?;
            self.parser.eat(&[TokenKind::RightParen])?;
        }

        clause.entries = self.parser.string_array(ALL_KEYWORDS)?;
        Ok(Some(clause))
    }

    fn maybe_export_files(&mut self) -> ProofmanResult<Option<ExportFiles>> {
        if self.parser.eat_keyword(&[EXPORT_FILES]).is_err() {
            return Ok(None);
        }

        let mut clause = ExportFiles::default();
        if matches!(self.parser.current(), Some(t) if t.kind == TokenKind::LeftParen) {
            self.parser.eat(&[TokenKind::LeftParen])?;
            clause.dir = self.maybe_dir()?;
            self.parser.eat(&[TokenKind::RightParen])?;
        }

        if matches!(self.parser.current(), Some(t) if t.kind == TokenKind::LeftSquareParen) {
            self.parser.eat(&[TokenKind::LeftSquareParen])?;
            let nat = self.parser.eat(&[TokenKind::NumberLiteral])?;
            if nat.lexeme.contains('.') {
                return Err(ProofmanError::parse_mismatch("natural number", nat.lexeme, nat.line));
            }
            clause.nat = Some(nat.lexeme);
            self.parser.eat(&[TokenKind::RightSquareParen])?;
        }

        clause.entries = self.parser.string_array(ALL_KEYWORDS)?;
        Ok(Some(clause))
    }

    fn chapter_definition(&mut self) -> ProofmanResult<Chapter> {
        let name = self.parser.eat_name()?.lexeme;
        let mut chapter = Chapter::new(name);
        if let Some(groups) = self.maybe_groups()? {
            chapter.groups = groups;
        }
        if let Some(description) = self.maybe_description()? {
            chapter.description = Some(description);
        }
        Ok(chapter)
    }

    fn chapter(&mut self) -> ProofmanResult<Chapter> {
        let name = self.parser.eat_name()?.lexeme;
        Ok(Chapter::new(name))
    }

    /// `name groups? (in dir)? = (parent +)? description? options? sessions?
    /// directories? theories* document_theories? document_files*
    /// export_files* export_classpath?`
    fn session(&mut self) -> ProofmanResult<Session> {
        let name = self.parser.eat_name()?.lexeme;
        let mut session = Session::new(name);

        if let Some(groups) = self.maybe_groups()? {
            session.groups = groups;
        }
        if let Some(dir) = self.maybe_dir()? {
            session.dir = Some(dir);
        }

        self.parser.eat(&[TokenKind::Equal])?;

        // Look one token past the still-unconsumed name to decide whether a
        // "parent +" production is present.
        if matches!(self.parser.peek(1), Some(t) if t.kind == TokenKind::Plus) {
            let system_name = self.parser.eat_name()?.lexeme;
            self.parser.eat(&[TokenKind::Plus])?;
            session.system_name = Some(system_name);
        }

        if let Some(description) = self.maybe_description()? {
            session.description = Some(description);
        }
        if let Some(options) = self.maybe_options()? {
            session.options = Some(options);
        }
        if let Some(sessions) = self.parser.maybe_qualified_string_array(SESSIONS, ALL_KEYWORDS)? {
            session.sessions = Some(sessions);
        }
        if let Some(directories) = self.parser.maybe_qualified_string_array(DIRECTORIES, ALL_KEYWORDS)? {
            session.directories = Some(directories);
        }

        while let Some(theories) = self.maybe_theories()? {
            session.theories.push(theories);
        }

        if let Some(document_theories) = self.parser.maybe_qualified_string_array(DOCUMENT_THEORIES, ALL_KEYWORDS)? {
            session.document_theories = Some(document_theories);
        }

        while let Some(clause) = self.maybe_document_files()? {
            session.document_files.push(clause);
        }

        while let Some(clause) = self.maybe_export_files()? {
            session.export_files.push(clause);
        }

        if let Some(export_classpath) = self.parser.maybe_qualified_string_array(EXPORT_CLASSPATH, ALL_KEYWORDS)? {
            session.export_classpath = Some(export_classpath);
        }

        Ok(session)
    }

    /// Parses the whole token stream, returning the resulting structure.
    pub fn parse(tokens: Vec<proofman_lex::Token>) -> ProofmanResult<RootStructure> {
        let mut parser = Self::new(tokens);
        let mut root = RootStructure::new();

        while !parser.parser.is_at_end() {
            let keyword = parser.parser.eat_keyword(&[CHAPTER_DEFINITION, CHAPTER, SESSION])?;

            match keyword.lexeme.as_str() {
                CHAPTER_DEFINITION => {
                    let chapter = parser.chapter_definition()?;
                    if let Some(existing) = root.chapters.get_mut(&chapter.name) {
                        existing.groups = chapter.groups;
                        existing.description = chapter.description;
                    } else {
                        root.chapters.insert(chapter.name.clone(), chapter);
                    }
                }
                CHAPTER => {
                    let chapter = parser.chapter()?;
                    let chapter_name = chapter.name.clone();
                    if !root.chapters.contains_key(&chapter.name) {
                        root.chapters.insert(chapter.name.clone(), chapter);
                    }
                    if !root.chapter_order.contains(&chapter_name) {
                        root.chapter_order.push(chapter_name.clone());
                    }
                    parser.current_chapter = chapter_name;
                }
                SESSION => {
                    let session = parser.session()?;
                    root.chapters
                        .get_mut(&parser.current_chapter)
                        .expect("current_chapter always names an existing chapter")
                        .sessions
                        .push(session);
                }
                _ => unreachable!("eat_keyword only returns one of the requested keywords"),
            }
        }

        Ok(root)
    }
}

/// Lexes and parses a full ROOT file source string.
pub fn parse_root_file(source: &str) -> ProofmanResult<RootStructure> {
    let tokens = proofman_lex::Lexer::tokenize(source)?;
    RootParser::parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_session_has_no_system_name_without_plus() {
        let root = parse_root_file("session Foo = Pure").unwrap();
        let unsorted = &root.chapters[UNSORTED_CHAPTER];
        assert_eq!(unsorted.sessions.len(), 1);
        let session = &unsorted.sessions[0];
        assert_eq!(session.name, "Foo");
        assert_eq!(session.system_name, None);
    }

    #[test]
    fn parent_plus_sets_system_name() {
        let root = parse_root_file("session Foo = Pure +\ntheories A").unwrap();
        let session = &root.chapters[UNSORTED_CHAPTER].sessions[0];
        assert_eq!(session.system_name.as_deref(), Some("Pure"));
        assert_eq!(session.theories[0].entries, vec!["A"]);
    }

    #[test]
    fn chapter_tracking_assigns_sessions_to_the_right_chapter() {
        let source = "chapter AFP\nsession A = B\nchapter Other\nsession C = D";
        let root = parse_root_file(source).unwrap();

        assert_eq!(root.chapter_order, vec!["Unsorted", "AFP", "Other"]);
        assert_eq!(root.chapters["AFP"].sessions[0].name, "A");
        assert_eq!(root.chapters["Other"].sessions[0].name, "C");
    }

    #[test]
    fn chapter_definition_merges_without_duplicating_order() {
        let source = "chapter_definition AFP (Group1) description \"desc\"\nchapter AFP\nsession A = B";
        let root = parse_root_file(source).unwrap();

        assert_eq!(root.chapter_order, vec!["Unsorted", "AFP"]);
        assert_eq!(root.chapters["AFP"].groups, vec!["Group1"]);
        assert_eq!(root.chapters["AFP"].description.as_deref(), Some("desc"));
        assert_eq!(root.chapters["AFP"].sessions[0].name, "A");
    }

    #[test]
    fn full_session_grammar() {
        let source = r#"
            session Foo (group1) in "dir" = Pure +
                description "a full session"
                options [document = false, timeout = 600]
                sessions Dep1 Dep2
                directories "src"
                theories [document = false] Thy1 Thy2 (global)
                document_theories Doc1
                document_files (in "docdir") file1.tex
                export_files (in "exdir") [3] export1
                export_classpath Cls1
        "#;
        let root = parse_root_file(source).unwrap();
        let session = &root.chapters[UNSORTED_CHAPTER].sessions[0];

        assert_eq!(session.name, "Foo");
        assert_eq!(session.groups, vec!["group1"]);
        assert_eq!(session.dir.as_deref(), Some("dir"));
        assert_eq!(session.system_name.as_deref(), Some("Pure"));
        assert_eq!(session.description.as_deref(), Some("a full session"));
        assert_eq!(session.sessions, Some(vec!["Dep1".to_string(), "Dep2".to_string()]));
        assert_eq!(session.directories, Some(vec!["src".to_string()]));
        assert_eq!(session.theories[0].entries, vec!["Thy1", "Thy2"]);
        assert_eq!(session.theories[0].is_global["Thy2"], true);
        assert_eq!(session.document_theories, Some(vec!["Doc1".to_string()]));
        assert_eq!(session.document_files[0].dir.as_deref(), Some("docdir"));
        assert_eq!(session.document_files[0].entries, vec!["file1.tex"]);
        assert_eq!(session.export_files[0].dir.as_deref(), Some("exdir"));
        assert_eq!(session.export_files[0].nat.as_deref(), Some("3"));
        assert_eq!(session.export_files[0].entries, vec!["export1"]);
        assert_eq!(session.export_classpath, Some(vec!["Cls1".to_string()]));
    }

    #[test]
    fn export_files_nat_must_be_an_integer() {
        let result = parse_root_file("session Foo = Pure\nexport_files [3.5] x");
        assert!(result.is_err());
    }

    #[test]
    fn comments_between_clauses_do_not_change_the_ast() {
        let with_comments = parse_root_file(
            "(* c1 *) chapter AFP (* c2 *)\nsession A (* c3 *) = B (* c4 *)\ntheories Thy1",
        )
        .unwrap();
        let without_comments = parse_root_file("chapter AFP\nsession A = B\ntheories Thy1").unwrap();
        assert_eq!(with_comments, without_comments);
    }

    #[test]
    fn unknown_session_required_keyword_is_a_parse_error() {
        assert!(parse_root_file("session").is_err());
    }
}
