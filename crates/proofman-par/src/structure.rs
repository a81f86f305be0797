//! AST types produced by the root-grammar and theory-grammar parsers.

use rustc_hash::FxHashMap;

/// `theories [options]? entries*`. `options` maps an option name onto its
/// optional value lexeme (the token itself is not retained, only its
/// decoded text). `is_global` flags each entry that carried a trailing
/// `(global)` qualifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theories {
    pub options: FxHashMap<String, Option<String>>,
    pub entries: Vec<String>,
    pub is_global: FxHashMap<String, bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFiles {
    pub dir: Option<String>,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportFiles {
    pub dir: Option<String>,
    pub nat: Option<String>,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub name: String,
    pub groups: Vec<String>,
    pub dir: Option<String>,

    pub system_name: Option<String>,
    pub description: Option<String>,
    pub options: Option<FxHashMap<String, Option<String>>>,

    pub sessions: Option<Vec<String>>,
    pub directories: Option<Vec<String>>,
    pub theories: Vec<Theories>,
    pub document_theories: Option<Vec<String>>,
    pub document_files: Vec<DocumentFiles>,
    pub export_files: Vec<ExportFiles>,
    pub export_classpath: Option<Vec<String>>,
}

impl Session {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chapter {
    pub name: String,
    pub groups: Vec<String>,
    pub description: Option<String>,
    pub sessions: Vec<Session>,
}

impl Chapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }
}

pub const UNSORTED_CHAPTER: &str = "Unsorted";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootStructure {
    pub chapters: FxHashMap<String, Chapter>,
    pub chapter_order: Vec<String>,
}

impl RootStructure {
    /// A fresh structure with only the synthetic `Unsorted` chapter present.
    pub fn new() -> Self {
        let mut chapters = FxHashMap::default();
        chapters.insert(UNSORTED_CHAPTER.to_string(), Chapter::new(UNSORTED_CHAPTER));
        Self { chapters, chapter_order: vec![UNSORTED_CHAPTER.to_string()] }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TheoryStructure {
    pub name: String,
    pub imports: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_root_structure_has_only_unsorted() {
        let root = RootStructure::new();
        assert_eq!(root.chapter_order, vec!["Unsorted"]);
        assert!(root.chapters.contains_key("Unsorted"));
        assert_eq!(root.chapters.len(), 1);
    }
}
