use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use opal_base::{char_stream::CharacterStream, source_file::Location};
use tempfile::TempDir;

use super::IncludeExpander;
use crate::error::Error;

struct Tree {
    directory: TempDir,
}

impl Tree {
    fn new() -> Self {
        Self {
            directory: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf { self.directory.path().join(name) }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Writes `source` as `main.opl` and expands it.
    fn expand(&self, source: &str) -> Result<String, Error> {
        self.expand_with(IncludeExpander::new(self.write("main.opl", source)), source)
    }

    fn expand_with(&self, mut expander: IncludeExpander, source: &str) -> Result<String, Error> {
        let mut stream = CharacterStream::new(source.as_bytes());
        let mut output = Vec::new();

        expander.expand(&mut stream, &mut output)?;

        Ok(String::from_utf8(output).unwrap())
    }
}

#[test]
fn test_literal_substitution() {
    let tree = Tree::new();
    tree.write("f.inc", "C");

    assert_eq!(tree.expand("A\n#include \"f.inc\"\nB").unwrap(), "A\nC\nB");
}

#[test]
fn test_directive_after_text() {
    let tree = Tree::new();
    tree.write("f.inc", "C");

    assert_eq!(tree.expand("A#include \"f.inc\"\nB").unwrap(), "AC\nB");
}

#[test]
fn test_unquoted_and_case_insensitive_directive() {
    let tree = Tree::new();
    tree.write("f.inc", "x = 1;");

    assert_eq!(tree.expand("#INCLUDE f.inc\n").unwrap(), "x = 1;\n");
    assert_eq!(tree.expand("#Include   \"f.inc\"  ").unwrap(), "x = 1;");
}

#[test]
fn test_other_hashes_are_copied() {
    let tree = Tree::new();

    assert_eq!(tree.expand("a # b #inc\n#").unwrap(), "a # b #inc\n#");
    assert_eq!(tree.expand("#includex").unwrap(), "#includex");
}

#[test]
fn test_nested_includes() {
    let tree = Tree::new();
    tree.write("a.inc", "#include \"b.inc\"\nx");
    tree.write("b.inc", "y");

    assert_eq!(tree.expand("#include \"a.inc\"\nz").unwrap(), "y\nx\nz");
}

#[test]
fn test_relative_to_including_file() {
    let tree = Tree::new();
    tree.write("lib/a.inc", "#include \"b.inc\"\n");
    tree.write("lib/b.inc", "b");

    assert_eq!(tree.expand("#include \"lib/a.inc\"\n").unwrap(), "b\n\n");
}

#[test]
fn test_absolute_path() {
    let tree = Tree::new();
    let included = tree.write("elsewhere/abs.inc", "abs");

    let source = format!("#include \"{}\"\n", included.display());
    assert_eq!(tree.expand(&source).unwrap(), "abs\n");
}

#[test]
fn test_missing_include() {
    let tree = Tree::new();

    let error = tree
        .expand("a;\n#include \"nope.inc\"\n")
        .unwrap_err()
        .into_missing_include()
        .unwrap();

    assert_eq!(error.path, tree.path("nope.inc"));
    assert_eq!(error.including, tree.path("main.opl"));
    assert_eq!(error.location, Location { line: 2, column: 1 });
    assert_eq!(error.reason, ErrorKind::NotFound);
}

#[test]
fn test_self_include_is_a_cycle() {
    let tree = Tree::new();

    let error = tree
        .expand("#include \"main.opl\"\n")
        .unwrap_err()
        .into_include_cycle()
        .unwrap();

    assert_eq!(error.chain, vec![tree.path("main.opl"), tree.path("main.opl")]);
}

#[test]
fn test_mutual_include_is_a_cycle() {
    let tree = Tree::new();
    tree.write("a.inc", "#include \"b.inc\"\n");
    tree.write("b.inc", "\n\n#include \"a.inc\"\n");

    let error = tree
        .expand("#include \"a.inc\"\n")
        .unwrap_err()
        .into_include_cycle()
        .unwrap();

    assert_eq!(
        error.chain,
        vec![tree.path("a.inc"), tree.path("b.inc"), tree.path("a.inc")]
    );
    assert_eq!(error.including, tree.path("b.inc"));
    assert_eq!(error.location, Location { line: 3, column: 1 });
}

#[test]
fn test_include_too_deep() {
    let tree = Tree::new();
    tree.write("a.inc", "#include \"b.inc\"\n");
    tree.write("b.inc", "b");
    let root = tree.write("main.opl", "#include \"a.inc\"\n");

    let error = tree
        .expand_with(IncludeExpander::new(root).with_max_depth(1), "#include \"a.inc\"\n")
        .unwrap_err()
        .into_include_too_deep()
        .unwrap();

    assert_eq!(error.path, tree.path("b.inc"));
    assert_eq!(error.max_depth, 1);
}

#[test]
fn test_same_file_included_twice() {
    let tree = Tree::new();
    tree.write("f.inc", "f");

    assert_eq!(
        tree.expand("#include f.inc\n#include f.inc\n").unwrap(),
        "f\nf\n"
    );
}

#[test]
fn test_comments_in_included_files_are_copied() {
    let tree = Tree::new();
    tree.write(
        "a.inc",
        "// #include \"nope.inc\"\nz /* #include nope.inc */ w\n/* open",
    );

    assert_eq!(
        tree.expand("#include \"a.inc\"\n").unwrap(),
        "// #include \"nope.inc\"\nz /* #include nope.inc */ w\n/* open\n"
    );
}

#[test]
fn test_default_max_depth() {
    let expander = IncludeExpander::new(Path::new("main.opl"));
    assert_eq!(expander.max_depth(), IncludeExpander::DEFAULT_MAX_DEPTH);
}
