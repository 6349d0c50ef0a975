use std::fs;

use super::{escape, write, TITLE};
use crate::pipeline::compile;

#[test]
fn test_escape() {
    assert_eq!(
        escape("a < b && c > \"d\" 'e'"),
        "a &lt; b &amp;&amp; c &gt; &quot;d&quot; &#39;e&#39;"
    );
    assert_eq!(escape("plain text"), "plain text");
}

#[test]
fn test_report() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("main.opl");
    fs::write(&path, "// check\nif (a < 10) { print(a); }\n").unwrap();

    let compilation = compile(&path, 4).unwrap();

    let mut output = Vec::new();
    write(&compilation, &mut output).unwrap();
    let report = String::from_utf8(output).unwrap();

    assert!(report.starts_with("<!DOCTYPE html>\n"));
    assert!(report.contains(&format!("<title>{TITLE}</title>")));
    assert!(report.contains("// check\nif (a &lt; 10) { print(a); }"));
    assert!(report.contains("\nif (a &lt; 10) { print(a); }\n\n</textarea>"));
    assert!(report.contains("<tr><td>2</td><td>1</td><td>Keyword_If</td><td>if</td></tr>"));
    assert!(report.contains("<tr><td>2</td><td>9</td><td>Integer</td><td>10</td></tr>"));
    assert!(report.contains("<td>End_of_file</td><td></td></tr>"));
    assert!(report.ends_with("</html>\n"));
}
