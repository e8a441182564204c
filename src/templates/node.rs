use super::{FileSet, TemplateFile};

const INDEX_JS: &str = "console.log(\"Hello, Node!\");\n";

pub(super) fn files() -> FileSet {
    vec![TemplateFile {
        relative_path: "index.js",
        contents: INDEX_JS,
    }]
}
