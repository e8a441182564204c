use super::{FileSet, TemplateFile};

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>My Project</title>
<link rel="stylesheet" href="style.css">
</head>
<body>
<div class="container">
<h1>Hello, World!</h1>
<button id="btn">Click here</button>
</div>
<script src="script.js"></script>
</body>
</html>
"#;

const STYLE_CSS: &str = r#"body { font-family: Arial, sans-serif; background-color: #1e1e1e; color: white; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; }
.container { text-align: center; }
button { padding: 10px 20px; background-color: #4f46e5; color: white; border: none; border-radius: 5px; cursor: pointer; }
button:hover { background-color: #3730a3; }
"#;

const SCRIPT_JS: &str = r#"const btn = document.getElementById("btn");
btn.addEventListener("click", () => { alert("You clicked the button!"); });
"#;

pub(super) fn files() -> FileSet {
    vec![
        TemplateFile {
            relative_path: "index.html",
            contents: INDEX_HTML,
        },
        TemplateFile {
            relative_path: "style.css",
            contents: STYLE_CSS,
        },
        TemplateFile {
            relative_path: "script.js",
            contents: SCRIPT_JS,
        },
    ]
}
