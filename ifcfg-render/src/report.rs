use colored::Colorize;

use crate::descriptor::FileMap;

/// Render one line per output file for terminal output.
pub fn render_file_list(files: &FileMap) -> String {
    let mut out = Vec::with_capacity(files.len());
    for (path, content) in files {
        out.push(format!(
            "{} ({} lines)",
            path.green(),
            content.lines().count()
        ));
    }
    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(files: &FileMap) -> String {
    let lines: usize = files.values().map(|c| c.lines().count()).sum();
    format!("files={} lines={lines}", files.len())
        .cyan()
        .to_string()
}
