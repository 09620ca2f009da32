use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Splits text into trimmed, non-empty lines, keeping their order.
pub fn lines_from_str(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Reads the strategy guide from `path`, or from stdin when there is none.
pub fn read_lines(path: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let buffer = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    Ok(lines_from_str(&buffer))
}
