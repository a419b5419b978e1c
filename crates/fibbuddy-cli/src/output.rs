//! CLI output formatting.

use std::io::{self, Write};

use fibbuddy_core::BlockDescriptor;

/// Format one block for the layout listing.
#[must_use]
pub fn format_block(desc: &BlockDescriptor) -> String {
    let name = if desc.is_free { "None" } else { &desc.name };
    format!(
        "[Size: {} | Free: {} | Name: {} | Requested: {}]",
        desc.size,
        if desc.is_free { "Yes" } else { "No" },
        name,
        desc.requested_size,
    )
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Render a layout as pretty-printed JSON.
#[must_use]
pub fn layout_json(blocks: &[BlockDescriptor]) -> String {
    serde_json::to_string_pretty(blocks).unwrap_or_else(|_| "[]".to_string())
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
