/*!
 * Common test utilities for the mdtrans test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;


/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample Markdown document for testing
pub fn create_test_markdown(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = "Intro\n\
# Title\n\
## Sub\n\
### Deep\n\
- one\n\
- two\n\
---\n\
```\n\
let x = 1;\n\
```\n\
See [docs](https://example.com) and `inline` plus **bold**.\n\
:::note\n\
Be careful.\n\
:::\n";
    create_test_file(dir, filename, content)
}
