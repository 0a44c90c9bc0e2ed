//! Output naming and result rendering.

use std::path::{Path, PathBuf};

/// Suffix appended to the input file stem by default.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_output";

/// Extension of the output file by default.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "txt";

const VALID_TEXT: &str = " is a valid numeric literal";
const INVALID_TEXT: &str = " is NOT a valid numeric literal";

/// Options controlling where results go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// Appended to the input file stem.
    pub output_suffix: String,
    /// Extension of the output file, without the dot. Empty means none.
    pub output_extension: String,
    /// Directory for output files. Defaults to the input file's directory.
    pub output_dir: Option<PathBuf>,
    /// Echo each result line to the console as well as the output file.
    pub echo: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            output_dir: None,
            echo: true,
        }
    }
}

/// Derives the output file path for `input`.
///
/// With default options `data/numbers.txt` maps to
/// `data/numbers_output.txt`.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use numlit_drv::{output_path_for, DriverOptions};
///
/// let options = DriverOptions::default();
/// assert_eq!(
///     output_path_for(Path::new("/data/numbers.csv"), &options),
///     PathBuf::from("/data/numbers_output.txt")
/// );
/// ```
pub fn output_path_for(input: &Path, options: &DriverOptions) -> PathBuf {
    let dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = if options.output_extension.is_empty() {
        format!("{}{}", stem, options.output_suffix)
    } else {
        format!(
            "{}{}.{}",
            stem, options.output_suffix, options.output_extension
        )
    };

    dir.join(name)
}

/// Renders one result line, without a line terminator.
///
/// # Example
///
/// ```
/// use numlit_drv::render_result;
///
/// assert_eq!(render_result("42", true), "42 is a valid numeric literal");
/// assert_eq!(render_result("4 2", false), "4 2 is NOT a valid numeric literal");
/// ```
pub fn render_result(line: &str, valid: bool) -> String {
    let text = verdict_text(valid);
    let mut rendered = String::with_capacity(line.len() + text.len());
    rendered.push_str(line);
    rendered.push_str(text);
    rendered
}

/// The text that follows a line in its rendered result.
pub fn verdict_text(valid: bool) -> &'static str {
    if valid {
        VALID_TEXT
    } else {
        INVALID_TEXT
    }
}

/// Formats a path in double quotes, escaping `"` and `\`.
pub fn quote_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DriverOptions::default();
        assert_eq!(options.output_suffix, "_output");
        assert_eq!(options.output_extension, "txt");
        assert!(options.output_dir.is_none());
        assert!(options.echo);
    }

    #[test]
    fn test_output_path_same_directory() {
        let options = DriverOptions::default();
        assert_eq!(
            output_path_for(Path::new("/tmp/in/numbers.txt"), &options),
            PathBuf::from("/tmp/in/numbers_output.txt")
        );
    }

    #[test]
    fn test_output_path_relative_without_parent() {
        let options = DriverOptions::default();
        assert_eq!(
            output_path_for(Path::new("numbers"), &options),
            PathBuf::from("numbers_output.txt")
        );
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let options = DriverOptions::default();
        assert_eq!(
            output_path_for(Path::new("/d/run.2024.log"), &options),
            PathBuf::from("/d/run.2024_output.txt")
        );
    }

    #[test]
    fn test_output_path_custom_options() {
        let options = DriverOptions {
            output_suffix: ".checked".to_string(),
            output_extension: String::new(),
            output_dir: Some(PathBuf::from("/out")),
            echo: false,
        };
        assert_eq!(
            output_path_for(Path::new("/in/a.txt"), &options),
            PathBuf::from("/out/a.checked")
        );
    }

    #[test]
    fn test_render_result() {
        assert_eq!(render_result("123", true), "123 is a valid numeric literal");
        assert_eq!(render_result("", false), " is NOT a valid numeric literal");
    }

    #[test]
    fn test_verdict_text_completes_render() {
        assert_eq!(
            format!("1e{}", verdict_text(false)),
            render_result("1e", false)
        );
    }

    #[test]
    fn test_quote_path() {
        assert_eq!(quote_path(Path::new("/a/b.txt")), "\"/a/b.txt\"");
        assert_eq!(quote_path(Path::new("say \"hi\"")), "\"say \\\"hi\\\"\"");
    }
}
