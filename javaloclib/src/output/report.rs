//! Single-line report rendering.

use std::fmt;

use crate::data::CountResult;

const SEPARATOR: char = '-';

/// Display adapter for a [`CountResult`].
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    result: &'a CountResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a CountResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            r.total_files,
            r.unique_files,
            r.lines.blanks,
            r.lines.comments,
            r.lines.code,
            sep = SEPARATOR
        )
    }
}

/// Render a result as `total-unique-blank-comment-code`.
pub fn render(result: &CountResult) -> String {
    Report::new(result).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LineCounts;

    #[test]
    fn test_render() {
        let result = CountResult {
            total_files: 12,
            unique_files: 10,
            lines: LineCounts {
                blanks: 340,
                comments: 120,
                code: 980,
            },
        };

        assert_eq!(render(&result), "12-10-340-120-980");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&CountResult::new()), "0-0-0-0-0");
    }

    #[test]
    fn test_report_display() {
        let result = CountResult {
            total_files: 1,
            unique_files: 1,
            lines: LineCounts {
                blanks: 0,
                comments: 2,
                code: 7,
            },
        };

        assert_eq!(format!("{}", Report::new(&result)), "1-1-0-2-7");
    }
}
