//! Init command report data structures.

use super::output::{Output, Report};

/// Report data from scaffolding a project.
#[derive(Debug)]
pub struct InitReport {
    /// Config file that was written.
    pub config_file: String,
    /// Directories that were created.
    pub created_dirs: Vec<String>,
    /// Directories that already existed.
    pub skipped_dirs: Vec<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Created");
        out.added_item(&self.config_file);
        for dir in &self.created_dirs {
            out.added_item(&format!("{}/", dir));
        }

        if !self.skipped_dirs.is_empty() {
            out.newline();
            out.section("Skipped (already exists)");
            for dir in &self.skipped_dirs {
                out.list_item(&format!("{}/", dir));
            }
        }

        out.newline();
        out.section("Next steps");
        out.list_item("add SVG files to the icon directories");
        out.list_item("run `flexisvg` to build the sprite and component");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render_without_skipped() {
        let report = InitReport {
            config_file: "flexisvg.toml".to_string(),
            created_dirs: vec!["src/components".to_string()],
            skipped_dirs: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[..3], ["Created:", "  + flexisvg.toml", "  + src/components/"]);
        assert!(!out.lines.iter().any(|line| line.starts_with("Skipped")));
    }

    #[test]
    fn test_render_lists_skipped() {
        let report = InitReport {
            config_file: "flexisvg.toml".to_string(),
            created_dirs: Vec::new(),
            skipped_dirs: vec!["public".to_string()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(&"Skipped (already exists):".to_string()));
        assert!(out.lines.contains(&"  - public/".to_string()));
    }
}
