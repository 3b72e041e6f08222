//! Icon id derivation, SVG discovery and sprite URL mapping.

use std::path::Path;

use eyre::{Context, Result};

/// File name of the compiled sprite inside the sprite output directory.
pub const SPRITE_FILE_NAME: &str = "sprite.svg";

/// Directory name treated as the web root rather than a URL segment.
const WEB_ROOT: &str = "public";

const ICON_PREFIX: &str = "icon-";

/// Derive an icon id from a file name or path.
///
/// Strips the directory, the `.svg` extension and a leading `icon-`.
/// Nothing else is normalized, so distinct files can collide
/// (`icon-user.svg` and `user.svg` both become `user`).
pub fn derive_icon_id(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.strip_suffix(".svg").unwrap_or(base);
    stem.strip_prefix(ICON_PREFIX).unwrap_or(stem).to_string()
}

/// List the `.svg` entries of a directory.
///
/// A missing directory yields an empty list. Entries are sorted by name so
/// repeated runs over the same tree produce identical output.
pub fn list_svg_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(".svg") {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

/// Map the sprite output directory to the URL the sprite is served from.
///
/// `public` marks the web root and is dropped, separators are normalized
/// to `/`, and repeated slashes are collapsed.
///
/// ```
/// use flexisvg_core::sprite_web_path;
///
/// assert_eq!(sprite_web_path("public/icons"), "/icons/sprite.svg");
/// assert_eq!(sprite_web_path("public"), "/sprite.svg");
/// assert_eq!(sprite_web_path("assets/icons"), "/assets/icons/sprite.svg");
/// ```
pub fn sprite_web_path(output_sprite_dir: &str) -> String {
    let normalized = output_sprite_dir.replace('\\', "/");

    let mut rest = normalized.trim_start_matches('/');
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped.trim_start_matches('/');
    }

    let rest = if rest == WEB_ROOT {
        ""
    } else {
        rest.strip_prefix("public/").unwrap_or(rest)
    };

    collapse_slashes(&format!("/{rest}/{SPRITE_FILE_NAME}"))
}

fn collapse_slashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_derive_icon_id_strips_prefix_and_extension() {
        assert_eq!(derive_icon_id("icon-user.svg"), "user");
        assert_eq!(derive_icon_id("user.svg"), "user");
        assert_eq!(
            derive_icon_id("icon-user.svg"),
            derive_icon_id("user.svg")
        );
    }

    #[test]
    fn test_derive_icon_id_strips_directory() {
        assert_eq!(derive_icon_id("public/icons/static/icon-logo.svg"), "logo");
        assert_eq!(derive_icon_id("public\\icons\\dynamic\\arrow.svg"), "arrow");
    }

    #[test]
    fn test_derive_icon_id_only_strips_one_prefix() {
        assert_eq!(derive_icon_id("icon-icon-x.svg"), "icon-x");
        assert_eq!(derive_icon_id("my-icon-x.svg"), "my-icon-x");
    }

    #[test]
    fn test_derive_icon_id_keeps_case_and_other_extensions() {
        assert_eq!(derive_icon_id("Icon-User.svg"), "Icon-User");
        assert_eq!(derive_icon_id("logo.SVG"), "logo.SVG");
    }

    #[test]
    fn test_list_svg_files_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = list_svg_files(&temp.path().join("nope")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_svg_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        for name in ["b.svg", "a.svg", "notes.txt", "c.svg.bak", "icon-z.svg"] {
            fs::write(temp.path().join(name), "<svg/>").unwrap();
        }

        let files = list_svg_files(temp.path()).unwrap();
        assert_eq!(files, vec!["a.svg", "b.svg", "icon-z.svg"]);
    }

    #[test]
    fn test_sprite_web_path_strips_public_root() {
        assert_eq!(sprite_web_path("public/icons"), "/icons/sprite.svg");
        assert_eq!(sprite_web_path("public"), "/sprite.svg");
        assert_eq!(sprite_web_path("public/"), "/sprite.svg");
        assert_eq!(sprite_web_path("./public/icons"), "/icons/sprite.svg");
    }

    #[test]
    fn test_sprite_web_path_without_public_root() {
        assert_eq!(sprite_web_path("assets/icons"), "/assets/icons/sprite.svg");
        assert_eq!(sprite_web_path("static"), "/static/sprite.svg");
        assert_eq!(sprite_web_path("publicity"), "/publicity/sprite.svg");
    }

    #[test]
    fn test_sprite_web_path_normalizes_separators() {
        assert_eq!(sprite_web_path("public\\icons"), "/icons/sprite.svg");
        assert_eq!(sprite_web_path("assets//icons/"), "/assets/icons/sprite.svg");
    }

    #[test]
    fn test_sprite_web_path_only_strips_leading_public() {
        assert_eq!(
            sprite_web_path("web/public/icons"),
            "/web/public/icons/sprite.svg"
        );
    }
}
