//! Move the generated `src/app` directory to the project root
//!
//! With internationalization the top-level pages are nested under an
//! `app/[locale]` segment and a pass-through root layout takes their place.

use crate::error::Result;
use crate::fs;
use crate::templates::TemplateSource;
use std::path::{Path, PathBuf};

/// Replacement root layout written when pages move under `[locale]`
pub const INTL_LAYOUT_TEMPLATE: &str = "nextjs/intl-layout.txt";

pub const LOCALE_SEGMENT: &str = "[locale]";

/// Files with this extension at the top of `app/` move under the locale segment
pub const PAGE_EXTENSION: &str = ".tsx";

/// What the relocation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relocation {
    /// The new `app` directory, `None` when `src/app` did not exist
    pub app_dir: Option<PathBuf>,
    /// File names moved under `app/[locale]`
    pub localized: Vec<String>,
    /// Set when the replacement layout template could not be read
    pub layout_error: Option<String>,
}

/// Rename `src/app` to `app`. Returns `None` (and does nothing) when the
/// source directory is absent.
pub fn move_app_dir(instance_root: &Path) -> Result<Option<PathBuf>> {
    let src_app = instance_root.join("src").join("app");
    if !src_app.is_dir() {
        return Ok(None);
    }

    let root_app = instance_root.join("app");
    fs::rename(&src_app, &root_app)?;
    Ok(Some(root_app))
}

/// Nest every top-level page of `app_dir` under `[locale]`, then write the
/// replacement root layout if one is given. Returns the moved file names.
pub fn localize_pages(app_dir: &Path, layout: Option<&str>) -> Result<Vec<String>> {
    let locale_dir = app_dir.join(LOCALE_SEGMENT);
    fs::create_dir_all(&locale_dir)?;

    let mut moved = Vec::new();
    for name in fs::list_dir(app_dir)? {
        let path = app_dir.join(&name);
        if name.ends_with(PAGE_EXTENSION) && path.is_file() {
            fs::rename(&path, &locale_dir.join(&name))?;
            moved.push(name);
        }
    }

    if let Some(layout) = layout {
        fs::write_text(&app_dir.join("layout.tsx"), layout)?;
    }
    Ok(moved)
}

/// Full relocation step. A missing `src/app` skips everything. Without
/// the layout template the pages are still localized and the generator's
/// own layout, now under `[locale]`, stays the root layout.
pub fn relocate_app(
    instance_root: &Path,
    templates: &TemplateSource,
    use_i18n: bool,
) -> Result<Relocation> {
    let Some(app_dir) = move_app_dir(instance_root)? else {
        return Ok(Relocation::default());
    };

    let mut relocation = Relocation {
        app_dir: Some(app_dir.clone()),
        ..Default::default()
    };

    if use_i18n {
        let layout = match templates.read_text(INTL_LAYOUT_TEMPLATE) {
            Ok(layout) => Some(layout),
            Err(e) => {
                relocation.layout_error = Some(e.to_string());
                None
            }
        };
        relocation.localized = localize_pages(&app_dir, layout.as_deref())?;
    }

    Ok(relocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn generated_app(root: &Path) {
        let app = root.join("src/app");
        fs::write_text(&app.join("page.tsx"), "export default function Page() {}").unwrap();
        fs::write_text(&app.join("about.tsx"), "export default function About() {}").unwrap();
        fs::write_text(&app.join("globals.css"), "@tailwind base;").unwrap();
    }

    fn layout_templates(root: &Path) -> TemplateSource {
        let dir = root.join("templates");
        fs::write_text(&dir.join(INTL_LAYOUT_TEMPLATE), "// intl layout").unwrap();
        TemplateSource::Local(dir)
    }

    #[test]
    fn test_relocate_with_i18n() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        generated_app(&project);
        let templates = layout_templates(tmp.path());

        let relocation = relocate_app(&project, &templates, true).unwrap();

        assert_eq!(relocation.app_dir, Some(project.join("app")));
        assert_eq!(relocation.localized, vec!["about.tsx", "page.tsx"]);
        assert!(project.join("app/[locale]/page.tsx").is_file());
        assert!(project.join("app/[locale]/about.tsx").is_file());
        assert_eq!(
            fs::read_text(&project.join("app/layout.tsx")).unwrap(),
            "// intl layout"
        );
        assert!(project.join("app/globals.css").is_file());
        assert!(!project.join("src/app").exists());
    }

    #[test]
    fn test_relocate_without_i18n() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        generated_app(&project);

        let relocation = relocate_app(&project, &TemplateSource::Bundled, false).unwrap();

        assert!(relocation.localized.is_empty());
        assert!(project.join("app/page.tsx").is_file());
        assert!(project.join("app/about.tsx").is_file());
        assert!(!project.join("app/[locale]").exists());
        assert!(!project.join("app/layout.tsx").exists());
        assert!(!project.join("src/app").exists());
    }

    #[test]
    fn test_original_layout_moves_under_locale() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        generated_app(&project);
        fs::write_text(&project.join("src/app/layout.tsx"), "// root layout").unwrap();
        let templates = layout_templates(tmp.path());

        relocate_app(&project, &templates, true).unwrap();

        assert_eq!(
            fs::read_text(&project.join("app/[locale]/layout.tsx")).unwrap(),
            "// root layout"
        );
        assert_eq!(
            fs::read_text(&project.join("app/layout.tsx")).unwrap(),
            "// intl layout"
        );
    }

    #[test]
    fn test_missing_src_app_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let relocation = relocate_app(tmp.path(), &TemplateSource::Bundled, true).unwrap();

        assert_eq!(relocation, Relocation::default());
        assert!(!tmp.path().join("app").exists());
    }

    #[test]
    fn test_missing_layout_template_still_localizes() {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        generated_app(&project);
        let templates = TemplateSource::Local(tmp.path().join("empty"));

        let relocation = relocate_app(&project, &templates, true).unwrap();

        assert!(relocation.layout_error.unwrap().contains(INTL_LAYOUT_TEMPLATE));
        assert!(project.join("app/[locale]/page.tsx").is_file());
        assert!(!project.join("app/layout.tsx").exists());
    }
}
