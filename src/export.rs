//! Static HTML export.
//!
//! Renders [`App`] once in a headless `VirtualDom` and wraps the markup in a
//! standalone HTML document carrying the global stylesheet.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use essentials_core::HEADER;

use crate::app::App;
use crate::theme::GLOBAL_STYLES;

/// Render the page body markup.
pub fn render_page() -> String {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the page as a complete HTML document.
pub fn render_document() -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>{styles}</style>\n\
         </head>\n\
         <body>\n\
         <div id=\"main\">{body}</div>\n\
         </body>\n\
         </html>\n",
        title = HEADER.title,
        styles = GLOBAL_STYLES,
        body = render_page(),
    )
}

/// Write the rendered document to `target`, or to stdout when `target` is `-`.
pub fn export_to(target: &Path) -> Result<()> {
    let document = render_document();

    if target == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(document.as_bytes())
            .context("Failed to write document to stdout")?;
        return Ok(());
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(target, &document)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    tracing::info!(path = %target.display(), bytes = document.len(), "exported page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use essentials_core::CORE_CONCEPTS;
    use tempfile::TempDir;

    #[test]
    fn page_sections_render_in_order() {
        let html = render_page();

        let header = html.find("<header>").expect("header rendered");
        let main = html.find("<main>").expect("main rendered");
        let concepts = html.find(r#"id="core-concepts""#).expect("concepts rendered");
        let examples = html.find(r#"id="examples""#).expect("examples rendered");

        assert!(header < main);
        assert!(main < concepts);
        assert!(concepts < examples);
    }

    #[test]
    fn page_contains_one_card_per_concept() {
        let html = render_page();
        assert_eq!(html.matches(r#"class="concept-card""#).count(), CORE_CONCEPTS.len());
    }

    #[test]
    fn page_renders_identically_twice() {
        assert_eq!(render_page(), render_page());
    }

    #[test]
    fn document_wraps_page() {
        let doc = render_document();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(&format!("<title>{}</title>", HEADER.title)));
        assert!(doc.contains("--accent"));
        assert!(doc.contains(&render_page()));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn export_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("site").join("index.html");

        export_to(&target).unwrap();

        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, render_document());
    }
}
