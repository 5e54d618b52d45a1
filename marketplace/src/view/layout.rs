//! Page shell and navigation
//!
//! Every page is wrapped in the same document: head with theme and the
//! optional Google tag, the navigation bar, then the page body.

use crate::domain::entities::EngineTag;
use crate::view::format::escape_html;

pub const SITE_TITLE: &str = "hivefy marketplace — modelo steam";
pub const SITE_DESCRIPTION: &str =
    "marketplace modular: 5 motores × 7 peças = 35+ produtos. quick wins → mrr → projetos.";

/// Top-level routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Bundles,
    Journeys,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Catalog, Page::Bundles, Page::Journeys];

    pub fn href(&self) -> &'static str {
        match self {
            Page::Catalog => "/",
            Page::Bundles => "/bundles",
            Page::Journeys => "/jornadas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Catalog => "catálogo",
            Page::Bundles => "bundles",
            Page::Journeys => "jornadas",
        }
    }
}

/// Deployment-level settings of the shell
#[derive(Debug, Clone, Default)]
pub struct Shell {
    pub ga_measurement_id: Option<String>,
}

impl Shell {
    /// Wrap a rendered page body in the full document
    pub fn render(&self, page: Page, body: &str) -> String {
        let mut buf = String::new();

        buf.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        buf.push_str("<meta charset=\"utf-8\">\n");
        buf.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        buf.push_str(&format!("<title>{}</title>\n", escape_html(SITE_TITLE)));
        buf.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            escape_html(SITE_DESCRIPTION)
        ));
        if let Some(id) = &self.ga_measurement_id {
            buf.push_str(&render_gtag(id));
        }
        buf.push_str("<style>\n");
        buf.push_str(&stylesheet());
        buf.push_str("</style>\n</head>\n<body>\n");
        buf.push_str(&render_navigation(page));
        buf.push_str("<main>\n");
        buf.push_str(body);
        buf.push_str("</main>\n</body>\n</html>\n");

        buf
    }
}

/// `id` is inserted verbatim; `Config` only admits `[A-Z0-9-]+`
fn render_gtag(id: &str) -> String {
    format!(
        "<script async src=\"https://www.googletagmanager.com/gtag/js?id={id}\"></script>\n\
         <script>\n\
         window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{id}');\n\
         </script>\n"
    )
}

/// Navigation bar with the current route highlighted
pub fn render_navigation(current: Page) -> String {
    let mut buf = String::new();
    buf.push_str("<nav class=\"nav\">\n");
    buf.push_str("<a class=\"nav-brand\" href=\"/\">hivefy marketplace</a>\n");
    buf.push_str("<div class=\"nav-items\">\n");
    for page in Page::ALL {
        let class = if page == current {
            "nav-item nav-item-active"
        } else {
            "nav-item"
        };
        buf.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">{}</a>\n",
            class,
            page.href(),
            page.label()
        ));
    }
    buf.push_str("</div>\n</nav>\n");
    buf
}

fn stylesheet() -> String {
    let mut css = String::from(BASE_CSS);
    for tag in EngineTag::ALL {
        let (background, foreground) = tag.colors();
        css.push_str(&format!(
            ".{} {{ background: {}; color: {}; }}\n",
            tag.css_class(),
            background,
            foreground
        ));
    }
    css
}

const BASE_CSS: &str = "\
body { margin: 0; font-family: Inter, system-ui, sans-serif; background: #f9fafb; color: #111827; }
main { max-width: 80rem; margin: 0 auto; padding: 2rem 1rem; }
.nav { display: flex; justify-content: space-between; align-items: center; height: 4rem; padding: 0 1rem; background: #fff; border-bottom: 1px solid #e5e7eb; }
.nav-brand { font-size: 1.25rem; font-weight: 700; color: #111827; text-decoration: none; }
.nav-items { display: flex; gap: 2rem; }
.nav-item { padding: 0.5rem 0.75rem; font-size: 0.875rem; color: #4b5563; text-decoration: none; }
.nav-item-active { color: #2563eb; border-bottom: 2px solid #2563eb; }
.panel { background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 1.5rem; margin-bottom: 2rem; }
.muted { color: #4b5563; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); }
.badge { display: inline-block; padding: 0.25rem 0.5rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; }
.tag { display: inline-block; padding: 0.125rem 0.25rem; background: #f3f4f6; border-radius: 0.25rem; font-size: 0.75rem; }
.price { font-size: 1.5rem; font-weight: 700; }
.savings { color: #16a34a; font-size: 0.875rem; }
.button { display: inline-block; padding: 0.5rem 1rem; border: 0; border-radius: 0.375rem; font-weight: 500; cursor: pointer; text-decoration: none; }
.button-primary { background: #2563eb; color: #fff; }
.button-secondary { background: #eff6ff; color: #2563eb; }
.selectable { display: block; padding: 1rem; border: 2px solid #e5e7eb; border-radius: 0.5rem; color: inherit; text-decoration: none; }
.selectable-active { border-color: #3b82f6; background: #eff6ff; }
.alert { background: #fef2f2; color: #991b1b; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1rem; }
.loading { display: flex; justify-content: center; align-items: center; height: 16rem; font-size: 1.125rem; color: #4b5563; }
.timeline-entry { display: flex; gap: 1rem; align-items: flex-start; }
.timeline-marker { display: flex; flex-direction: column; align-items: center; }
.timeline-week { width: 2rem; height: 2rem; border-radius: 9999px; background: #2563eb; color: #fff; display: flex; align-items: center; justify-content: center; font-size: 0.875rem; }
.timeline-line { width: 2px; height: 4rem; background: #d1d5db; margin-top: 0.5rem; }
form.inline { display: inline; }
";
