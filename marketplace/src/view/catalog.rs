//! Catalog page
//!
//! Header, filter form, result count, product grid and empty state.

use urlencoding::encode;

use crate::app::{CatalogView, LoadStatus};
use crate::domain::entities::CatalogFilters;
use crate::view::format::{escape_html, format_number_input};
use crate::view::product_card::render_product_card;

/// Placeholder shown in the max price input
const MAX_PRICE_PLACEHOLDER: &str = "100000";

/// Marks a catalog request as a return from a product interaction rather
/// than a filter change
pub const RETURN_MARKER: &str = "back";

/// URL of the catalog page with the given filters applied
pub fn catalog_url(filters: &CatalogFilters) -> String {
    let mut params = Vec::new();
    if let Some(category) = &filters.category {
        params.push(format!("categoria={}", encode(category)));
    }
    if let Some(engine) = &filters.engine {
        params.push(format!("motor={}", encode(engine)));
    }
    if let Some(module) = &filters.module {
        params.push(format!("peca={}", encode(module)));
    }
    if let Some(max) = filters.max_price {
        params.push(format!("precoMax={}", format_number_input(max)));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// Where product card forms send the user afterwards: same filters, plus
/// the return marker
pub fn catalog_return_url(filters: &CatalogFilters) -> String {
    let url = catalog_url(filters);
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}=1", url, separator, RETURN_MARKER)
}

/// Render the catalog page body
pub fn render_catalog(view: &CatalogView, surface_errors: bool) -> String {
    if view.status == LoadStatus::Loading {
        return "<div class=\"loading\">carregando catálogo...</div>\n".to_string();
    }

    let mut buf = String::new();

    buf.push_str("<div class=\"page-header\">\n");
    buf.push_str("<h1>marketplace hivefy</h1>\n");
    buf.push_str(&format!(
        "<p class=\"muted\">{} produtos modulares • 5 motores × 7 peças</p>\n",
        view.total
    ));
    buf.push_str("</div>\n");

    if surface_errors && view.status == LoadStatus::Failed {
        buf.push_str(
            "<div class=\"alert\" role=\"alert\">não foi possível carregar o catálogo. tente novamente mais tarde.</div>\n",
        );
    }

    buf.push_str(&render_filters(view));

    buf.push_str(&format!(
        "<p class=\"muted results-count\">{} produtos encontrados</p>\n",
        view.results_count()
    ));

    let return_to = catalog_return_url(&view.filters);
    buf.push_str("<div class=\"grid\">\n");
    for product in &view.products {
        buf.push_str(&render_product_card(product, &return_to));
    }
    buf.push_str("</div>\n");

    if view.products.is_empty() {
        buf.push_str("<div class=\"empty-state\">\n");
        buf.push_str("<p class=\"muted\">nenhum produto encontrado com os filtros aplicados</p>\n");
        buf.push_str("<a class=\"button button-secondary\" href=\"/\">limpar filtros</a>\n");
        buf.push_str("</div>\n");
    }

    buf
}

fn render_filters(view: &CatalogView) -> String {
    let filters = &view.filters;
    let mut buf = String::new();

    buf.push_str("<div class=\"panel\">\n<h2>filtros</h2>\n");
    buf.push_str("<form method=\"get\" action=\"/\" class=\"filters\">\n");

    buf.push_str(&render_select(
        "categoria",
        "categoria",
        "todas",
        &view.options.categories,
        filters.category.as_deref(),
    ));
    buf.push_str(&render_select(
        "motor",
        "motor",
        "todos",
        &view.options.engines,
        filters.engine.as_deref(),
    ));
    buf.push_str(&render_select(
        "peca",
        "peça",
        "todas",
        &view.options.modules,
        filters.module.as_deref(),
    ));

    let max_value = filters
        .max_price
        .map(format_number_input)
        .unwrap_or_default();
    buf.push_str(&format!(
        "<label>preço máximo (R$)\n<input type=\"number\" name=\"precoMax\" value=\"{}\" placeholder=\"{}\">\n</label>\n",
        max_value, MAX_PRICE_PLACEHOLDER
    ));

    buf.push_str("<button type=\"submit\" class=\"button button-primary\">aplicar</button>\n");
    buf.push_str("<a class=\"button\" href=\"/\">limpar filtros</a>\n");
    buf.push_str("</form>\n</div>\n");

    buf
}

fn render_select(
    name: &str,
    label: &str,
    all_label: &str,
    options: &[String],
    selected: Option<&str>,
) -> String {
    let mut buf = format!("<label>{}\n<select name=\"{}\">\n", label, name);
    buf.push_str(&format!("<option value=\"\">{}</option>\n", all_label));
    for option in options {
        let marker = if Some(option.as_str()) == selected {
            " selected"
        } else {
            ""
        };
        buf.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>\n",
            escape_html(option),
            marker
        ));
    }
    buf.push_str("</select>\n</label>\n");
    buf
}
