//! Product card
//!
//! One catalog product: name, engine and module badges, price, duration,
//! the two calls-to-action and a preview of its tracking events.

use urlencoding::encode;

use crate::domain::entities::{EngineTag, Product};
use crate::view::format::{escape_html, format_brl};

/// Tracking event tags shown before collapsing into a "+N" counter
pub const MAX_TRACKING_TAGS: usize = 3;

/// Render a product card. `return_to` is where the action forms send the
/// visitor back after reporting the interaction.
pub fn render_product_card(product: &Product, return_to: &str) -> String {
    let mut buf = String::new();
    let engine = EngineTag::from_tag(&product.engine);

    buf.push_str("<div class=\"panel product-card\">\n");

    // header
    buf.push_str("<div class=\"product-header\">\n");
    buf.push_str(&format!("<h3>{}</h3>\n", escape_html(&product.name)));
    buf.push_str(&format!(
        "<span class=\"badge {}\">{}</span>\n",
        engine.css_class(),
        escape_html(&product.engine)
    ));
    buf.push_str(&format!(
        "<span class=\"badge motor-neutro\">{}</span>\n",
        escape_html(&product.module)
    ));
    buf.push_str(&format!(
        "<span class=\"muted product-category\">{}</span>\n",
        escape_html(&product.category)
    ));
    buf.push_str("</div>\n");

    buf.push_str(&render_price(product));

    buf.push_str(&format!(
        "<div class=\"muted\">⏱️ {}</div>\n",
        escape_html(&product.duration)
    ));

    // ctas
    let action_base = format!("/products/{}", encode(&product.id.0));
    buf.push_str("<div class=\"product-actions\">\n");
    buf.push_str(&render_action_form(
        &format!("{}/view", action_base),
        return_to,
        "button button-secondary",
        "ver detalhes",
    ));
    buf.push_str(&render_action_form(
        &format!("{}/cart", action_base),
        return_to,
        "button button-primary",
        "adicionar",
    ));
    buf.push_str("</div>\n");

    buf.push_str(&render_tracking_events(&product.tracking_events));

    buf.push_str("</div>\n");
    buf
}

fn render_price(product: &Product) -> String {
    let price = &product.price;
    let mut buf = String::from("<div class=\"product-price\">\n");
    if price.mrr > 0.0 {
        buf.push_str(&format!(
            "<div class=\"price\">{}/mês</div>\n",
            format_brl(price.mrr)
        ));
    }
    if price.setup > 0.0 {
        buf.push_str(&format!(
            "<div class=\"muted\">+ {} setup</div>\n",
            format_brl(price.setup)
        ));
    }
    if price.is_on_request() {
        buf.push_str("<div class=\"price\">sob consulta</div>\n");
    }
    buf.push_str("</div>\n");
    buf
}

fn render_tracking_events(events: &[String]) -> String {
    let mut buf = String::from("<div class=\"muted tracking-events\">\n");
    buf.push_str("<div>eventos de tracking:</div>\n");
    for event in events.iter().take(MAX_TRACKING_TAGS) {
        buf.push_str(&format!("<span class=\"tag\">{}</span>\n", escape_html(event)));
    }
    if events.len() > MAX_TRACKING_TAGS {
        buf.push_str(&format!(
            "<span class=\"tag\">+{}</span>\n",
            events.len() - MAX_TRACKING_TAGS
        ));
    }
    buf.push_str("</div>\n");
    buf
}

/// A single-button POST form carrying `return_to`
pub fn render_action_form(action: &str, return_to: &str, class: &str, label: &str) -> String {
    render_action_form_with(action, return_to, &[], class, label)
}

/// A single-button POST form with extra hidden fields
pub fn render_action_form_with(
    action: &str,
    return_to: &str,
    fields: &[(&str, &str)],
    class: &str,
    label: &str,
) -> String {
    let mut buf = format!(
        "<form class=\"inline\" method=\"post\" action=\"{}\">\n",
        escape_html(action)
    );
    buf.push_str(&format!(
        "<input type=\"hidden\" name=\"return_to\" value=\"{}\">\n",
        escape_html(return_to)
    ));
    for (name, value) in fields {
        buf.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
            escape_html(name),
            escape_html(value)
        ));
    }
    buf.push_str(&format!(
        "<button type=\"submit\" class=\"{}\">{}</button>\n</form>\n",
        class, label
    ));
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_product, test_product_priced};

    #[test]
    fn monthly_and_setup_prices() {
        let product = test_product_priced("a", "aquisicao", 1500.0, 2000.0);
        let html = render_product_card(&product, "/");
        assert!(html.contains("R$\u{a0}1.500/mês"));
        assert!(html.contains("+ R$\u{a0}2.000 setup"));
        assert!(!html.contains("sob consulta"));
    }

    #[test]
    fn zero_prices_render_on_request() {
        let product = test_product_priced("a", "aquisicao", 0.0, 0.0);
        let html = render_product_card(&product, "/");
        assert!(html.contains("sob consulta"));
        assert!(!html.contains("/mês"));
    }

    #[test]
    fn engine_badge_color_with_fallback() {
        let known = test_product_priced("a", "retencao", 100.0, 0.0);
        assert!(render_product_card(&known, "/").contains("badge motor-retencao"));

        let unknown = test_product_priced("b", "marketing", 100.0, 0.0);
        assert!(render_product_card(&unknown, "/").contains("badge motor-neutro\">marketing"));
    }

    #[test]
    fn tracking_events_capped_with_overflow() {
        let mut product = test_product("a");
        product.tracking_events = ["e1", "e2", "e3", "e4", "e5"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let html = render_product_card(&product, "/");

        assert!(html.contains(">e3</span>"));
        assert!(!html.contains(">e4</span>"));
        assert!(html.contains(">+2</span>"));
    }

    #[test]
    fn no_overflow_counter_at_three() {
        let mut product = test_product("a");
        product.tracking_events = vec!["e1".into(), "e2".into(), "e3".into()];
        let html = render_product_card(&product, "/");
        assert!(!html.contains(">+"));
    }

    #[test]
    fn action_forms_target_product_routes() {
        let product = test_product("recorrente.sofia ia");
        let html = render_product_card(&product, "/?motor=aquisicao");

        assert!(html.contains("action=\"/products/recorrente.sofia%20ia/view\""));
        assert!(html.contains("action=\"/products/recorrente.sofia%20ia/cart\""));
        assert!(html.contains("name=\"return_to\" value=\"/?motor=aquisicao\""));
        assert!(html.contains("ver detalhes"));
        assert!(html.contains("adicionar"));
    }

    #[test]
    fn product_text_is_escaped() {
        let mut product = test_product("a");
        product.name = "<script>".to_string();
        let html = render_product_card(&product, "/");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<h3><script>"));
    }
}
