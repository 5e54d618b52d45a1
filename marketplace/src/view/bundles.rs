//! Bundle comparison page

use urlencoding::encode;

use crate::app::{BundleView, LoadStatus};
use crate::domain::entities::{Bundle, BundleSelection};
use crate::view::format::{escape_html, format_brl};
use crate::view::product_card::{render_action_form, render_action_form_with};

/// URL of the comparison page carrying `selection`
pub fn bundles_url(selection: &BundleSelection) -> String {
    format!("/bundles?selected={}", encode(&selection.to_query_value()))
}

fn toggle_url(selection: &BundleSelection, bundle: &Bundle) -> String {
    format!(
        "{}&toggle={}",
        bundles_url(selection),
        encode(bundle.id.as_str())
    )
}

/// Render the bundle comparison page body
pub fn render_bundles(view: &BundleView, surface_errors: bool) -> String {
    if view.status == LoadStatus::Loading {
        return "<div class=\"loading\">carregando bundles...</div>\n".to_string();
    }

    let mut buf = String::new();

    buf.push_str("<div class=\"page-header\">\n");
    buf.push_str("<h1>comparação de bundles</h1>\n");
    buf.push_str("<p class=\"muted\">economize até 50% com nossos pacotes modulares</p>\n");
    buf.push_str("</div>\n");

    if surface_errors && view.status == LoadStatus::Failed {
        buf.push_str(
            "<div class=\"alert\" role=\"alert\">não foi possível carregar os bundles. tente novamente mais tarde.</div>\n",
        );
    }

    // selector
    buf.push_str("<div class=\"panel\">\n");
    buf.push_str("<h2>selecione 2 bundles para comparar</h2>\n");
    buf.push_str("<div class=\"grid bundle-selector\">\n");
    for bundle in &view.bundles {
        let class = if view.is_selected(&bundle.id) {
            "selectable selectable-active"
        } else {
            "selectable"
        };
        buf.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">\n",
            class,
            escape_html(&toggle_url(&view.selection, bundle))
        ));
        buf.push_str(&format!(
            "<div class=\"bundle-name\">{}</div>\n",
            escape_html(&bundle.name)
        ));
        buf.push_str(&format!(
            "<div class=\"muted\">{}/mês</div>\n",
            format_brl(bundle.mrr)
        ));
        if bundle.savings > 0.0 {
            buf.push_str(&format!(
                "<div class=\"savings\">economiza {}</div>\n",
                format_brl(bundle.savings)
            ));
        }
        buf.push_str("</a>\n");
    }
    buf.push_str("</div>\n</div>\n");

    if view.is_comparing() {
        let return_to = bundles_url(&view.selection);

        buf.push_str("<div class=\"grid comparison\">\n");
        for bundle in &view.compared {
            buf.push_str(&render_compared_bundle(bundle, &return_to));
        }
        buf.push_str("</div>\n");

        buf.push_str(&render_migration(&view.compared[0], &view.compared[1], &return_to));
    }

    buf.push_str(&render_migration_rules());

    buf
}

fn render_compared_bundle(bundle: &Bundle, return_to: &str) -> String {
    let mut buf = String::from("<div class=\"panel compared-bundle\">\n");

    buf.push_str(&format!("<h3>{}</h3>\n", escape_html(&bundle.name)));
    buf.push_str(&format!(
        "<p class=\"muted\">{}</p>\n",
        escape_html(&bundle.description)
    ));

    buf.push_str(&format!(
        "<div class=\"price\">{}/mês</div>\n",
        format_brl(bundle.mrr)
    ));
    if bundle.setup > 0.0 {
        buf.push_str(&format!(
            "<div class=\"muted\">+ {} setup</div>\n",
            format_brl(bundle.setup)
        ));
    }
    if bundle.savings > 0.0 {
        buf.push_str(&format!(
            "<div class=\"savings\">💰 economiza {}</div>\n",
            format_brl(bundle.savings)
        ));
    }

    buf.push_str(&format!(
        "<h4>produtos incluídos ({})</h4>\n<ul class=\"included-products\">\n",
        bundle.products.len()
    ));
    for label in bundle.product_labels() {
        buf.push_str(&format!("<li>{}</li>\n", escape_html(&label)));
    }
    buf.push_str("</ul>\n");

    if let Some(upgrade) = bundle.upgrade_label() {
        buf.push_str("<h4>próximo passo</h4>\n");
        buf.push_str(&format!(
            "<p class=\"muted\">upgrade para: <strong>{}</strong></p>\n",
            escape_html(&upgrade)
        ));
    }

    let action_base = format!("/bundles/{}", encode(bundle.id.as_str()));
    buf.push_str(&render_action_form(
        &format!("{}/choose", action_base),
        return_to,
        "button button-primary",
        &format!("escolher {}", escape_html(&bundle.name)),
    ));
    buf.push_str(&render_action_form(
        &format!("{}/demo", action_base),
        return_to,
        "button button-secondary",
        "agendar demo",
    ));

    buf.push_str("</div>\n");
    buf
}

fn render_migration(first: &Bundle, second: &Bundle, return_to: &str) -> String {
    let mut buf = String::from("<div class=\"panel migration\">\n<h3>migração entre bundles</h3>\n");

    for (from, to, note) in [
        (first, second, "upgrade com desconto"),
        (second, first, "downgrade (sem desconto)"),
    ] {
        let label = format!(
            "{} → {} <span class=\"muted\">{}</span>",
            escape_html(&from.name),
            escape_html(&to.name),
            note
        );
        buf.push_str(&render_action_form_with(
            "/bundles/migrate",
            return_to,
            &[("from", from.id.as_str()), ("to", to.id.as_str())],
            "button selectable",
            &label,
        ));
    }

    buf.push_str("</div>\n");
    buf
}

fn render_migration_rules() -> String {
    let mut buf = String::from("<div class=\"panel migration-rules\">\n<h3>regras de migração</h3>\n");
    buf.push_str("<h4>à la carte → bundle</h4>\n");
    buf.push_str("<p class=\"muted\">quando ROI comprovado: desconto de 20%</p>\n");
    buf.push_str("<h4>upgrade de bundle</h4>\n");
    buf.push_str("<p class=\"muted\">quando uso &gt; 80%: desconto de 10%</p>\n");
    buf.push_str("</div>\n");
    buf
}
