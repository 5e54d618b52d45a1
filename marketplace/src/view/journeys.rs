//! Journeys page
//!
//! Journey picker, then the selected journey's overview, milestone
//! timeline and calls-to-action.

use urlencoding::encode;

use crate::app::{JourneyView, LoadStatus};
use crate::domain::entities::{Journey, JourneyId, Milestone};
use crate::view::format::escape_html;
use crate::view::product_card::{render_action_form, render_action_form_with};

/// Page showing `id`; interactions redirect back here
pub fn journey_url(id: &JourneyId) -> String {
    format!("/jornadas?journey={}", encode(id.as_str()))
}

/// Picker link for `id`
pub fn journey_select_url(id: &JourneyId) -> String {
    format!("/jornadas?select={}", encode(id.as_str()))
}

/// Render the journeys page body
pub fn render_journeys(view: &JourneyView, surface_errors: bool) -> String {
    if view.status == LoadStatus::Loading {
        return "<div class=\"loading\">carregando jornadas...</div>\n".to_string();
    }

    let mut buf = String::new();

    buf.push_str("<div class=\"page-header\">\n");
    buf.push_str("<h1>jornadas típicas — land &amp; expand</h1>\n");
    buf.push_str("<p class=\"muted\">expansão previsível: quick wins → mrr → projetos</p>\n");
    buf.push_str("</div>\n");

    if surface_errors && view.status == LoadStatus::Failed {
        buf.push_str(
            "<div class=\"alert\" role=\"alert\">não foi possível carregar as jornadas.</div>\n",
        );
    }

    buf.push_str("<div class=\"panel\">\n<h2>escolha uma jornada</h2>\n<div class=\"grid\">\n");
    for journey in &view.journeys {
        let class = if view.selected.as_ref() == Some(&journey.id) {
            "selectable selectable-active"
        } else {
            "selectable"
        };
        buf.push_str(&format!(
            "<a class=\"{}\" href=\"{}\">\n",
            class,
            escape_html(&journey_select_url(&journey.id))
        ));
        buf.push_str(&format!(
            "<div class=\"journey-name\">{}</div>\n",
            escape_html(&journey.name)
        ));
        buf.push_str(&format!(
            "<div class=\"muted\">{}</div>\n",
            escape_html(&journey.description)
        ));
        buf.push_str(&format!(
            "<div class=\"muted\">{} milestones • {} produtos mrr</div>\n",
            journey.timeline.len(),
            journey.mrr_target.len()
        ));
        buf.push_str("</a>\n");
    }
    buf.push_str("</div>\n</div>\n");

    if let Some(journey) = &view.current {
        let return_to = journey_url(&journey.id);
        buf.push_str(&render_overview(journey));
        buf.push_str(&render_timeline(journey, &return_to));
        buf.push_str(&render_cta(journey, &return_to));
    }

    buf
}

fn render_list(items: &[String], empty: Option<&str>) -> String {
    let mut buf = String::from("<ul class=\"muted\">\n");
    if items.is_empty() {
        if let Some(text) = empty {
            buf.push_str(&format!("<li>• {}</li>\n", text));
        }
    }
    for item in items {
        buf.push_str(&format!("<li>• {}</li>\n", escape_html(item)));
    }
    buf.push_str("</ul>\n");
    buf
}

fn render_overview(journey: &Journey) -> String {
    let mut buf = String::from("<div class=\"panel journey-overview\">\n");
    buf.push_str(&format!("<h3>{}</h3>\n", escape_html(&journey.name)));

    buf.push_str(&format!(
        "<h4>persona</h4>\n<p class=\"muted\">{}</p>\n",
        escape_html(&journey.persona)
    ));
    buf.push_str(&format!(
        "<h4>contexto</h4>\n<p class=\"muted\">{}</p>\n",
        escape_html(&journey.context)
    ));

    buf.push_str("<h4>quick wins</h4>\n");
    buf.push_str(&render_list(&journey.quick_wins, None));
    buf.push_str("<h4>mrr alvo</h4>\n");
    buf.push_str(&render_list(&journey.mrr_target, None));
    buf.push_str("<h4>projetos</h4>\n");
    buf.push_str(&render_list(&journey.projects, Some("nenhum projeto")));

    buf.push_str(&format!(
        "<h4>métrica de sucesso</h4>\n<p class=\"muted\">{}</p>\n",
        escape_html(&journey.metrics.success)
    ));
    buf.push_str(&format!(
        "<h4>roi esperado</h4>\n<p class=\"muted\">{}</p>\n",
        escape_html(&journey.metrics.roi)
    ));

    buf.push_str("</div>\n");
    buf
}

fn render_timeline(journey: &Journey, return_to: &str) -> String {
    let mut buf = String::from("<div class=\"panel timeline\">\n<h3>timeline da jornada</h3>\n");
    let action = format!("/jornadas/{}/milestone", encode(journey.id.as_str()));
    let last = journey.timeline.len().saturating_sub(1);

    for (index, milestone) in journey.timeline.iter().enumerate() {
        buf.push_str("<div class=\"timeline-entry\">\n<div class=\"timeline-marker\">\n");
        buf.push_str(&format!(
            "<div class=\"timeline-week\">{}</div>\n",
            milestone.week
        ));
        if index < last {
            buf.push_str("<div class=\"timeline-line\"></div>\n");
        }
        buf.push_str("</div>\n");

        buf.push_str(&render_action_form_with(
            &action,
            return_to,
            &[("milestone", milestone.milestone.as_str())],
            "button milestone",
            &milestone_label(milestone),
        ));
        buf.push_str("</div>\n");
    }

    buf.push_str("</div>\n");
    buf
}

fn milestone_label(milestone: &Milestone) -> String {
    let mut label = format!(
        "<h4>semana {}: {}</h4>\n",
        milestone.week,
        escape_html(&milestone.milestone)
    );
    for deliverable in &milestone.deliverables {
        label.push_str(&format!(
            "<div class=\"muted\">{}</div>\n",
            escape_html(deliverable)
        ));
    }
    label
}

fn render_cta(journey: &Journey, return_to: &str) -> String {
    let action_base = format!("/jornadas/{}", encode(journey.id.as_str()));
    let mut buf = String::from("<div class=\"panel journey-cta\">\n");
    buf.push_str("<h3>pronto para começar esta jornada?</h3>\n");
    buf.push_str("<p class=\"muted\">comece com um quick win e expanda gradualmente</p>\n");
    buf.push_str(&render_action_form(
        &format!("{}/start", action_base),
        return_to,
        "button button-primary",
        "começar jornada",
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
