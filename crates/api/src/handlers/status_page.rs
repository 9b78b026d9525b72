use axum::{extract::State, response::Html};
use std::fmt::Write;
use tracing::{debug, instrument};

use crate::{dto::StoreSummaryDto, state::AppState};

#[instrument(skip(state), name = "status_page")]
pub async fn status_page(State(state): State<AppState>) -> Html<String> {
    debug!("Rendering status page");
    Html(render(&StoreSummaryDto::from_store(&state.store)))
}

fn render(summary: &StoreSummaryDto) -> String {
    let mut page = String::from("<h1>DNS Records</h1><h2>Global Records</h2><ul>");

    for record in &summary.global {
        let _ = write!(
            page,
            "<li>{} -&gt; {}</li>",
            escape_html(&record.name),
            escape_html(&record.address)
        );
    }
    page.push_str("</ul>");

    for zone in &summary.zones {
        let _ = write!(page, "<h2>Zone: {}</h2><ul>", escape_html(&zone.suffix));
        for record in &zone.records {
            let _ = write!(
                page,
                "<li>{} -&gt; {}</li>",
                escape_html(&record.name),
                escape_html(&record.address)
            );
        }
        page.push_str("</ul>");
    }

    page
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
