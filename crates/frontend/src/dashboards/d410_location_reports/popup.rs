//! Map popup and chart tooltip markup.

use contracts::dashboards::d410_location_reports::IndicatorLine;

fn push_lines(template: &mut String, lines: &[IndicatorLine]) {
    for line in lines {
        template.push_str(&format!(
            "<div>{}<strong>{}</strong></div>",
            line.indicator_name, line.indicator_value
        ));
    }
}

/// Hover box shown over a map region. An empty `subheading` is omitted.
pub fn template_popup_html(header: &str, lines: &[IndicatorLine], subheading: &str) -> String {
    let mut template = format!(
        "<div class=\"hoverinfo\" style=\"max-width: 200px !important; white-space: normal;\"><p>{}</p>",
        header
    );
    if !subheading.is_empty() {
        template.push_str(&format!("<p>{}</p>", subheading));
    }
    push_lines(&mut template, lines);
    template.push_str("</div>");
    template
}

pub fn tooltip_html(header: &str, lines: &[IndicatorLine]) -> String {
    let mut template = format!("<p><strong>{}</strong></p><br/>", header);
    push_lines(&mut template, lines);
    template
}
