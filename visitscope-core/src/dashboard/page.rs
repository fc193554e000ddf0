use crate::dashboard::DashboardSnapshot;
use crate::views::AddressVisits;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

/// Render the full dashboard page.
///
/// `static_prefix` is where the dashboard's own script and stylesheet are
/// served from.
pub fn render_page(
    snapshot: &DashboardSnapshot<'_>,
    static_prefix: &str,
) -> serde_json::Result<String> {
    let prefix = static_prefix.trim_end_matches('/');

    // The chart reads this back with JSON.parse; "</" would end the script.
    let traffic_json = serde_json::to_string(&snapshot.traffic)?.replace("</", "<\\/");

    let mut html = String::with_capacity(16 * 1024);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>visitscope</title>\n");
    html.push_str(&format!("<link rel=\"stylesheet\" href=\"{LEAFLET_CSS}\">\n"));
    html.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}/dashboard.css\">\n",
        escape_html(prefix),
    ));
    html.push_str("</head>\n<body>\n");

    html.push_str("<header><h1>Traffic Dashboard</h1></header>\n<main>\n");

    // Totals
    html.push_str("<section>\n<h2>Overview</h2>\n<div class=\"stats\">\n");
    html.push_str(&format!(
        "<div class=\"stat\"><strong id=\"total-visits\">{}</strong><span>visits</span></div>\n",
        snapshot.total_visits,
    ));
    html.push_str(&format!(
        "<div class=\"stat\"><strong id=\"unique-addresses\">{}</strong><span>unique addresses</span></div>\n",
        snapshot.unique_addresses,
    ));
    html.push_str("</div>\n");
    render_status_counts(&mut html, snapshot);
    html.push_str("</section>\n");

    render_locations(&mut html, snapshot);

    // Traffic trend
    html.push_str("<section>\n<h2>Traffic by Hour</h2>\n");
    html.push_str("<div class=\"chart\"><canvas id=\"trafficChart\"></canvas></div>\n");
    html.push_str("<table>\n<tr><th>Hour</th><th>Visits</th></tr>\n");
    for bucket in &snapshot.traffic {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            bucket.label(),
            bucket.hits,
        ));
    }
    html.push_str("</table>\n</section>\n");

    // Content
    html.push_str("<section>\n<h2>Top Content</h2>\n");
    if snapshot.top_content.is_empty() {
        html.push_str("<p class=\"empty\">No requests recorded.</p>\n");
    } else {
        html.push_str("<table>\n<tr><th>URL</th><th>Hits</th></tr>\n");
        for content in &snapshot.top_content {
            html.push_str(&format!(
                "<tr><td class=\"url\">{}</td><td>{}</td></tr>\n",
                escape_html(content.url),
                content.hits,
            ));
        }
        html.push_str("</table>\n");
    }
    html.push_str("</section>\n");

    render_journeys(&mut html, &snapshot.journeys);

    html.push_str("</main>\n");

    html.push_str(&format!(
        "<script id=\"traffic-data\" type=\"application/json\">{traffic_json}</script>\n"
    ));
    html.push_str(&format!("<script src=\"{LEAFLET_JS}\"></script>\n"));
    html.push_str(&format!("<script src=\"{CHART_JS}\"></script>\n"));
    html.push_str(&format!(
        "<script src=\"{}/dashboard.js\"></script>\n",
        escape_html(prefix),
    ));
    html.push_str("</body>\n</html>\n");

    Ok(html)
}

fn render_status_counts(html: &mut String, snapshot: &DashboardSnapshot<'_>) {
    html.push_str("<h3>Status Codes</h3>\n");
    if snapshot.status_counts.is_empty() {
        html.push_str("<p class=\"empty\">No requests recorded.</p>\n");
        return;
    }

    html.push_str("<table>\n<tr><th>Status</th><th>Count</th></tr>\n");
    for (status, count) in snapshot.status_counts {
        html.push_str(&format!("<tr><td>{status}</td><td>{count}</td></tr>\n"));
    }
    html.push_str("</table>\n");
}

fn render_locations(html: &mut String, snapshot: &DashboardSnapshot<'_>) {
    html.push_str("<section>\n<h2>Visitor Locations</h2>\n<div id=\"map\"></div>\n");
    if snapshot.locations.is_empty() {
        html.push_str("<p class=\"empty\">No resolvable addresses.</p>\n");
        html.push_str("</section>\n");
        return;
    }

    html.push_str(
        "<table>\n<tr><th>IP</th><th>City</th><th>Country</th><th>Visits</th></tr>\n",
    );
    for location in &snapshot.locations {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&location.address),
            escape_html(&location.city),
            escape_html(&location.country),
            location.visit_count,
        ));
    }
    html.push_str("</table>\n</section>\n");
}

fn render_journeys(html: &mut String, journeys: &[AddressVisits<'_>]) {
    html.push_str("<section>\n<h2>User Journeys</h2>\n");
    if journeys.is_empty() {
        html.push_str("<p class=\"empty\">No visitors yet.</p>\n");
    }

    for journey in journeys {
        html.push_str(&format!("<h3>{}</h3>\n", escape_html(journey.address)));
        html.push_str("<table>\n<tr><th>Time</th><th>URL</th><th>Status</th></tr>\n");
        for visit in &journey.visits {
            html.push_str(&format!(
                "<tr><td>{}</td><td class=\"url\">{}</td><td>{}</td></tr>\n",
                visit.timestamp.format("%Y-%m-%d %H:%M:%S"),
                escape_html(&visit.url),
                visit.status,
            ));
        }
        html.push_str("</table>\n");
    }
    html.push_str("</section>\n");
}

/// Minimal HTML escaping for text and attribute values.
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
