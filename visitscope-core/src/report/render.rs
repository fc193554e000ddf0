use crate::access_log::Visit;
use crate::report::Report;
use crate::views::AddressVisits;
use owo_colors::OwoColorize;

pub fn render_text(report: &Report<'_>, color: bool) -> String {
    let mut out = String::new();

    heading(&mut out, "🧭 User Journey Samples", color);
    render_address_visits(&mut out, &report.journeys);

    heading(&mut out, "🔎 Search Engine Bots (IP & URLs)", color);
    render_address_visits(&mut out, &report.bots);

    heading(&mut out, "💡 Engagement with Core Features", color);
    for feature in &report.feature_engagement {
        out.push_str(&format!("{} → {} hits\n", feature.url, feature.hits));
    }

    heading(&mut out, "🌍 Geographic Insights by IP", color);
    for location in &report.locations {
        out.push_str(&format!(
            "{} → {}, {} ({} visits)\n",
            location.address, location.city, location.country, location.visit_count,
        ));
    }

    heading(&mut out, "📌 Interest in Specific Content", color);
    for content in &report.top_content {
        out.push_str(&format!("{} → {} hits\n", content.url, content.hits));
    }

    heading(&mut out, "📈 Traffic Trends (by hour)", color);
    for bucket in &report.traffic {
        out.push_str(&format!("{} → {} hits\n", bucket.label(), bucket.hits));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "\n{} visits from {} addresses ({} of {} lines skipped)\n",
        summary.total_visits, summary.unique_addresses, summary.lines_skipped, summary.lines_read,
    ));

    out
}

pub fn render_json(report: &Report<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn heading(out: &mut String, title: &str, color: bool) {
    out.push('\n');
    if color {
        out.push_str(&format!("{}\n", title.bold().cyan()));
    } else {
        out.push_str(title);
        out.push('\n');
    }
}

fn render_address_visits(out: &mut String, entries: &[AddressVisits<'_>]) {
    for entry in entries {
        out.push_str(&format!("\nIP: {}\n", entry.address));
        for visit in &entry.visits {
            out.push_str(&format!(
                "  {} - {} [{}]\n",
                format_timestamp(visit),
                visit.url,
                visit.status,
            ));
        }
    }
}

/// Whole seconds unless the log carried sub-second precision.
fn format_timestamp(visit: &Visit) -> String {
    use chrono::Timelike;

    if visit.timestamp.nanosecond() == 0 {
        visit.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        visit.timestamp.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}
