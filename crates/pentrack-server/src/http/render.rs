use pentrack_model::{Project, KNOWN_STATUSES};

pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Badge vocabulary for the dashboard stylesheet. Unknown statuses keep
/// their display text but fall back to the `unknown` badge class.
pub(crate) fn badge_status(status: &str) -> &str {
    if KNOWN_STATUSES.contains(&status) {
        status
    } else {
        "unknown"
    }
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        "&mdash;".to_string()
    } else {
        escape_html(value)
    }
}

fn testers_cell(project: &Project) -> String {
    if project.assigned_testers.is_empty() {
        return "&mdash;".to_string();
    }
    project
        .assigned_testers
        .iter()
        .map(|t| format!("{} ({})", escape_html(t.tester_id.as_str()), escape_html(&t.role)))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn render_dashboard(projects: &[Project]) -> String {
    let mut rows = String::new();
    for project in projects {
        let status = escape_html(&project.status);
        let badge = badge_status(&project.status);
        rows.push_str(&format!(
            "<tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><span class=\"status-badge status-{badge}\" data-status=\"{badge}\">{status}</span></td>\
<td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(project.id.as_str()),
            cell(&project.name),
            cell(&project.client),
            cell(&project.start_date),
            cell(&project.end_date),
            cell(&project.kind),
            cell(&project.priority),
            testers_cell(project),
        ));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"9\">No projects tracked yet.</td></tr>");
    }
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Pentrack</title><style>\
table{{border-collapse:collapse}}td,th{{border:1px solid #ccc;padding:4px 8px}}\
.status-badge{{padding:2px 6px;border-radius:4px}}\
.status-planning{{background:#fef9c3}}\
.status-in-progress{{background:#dbeafe}}\
.status-completed{{background:#dcfce7}}\
.status-on-hold{{background:#e5e7eb}}\
.status-unknown{{background:#fee2e2}}\
</style></head><body>\
<h1>Pentrack Projects</h1>\
<p>Version: <code>{}</code></p>\
<table><thead><tr>\
<th>ID</th><th>Name</th><th>Client</th><th>Start</th><th>End</th>\
<th>Status</th><th>Type</th><th>Priority</th><th>Assigned testers</th>\
</tr></thead><tbody>{}</tbody></table>\
<p><a href=\"/api/projects\">/api/projects</a></p>\
</body></html>",
        env!("CARGO_PKG_VERSION"),
        rows
    )
}
