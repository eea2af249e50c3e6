use crate::analytics::format_rate;
use crate::charts::{render_injury_rates, render_scatter};
use crate::errors::ValidationError;
use crate::form::{Field, IncidentDraft};
use crate::models::{AnalyticsReport, Incident};
use chrono::{NaiveTime, Timelike};

pub fn render_home(incident_count: usize, reported: Option<u64>) -> String {
    let flash = match reported {
        Some(id) => format!(
            r#"<div class="status" data-type="ok">Incident #{id} reported successfully!</div>"#
        ),
        None => String::new(),
    };
    let body = HOME_HTML
        .replace("{{COUNT}}", &incident_count.to_string())
        .replace("{{FLASH}}", &flash);
    layout("Safety Incident Management System", &body)
}

pub fn render_report_form(draft: &IncidentDraft, error: Option<&ValidationError>) -> String {
    let status = match error {
        Some(err) => format!(
            r#"<div class="status" data-type="error" role="alert">{}</div>"#,
            escape_html(&err.to_string())
        ),
        None => String::new(),
    };

    let summary = draft.value(Field::Summary);
    let body = format!(
        r#"{header}
    {status}
    <form class="incident-form" method="post" action="/report-incident">
      <div class="fields">
        {date}
        {time}
        {location}
        {involved}
        {injured}
      </div>
      <div class="field">
        <label for="summary">{summary_label} *</label>
        <textarea id="summary" name="summary" rows="6" required placeholder="Provide a detailed description of what happened, including any contributing factors, immediate actions taken, and current status...">{summary}</textarea>
      </div>
      <div class="form-actions">
        <a class="btn btn-muted" href="/">Cancel</a>
        <button class="btn btn-primary" type="submit">Submit Report</button>
      </div>
    </form>"#,
        header = view_header("Report Safety Incident", None),
        date = input(draft, Field::Date, "date", "date", ""),
        time = input(draft, Field::Time, "time", "time", ""),
        location = input(
            draft,
            Field::Location,
            "location",
            "text",
            r#"placeholder="e.g., Main Office, Warehouse A, Loading Dock""#
        ),
        involved = input(draft, Field::PeopleInvolved, "people_involved", "number", r#"min="1""#),
        injured = input(draft, Field::PeopleInjured, "people_injured", "number", r#"min="0""#),
        summary_label = Field::Summary.label(),
        summary = escape_html(summary),
    );
    layout("Report Safety Incident", &body)
}

pub fn render_incident_list(incidents: &[Incident]) -> String {
    if incidents.is_empty() {
        let body = format!(
            "{}{}",
            view_header("Safety Incidents", None),
            empty_state("No incidents have been reported yet.")
        );
        return layout("Safety Incidents", &body);
    }

    let cards: String = incidents.iter().map(incident_card).collect();
    let body = format!(
        r#"{}
    <section class="incident-list">{cards}</section>"#,
        view_header(&format!("Safety Incidents ({})", incidents.len()), None)
    );
    layout("Safety Incidents", &body)
}

pub fn render_analytics(report: &AnalyticsReport) -> String {
    let count = report.headline.total_incidents;
    if count == 0 {
        let body = format!(
            "{}{}",
            view_header("Safety Analytics", None),
            empty_state("No incident data available for analysis.")
        );
        return layout("Safety Analytics", &body);
    }

    let subtitle = format!(
        "Analyzing {count} incident{}",
        if count == 1 { "" } else { "s" }
    );
    let bar_section = if report.locations.is_empty() {
        String::new()
    } else {
        format!(
            r#"<section class="chart-card">
      {}
      <h3>Location Risk Analysis</h3>
      <p class="hint">This bar chart shows the injury rate (percentage of involved people who were injured) by location. Higher percentages indicate locations with higher injury rates.</p>
    </section>"#,
            render_injury_rates(&report.locations)
        )
    };

    let body = format!(
        r#"{header}
    <section class="chart-card">
      {scatter}
      <h3>Correlation Analysis</h3>
      <p class="hint">This scatter plot shows the relationship between the number of people involved in incidents and the number of people injured. Each point represents one incident. Hover over points to see incident details.</p>
    </section>
    {bar_section}
    <section class="summary">
      <h3>Summary Statistics</h3>
      <div class="panel">
        <div class="stat">
          <span class="value" id="total-incidents">{count}</span>
          <span class="label">Total Incidents</span>
        </div>
        <div class="stat">
          <span class="value" id="total-involved">{involved}</span>
          <span class="label">Total People Involved</span>
        </div>
        <div class="stat">
          <span class="value" id="total-injured">{injured}</span>
          <span class="label">Total People Injured</span>
        </div>
        <div class="stat">
          <span class="value rate" id="overall-rate">{rate}</span>
          <span class="label">Overall Injury Rate</span>
        </div>
      </div>
    </section>"#,
        header = view_header("Safety Analytics", Some(&subtitle)),
        scatter = render_scatter(&report.points),
        involved = report.headline.total_involved,
        injured = report.headline.total_injured,
        rate = format_rate(report.headline.overall_injury_rate),
    );
    layout("Safety Analytics", &body)
}

pub(crate) fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn input(draft: &IncidentDraft, field: Field, name: &str, kind: &str, extra: &str) -> String {
    format!(
        r#"<div class="field">
          <label for="{name}">{label} *</label>
          <input type="{kind}" id="{name}" name="{name}" value="{value}" {extra} required />
        </div>"#,
        label = field.label(),
        value = escape_html(draft.value(field)),
    )
}

fn incident_card(incident: &Incident) -> String {
    format!(
        r#"
      <article class="incident-card">
        <div class="incident-header">
          <h3>Incident #{id}</h3>
          <span class="incident-date">{date} at {time}</span>
        </div>
        <div class="incident-details">
          <div><strong>Location:</strong> {location}</div>
          <div><strong>People Involved:</strong> {involved}</div>
          <div><strong>People Injured:</strong> {injured}</div>
        </div>
        <div class="incident-summary"><strong>Summary:</strong><p>{summary}</p></div>
        <small class="hint">Reported: {reported}</small>
      </article>"#,
        id = incident.id,
        date = incident.date,
        time = clock_time(incident.time),
        location = escape_html(&incident.location),
        involved = incident.people_involved,
        injured = incident.people_injured,
        summary = escape_html(&incident.summary),
        reported = incident.reported_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

/// `HH:MM`, with seconds only when the report carried them.
fn clock_time(time: NaiveTime) -> String {
    if time.second() == 0 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%H:%M:%S").to_string()
    }
}

fn view_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle = subtitle
        .map(|text| format!(r#"<p class="subtitle">{}</p>"#, escape_html(text)))
        .unwrap_or_default();
    format!(
        r#"<header>
      <a class="back-link" href="/">&larr; Back to Home</a>
      <h1>{}</h1>
      {subtitle}
    </header>"#,
        escape_html(title)
    )
}

fn empty_state(message: &str) -> String {
    format!(
        r#"
    <section class="empty-state">
      <p>{}</p>
      <a class="btn btn-primary" href="/report-incident">Report First Incident</a>
    </section>"#,
        escape_html(message)
    )
}

fn layout(title: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{BODY}}", body)
}

const HOME_HTML: &str = r#"<header>
      <h1>Safety Incident Management System</h1>
      <p class="subtitle">Report and track safety incidents to maintain a safe workplace environment.</p>
    </header>
    {{FLASH}}
    <section class="actions">
      <a class="btn btn-primary" href="/report-incident">Report Incident</a>
      <a class="btn btn-secondary" id="view-link" href="/view-incidents">View Incidents ({{COUNT}})</a>
      <a class="btn btn-muted" href="/analytics">Analytics</a>
    </section>
    <section class="panel">
      <div class="stat">
        <span class="label">Quick Reporting</span>
        <p class="hint">Submit incident reports quickly with a short form.</p>
      </div>
      <div class="stat">
        <span class="label">In-Memory Records</span>
        <p class="hint">Reports are kept for as long as the server runs.</p>
      </div>
      <div class="stat">
        <span class="label">Easy Access</span>
        <p class="hint">Review reports and injury trends whenever needed.</p>
      </div>
    </section>"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #e74c3c;
      --accent-2: #2f4858;
      --bar: #3498db;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(900px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h3 {
      margin: 12px 0 4px;
    }

    .subtitle,
    .hint {
      margin: 0;
      color: #6f6a65;
    }

    .back-link {
      color: var(--accent-2);
      text-decoration: none;
      font-weight: 600;
    }

    .panel,
    .fields {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat,
    .incident-card,
    .chart-card,
    .empty-state {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.rate {
      color: var(--accent);
    }

    .actions,
    .form-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .form-actions {
      justify-content: flex-end;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      text-decoration: none;
      display: inline-flex;
      align-items: center;
      justify-content: center;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-secondary {
      background: var(--accent-2);
      color: white;
    }

    .btn-muted {
      background: rgba(47, 72, 88, 0.1);
      color: var(--accent-2);
    }

    .incident-form,
    .incident-list {
      display: grid;
      gap: 16px;
    }

    .field {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    .field input,
    .field textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
    }

    .incident-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .incident-header h3 {
      margin: 0;
    }

    .incident-details {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 8px;
    }

    .chart {
      width: 100%;
      display: block;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .chart-title {
      fill: var(--accent-2);
      font-size: 12px;
      font-weight: 600;
    }

    .chart-point {
      fill: rgba(231, 76, 60, 0.6);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-bar {
      fill: rgba(52, 152, 219, 0.6);
      stroke: var(--bar);
      stroke-width: 2;
    }

    .empty-state {
      justify-items: center;
      text-align: center;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .btn {
        width: 100%;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    {{BODY}}
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::build_analytics;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn incident(id: u64, location: &str, involved: u32, injured: u32) -> Incident {
        Incident {
            id,
            date: NaiveDate::from_ymd_opt(2026, 7, 4).unwrap(),
            time: NaiveTime::from_hms_opt(16, 20, 0).unwrap(),
            location: location.to_string(),
            people_involved: involved,
            people_injured: injured,
            summary: "Ladder <slipped>".to_string(),
            reported_at: Utc.with_ymd_and_hms(2026, 7, 4, 17, 0, 0).unwrap(),
        }
    }

    #[test]
    fn home_shows_count_and_flash() {
        let html = render_home(3, Some(42));
        assert!(html.contains("View Incidents (3)"));
        assert!(html.contains("Incident #42 reported successfully!"));
        assert!(!render_home(0, None).contains("reported successfully"));
    }

    #[test]
    fn list_renders_cards_in_order() {
        let html = render_incident_list(&[incident(2, "Yard", 1, 0), incident(1, "Dock", 2, 1)]);
        let second = html.find("Incident #2").unwrap();
        let first = html.find("Incident #1").unwrap();
        assert!(second < first);
        assert!(html.contains("Safety Incidents (2)"));
        assert!(html.contains("2026-07-04 at 16:20"));
        assert!(html.contains("Ladder &lt;slipped&gt;"));
    }

    #[test]
    fn empty_list_offers_report_link() {
        let html = render_incident_list(&[]);
        assert!(html.contains("No incidents have been reported yet."));
        assert!(html.contains(r#"href="/report-incident""#));
    }

    #[test]
    fn empty_analytics_replaces_both_charts() {
        let html = render_analytics(&build_analytics(&[]));
        assert!(html.contains("No incident data available for analysis."));
        assert!(html.contains("Report First Incident"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn analytics_renders_charts_and_headline() {
        let report = build_analytics(&[incident(1, "A", 3, 1), incident(2, "B", 7, 2)]);
        let html = render_analytics(&report);
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("Analyzing 2 incidents"));
        assert!(html.contains("30.0%"));

        let single = render_analytics(&build_analytics(&[incident(1, "A", 3, 1)]));
        assert!(single.contains("Analyzing 1 incident<"));
    }

    #[test]
    fn form_keeps_values_and_shows_error() {
        let draft = IncidentDraft {
            location: "Dock \"B\"".to_string(),
            ..IncidentDraft::default()
        };
        let err = ValidationError::MissingField(Field::Date);

        let html = render_report_form(&draft, Some(&err));

        assert!(html.contains(r#"value="Dock &quot;B&quot;""#));
        assert!(html.contains("Date of Incident is required"));
    }

    #[test]
    fn location_text_is_never_treated_as_a_placeholder() {
        let report = build_analytics(&[incident(1, "Bay {{RATE}} {{BAR_SECTION}}", 3, 1)]);
        let html = render_analytics(&report);
        assert!(html.contains("Location: Bay {{RATE}} {{BAR_SECTION}}"));
        assert!(html.contains("33.3%"));
        assert_eq!(html.matches("<svg").count(), 2);
    }

    #[test]
    fn list_keeps_seconds_when_reported() {
        let mut precise = incident(5, "Yard", 1, 0);
        precise.time = NaiveTime::from_hms_opt(7, 5, 30).unwrap();
        let html = render_incident_list(&[precise, incident(6, "Yard", 1, 0)]);
        assert!(html.contains("2026-07-04 at 07:05:30"));
        assert!(html.contains("2026-07-04 at 16:20<"));
    }
}
