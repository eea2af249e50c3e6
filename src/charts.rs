use crate::analytics::format_rate;
use crate::models::{CorrelationPoint, LocationStats};
use crate::ui::escape_html;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const PADDING_X: f64 = 52.0;
const PADDING_Y: f64 = 46.0;
const TOP: f64 = 20.0;

/// Scatter of people involved (x) against people injured (y). Both axes start
/// at zero and use whole-number ticks.
pub fn render_scatter(points: &[CorrelationPoint]) -> String {
    let x_axis = Axis::integer(points.iter().map(|p| p.x).max().unwrap_or(0));
    let y_axis = Axis::integer(points.iter().map(|p| p.y).max().unwrap_or(0));

    let x = |value: f64| PADDING_X + value / x_axis.max * (WIDTH - PADDING_X * 2.0);
    let y = |value: f64| HEIGHT - PADDING_Y - value / y_axis.max * (HEIGHT - TOP - PADDING_Y);

    let mut svg = String::new();
    for tick in y_axis.ticks() {
        let y_pos = y(tick);
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y_pos:.2}" x2="{:.2}" y2="{y_pos:.2}" /><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{tick}</text>"#,
            WIDTH - PADDING_X,
            PADDING_X - 10.0,
            y_pos + 4.0,
        ));
    }
    for tick in x_axis.ticks() {
        svg.push_str(&format!(
            r#"<text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{tick}</text>"#,
            x(tick),
            HEIGHT - PADDING_Y + 18.0,
        ));
    }
    svg.push_str(&axis_titles("Number of People Involved", "Number of People Injured"));

    for point in points {
        let tooltip = format!(
            "Incident #{}\nLocation: {}\nDate: {}\nPeople Involved: {}\nPeople Injured: {}",
            point.id, point.location, point.date, point.x, point.y
        );
        svg.push_str(&format!(
            r#"<circle class="chart-point" cx="{:.2}" cy="{:.2}" r="6"><title>{}</title></circle>"#,
            x(f64::from(point.x)),
            y(f64::from(point.y)),
            escape_html(&tooltip),
        ));
    }

    wrap_svg("People Involved vs People Injured", &svg)
}

/// One bar per location on a fixed 0-100 % scale.
pub fn render_injury_rates(locations: &[LocationStats]) -> String {
    let plot_width = WIDTH - PADDING_X * 2.0;
    let plot_height = HEIGHT - TOP - PADDING_Y;
    let y = |rate: f64| HEIGHT - PADDING_Y - rate.clamp(0.0, 100.0) / 100.0 * plot_height;

    let mut svg = String::new();
    for tick in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let y_pos = y(tick);
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{PADDING_X}" y1="{y_pos:.2}" x2="{:.2}" y2="{y_pos:.2}" /><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="end">{tick}</text>"#,
            WIDTH - PADDING_X,
            PADDING_X - 10.0,
            y_pos + 4.0,
        ));
    }
    svg.push_str(&axis_titles("Location", "Injury Rate (%)"));

    let slot = plot_width / locations.len().max(1) as f64;
    let bar_width = slot * 0.6;
    for (index, group) in locations.iter().enumerate() {
        let left = PADDING_X + slot * index as f64 + (slot - bar_width) / 2.0;
        let top = y(group.injury_rate);
        let tooltip = format!(
            "{}\nInjury Rate: {}\nTotal Incidents: {}\nTotal Involved: {}\nTotal Injured: {}",
            group.location,
            format_rate(group.injury_rate),
            group.total_incidents,
            group.total_involved,
            group.total_injured
        );
        svg.push_str(&format!(
            r#"<rect class="chart-bar" x="{left:.2}" y="{top:.2}" width="{bar_width:.2}" height="{:.2}"><title>{}</title></rect><text class="chart-label" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
            HEIGHT - PADDING_Y - top,
            escape_html(&tooltip),
            left + bar_width / 2.0,
            HEIGHT - PADDING_Y + 18.0,
            escape_html(&group.location),
        ));
    }

    wrap_svg("Injury Rate by Location", &svg)
}

struct Axis {
    max: f64,
    step: u64,
    steps: u64,
}

impl Axis {
    /// Rounds the axis up to a whole number of steps, at most five of them.
    fn integer(max_value: u32) -> Self {
        let max_value = u64::from(max_value.max(1));
        let step = max_value.div_ceil(5).max(1);
        let steps = max_value.div_ceil(step);
        Self {
            max: (steps * step) as f64,
            step,
            steps,
        }
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(move |i| (i * self.step) as f64)
    }
}

fn axis_titles(x_title: &str, y_title: &str) -> String {
    format!(
        r#"<text class="chart-title" x="{:.2}" y="{:.2}" text-anchor="middle">{x_title}</text><text class="chart-title" x="14" y="{:.2}" text-anchor="middle" transform="rotate(-90 14 {:.2})">{y_title}</text>"#,
        WIDTH / 2.0,
        HEIGHT - 6.0,
        (HEIGHT - PADDING_Y + TOP) / 2.0,
        (HEIGHT - PADDING_Y + TOP) / 2.0,
    )
}

fn wrap_svg(label: &str, body: &str) -> String {
    format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{label}">{body}</svg>"#
    )
}
