use crate::document::{PageDocument, ids};
use crate::search::escape_html;
use chrono::{Local, NaiveDateTime};

pub fn render_dashboard(document: &PageDocument) -> String {
    render_dashboard_at(document, Local::now().naive_local())
}

/// Renders the populated counters and charts as a standalone page.
pub fn render_dashboard_at(document: &PageDocument, generated_at: NaiveDateTime) -> String {
    let counter = |id: &str| {
        document
            .element(id)
            .map(|element| element.text.as_str())
            .filter(|text| !text.is_empty())
            .map(escape_html)
            .unwrap_or_else(|| "&ndash;".to_string())
    };

    DASHBOARD_HTML
        .replace("{{USERS}}", &counter(ids::USER_COUNT))
        .replace("{{MESSAGES}}", &counter(ids::MESSAGE_COUNT))
        .replace("{{FLAGGED}}", &counter(ids::FLAGGED_COUNT))
        .replace("{{CHARTS}}", &chart_script(document))
        .replace("{{GENERATED}}", &generated_at.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn chart_script(document: &PageDocument) -> String {
    [ids::MESSAGES_CHART, ids::FLAGS_CHART]
        .into_iter()
        .filter_map(|id| {
            let chart = document.element(id)?.chart.as_ref()?;
            // `</` inside an inline script would close the tag early.
            let config = chart.to_chartjs_config().to_string().replace("</", "<\\/");
            Some(format!(
                "    new Chart(document.getElementById('{id}'), {config});\n"
            ))
        })
        .collect()
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Admin Analytics</title>
  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2430;
      --muted: #6b7280;
      --card: #ffffff;
      --accent: #3b5bdb;
      --shadow: 0 16px 40px rgba(31, 36, 48, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
    }

    .counters {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 20px 24px;
    }

    .card .label {
      color: var(--muted);
      font-size: 0.9rem;
      text-transform: uppercase;
      letter-spacing: 0.06em;
    }

    .card .value {
      font-size: 2.2rem;
      font-weight: 600;
      color: var(--accent);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 16px;
    }

    footer {
      color: var(--muted);
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Admin Analytics</h1>
    <section class="counters">
      <div class="card"><div class="label">Users</div><div class="value" id="userCount">{{USERS}}</div></div>
      <div class="card"><div class="label">Messages</div><div class="value" id="messageCount">{{MESSAGES}}</div></div>
      <div class="card"><div class="label">Flagged</div><div class="value" id="flaggedCount">{{FLAGGED}}</div></div>
    </section>
    <section class="charts">
      <div class="card"><canvas id="messagesChart"></canvas></div>
      <div class="card"><canvas id="flagsChart"></canvas></div>
    </section>
    <footer>Generated {{GENERATED}}</footer>
  </main>
  <script>
{{CHARTS}}  </script>
</body>
</html>
"#;
