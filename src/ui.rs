use crate::chart::ChartConfig;
use crate::handlers::cell_name;
use crate::models::{Notice, Summary, User};
use crate::table::{Field, Row, Table};
use std::fmt::Write;

/// Renders the page. `since` is the notice sequence the browser has
/// already seen when it is waiting for a save to come back.
pub fn render_index(
    user: &User,
    summary: &Summary,
    table: &Table,
    notice: Option<&Notice>,
    since: Option<u64>,
) -> String {
    let chart = serde_json::to_string(&ChartConfig::from_summary(summary)).unwrap_or_default();
    let since = since.map_or_else(|| "null".to_string(), |seq| seq.to_string());
    fill(
        INDEX_HTML,
        &[
            ("NAME", escape(&user.name)),
            ("DEPARTMENT", escape(&user.department)),
            ("DAILY", summary.daily.to_string()),
            ("WEEKLY", summary.weekly.to_string()),
            ("MONTHLY", summary.monthly.to_string()),
            ("CHART", chart),
            ("ROWS", render_rows(table)),
            ("NOTICE", render_notice(notice)),
            ("SINCE", since),
        ],
    )
}

/// Substitutes `{{KEY}}` placeholders in one pass. Substituted text is
/// never scanned again, so cell contents come out as typed.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, end))
        });
        match value {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Table body for the current rows. Rebuilt from scratch on every render.
pub fn render_rows(table: &Table) -> String {
    let mut out = String::new();
    for row in table.rows() {
        render_row(&mut out, row);
    }
    out
}

fn render_row(out: &mut String, row: &Row) {
    let _ = write!(out, "<tr data-row-id=\"{}\"><td class=\"no\">{}</td>", row.id, escape(&row.no));
    for field in Field::ALL {
        let _ = write!(
            out,
            "<td><input type=\"text\" name=\"{}\" value=\"{}\" aria-label=\"{}\" /></td>",
            cell_name(row.id, field),
            escape(row.get(field)),
            field.label()
        );
    }
    let _ = write!(
        out,
        "<td><button class=\"btn-remove\" type=\"submit\" formaction=\"/rows/{}/remove\">Remove</button></td></tr>",
        row.id
    );
}

fn render_notice(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => format!(
            "<div class=\"notice\" role=\"status\" data-seq=\"{}\"><span id=\"notice-message\">{}</span><time>{}</time></div>",
            notice.seq,
            escape(&notice.message),
            notice.received_at.format("%H:%M:%S")
        ),
        None => String::new(),
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Department Productivity</title>
  <style>
    :root {
      --bg: #f4f6f8;
      --ink: #23262b;
      --muted: #5f6670;
      --accent: #36a2eb;
      --danger: #ff6384;
      --card: #ffffff;
      --shadow: 0 18px 40px rgba(35, 38, 43, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(980px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h2 {
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      border-bottom: 1px solid #e3e6ea;
      padding: 6px;
      text-align: left;
    }

    td.no {
      width: 3rem;
      color: var(--muted);
    }

    input[type="text"] {
      width: 100%;
      border: 1px solid transparent;
      border-radius: 6px;
      padding: 6px;
      font: inherit;
    }

    input[type="text"]:focus {
      border-color: var(--accent);
      outline: none;
    }

    .actions {
      display: flex;
      gap: 12px;
      margin-bottom: 16px;
    }

    button {
      border: none;
      border-radius: 10px;
      padding: 8px 18px;
      font: inherit;
      cursor: pointer;
      background: var(--accent);
      color: #fff;
    }

    .btn-remove {
      background: var(--danger);
    }

    .notice {
      display: flex;
      justify-content: space-between;
      background: #eaf5fd;
      border-left: 4px solid var(--accent);
      padding: 10px 14px;
      border-radius: 8px;
    }

    .notice time {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h2>Welcome {{NAME}} ({{DEPARTMENT}})</h2>
      <p class="subtitle">Daily: {{DAILY}}, Weekly: {{WEEKLY}}, Monthly: {{MONTHLY}}</p>
    </header>

    {{NOTICE}}

    <section>
      <canvas id="productivityChart" width="400" height="200"></canvas>
    </section>

    <form id="sheet" method="post" action="/save">
      <div class="actions">
        <button id="save" type="submit" formaction="/save">Save</button>
        <button id="add-row" type="submit" formaction="/rows">Add Row</button>
      </div>
      <table id="prodTable">
        <thead>
          <tr>
            <th>No</th>
            <th>Activity</th>
            <th>Duration</th>
            <th>Frequency</th>
            <th>Output</th>
            <th>Remarks</th>
            <th></th>
          </tr>
        </thead>
        <tbody>{{ROWS}}</tbody>
      </table>
    </form>
  </main>

  <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
  <script>
    const ctx = document.getElementById('productivityChart').getContext('2d');
    new Chart(ctx, {{CHART}});

    const since = {{SINCE}};
    const waitForNotice = async (attempt) => {
      try {
        const res = await fetch('/api/notice');
        const notice = await res.json();
        if (notice && notice.seq > since) {
          history.replaceState(null, '', '/');
          alert(notice.message);
          return;
        }
      } catch (err) {
        console.error(err);
      }
      if (attempt < 120) {
        setTimeout(() => waitForNotice(attempt + 1), 500);
      }
    };
    if (since !== null) {
      waitForNotice(0);
    }
  </script>
</body>
</html>
"#;
