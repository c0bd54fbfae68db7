//! The thin interactive front end: one static HTML page with the generation
//! form. It submits a plain GET to the worksheet endpoint, so the browser
//! handles the download.

use axum::response::Html;

/// GET /
pub async fn form_handler() -> Html<&'static str> {
    Html(FORM_PAGE)
}

const FORM_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>HSK Writing Practice</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 28rem; margin: 4rem auto; padding: 0 1rem; color: #1a1a1a; }
    h1 { font-size: 1.4rem; }
    label { display: block; margin-top: 1rem; font-weight: 600; }
    select, input { margin-top: 0.25rem; padding: 0.3rem; width: 100%; box-sizing: border-box; }
    button { margin-top: 1.5rem; padding: 0.5rem 1.2rem; font-size: 1rem; cursor: pointer; }
    p.hint { color: #666; font-size: 0.85rem; }
  </style>
</head>
<body>
  <h1>汉语水平考试 — HSK Writing Practice</h1>
  <p class="hint">Generates a printable PDF worksheet: one practice cell per
  character with pinyin, meaning, stroke count and a guide grid.</p>
  <form action="/api/v1/worksheet" method="get">
    <label for="level">Level</label>
    <select id="level" name="level">
      <option value="2">HSK 2</option>
      <option value="3">HSK 3</option>
    </select>

    <label for="items_per_page">Characters per page (4–20)</label>
    <input id="items_per_page" name="items_per_page" type="number" min="4" max="20" value="12">

    <label for="columns_per_row">Columns (2–5)</label>
    <input id="columns_per_row" name="columns_per_row" type="number" min="2" max="5" value="3">

    <button type="submit">Generate PDF</button>
  </form>
</body>
</html>
"#;
