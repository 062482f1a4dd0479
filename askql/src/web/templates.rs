// askql/src/web/templates.rs

pub const INDEX_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>AI SQL Assistant</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #262730; }
    input[type=text] { width: 100%; padding: .5rem; font-size: 1rem; box-sizing: border-box; }
    button { margin-top: .75rem; padding: .5rem 1rem; font-size: 1rem; }
    pre { background: #f0f2f6; padding: .75rem; border-radius: .4rem; overflow-x: auto; }
    .row { margin: .2rem 0; font-family: monospace; }
    .info { background: #e8f0fe; padding: .75rem; border-radius: .4rem; }
    .success { background: #e6f4ea; padding: .75rem; border-radius: .4rem; }
    .error { background: #fce8e6; padding: .75rem; border-radius: .4rem; }
  </style>
</head>
<body>
  <h1>🧠 AI-Powered SQL Generator</h1>
  <h3>{{ subtitle }}</h3>

  <form method="post" action="/">
    <label for="question">Ask your database question in plain English:</label>
    <input type="text" id="question" name="question" value="{{ question }}" autofocus>
    <button type="submit">Generate &amp; Run SQL</button>
  </form>

  {% if sql %}
  <h3>Generated SQL Query</h3>
  <pre><code class="language-sql">{{ sql }}</code></pre>

  <h3>Query Results</h3>
  {% if rows %}
    {% for row in rows %}<div class="row">{{ row }}</div>
    {% endfor %}
  {% elif no_records %}
  <div class="info">No records found</div>
  {% elif success %}
  <div class="success">✅ {{ success }}</div>
  {% endif %}
  {% endif %}

  {% if error %}
  <div class="error">❌ {{ error }}</div>
  {% endif %}
</body>
</html>
"#;
