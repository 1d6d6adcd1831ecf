//! Static metrics page. Opens the sibling `/ws` stream and renders samples.

use axum::response::Html;

/// Serves the page for any non-`/ws` path under the metrics prefix.
pub async fn page() -> Html<&'static str> {
    Html(PAGE)
}

const PAGE: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>gctune statsviz</title>
  <style>
    body { font-family: monospace; margin: 2rem; }
    table { border-collapse: collapse; }
    td, th { border: 1px solid #999; padding: 0.3rem 0.8rem; text-align: right; }
  </style>
</head>
<body>
  <h1>gctune statsviz</h1>
  <table>
    <tr><th>sample</th><td id="seq">-</td></tr>
    <tr><th>memory ceiling (bytes)</th><td id="ceiling">-</td></tr>
    <tr><th>collector trigger</th><td id="trigger">-</td></tr>
    <tr><th>heap used (bytes)</th><td id="heap">-</td></tr>
  </table>
  <script>
    const base = location.pathname.replace(/\/+$/, "");
    const proto = location.protocol === "https:" ? "wss://" : "ws://";
    const sock = new WebSocket(proto + location.host + base + "/ws");
    sock.onmessage = (ev) => {
      const s = JSON.parse(ev.data);
      document.getElementById("seq").textContent = s.seq;
      document.getElementById("ceiling").textContent = s.memory_ceiling_bytes;
      document.getElementById("trigger").textContent = s.collector_trigger;
      document.getElementById("heap").textContent = s.heap_used_bytes;
    };
  </script>
</body>
</html>
"#;
