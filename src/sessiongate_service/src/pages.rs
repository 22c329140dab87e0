//! Minimal host pages for running the server without a front-end bundle.

use axum::{Router, response::Html, routing::get};
use sessiongate_axum::CurrentUser;

pub fn default_pages() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/dashboard", get(dashboard))
}

async fn home() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<title>Session gate</title>
<p><a href="/login">Log in</a> or go to the <a href="/dashboard">dashboard</a>.</p>"#,
    )
}

async fn login() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<title>Log in</title>
<form id="login">
  <input name="email" type="email" placeholder="Email" required>
  <input name="password" type="password" placeholder="Password" required>
  <button>Log in</button>
  <p id="message"></p>
</form>
<script>
document.getElementById("login").addEventListener("submit", async (event) => {
  event.preventDefault();
  const form = new FormData(event.target);
  const response = await fetch("/api/login", {
    method: "POST",
    headers: { "content-type": "application/json" },
    body: JSON.stringify({ email: form.get("email"), password: form.get("password") }),
  });
  if (response.ok) {
    window.location.href = "/dashboard";
  } else {
    const body = await response.json().catch(() => ({}));
    document.getElementById("message").textContent = body.error || "Login failed";
  }
});
</script>"#,
    )
}

async fn dashboard(CurrentUser(claims): CurrentUser) -> Html<String> {
    let who = claims.email.as_deref().unwrap_or(claims.user_id());
    Html(format!(
        "<!doctype html>\n<title>Dashboard</title>\n<p>Signed in as {}</p>\n\
         <form method=\"post\" action=\"/api/logout\"><button>Log out</button></form>",
        escape_html(who)
    ))
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
