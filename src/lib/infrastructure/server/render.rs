//! Server-side HTML for the playground and settings pages

use super::state::SettingsInfo;
use crate::application::page::{
    BUSY_INDICATOR, Banner, BannerLevel, Bubble, CHAT_INPUT_PLACEHOLDER, MODEL_SELECTOR_LABEL,
    ModelSelector, PageView, SETTINGS_LINK_LABEL,
};
use crate::constants::{PAGE_HEADER, PAGE_TITLE};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 1.5rem; }
h2 { border-bottom: 3px solid #e03131; padding-bottom: .4rem; }
.banner { border-radius: 6px; padding: .6rem .8rem; margin: .6rem 0; }
.banner.error { background: #ffe3e3; color: #c92a2a; }
.banner.warning { background: #fff3bf; color: #8f5f00; }
.messages { height: 500px; overflow-y: auto; border: 1px solid #dee2e6; border-radius: 8px; padding: .6rem; }
.bubble { display: flex; gap: .6rem; margin: .5rem 0; }
.bubble .avatar { font-size: 1.4rem; }
.bubble .content { white-space: pre-wrap; word-break: break-word; }
.bubble.assistant { background: #f8f9fa; border-radius: 6px; padding: .3rem; }
.composer { display: flex; gap: .5rem; margin-top: .6rem; }
.composer input[type=text] { flex: 1; padding: .5rem; }
.busy { display: none; color: #495057; margin-top: .4rem; }
.busy.active { display: block; }
.footer { margin-top: 1rem; }
"#;

const SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var form = document.getElementById('chat');
  if (!form) { return; }
  var select = form.elements['model'];
  if (select) {
    select.addEventListener('change', function () {
      form.elements['action'].value = 'select';
      form.submit();
    });
  }
  form.addEventListener('submit', function () {
    document.getElementById('busy').classList.add('active');
    var send = form.querySelector('button[type=submit]');
    if (send) { send.disabled = true; }
    if (form.elements['prompt']) { form.elements['prompt'].readOnly = true; }
  });
  var messages = document.getElementById('messages');
  if (messages) { messages.scrollTop = messages.scrollHeight; }
});
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn render_page(view: &PageView) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>💬 {}</h2>", escape_html(PAGE_HEADER));

    for banner in &view.banners {
        render_banner(&mut body, banner);
    }

    if view.settings_link {
        let _ = writeln!(
            body,
            r#"<p><a class="settings-link" href="/settings">{}</a></p>"#,
            escape_html(SETTINGS_LINK_LABEL)
        );
    }

    if let Some(transcript) = &view.transcript {
        body.push_str(r#"<form id="chat" method="post" action="/">"#);
        body.push('\n');
        body.push_str(r#"<input type="hidden" name="action" value="submit">"#);
        body.push('\n');
        if let Some(selector) = &view.selector {
            render_selector(&mut body, selector);
        }
        render_transcript(&mut body, transcript);
        if view.chat_input {
            let _ = writeln!(
                body,
                r#"<div class="composer"><input type="text" name="prompt" autocomplete="off" autofocus placeholder="{}"><button type="submit">Send</button></div>"#,
                escape_html(CHAT_INPUT_PLACEHOLDER)
            );
        }
        let _ = writeln!(
            body,
            r#"<div id="busy" class="busy{}">⏳ {}</div>"#,
            if view.busy { " active" } else { "" },
            escape_html(BUSY_INDICATOR)
        );
        body.push_str("</form>\n");
        body.push_str(
            r#"<form class="footer" method="post" action="/session/end"><button type="submit">End session</button></form>"#,
        );
        body.push('\n');
    }

    layout(PAGE_TITLE, &body, true)
}

pub fn render_settings(settings: &SettingsInfo) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h2>⚙️ Settings</h2>");
    body.push_str("<dl>\n");
    let _ = writeln!(
        body,
        "<dt>Ollama API</dt><dd><code>{}</code></dd>",
        escape_html(&settings.ollama_url)
    );
    let _ = writeln!(
        body,
        "<dt>OpenAI-compatible API</dt><dd><code>{}</code></dd>",
        escape_html(&settings.api_base)
    );
    let _ = writeln!(
        body,
        "<dt>Credential variable</dt><dd><code>{}</code></dd>",
        escape_html(&settings.credential_env)
    );
    body.push_str("</dl>\n");
    body.push_str(
        "<p>Download a model on the machine running Ollama, then reload the playground:</p>\n",
    );
    body.push_str("<pre><code>ollama pull llama3</code></pre>\n");
    body.push_str(r#"<p><a href="/">Back to the playground</a></p>"#);
    body.push('\n');
    layout("Settings", &body, false)
}

fn layout(title: &str, body: &str, with_script: bool) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = writeln!(html, "<style>{STYLE}</style>");
    if with_script {
        let _ = writeln!(html, "<script>{SCRIPT}</script>");
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_banner(out: &mut String, banner: &Banner) {
    let class = match banner.level {
        BannerLevel::Error => "error",
        BannerLevel::Warning => "warning",
    };
    let _ = writeln!(
        out,
        r#"<div class="banner {class}" role="alert">{} {}</div>"#,
        banner.icon(),
        escape_html(&banner.text)
    );
}

fn render_selector(out: &mut String, selector: &ModelSelector) {
    let _ = writeln!(
        out,
        r#"<label for="model">{}</label>"#,
        escape_html(MODEL_SELECTOR_LABEL)
    );
    out.push_str(r#"<select id="model" name="model">"#);
    for option in &selector.options {
        let name = escape_html(option.as_str());
        let selected = if *option == selector.selected {
            " selected"
        } else {
            ""
        };
        let _ = write!(out, r#"<option value="{name}"{selected}>{name}</option>"#);
    }
    out.push_str("</select>\n");
}

fn render_transcript(out: &mut String, bubbles: &[Bubble]) {
    out.push_str(r#"<div id="messages" class="messages">"#);
    out.push('\n');
    for bubble in bubbles {
        let role = bubble.role.as_str();
        let _ = writeln!(
            out,
            r#"<div class="bubble {role}" data-role="{role}"><span class="avatar">{}</span><div class="content">{}</div></div>"#,
            bubble.avatar(),
            escape_html(&bubble.content)
        );
    }
    out.push_str("</div>\n");
}
