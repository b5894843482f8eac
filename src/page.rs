//! Single-page UI rendering.
//!
//! One rendering path covers every page state; the visual variants
//! (heading, accent color, confidence display) are `[ui]` config options.

use crate::classify::Verdict;
use crate::config::UiConfig;

/// What the page shows under the form.
#[derive(Debug)]
pub enum PageState {
    /// First visit: just the form.
    Blank,
    /// Submitted with an empty message: warning, no prediction.
    Warning,
    /// Submitted with a message: exactly one verdict block.
    Result { verdict: Verdict, message: String },
}

/// Escape text for interpolation into HTML content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn stylesheet(accent: &str) -> String {
    format!(
        r#"    body {{
      margin: 0;
      font-family: 'Roboto', sans-serif;
      min-height: 100vh;
      background: linear-gradient(to right top, #000000, #0a0a0a, #121212, #181818, #1d1d1e, #262632, #2e2f47, #37395d, #fc4b11);
    }}
    .card {{
      max-width: 500px;
      width: 90%;
      margin: 50px auto;
      padding: 30px;
      background: #fff;
      border-radius: 15px;
      box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
      text-align: center;
    }}
    h1 {{
      color: {accent};
      font-size: 2em;
      margin-bottom: 5px;
    }}
    .lede {{
      font-size: 1.1em;
      margin-bottom: 20px;
    }}
    textarea {{
      width: 100%;
      box-sizing: border-box;
      height: 150px;
      padding: 10px;
      border: 1px solid #ccc;
      border-radius: 8px;
      font-family: inherit;
      font-size: 1em;
    }}
    button {{
      background-color: {accent};
      color: white;
      padding: 15px 30px;
      border-radius: 8px;
      font-size: 1.1em;
      border: none;
      cursor: pointer;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
      width: 100%;
      max-width: 200px;
      margin-top: 20px;
    }}
    button:hover {{
      background-color: #2575fc;
    }}
    .result-box {{
      margin-top: 20px;
      padding: 20px;
      border-radius: 8px;
      font-size: 1.5em;
      font-weight: bold;
      text-align: center;
    }}
    .result-spam {{
      background-color: #ffdddd;
      color: #d8000c;
      border: 1px solid #d8000c;
    }}
    .result-ham {{
      background-color: #e0ffe0;
      color: #008000;
      border: 1px solid #008000;
    }}
    .result-warning {{
      background-color: #fff4d5;
      color: #9f6000;
      border: 1px solid #9f6000;
    }}
    .confidence {{
      display: block;
      font-size: 0.6em;
      font-weight: normal;
      margin-top: 8px;
    }}"#
    )
}

fn verdict_block(ui: &UiConfig, verdict: &Verdict) -> String {
    let icon = if verdict.style_tag() == "spam" {
        "🚨"
    } else {
        "✅"
    };
    let confidence = match verdict.confidence_percent() {
        Some(pct) if ui.show_confidence => {
            format!(r#"<span class="confidence">Confidence: {pct}</span>"#)
        }
        _ => String::new(),
    };
    format!(
        r#"<div class="result-box result-{tag}">{icon} The message is: {text}{confidence}</div>"#,
        tag = verdict.style_tag(),
        text = verdict.display_text(),
    )
}

/// Render the full page for one state.
pub fn render(ui: &UiConfig, state: &PageState) -> String {
    let (block, message) = match state {
        PageState::Blank => (String::new(), ""),
        PageState::Warning => (
            r#"<div class="result-box result-warning">⚠️ Please enter a message to check.</div>"#
                .to_string(),
            "",
        ),
        PageState::Result { verdict, message } => (verdict_block(ui, verdict), message.as_str()),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
{css}
  </style>
</head>
<body>
  <div class="card">
    <h1>🛡️ {title}</h1>
    <p class="lede">Enter your message below to check if it is spam or not.</p>
    <form method="post" action="/">
      <textarea name="message" placeholder="Enter your message here...">{message}</textarea>
      <button type="submit">Check</button>
    </form>
    {block}
  </div>
</body>
</html>
"#,
        title = escape(&ui.title),
        css = stylesheet(&ui.accent),
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify_message, Verdict};

    fn ui() -> UiConfig {
        UiConfig::default()
    }

    #[test]
    fn blank_page_has_form_and_no_result() {
        let html = render(&ui(), &PageState::Blank);
        assert!(html.contains("<form method=\"post\""));
        assert!(html.contains("Spam Detection"));
        assert!(!html.contains("class=\"result-box"));
    }

    #[test]
    fn warning_page_has_no_verdict() {
        let html = render(&ui(), &PageState::Warning);
        assert!(html.contains("Please enter a message to check."));
        assert!(html.contains("class=\"result-box result-warning\""));
        assert!(!html.contains("The message is:"));
    }

    #[test]
    fn spam_result_block() {
        let html = render(
            &ui(),
            &PageState::Result {
                verdict: Verdict::Classified {
                    label: crate::classify::Label::Spam,
                    confidence: 0.9731,
                },
                message: "free money".into(),
            },
        );
        assert!(html.contains("class=\"result-box result-spam\""));
        assert!(html.contains("🚨 The message is: Likely Scam"));
        assert!(html.contains("Confidence: 97.31%"));
        assert!(html.contains(">free money</textarea>"));
        // exactly one verdict block
        assert_eq!(html.matches("class=\"result-box").count(), 1);
    }

    #[test]
    fn ham_result_block() {
        let html = render(
            &ui(),
            &PageState::Result {
                verdict: Verdict::Classified {
                    label: crate::classify::Label::Ham,
                    confidence: 0.88,
                },
                message: "see you at lunch".into(),
            },
        );
        assert!(html.contains("class=\"result-box result-ham\""));
        assert!(html.contains("✅ The message is: Likely Not Spam"));
    }

    #[test]
    fn confidence_hidden_when_disabled() {
        let mut ui = ui();
        ui.show_confidence = false;
        let html = render(
            &ui,
            &PageState::Result {
                verdict: Verdict::Classified {
                    label: crate::classify::Label::Spam,
                    confidence: 0.9,
                },
                message: "win now".into(),
            },
        );
        assert!(!html.contains("Confidence:"));
    }

    #[test]
    fn unavailable_verdict_styles_as_spam() {
        let html = render(
            &ui(),
            &PageState::Result {
                verdict: classify_message(None, "anything"),
                message: "anything".into(),
            },
        );
        assert!(html.contains("class=\"result-box result-spam\""));
        assert!(html.contains("Server Error: Model Initialization Failed"));
        assert!(!html.contains("Confidence:"));
    }

    #[test]
    fn message_is_escaped() {
        let html = render(
            &ui(),
            &PageState::Result {
                verdict: Verdict::Classified {
                    label: crate::classify::Label::Ham,
                    confidence: 0.7,
                },
                message: "<script>alert(1)</script> & more".into(),
            },
        );
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn custom_title_and_accent() {
        let ui = UiConfig {
            title: "Message Screening".into(),
            show_confidence: true,
            accent: "#2575fc".into(),
        };
        let html = render(&ui, &PageState::Blank);
        assert!(html.contains("<title>Message Screening</title>"));
        assert!(html.contains("background-color: #2575fc;"));
    }
}
