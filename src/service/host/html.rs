//! HTML rendering of the widget.
//!
//! Produces a self-contained fragment (stylesheet plus markup) reflecting the
//! current transcript and panel state. Buttons carry `data-*` attributes; the
//! embedding page attaches its own listeners scoped to `#support-widget`.

use std::fmt::Write;

use crate::base::{
    config::Config,
    markup,
    types::{Message, Role, Res, Topic},
};

/// Stylesheet injected alongside the markup.
pub const STYLESHEET: &str = include_str!("widget.css");

const BUBBLE_ICON: &str = r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"/></svg>"#;

/// Render one transcript entry as a message bubble.
///
/// User text is escaped and shown literally; bot text has its markup rendered.
pub fn render_message(message: &Message) -> String {
    match message.role {
        Role::User => format!(r#"<div class="user-message">{}</div>"#, markup::escape_html(&message.text)),
        Role::Bot => format!(r#"<div class="bot-message">{}</div>"#, markup::to_html(&message.text)),
    }
}

/// Render the whole widget.
pub fn render_widget(config: &Config, transcript: &[Message], open: bool) -> Res<String> {
    let mut html = String::new();

    writeln!(html, "<style>\n{STYLESHEET}</style>")?;
    writeln!(html, r#"<div id="support-widget">"#)?;
    writeln!(html, r#"  <div id="support-widget-bubble" data-action="toggle">{BUBBLE_ICON}</div>"#)?;
    writeln!(html, r#"  <div id="support-widget-window"{}>"#, if open { r#" class="open""# } else { "" })?;
    writeln!(
        html,
        r#"    <div id="support-widget-header"><span>{}</span><button data-action="toggle">&times;</button></div>"#,
        markup::escape_html(&config.title)
    )?;
    writeln!(html, r#"    <div id="support-widget-messages">"#)?;
    writeln!(html, r#"      <div class="bot-message">{}</div>"#, markup::escape_html(&config.greeting))?;
    writeln!(html, r#"      <div class="quick-replies">"#)?;

    for topic in Topic::QUICK_REPLIES {
        writeln!(html, r#"        <button data-topic="{}">{}</button>"#, topic.key(), markup::escape_html(topic.label()))?;
    }

    writeln!(html, "      </div>")?;

    for message in transcript {
        writeln!(html, "      {}", render_message(message))?;
    }

    writeln!(html, "    </div>")?;
    writeln!(html, r#"    <div id="support-widget-input">"#)?;
    writeln!(html, r#"      <input type="text" placeholder="Type your question..."><button data-action="send">Send</button>"#)?;
    writeln!(html, "    </div>")?;
    writeln!(html, "  </div>")?;
    writeln!(html, "</div>")?;

    Ok(html)
}

// Tests.
