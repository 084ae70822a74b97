//! Block Kit rendering of the report.
//!
//! Layout:
//!
//! ```text
//! header: yesterday          ticket blocks...
//! divider, header: today     ticket blocks...
//! divider, header: blocked   ticket blocks...   (only when non-empty)
//! divider, lunch section                        (only when set)
//! ```

use serde_json::{Value, json};
use standup_core::entities::{LunchSuggestion, Report, Ticket};

/// Longest last-comment excerpt shown, in characters.
const COMMENT_PREVIEW_CHARS: usize = 100;

const PREVIOUS_HEADER: &str = ":dart: *What I did yesterday?:*";
const NEXT_HEADER: &str = "\n\n:male-technologist: *What I am doing today?*";
const BLOCKED_HEADER: &str = "\n\n:octagonal_sign: *Tickets blocked?*";
const NO_RECIPE: &str = "No recipe available";

/// Render the whole report as a list of Block Kit blocks.
#[must_use]
pub fn render_report(report: &Report) -> Vec<Value> {
    let mut blocks = vec![text_section(PREVIOUS_HEADER)];
    blocks.extend(report.previous().iter().flat_map(render_ticket));

    blocks.push(divider());
    blocks.push(text_section(NEXT_HEADER));
    blocks.extend(report.next().iter().flat_map(render_ticket));

    if !report.blocked().is_empty() {
        blocks.push(divider());
        blocks.push(text_section(BLOCKED_HEADER));
        blocks.extend(report.blocked().iter().flat_map(render_ticket));
    }

    if let Some(lunch) = report.lunch() {
        blocks.push(divider());
        blocks.push(text_section(&lunch_text(lunch)));
    }

    blocks
}

/// Three blocks per ticket: key/status fields, title, last comment.
#[must_use]
pub fn render_ticket(ticket: &Ticket) -> [Value; 3] {
    [
        json!({
            "type": "section",
            "fields": [
                mrkdwn("*Ticket ID*"),
                mrkdwn("*Status*"),
                mrkdwn(&format!("<{}|{}>", ticket.url, ticket.key)),
                mrkdwn(&ticket.status.to_string()),
            ]
        }),
        text_section(&format!("*Title*: {}", ticket.title)),
        text_section(&format!(
            "*Last comment*: {}",
            comment_preview(&ticket.last_comment)
        )),
    ]
}

/// Cut `text` to its first 100 characters, marking the cut with `...`.
fn comment_preview(text: &str) -> String {
    match text.char_indices().nth(COMMENT_PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_string(),
    }
}

fn lunch_text(lunch: &LunchSuggestion) -> String {
    let recipe = lunch
        .recipe_url
        .as_deref()
        .map_or_else(|| NO_RECIPE.to_string(), |url| format!("<{url}|Recipe>"));
    format!(
        "\n\n:sandwich: *Lunch:*\nI would like for lunch :thinking_face:...{}.\n {recipe}",
        lunch.name
    )
}

fn mrkdwn(text: &str) -> Value {
    json!({ "type": "mrkdwn", "text": text })
}

fn text_section(text: &str) -> Value {
    json!({ "type": "section", "text": mrkdwn(text) })
}

fn divider() -> Value {
    json!({ "type": "divider" })
}
