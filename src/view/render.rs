//! View rendering
//!
//! Four operations, each an idempotent full replacement of the output
//! region: the post list, a single loaded post, the not-found view, and the
//! error view. `load_post` is the only asynchronous operation; it fetches
//! and converts the whole body before touching the region, so the region is
//! never observed half-written.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::content::MarkdownRenderer;
use crate::helpers::{html_escape, post_link, share_url};
use crate::location::Location;
use crate::manifest::PostSummary;
use crate::source::ContentSource;

use super::{OutputRegion, View};

/// Fixed message for a failed post body fetch or conversion
const CONTENT_ERROR: &str = "Error loading post content.";

/// Token for one in-flight post load.
///
/// Any later render operation invalidates it; a load completing with a
/// stale ticket leaves the region untouched, so the latest navigation wins.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket(u64);

/// Renders views into an output region
pub struct ViewRenderer {
    markdown: MarkdownRenderer,
    generation: AtomicU64,
}

impl ViewRenderer {
    pub fn new(markdown: MarkdownRenderer) -> Self {
        Self {
            markdown,
            generation: AtomicU64::new(0),
        }
    }

    /// Start a post load; the ticket stays valid until another render
    /// operation supersedes it
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.bump())
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Write a card grid with one card per post.
    ///
    /// An empty collection renders an empty grid.
    pub fn render_post_list(&self, posts: &[PostSummary], region: &mut OutputRegion) {
        self.bump();

        let mut html = String::from(r#"<div class="row">"#);
        for post in posts {
            html.push_str(&format!(
                r#"
<div class="col s12 m6">
    <div class="card blue-grey darken-1">
        <div class="card-content white-text">
            <span class="card-title">{title}</span>
            <p>{summary}</p>
            <br>
            <small>{date}</small>
        </div>
        <div class="card-action">
            <a href="{link}">Read More</a>
        </div>
    </div>
</div>
"#,
                title = html_escape(&post.title),
                summary = html_escape(&post.summary),
                date = html_escape(&post.date),
                link = post_link(&post.id),
            ));
        }
        html.push_str("</div>");

        region.replace(View::List, html);
    }

    /// Fetch a post body, convert it, and write the post view.
    ///
    /// The region is written exactly once, after the whole body is ready. A
    /// fetch or conversion failure writes the fixed error view instead; the
    /// cause goes to the log, not the region.
    pub async fn load_post(
        &self,
        ticket: LoadTicket,
        source: &dyn ContentSource,
        location: &Location,
        reference: &str,
        region: &mut OutputRegion,
    ) {
        let (view, html) = match source.fetch_content(reference).await {
            Ok(raw) => match self.markdown.render(&raw) {
                Ok(body) => (View::Post, post_html(location, &body)),
                Err(err) => {
                    tracing::warn!("Failed to convert post body {reference}: {err}");
                    (View::Error, error_html(CONTENT_ERROR))
                }
            },
            Err(err) => {
                tracing::warn!("Failed to fetch post body {reference}: {err}");
                (View::Error, error_html(CONTENT_ERROR))
            }
        };

        if !self.is_current(ticket) {
            tracing::debug!("Discarding stale post load for {reference}");
            return;
        }
        region.replace(view, html);
    }

    /// Write the fixed not-found view
    pub fn show_not_found(&self, region: &mut OutputRegion) {
        self.bump();
        region.replace(View::NotFound, "<h3>Post not found</h3>".to_string());
    }

    /// Write `message` verbatim in the fixed error layout
    pub fn show_error(&self, message: &str, region: &mut OutputRegion) {
        self.bump();
        region.replace(View::Error, error_html(message));
    }
}

fn post_html(location: &Location, body: &str) -> String {
    format!(
        r#"<a href="{back}" class="btn waves-effect waves-light blue">
    <i class="material-icons left">arrow_back</i> Back
</a>
<a href="{share}" aria-label="Share on Facebook" target="_blank" rel="noopener">
    <i class="material-icons left">share</i> Share
</a>
<div class="section">
{body}
</div>
"#,
        back = location.without_query(),
        share = share_url(location.href()),
        body = body,
    )
}

fn error_html(message: &str) -> String {
    format!("<h3>{}</h3>", message)
}
