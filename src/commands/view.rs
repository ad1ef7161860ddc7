//! Resolve a page address to a view and render it

use crate::location::Location;
use crate::manifest::find_post_by_id;
use crate::source::{ContentSource, ManifestSource};
use crate::view::{OutputRegion, ViewRenderer};

/// Fixed message for a failed manifest fetch
const MANIFEST_ERROR: &str = "Error loading posts.";

/// Run the full resolution pipeline for one page load.
///
/// Fetches the manifest, reads the requested id from the address, and
/// dispatches to the matching render operation: no id is the list view, an
/// unknown id is the not-found view, and a manifest failure is the error
/// view. Absence of a post is a normal outcome, not an error.
pub async fn run(
    manifest: &dyn ManifestSource,
    content: &dyn ContentSource,
    renderer: &ViewRenderer,
    location: &Location,
    region: &mut OutputRegion,
) {
    let posts = match manifest.fetch_manifest().await {
        Ok(posts) => posts,
        Err(err) => {
            tracing::error!("Error loading posts: {err}");
            renderer.show_error(MANIFEST_ERROR, region);
            return;
        }
    };

    match location.post_id() {
        Some(id) => match find_post_by_id(&posts, &id) {
            Some(post) => {
                let ticket = renderer.begin_load();
                renderer
                    .load_post(ticket, content, location, &post.filename, region)
                    .await;
            }
            None => renderer.show_not_found(region),
        },
        None => renderer.render_post_list(&posts, region),
    }
}
