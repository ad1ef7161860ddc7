//! List the posts the manifest describes

use anyhow::Result;

use crate::source::ManifestSource;

/// Print one line per manifest entry
pub async fn run(source: &dyn ManifestSource) -> Result<()> {
    let posts = source.fetch_manifest().await?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!("  {} - {} [{}]", post.date, post.title, post.filename);
    }

    Ok(())
}
