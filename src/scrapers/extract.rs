//! Post extraction from homepage HTML.
//!
//! Posts live in the six-post headline row of the homepage:
//!
//! ```html
//! <div class="post-row with-6-posts">
//!   <div class="post">
//!     <a class="post__link" href="https://g1.globo.com/...">
//!       <h2 class="post__title">Headline</h2>
//!     </a>
//!   </div>
//!   ...
//! </div>
//! ```
//!
//! Every `.post` inside that row is mapped to a [`Post`]. Elements missing a
//! link or a title are skipped, so markup changes degrade to an empty list
//! rather than an error.

use crate::models::Post;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

static POST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".post-row.with-6-posts .post").unwrap());
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".post__link").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse(".post__title").unwrap());

/// The two reads a post needs from a matched element.
///
/// Implemented for [`ElementRef`]; tests can supply their own nodes.
pub trait PostNode {
    /// `href` of the first `.post__link` descendant, if any.
    fn link_href(&self) -> Option<String>;

    /// Text content of the first `.post__title` descendant, if any.
    fn title_text(&self) -> Option<String>;
}

impl PostNode for ElementRef<'_> {
    fn link_href(&self) -> Option<String> {
        self.select(&LINK_SELECTOR)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::to_string)
    }

    fn title_text(&self) -> Option<String> {
        self.select(&TITLE_SELECTOR)
            .next()
            .map(|title| title.text().collect::<String>())
    }
}

/// Map one node to a [`Post`].
///
/// The `href` is kept verbatim and the title is trimmed. `None` unless both
/// are non-blank.
pub fn post_from_node<N: PostNode>(node: &N) -> Option<Post> {
    let url = node.link_href().filter(|href| !href.trim().is_empty())?;
    let title = node
        .title_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())?;
    Some(Post { url, title })
}

/// Extract every complete post from `html`, in document order.
///
/// Never fails: malformed or unrelated markup just yields fewer posts.
#[instrument(level = "info", skip_all, fields(bytes = html.len()))]
pub fn extract(html: &str) -> Vec<Post> {
    let document = Html::parse_document(html);

    let mut matched = 0usize;
    let mut posts = Vec::new();
    for element in document.select(&POST_SELECTOR) {
        matched += 1;
        match post_from_node(&element) {
            Some(post) => posts.push(post),
            None => debug!(index = matched - 1, "Skipping post without link or title"),
        }
    }

    if matched == 0 {
        debug!("No elements matched the post selector");
    }
    info!(matched, count = posts.len(), "Extracted posts");
    posts
}
