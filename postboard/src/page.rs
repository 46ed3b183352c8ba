//! Page wiring: loaded posts, their projection, the row window and the form.

use rowwindow::{RowWindow, VirtualItem, WindowOptions};

use crate::form::PostForm;
use crate::posts::{FetchError, Post, PostTransport, PostsClient};
use crate::table::{HeaderCell, Projection, Row, post_columns};

/// Constant row height of the demo table, in pixels.
pub const ROW_HEIGHT: u32 = 50;

/// Rows materialized beyond each side of the visible window.
pub const OVERSCAN: usize = 5;

/// The demo page: a virtualized posts table plus an independent draft form.
///
/// The loaded posts are read-only after [`load`]; the form owns the only
/// mutable state and never touches the table side.
///
/// [`load`]: PostsPage::load
#[derive(Debug)]
pub struct PostsPage {
    posts: Vec<Post>,
    projection: Projection<Post>,
    window: RowWindow,
    form: PostForm,
}

impl PostsPage {
    /// Loads the post batch once and assembles the page.
    ///
    /// This is the page's single suspending operation: callers await it
    /// before rendering, and a failed load surfaces
    /// [`FetchError::FetchFailed`]. One-shot; no cancellation, no retry.
    pub async fn load<T: PostTransport>(client: &PostsClient<T>) -> Result<Self, FetchError> {
        let posts = client.load().await?;
        Ok(Self::from_posts(posts))
    }

    /// Assembles the page from an already-loaded batch.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let window = RowWindow::new(
            WindowOptions::new(posts.len(), |_| ROW_HEIGHT).with_overscan(OVERSCAN),
        );
        Self {
            posts,
            projection: Projection::new(post_columns()),
            window,
            form: PostForm::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn row_count(&self) -> usize {
        self.posts.len()
    }

    pub fn window(&self) -> &RowWindow {
        &self.window
    }

    /// Scroll track size for the host's scrollbar.
    pub fn total_size(&self) -> u64 {
        self.window.total_size()
    }

    /// The host reports the measured height of the scroll container here.
    pub fn on_viewport(&mut self, height: u32) {
        self.window.set_viewport_size(height);
    }

    /// The host reports scroll offsets here; past-the-end offsets clamp.
    pub fn on_scroll(&mut self, offset: u64) {
        self.window.set_scroll_offset_clamped(offset);
    }

    pub fn headers(&self) -> Vec<HeaderCell> {
        self.projection.headers()
    }

    /// Emits each materialized row paired with its projected cells.
    pub fn for_each_visible_row(&self, mut f: impl FnMut(VirtualItem, Row)) {
        self.window.for_each_virtual_item(|item| {
            f(item, self.projection.project_row(&self.posts[item.index]));
        });
    }

    pub fn visible_rows(&self) -> Vec<(VirtualItem, Row)> {
        let mut rows = Vec::new();
        self.for_each_visible_row(|item, row| rows.push((item, row)));
        rows
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PostForm {
        &mut self.form
    }
}
