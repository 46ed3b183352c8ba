//! A small virtualized posts page.
//!
//! One network fetch capped at ten posts, a row-windowed table over those
//! posts, and an in-memory draft form with a detached submit. The windowing
//! math lives in the `rowwindow` crate; this crate holds the page's
//! collaborators:
//!
//! - `posts`: the data source adapter (one GET, one error kind)
//! - `table`: the tabular projection (columns → header/cell descriptors)
//! - `form`: the draft form state (field setters, validation, submit)
//! - `page`: the wiring that pairs virtual items with projected rows
#![forbid(unsafe_code)]

mod form;
mod page;
mod posts;
mod table;


pub use form::{
    FieldErrors, FieldValidator, PostDraft, PostForm, SubmitAction, SubmitFuture, required,
    submit_action,
};
pub use page::{OVERSCAN, PostsPage, ROW_HEIGHT};
pub use posts::{
    FetchError, HttpTransport, POSTS_CAP, POSTS_ENDPOINT, Post, PostTransport, PostsClient,
};
pub use table::{Cell, CellRender, Column, HeaderCell, Projection, Row, post_columns};
