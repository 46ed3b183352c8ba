//! Tabular projection: a fixed, ordered column list applied to loaded
//! records, producing header and cell descriptors for the rendering layer.
//!
//! No sorting, filtering or grouping; the column set is fixed after
//! construction.

use std::sync::Arc;

use crate::posts::Post;

/// How a cell is displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellRender {
    /// Identity display.
    Inline,
    /// Container-level text clipping with an ellipsis. A display style only;
    /// cell values are never string-truncated.
    Clipped,
}

/// One column spec: accessor name, display header, cell-rendering rule.
pub struct Column<R> {
    pub name: &'static str,
    pub header: &'static str,
    accessor: Arc<dyn Fn(&R) -> String + Send + Sync>,
    pub render: CellRender,
}

impl<R> Column<R> {
    pub fn new(
        name: &'static str,
        header: &'static str,
        accessor: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            header,
            accessor: Arc::new(accessor),
            render: CellRender::Inline,
        }
    }

    pub fn clipped(mut self) -> Self {
        self.render = CellRender::Clipped;
        self
    }

    pub fn value_for(&self, record: &R) -> String {
        (self.accessor)(record)
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            header: self.header,
            accessor: Arc::clone(&self.accessor),
            render: self.render,
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("header", &self.header)
            .field("render", &self.render)
            .finish_non_exhaustive()
    }
}

/// Header descriptor for one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub render: CellRender,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Maps records into named, ordered columns.
///
/// Derived, not persisted: rows are recomputed from the records on each call.
pub struct Projection<R> {
    columns: Vec<Column<R>>,
}

impl<R> Projection<R> {
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// One header descriptor per column, in declaration order. Produced even
    /// when there are no records.
    pub fn headers(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|c| HeaderCell {
                name: c.name,
                label: c.header,
            })
            .collect()
    }

    /// One cell per column: the accessor applied to the record, tagged with
    /// the column's rendering rule.
    pub fn project_row(&self, record: &R) -> Row {
        Row {
            cells: self
                .columns
                .iter()
                .map(|c| Cell {
                    value: c.value_for(record),
                    render: c.render,
                })
                .collect(),
        }
    }

    pub fn project(&self, records: &[R]) -> Vec<Row> {
        records.iter().map(|r| self.project_row(r)).collect()
    }
}

impl<R> Clone for Projection<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Projection<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projection")
            .field("columns", &self.columns)
            .finish()
    }
}

/// The page's fixed column set: ID and Title inline, Content clipped.
pub fn post_columns() -> Vec<Column<Post>> {
    vec![
        Column::new("id", "ID", |p: &Post| p.id.to_string()),
        Column::new("title", "Title", |p: &Post| p.title.clone()),
        Column::new("body", "Content", |p: &Post| p.body.clone()).clipped(),
    ]
}
