//! Shared, read-only application state.

use std::sync::Arc;

use crate::data::LaunchTable;
use crate::layout::{dashboard_layout, render_page, Component};
use crate::models::DashboardParams;

/// Everything the request handlers need, computed once at startup.
///
/// Cloning is cheap; all clones share the same table.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<LaunchTable>,
    params: Arc<DashboardParams>,
    layout: Arc<Component>,
    page: Arc<str>,
}

impl Dashboard {
    pub fn new(table: LaunchTable) -> Self {
        let params = DashboardParams::derive(&table);
        let layout = dashboard_layout(&params);
        let page = render_page(&layout);
        tracing::debug!(
            "Dashboard ready: {} records, {} site options",
            table.len(),
            params.site_options.len()
        );

        Self {
            table: Arc::new(table),
            params: Arc::new(params),
            layout: Arc::new(layout),
            page: page.into(),
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn params(&self) -> &DashboardParams {
        &self.params
    }

    pub fn layout(&self) -> &Component {
        &self.layout
    }

    /// The rendered HTML page.
    pub fn page(&self) -> &str {
        &self.page
    }
}
