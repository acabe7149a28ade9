use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use crate::books::domain::filter::BookFilter;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BookOrder, LibraryResult};

pub struct ExportBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
    cancel: CancellationToken,
}

impl ExportBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>, cancel: CancellationToken) -> Self {
        Self {
            catalog_service,
            cancel,
        }
    }
}

/// Query-string shaped export request. Absent fields fall back to the default filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBooksCommandRequest {
    pub query: Option<String>,
    pub rubric: Option<String>,
    pub is_busy: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub order: Option<String>,
}

impl ExportBooksCommandRequest {
    pub fn build_filter(&self) -> LibraryResult<BookFilter> {
        let order = match &self.order {
            Some(order) => BookOrder::from_str(order.as_str())?,
            None => BookOrder::default(),
        };
        let filter = BookFilter::default()
            .with_query(self.query.as_deref().unwrap_or_default())
            .with_rubric(self.rubric.as_deref().unwrap_or_default())
            .with_busy(self.is_busy.unwrap_or(false))
            .with_limit(self.limit)
            .with_offset(self.offset.unwrap_or(0))
            .with_order(order);
        filter.validate()?;
        Ok(filter)
    }
}

#[derive(Debug, Serialize)]
pub struct ExportBooksCommandResponse {
    pub xml: String,
}

impl ExportBooksCommandResponse {
    pub fn new(xml: String) -> Self {
        Self {
            xml,
        }
    }
}

#[async_trait]
impl Command<ExportBooksCommandRequest, ExportBooksCommandResponse> for ExportBooksCommand {
    async fn execute(&self, req: ExportBooksCommandRequest) -> Result<ExportBooksCommandResponse, CommandError> {
        let filter = req.build_filter().map_err(CommandError::from)?;
        self.catalog_service.export_books_to_xml(&filter, &self.cancel)
            .await.map_err(CommandError::from).map(ExportBooksCommandResponse::new)
    }
}
