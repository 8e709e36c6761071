use crate::domain::client::Client;
use crate::domain::config::CompanyConfig;
use crate::domain::status::ClientStatus;
use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;

/// Filters for listing client records. Insertion order is preserved; no
/// filter means the full collection.
#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub status: Option<ClientStatus>,
    pub active_only: bool,
    pub limit: Option<usize>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only records with the given status.
    pub fn status(mut self, status: ClientStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Keep only records that are neither completed nor cancelled.
    pub fn active_only(mut self) -> Self {
        self.active_only = true;
        self
    }

    /// Truncate the result to the first `limit` matches.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

pub trait ClientReader {
    fn get_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Read-only copy of the full collection in insertion order.
    fn snapshot(&self) -> RepositoryResult<Vec<Client>>;
    /// Filtered listing; returns the total match count alongside the
    /// (possibly truncated) records.
    fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    /// Appends a new record at the end of the collection.
    fn append(&self, client: Client) -> RepositoryResult<()>;
    /// Replaces the record with the same id, keeping its position.
    fn replace(&self, client: Client) -> RepositoryResult<Client>;
}

pub trait SettingsReader {
    fn company_config(&self) -> RepositoryResult<CompanyConfig>;
}

pub trait SettingsWriter {
    fn save_company_config(&self, config: CompanyConfig) -> RepositoryResult<()>;
}
