//! In-memory collection store backing the whole application.
//!
//! Records live only for the process lifetime. The store is the single point
//! of mutation; readers always receive owned snapshots.

use std::sync::RwLock;

use crate::domain::client::Client;
use crate::domain::config::CompanyConfig;
use crate::domain::types::ClientId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ClientListQuery, ClientReader, ClientWriter, SettingsReader, SettingsWriter,
};

/// Owns the ordered sequence of client records plus the company settings.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    clients: RwLock<Vec<Client>>,
    config: RwLock<CompanyConfig>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_clients(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, Vec<Client>>> {
        self.clients
            .read()
            .map_err(|_| RepositoryError::Unexpected("client store lock poisoned".to_string()))
    }

    fn write_clients(&self) -> RepositoryResult<std::sync::RwLockWriteGuard<'_, Vec<Client>>> {
        self.clients
            .write()
            .map_err(|_| RepositoryError::Unexpected("client store lock poisoned".to_string()))
    }
}

impl ClientReader for InMemoryRepository {
    fn get_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        let clients = self.read_clients()?;
        Ok(clients.iter().find(|c| c.id == id).cloned())
    }

    fn snapshot(&self) -> RepositoryResult<Vec<Client>> {
        Ok(self.read_clients()?.clone())
    }

    fn list(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        let clients = self.read_clients()?;
        let matches: Vec<&Client> = clients
            .iter()
            .filter(|c| query.status.is_none_or(|status| c.status == status))
            .filter(|c| !query.active_only || c.is_active())
            .collect();
        let total = matches.len();
        let items = matches
            .into_iter()
            .take(query.limit.unwrap_or(total))
            .cloned()
            .collect();
        Ok((total, items))
    }
}

impl ClientWriter for InMemoryRepository {
    fn append(&self, client: Client) -> RepositoryResult<()> {
        self.write_clients()?.push(client);
        Ok(())
    }

    fn replace(&self, client: Client) -> RepositoryResult<Client> {
        let mut clients = self.write_clients()?;
        let slot = clients
            .iter_mut()
            .find(|c| c.id == client.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = client.clone();
        Ok(client)
    }
}

impl SettingsReader for InMemoryRepository {
    fn company_config(&self) -> RepositoryResult<CompanyConfig> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| RepositoryError::Unexpected("config lock poisoned".to_string()))
    }
}

impl SettingsWriter for InMemoryRepository {
    fn save_company_config(&self, config: CompanyConfig) -> RepositoryResult<()> {
        let mut slot = self
            .config
            .write()
            .map_err(|_| RepositoryError::Unexpected("config lock poisoned".to_string()))?;
        *slot = config;
        Ok(())
    }
}
