//! Lifecycle operations over client records.
//!
//! All mutations validate and re-derive the payment fields before touching
//! the store, so every record visible outside this module satisfies
//! `remaining_value == total_value - paid_value`.

use rust_decimal::Decimal;

use crate::domain::client::{Client, NewClient};
use crate::domain::status::ClientStatus;
use crate::domain::types::ClientId;
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

/// Creates a client record from validated input and appends it to the store.
///
/// Over-payment is rejected rather than clamped: silently discarding part of
/// an amount the operator typed would hide a data-entry mistake.
pub fn create_client<R>(repo: &R, new_client: NewClient) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    if new_client.total_value < Decimal::ZERO {
        return Err(ServiceError::Validation(
            "total value cannot be negative".to_string(),
        ));
    }
    if new_client.paid_value < Decimal::ZERO {
        return Err(ServiceError::Validation(
            "paid value cannot be negative".to_string(),
        ));
    }
    if new_client.paid_value > new_client.total_value {
        return Err(ServiceError::Validation(
            "paid value cannot exceed total value".to_string(),
        ));
    }

    let client = Client::from_new(ClientId::new(), new_client);
    repo.append(client.clone()).map_err(|err| {
        log::error!("Failed to append client: {err}");
        ServiceError::from(err)
    })?;
    Ok(client)
}

/// Replaces the status of an existing record, enforcing the transition table.
pub fn update_status<R>(repo: &R, id: ClientId, status: ClientStatus) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let mut client = repo
        .get_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if !client.status.can_transition_to(status) {
        return Err(ServiceError::InvalidTransition {
            from: client.status,
            to: status,
        });
    }

    client.status = status;
    repo.replace(client).map_err(ServiceError::from)
}

/// Marks the record completed and fully settled in one step.
///
/// Idempotent: an already-completed record is settled in place, so a record
/// that went through `finalize_client` always carries full payment even when
/// its status had been set to completed beforehand. Finalizing a cancelled
/// record is an illegal transition.
pub fn finalize_client<R>(repo: &R, id: ClientId) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let mut client = repo
        .get_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if client.status != ClientStatus::Completed
        && !client.status.can_transition_to(ClientStatus::Completed)
    {
        return Err(ServiceError::InvalidTransition {
            from: client.status,
            to: ClientStatus::Completed,
        });
    }

    client.settle();
    repo.replace(client).map_err(ServiceError::from)
}

/// Fetches a record by its identifier.
pub fn get_client<R>(repo: &R, id: ClientId) -> ServiceResult<Option<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.get_by_id(id).map_err(ServiceError::from)
}

/// Filtered listing for the record views.
pub fn list_clients<R>(repo: &R, query: ClientListQuery) -> ServiceResult<(usize, Vec<Client>)>
where
    R: ClientReader + ?Sized,
{
    repo.list(query).map_err(ServiceError::from)
}
