// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Wait conditions for eCloud resources
//!
//! Each `*_check` function decides one poll tick from a fetch result;
//! the matching `*_wait` function drives it through [`wait_for`].

use std::future::Future;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ecloud_api::v1::VirtualMachineStatus;
use ecloud_api::v2::{SyncStatus, TaskStatus};
use ecloud_client::{Client, Error, TemplateOwner};
use indicatif::{ProgressBar, ProgressStyle};

use crate::wait::{WaitConfig, WaitError, wait_for};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(200));
    pb
}

/// Run [`wait_for`] with a stderr spinner
///
/// indicatif hides the spinner when stderr is not a terminal.
async fn poll<F, Fut>(config: WaitConfig, message: &str, predicate: F) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let pb = spinner(message);
    let result = wait_for(config, predicate).await;
    pb.finish_and_clear();
    result
}

pub fn sync_status_check(result: Result<SyncStatus, Error>, expected: SyncStatus) -> Result<bool> {
    let status =
        result.map_err(|e| anyhow!("failed to retrieve status for resource: {}", e))?;
    if status == SyncStatus::Failed {
        return Err(anyhow!("resource in [failed] state"));
    }
    Ok(status == expected)
}

pub fn task_status_check(result: Result<TaskStatus, Error>, expected: TaskStatus) -> Result<bool> {
    let status = result.map_err(|e| anyhow!("failed to retrieve task status: {}", e))?;
    if status == TaskStatus::Failed {
        return Err(anyhow!("task in [failed] state"));
    }
    Ok(status == expected)
}

pub fn vm_status_check(
    result: Result<VirtualMachineStatus, Error>,
    expected: VirtualMachineStatus,
) -> Result<bool> {
    let status = result.map_err(|e| anyhow!("failed to retrieve virtual machine status: {}", e))?;
    if status == VirtualMachineStatus::Failed {
        return Err(anyhow!("virtual machine in [Failed] state"));
    }
    Ok(status == expected)
}

/// Finished once the fetch reports NotFound
pub fn deleted_check<T>(result: Result<T, Error>) -> Result<bool> {
    match result {
        Ok(_) => Ok(false),
        Err(e) if e.is_not_found() => Ok(true),
        Err(e) => Err(anyhow!("failed to retrieve resource: {}", e)),
    }
}

/// Finished once the fetch succeeds; NotFound keeps polling
pub fn exists_check<T>(result: Result<T, Error>) -> Result<bool> {
    match result {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(anyhow!("failed to retrieve resource: {}", e)),
    }
}

/// Wait until `fetch` reports `expected`; `Failed` is terminal
pub async fn sync_status_wait<F, Fut>(
    config: WaitConfig,
    mut fetch: F,
    expected: SyncStatus,
) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<SyncStatus, Error>>,
{
    poll(config, "Waiting for resource sync", || {
        let fut = fetch();
        async move { sync_status_check(fut.await, expected) }
    })
    .await
}

/// Wait until a v2 task reaches `expected`
pub async fn task_status_wait(
    client: &Client,
    config: WaitConfig,
    task_id: &str,
    expected: TaskStatus,
) -> Result<(), WaitError> {
    let message = format!("Waiting for task {}", task_id);
    poll(config, &message, move || async move {
        task_status_check(
            client.get_task(task_id).await.map(|t| t.status),
            expected,
        )
    })
    .await
}

/// Wait until `fetch` returns NotFound
pub async fn deleted_wait<T, F, Fut>(config: WaitConfig, mut fetch: F) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    poll(config, "Waiting for deletion", || {
        let fut = fetch();
        async move { deleted_check(fut.await) }
    })
    .await
}

/// Wait until a v1 VM reaches `expected`
pub async fn vm_status_wait(
    client: &Client,
    config: WaitConfig,
    vm_id: i64,
    expected: VirtualMachineStatus,
) -> Result<(), WaitError> {
    let message = format!("Waiting for virtual machine {}", vm_id);
    poll(config, &message, move || async move {
        vm_status_check(client.get_vm(vm_id).await.map(|vm| vm.status), expected)
    })
    .await
}

/// Wait until a template is readable under `name`
pub async fn template_exists_wait(
    client: &Client,
    config: WaitConfig,
    owner: TemplateOwner,
    name: &str,
) -> Result<(), WaitError> {
    let message = format!("Waiting for template '{}'", name);
    poll(config, &message, move || async move {
        exists_check(client.get_template(owner, name).await)
    })
    .await
}

/// Wait until a template named `name` no longer exists
pub async fn template_deleted_wait(
    client: &Client,
    config: WaitConfig,
    owner: TemplateOwner,
    name: &str,
) -> Result<(), WaitError> {
    let message = format!("Waiting for template '{}' removal", name);
    poll(config, &message, move || async move {
        deleted_check(client.get_template(owner, name).await)
    })
    .await
}

/// Wait on a task when the server scheduled one, otherwise for deletion
pub async fn task_or_deleted_wait<T, F, Fut>(
    client: &Client,
    config: WaitConfig,
    task_id: Option<&str>,
    fetch: F,
) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    match task_id {
        Some(task_id) => task_status_wait(client, config, task_id, TaskStatus::Complete).await,
        None => deleted_wait(config, fetch).await,
    }
}

/// Wait on a task when the server scheduled one, otherwise for the
/// resource to sync
pub async fn task_or_sync_wait<F, Fut>(
    client: &Client,
    config: WaitConfig,
    task_id: Option<&str>,
    fetch: F,
) -> Result<(), WaitError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<SyncStatus, Error>>,
{
    match task_id {
        Some(task_id) => task_status_wait(client, config, task_id, TaskStatus::Complete).await,
        None => sync_status_wait(config, fetch, SyncStatus::Complete).await,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use test_case::test_case;

    fn not_found() -> Error {
        Error::NotFound {
            path: "/ecloud/v2/vpcs/vpc-1".to_string(),
            detail: "not found".to_string(),
        }
    }

    fn server_error() -> Error {
        Error::Api {
            status: 500,
            errors: vec![],
        }
    }

    #[test_case(SyncStatus::Complete, Some(true) ; "complete finishes")]
    #[test_case(SyncStatus::InProgress, Some(false) ; "in progress polls")]
    #[test_case(SyncStatus::Unknown, Some(false) ; "unknown polls")]
    #[test_case(SyncStatus::Failed, None ; "failed errors")]
    fn test_sync_status_check(status: SyncStatus, expected: Option<bool>) {
        let result = sync_status_check(Ok(status), SyncStatus::Complete);
        match expected {
            Some(done) => assert_eq!(result.unwrap(), done),
            None => assert_eq!(result.unwrap_err().to_string(), "resource in [failed] state"),
        }
    }

    #[test]
    fn test_sync_status_fetch_error() {
        let err = sync_status_check(Err(server_error()), SyncStatus::Complete).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("failed to retrieve status for resource: ")
        );
    }

    #[test]
    fn test_task_status_check() {
        assert!(task_status_check(Ok(TaskStatus::Complete), TaskStatus::Complete).unwrap());
        assert!(!task_status_check(Ok(TaskStatus::InProgress), TaskStatus::Complete).unwrap());
        assert!(task_status_check(Ok(TaskStatus::Failed), TaskStatus::Complete).is_err());
    }

    #[test]
    fn test_vm_status_check() {
        let done = vm_status_check(
            Ok(VirtualMachineStatus::Complete),
            VirtualMachineStatus::Complete,
        );
        assert!(done.unwrap());
        let building = vm_status_check(
            Ok(VirtualMachineStatus::BeingBuilt),
            VirtualMachineStatus::Complete,
        );
        assert!(!building.unwrap());
        assert!(
            vm_status_check(
                Ok(VirtualMachineStatus::Failed),
                VirtualMachineStatus::Complete
            )
            .is_err()
        );
    }

    #[test]
    fn test_deleted_check() {
        assert!(!deleted_check(Ok(())).unwrap());
        assert!(deleted_check::<()>(Err(not_found())).unwrap());
        assert!(deleted_check::<()>(Err(server_error())).is_err());
    }

    #[test]
    fn test_exists_check() {
        assert!(exists_check(Ok(())).unwrap());
        assert!(!exists_check::<()>(Err(not_found())).unwrap());
        assert!(exists_check::<()>(Err(server_error())).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_status_wait_until_complete() {
        let statuses = RefCell::new(vec![
            SyncStatus::Complete,
            SyncStatus::InProgress,
            SyncStatus::InProgress,
        ]);
        let fetches = RefCell::new(0);

        sync_status_wait(
            WaitConfig::from_secs(60, 1),
            || {
                *fetches.borrow_mut() += 1;
                let next = statuses.borrow_mut().pop();
                async move { Ok(next.unwrap_or(SyncStatus::Complete)) }
            },
            SyncStatus::Complete,
        )
        .await
        .unwrap();

        assert_eq!(*fetches.borrow(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deleted_wait_until_not_found() {
        let fetches = RefCell::new(0);

        deleted_wait(WaitConfig::from_secs(60, 1), || {
            *fetches.borrow_mut() += 1;
            let gone = *fetches.borrow() >= 2;
            async move { if gone { Err(not_found()) } else { Ok(()) } }
        })
        .await
        .unwrap();

        assert_eq!(*fetches.borrow(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deleted_wait_propagates_other_errors() {
        let err = deleted_wait(WaitConfig::from_secs(60, 1), || async {
            Err::<(), _>(server_error())
        })
        .await
        .unwrap_err();

        assert!(matches!(err, WaitError::Predicate(_)));
    }
}
