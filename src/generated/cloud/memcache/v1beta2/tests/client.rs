// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tests for the request builders, using a fake stub in place of the service.

use gax::error::rpc::{Code, Status};
use gax::options::RequestOptionsBuilder;
use google_cloud_memcache_v1beta2::Result;
use google_cloud_memcache_v1beta2::client::CloudMemcache;
use google_cloud_memcache_v1beta2::model::*;
use google_cloud_memcache_v1beta2::stub;
use google_cloud_memcache_v1beta2::stub::CloudMemcache as _;
use longrunning::model::{GetOperationRequest, Operation};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Replays canned responses and records the requests it receives.
#[derive(Debug, Default)]
struct Fake {
    pages: Mutex<VecDeque<Result<ListInstancesResponse>>>,
    list_requests: Mutex<Vec<ListInstancesRequest>>,
    operations: Mutex<VecDeque<Result<Operation>>>,
    polls: Mutex<Vec<(String, Option<Duration>)>>,
}

impl stub::CloudMemcache for Fake {
    async fn list_instances(
        &self,
        req: ListInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<ListInstancesResponse> {
        self.list_requests.lock().unwrap().push(req);
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ListInstancesResponse::default()))
    }

    async fn create_instance(
        &self,
        req: CreateInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        assert_eq!(req.parent, "projects/p/locations/l");
        self.next_operation()
    }

    async fn delete_instance(
        &self,
        _req: DeleteInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.next_operation()
    }

    async fn get_operation(
        &self,
        req: GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.polls
            .lock()
            .unwrap()
            .push((req.name, *options.attempt_timeout()));
        self.next_operation()
    }
}

impl Fake {
    fn with_pages<I: IntoIterator<Item = Result<ListInstancesResponse>>>(pages: I) -> Arc<Self> {
        let fake = Self::default();
        fake.pages.lock().unwrap().extend(pages);
        Arc::new(fake)
    }

    fn with_operations<I: IntoIterator<Item = Result<Operation>>>(operations: I) -> Arc<Self> {
        let fake = Self::default();
        fake.operations.lock().unwrap().extend(operations);
        Arc::new(fake)
    }

    fn next_operation(&self) -> Result<Operation> {
        self.operations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(pending()))
    }
}

// The client needs to own a stub, the tests keep a second reference to
// inspect the recorded requests.
#[derive(Debug)]
struct Shared(Arc<Fake>);

impl stub::CloudMemcache for Shared {
    async fn list_instances(
        &self,
        req: ListInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<ListInstancesResponse> {
        self.0.list_instances(req, options).await
    }

    async fn create_instance(
        &self,
        req: CreateInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.0.create_instance(req, options).await
    }

    async fn delete_instance(
        &self,
        req: DeleteInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.0.delete_instance(req, options).await
    }

    async fn get_operation(
        &self,
        req: GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<Operation> {
        self.0.get_operation(req, options).await
    }
}

fn page(names: &[&str], token: &str) -> Result<ListInstancesResponse> {
    Ok(ListInstancesResponse::new()
        .set_resources(names.iter().map(|n| Instance::new().set_name(*n)))
        .set_next_page_token(token))
}

const PARENT: &str = "projects/p/locations/l";

fn pending() -> Operation {
    let metadata = OperationMetadata::new().set_target(format!("{PARENT}/instances/cache"));
    Operation::new()
        .set_name(format!("{PARENT}/operations/op-1"))
        .set_metadata(wkt::Any::from_msg(&metadata).unwrap())
}

fn success() -> Operation {
    let response = Instance::new()
        .set_name(format!("{PARENT}/instances/cache"))
        .set_state(instance::State::Ready);
    pending()
        .set_done(true)
        .set_response(wkt::Any::from_msg(&response).unwrap())
}

fn failure() -> Operation {
    pending().set_done(true).set_error(
        Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("denied"),
    )
}

#[tokio::test]
async fn items_across_pages() -> anyhow::Result<()> {
    let fake = Fake::with_pages([
        page(&["a", "b", "c"], "t1"),
        page(&[], "t2"),
        page(&["d"], ""),
    ]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut items = client
        .list_instances(PARENT)
        .set_filter("name != skip")
        .by_item();
    let mut names = Vec::new();
    while let Some(item) = items.next().await {
        names.push(item?.name);
    }
    assert_eq!(names, ["a", "b", "c", "d"]);

    let requests = fake.list_requests.lock().unwrap().clone();
    let tokens = requests
        .iter()
        .map(|r| r.page_token.as_str())
        .collect::<Vec<_>>();
    assert_eq!(tokens, ["", "t1", "t2"]);
    assert!(
        requests
            .iter()
            .all(|r| r.parent == PARENT && r.filter == "name != skip"),
        "{requests:?}"
    );
    Ok(())
}

#[tokio::test]
async fn pages() -> anyhow::Result<()> {
    let fake = Fake::with_pages([page(&["a"], "t1"), page(&[], "")]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut pages = client.list_instances(PARENT).by_page();
    let first = pages.next().await.transpose()?;
    assert_eq!(first.map(|p| p.next_page_token), Some("t1".to_string()));
    let second = pages.next().await.transpose()?;
    assert_eq!(second.map(|p| p.resources.len()), Some(0));
    assert!(pages.next().await.is_none());
    assert_eq!(fake.list_requests.lock().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn lazy_pagination() -> anyhow::Result<()> {
    let fake = Fake::with_pages([page(&["a"], "")]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let items = client.list_instances(PARENT).by_item();
    assert!(fake.list_requests.lock().unwrap().is_empty());
    drop(items);
    assert!(fake.list_requests.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn seed_page_token() -> anyhow::Result<()> {
    let fake = Fake::with_pages([page(&["x"], "")]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut items = client
        .list_instances(PARENT)
        .set_page_token("resume-here")
        .by_item();
    let item = items.next().await.transpose()?;
    assert_eq!(item.map(|i| i.name), Some("x".to_string()));
    assert!(items.next().await.is_none());
    let requests = fake.list_requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].page_token, "resume-here");
    Ok(())
}

#[tokio::test]
async fn invalid_seed_page_token() -> anyhow::Result<()> {
    let fake = Fake::with_pages([page(&["x"], "")]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut items = client
        .list_instances(PARENT)
        .set_page_token("bad\ntoken")
        .by_item();
    let err = items.next().await.transpose().unwrap_err();
    assert!(err.is_invalid_usage(), "{err:?}");
    assert!(items.next().await.is_none());
    assert!(fake.list_requests.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn pagination_error_ends_stream() -> anyhow::Result<()> {
    let unavailable = Status::default()
        .set_code(Code::Unavailable)
        .set_message("try again later");
    let fake = Fake::with_pages([
        page(&["a"], "t1"),
        Err(gax::error::Error::service(unavailable)),
    ]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut items = client.list_instances(PARENT).by_item();
    assert_eq!(items.next().await.transpose()?.map(|i| i.name), Some("a".into()));
    let err = items.next().await.transpose().unwrap_err();
    assert!(err.is_service(), "{err:?}");
    assert!(items.next().await.is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn until_done() -> anyhow::Result<()> {
    let fake = Fake::with_operations([Ok(pending()), Ok(pending()), Ok(pending()), Ok(success())]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let got = client
        .create_instance(PARENT)
        .set_instance_id("cache")
        .set_resource(Instance::new().set_node_count(3))
        .with_attempt_timeout(Duration::from_secs(30))
        .until_done()
        .await?;
    assert_eq!(got.name, format!("{PARENT}/instances/cache"));
    assert_eq!(got.state, instance::State::Ready);

    // Every poll reuses the options of the request that started the operation.
    let polls = fake.polls.lock().unwrap().clone();
    assert_eq!(polls.len(), 3, "{polls:?}");
    for (name, timeout) in polls {
        assert_eq!(name, format!("{PARENT}/operations/op-1"));
        assert_eq!(timeout, Some(Duration::from_secs(30)));
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn start_and_poll() -> anyhow::Result<()> {
    let fake = Fake::with_operations([Ok(pending()), Ok(success())]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut handle = client.create_instance(PARENT).start().await?;
    assert!(!handle.done());
    assert!(handle.response().is_none());
    let metadata = handle.metadata();
    assert_eq!(
        metadata.map(|m| m.target),
        Some(format!("{PARENT}/instances/cache"))
    );

    assert!(handle.poll_once().await?);
    assert!(handle.done());
    assert!(handle.error().is_none());
    let got = handle.result().await?;
    assert_eq!(got.state, instance::State::Ready);
    // A done handle does not poll again.
    assert!(handle.poll_once().await?);
    assert_eq!(fake.polls.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failed_operation() -> anyhow::Result<()> {
    let fake = Fake::with_operations([Ok(pending()), Ok(failure())]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let err = client
        .create_instance(PARENT)
        .until_done()
        .await
        .unwrap_err();
    assert!(err.is_operation_failed(), "{err:?}");
    assert!(!err.is_service(), "{err:?}");
    let status = err.status().unwrap();
    assert_eq!(status.code, Code::PermissionDenied);
    assert_eq!(status.message, "denied");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn polling_error() -> anyhow::Result<()> {
    let unavailable = Status::default()
        .set_code(Code::Unavailable)
        .set_message("try again later");
    let fake = Fake::with_operations([
        Ok(pending()),
        Err(gax::error::Error::service(unavailable)),
    ]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut handle = client.create_instance(PARENT).start().await?;
    let err = handle.wait(Duration::from_secs(60)).await.unwrap_err();
    assert!(err.is_service(), "{err:?}");
    assert!(!err.is_operation_failed(), "{err:?}");
    assert!(!handle.done());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn wait_deadline() -> anyhow::Result<()> {
    let fake = Fake::with_operations([Ok(pending())]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut handle = client
        .delete_instance(format!("{PARENT}/instances/cache"))
        .start()
        .await?;
    let err = handle.wait(Duration::from_secs(1)).await.unwrap_err();
    assert!(err.is_deadline_exceeded(), "{err:?}");
    assert!(!handle.done());
    assert!(handle.metadata().is_some());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn delete_until_done() -> anyhow::Result<()> {
    let empty = pending()
        .set_done(true)
        .set_response(wkt::Any::from_msg(&wkt::Empty::default())?);
    let fake = Fake::with_operations([Ok(pending()), Ok(empty)]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let _: wkt::Empty = client
        .delete_instance(format!("{PARENT}/instances/cache"))
        .until_done()
        .await?;
    Ok(())
}

#[tokio::test]
async fn unimplemented_rpc() -> anyhow::Result<()> {
    let client = CloudMemcache::from_stub(Shared(Arc::new(Fake::default())));
    let err = client.get_instance("n").send().await.unwrap_err();
    assert!(err.is_invalid_usage(), "{err:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn cancelled_wait() -> anyhow::Result<()> {
    let fake = Fake::with_operations([Ok(pending())]);
    let client = CloudMemcache::from_stub(Shared(fake.clone()));
    let mut handle = client.create_instance(PARENT).start().await?;
    let cancel = tokio_util::sync::CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(1500)).await;
        trigger.cancel();
    });
    let err = handle
        .wait_with_cancellation(Duration::from_secs(60), cancel)
        .await
        .unwrap_err();
    assert!(err.is_cancelled(), "{err:?}");
    assert!(!err.is_deadline_exceeded(), "{err:?}");

    // The handle remains usable after the wait is cancelled.
    fake.operations.lock().unwrap().push_back(Ok(success()));
    assert!(handle.poll_once().await?);
    assert!(handle.response().is_some());
    Ok(())
}
