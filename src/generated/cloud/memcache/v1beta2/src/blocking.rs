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

//! A blocking client for the Cloud Memorystore for Memcached API.
//!
//! The blocking client runs the asynchronous [client][crate::client] on a
//! runtime it owns. Every function blocks the calling thread until the RPCs
//! complete, do not use this client from an asynchronous context.
//!
//! ```no_run
//! # fn sample() -> anyhow::Result<()> {
//! use google_cloud_memcache_v1beta2::blocking::CloudMemcache;
//! use google_cloud_memcache_v1beta2::client;
//! use google_cloud_memcache_v1beta2::model::ListInstancesRequest;
//! let client = CloudMemcache::new(client::CloudMemcache::builder())?;
//! let parent = client::CloudMemcache::location_path("my-project", "us-central1");
//! for instance in client
//!     .list_instances(ListInstancesRequest::new().set_parent(parent))
//!     .items()
//! {
//!     println!("{:?}", instance?);
//! }
//! # Ok(()) }
//! ```

use crate::Result;
use crate::builder::cloud_memcache::ClientBuilder;
use crate::model::OperationMetadata;
use gax::blocking::{Paginator, Runtime};
use lro::blocking::OperationHandle;

/// Implements a blocking client for the Cloud Memorystore for Memcached API.
///
/// The client and every iterator or operation handle it returns share one
/// runtime. Cloning the client is cheap.
#[derive(Clone, Debug)]
pub struct CloudMemcache {
    runtime: Runtime,
    inner: crate::client::CloudMemcache,
}

impl CloudMemcache {
    /// Creates a blocking client from a configured builder.
    pub fn new(builder: ClientBuilder) -> gax::client_builder::Result<Self> {
        let runtime = Runtime::new().map_err(gax::client_builder::Error::transport)?;
        let inner = runtime.block_on(builder.build())?;
        Ok(Self { runtime, inner })
    }

    /// Creates a blocking client from the provided stub.
    ///
    /// Only fails if the runtime cannot be created.
    pub fn from_stub<T>(stub: T) -> std::io::Result<Self>
    where
        T: crate::stub::CloudMemcache + 'static,
    {
        Ok(Self {
            runtime: Runtime::new()?,
            inner: crate::client::CloudMemcache::from_stub(stub),
        })
    }

    /// Returns the async client wrapped by this client.
    pub fn inner(&self) -> &crate::client::CloudMemcache {
        &self.inner
    }

    /// Lists Instances in a given location.
    ///
    /// No RPC is made until the first page is requested.
    pub fn list_instances(
        &self,
        req: crate::model::ListInstancesRequest,
    ) -> Paginator<crate::model::ListInstancesResponse, gax::error::Error> {
        let pages = self
            .inner
            .list_instances(req.parent.clone())
            .with_request(req)
            .by_page();
        Paginator::new(self.runtime.clone(), pages)
    }

    /// Gets details of a single Instance.
    pub fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
    ) -> Result<crate::model::Instance> {
        let builder = self.inner.get_instance(req.name.clone()).with_request(req);
        self.runtime.block_on(builder.send())
    }

    /// Creates a new Instance in a given location.
    ///
    /// Returns once the service accepts the request, use the handle to wait
    /// for the operation.
    pub fn create_instance(
        &self,
        req: crate::model::CreateInstanceRequest,
    ) -> Result<OperationHandle<crate::model::Instance, OperationMetadata>> {
        let builder = self
            .inner
            .create_instance(req.parent.clone())
            .with_request(req);
        self.handle(builder.start())
    }

    /// Updates an existing Instance in a given project and location.
    pub fn update_instance(
        &self,
        req: crate::model::UpdateInstanceRequest,
    ) -> Result<OperationHandle<crate::model::Instance, OperationMetadata>> {
        let builder = self.inner.update_instance().with_request(req);
        self.handle(builder.start())
    }

    /// Updates the defined Memcached Parameters for an existing Instance.
    pub fn update_parameters(
        &self,
        req: crate::model::UpdateParametersRequest,
    ) -> Result<OperationHandle<crate::model::Instance, OperationMetadata>> {
        let builder = self
            .inner
            .update_parameters(req.name.clone())
            .with_request(req);
        self.handle(builder.start())
    }

    /// Deletes a single Instance.
    pub fn delete_instance(
        &self,
        req: crate::model::DeleteInstanceRequest,
    ) -> Result<OperationHandle<wkt::Empty, OperationMetadata>> {
        let builder = self
            .inner
            .delete_instance(req.name.clone())
            .with_request(req);
        self.handle(builder.start())
    }

    /// Restarts the selected nodes to apply the current parameters.
    pub fn apply_parameters(
        &self,
        req: crate::model::ApplyParametersRequest,
    ) -> Result<OperationHandle<crate::model::Instance, OperationMetadata>> {
        let builder = self
            .inner
            .apply_parameters(req.name.clone())
            .with_request(req);
        self.handle(builder.start())
    }

    /// Updates software on the selected nodes of the Instance.
    pub fn apply_software_update(
        &self,
        req: crate::model::ApplySoftwareUpdateRequest,
    ) -> Result<OperationHandle<crate::model::Instance, OperationMetadata>> {
        let builder = self
            .inner
            .apply_software_update(req.instance.clone())
            .with_request(req);
        self.handle(builder.start())
    }

    pub fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
    ) -> Paginator<longrunning::model::ListOperationsResponse, gax::error::Error> {
        let pages = self
            .inner
            .list_operations(req.name.clone())
            .with_request(req)
            .by_page();
        Paginator::new(self.runtime.clone(), pages)
    }

    pub fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
    ) -> Result<longrunning::model::Operation> {
        let builder = self.inner.get_operation(req.name.clone()).with_request(req);
        self.runtime.block_on(builder.send())
    }

    pub fn delete_operation(&self, req: longrunning::model::DeleteOperationRequest) -> Result<()> {
        let builder = self
            .inner
            .delete_operation(req.name.clone())
            .with_request(req);
        self.runtime.block_on(builder.send())
    }

    pub fn cancel_operation(&self, req: longrunning::model::CancelOperationRequest) -> Result<()> {
        let builder = self
            .inner
            .cancel_operation(req.name.clone())
            .with_request(req);
        self.runtime.block_on(builder.send())
    }

    fn handle<F, R>(&self, start: F) -> Result<OperationHandle<R, OperationMetadata>>
    where
        F: std::future::Future<Output = Result<lro::OperationHandle<R, OperationMetadata>>>,
        R: wkt::message::Message,
    {
        let inner = self.runtime.block_on(start)?;
        Ok(OperationHandle::new(self.runtime.clone(), inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Instance, ListInstancesRequest, ListInstancesResponse};
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::polling_backoff_policy::PollingBackoffPolicy;
    use longrunning::model::Operation;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Fake {
        pages: Mutex<VecDeque<ListInstancesResponse>>,
        operations: Mutex<VecDeque<Operation>>,
    }

    impl crate::stub::CloudMemcache for Fake {
        async fn list_instances(
            &self,
            _req: ListInstancesRequest,
            _options: gax::options::RequestOptions,
        ) -> Result<ListInstancesResponse> {
            Ok(self.pages.lock().unwrap().pop_front().unwrap_or_default())
        }

        async fn create_instance(
            &self,
            _req: crate::model::CreateInstanceRequest,
            _options: gax::options::RequestOptions,
        ) -> Result<Operation> {
            Ok(self.next_operation())
        }

        async fn get_operation(
            &self,
            _req: longrunning::model::GetOperationRequest,
            _options: gax::options::RequestOptions,
        ) -> Result<Operation> {
            Ok(self.next_operation())
        }

        fn get_polling_backoff_policy(
            &self,
            _options: &gax::options::RequestOptions,
        ) -> Arc<dyn PollingBackoffPolicy> {
            Arc::new(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
        }
    }

    impl Fake {
        fn next_operation(&self) -> Operation {
            self.operations
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_default()
        }
    }

    fn page(names: &[&str], token: &str) -> ListInstancesResponse {
        ListInstancesResponse::new()
            .set_resources(names.iter().map(|n| Instance::new().set_name(*n)))
            .set_next_page_token(token)
    }

    fn pending() -> Operation {
        Operation::new().set_name("op-1")
    }

    #[test]
    fn list_instances() -> anyhow::Result<()> {
        let fake = Fake::default();
        fake.pages.lock().unwrap().extend([
            page(&["a", "b", "c"], "t1"),
            page(&[], "t2"),
            page(&["d"], ""),
        ]);
        let client = CloudMemcache::from_stub(fake)?;
        let names = client
            .list_instances(ListInstancesRequest::new().set_parent("projects/p/locations/l"))
            .items()
            .map(|i| i.map(|i| i.name))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(names, ["a", "b", "c", "d"]);
        Ok(())
    }

    #[test]
    fn list_instances_pages() -> anyhow::Result<()> {
        let fake = Fake::default();
        fake.pages
            .lock()
            .unwrap()
            .extend([page(&["a"], "t1"), page(&["b"], "")]);
        let client = CloudMemcache::from_stub(fake)?;
        let pages = client
            .list_instances(ListInstancesRequest::new())
            .collect::<Result<Vec<_>>>()?;
        let tokens = pages
            .iter()
            .map(|p| p.next_page_token.as_str())
            .collect::<Vec<_>>();
        assert_eq!(tokens, ["t1", ""]);
        Ok(())
    }

    #[test]
    fn create_instance() -> anyhow::Result<()> {
        let done = pending()
            .set_done(true)
            .set_response(wkt::Any::from_msg(&Instance::new().set_name("cache"))?);
        let fake = Fake::default();
        fake.operations
            .lock()
            .unwrap()
            .extend([pending(), pending(), done]);
        let client = CloudMemcache::from_stub(fake)?;
        let mut handle = client.create_instance(
            crate::model::CreateInstanceRequest::new()
                .set_parent("projects/p/locations/l")
                .set_instance_id("cache"),
        )?;
        assert_eq!(handle.name(), "op-1");
        assert!(!handle.done());
        let instance = handle.result()?;
        assert_eq!(instance.name, "cache");
        assert!(handle.done());
        Ok(())
    }

    #[test]
    fn create_instance_failure() -> anyhow::Result<()> {
        let failed = pending().set_done(true).set_error(
            Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("denied"),
        );
        let fake = Fake::default();
        fake.operations.lock().unwrap().push_back(failed);
        let client = CloudMemcache::from_stub(fake)?;
        let mut handle = client.create_instance(
            crate::model::CreateInstanceRequest::new().set_parent("projects/p/locations/l"),
        )?;
        let err = handle.result().unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        let status = err.status().unwrap();
        assert_eq!(status.code, Code::PermissionDenied);
        assert_eq!(status.message, "denied");
        Ok(())
    }

    #[test]
    fn unimplemented() -> anyhow::Result<()> {
        let client = CloudMemcache::from_stub(Fake::default())?;
        let err = client
            .get_instance(crate::model::GetInstanceRequest::new().set_name("n"))
            .unwrap_err();
        assert!(err.is_invalid_usage(), "{err:?}");
        Ok(())
    }
}
