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

use std::sync::Arc;

/// Implements a client for the Cloud Memorystore for Memcached API.
///
/// # Example
/// ```no_run
/// # async fn sample() -> anyhow::Result<()> {
/// # use google_cloud_memcache_v1::client::CloudMemcache;
/// let client = CloudMemcache::builder().build().await?;
/// let name = CloudMemcache::instance_path("my-project", "us-central1", "my-cache");
/// let instance = client.get_instance(name).send().await?;
/// println!("{instance:?}");
/// # Ok(()) }
/// ```
///
/// # Service Description
///
/// Configures and manages Cloud Memorystore for Memcached instances.
///
/// The `memcache.googleapis.com` service implements the Google Cloud Memorystore
/// for Memcached API and defines the following resource model for managing
/// Memorystore Memcached (also called Memcached below) instances:
///
/// * The service works with a collection of cloud projects, named: `/projects/*`
/// * Each project has a collection of available locations, named: `/locations/*`
/// * Each location has a collection of Memcached instances, named:
///   `/instances/*`
/// * As such, Memcached instances are instances of the form:
///   `/projects/{project_id}/locations/{location_id}/instances/{instance_id}`
///
/// Note that location_id must be a GCP `region`; for example:
///
/// * `projects/my-memcached-project/locations/us-central1/instances/my-memcached`
///
/// # Configuration
///
/// To configure `CloudMemcache` use the `with_*` methods in the type returned
/// by [builder()][CloudMemcache::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://memcache.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks may want to override this
///   default.
/// * [with_credentials()]: by default this client uses anonymous credentials.
///   Most applications need to provide credentials.
///
/// # Pooling and Cloning
///
/// `CloudMemcache` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `CloudMemcache` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
///
/// [with_endpoint()]: super::builder::cloud_memcache::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::cloud_memcache::ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct CloudMemcache {
    inner: Arc<dyn super::stub::dynamic::CloudMemcache>,
}

impl CloudMemcache {
    /// Returns a builder for [CloudMemcache].
    ///
    /// ```no_run
    /// # async fn sample() -> anyhow::Result<()> {
    /// # use google_cloud_memcache_v1::client::CloudMemcache;
    /// let client = CloudMemcache::builder()
    ///     .with_endpoint("https://private.googleapis.com")
    ///     .build()
    ///     .await?;
    /// # Ok(()) }
    /// ```
    pub fn builder() -> super::builder::cloud_memcache::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cloud_memcache::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CloudMemcache + 'static,
    {
        Self {
            inner: Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Arc<dyn super::stub::dynamic::CloudMemcache>> {
        if conf.tracing_enabled() {
            return Ok(Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudMemcache> {
        super::transport::CloudMemcache::new(conf).await
    }

    async fn build_with_tracing(
        conf: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudMemcache> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CloudMemcache::new)
    }

    /// Formats the resource name of an instance.
    pub fn instance_path(project: &str, location: &str, instance: &str) -> String {
        format!("projects/{project}/locations/{location}/instances/{instance}")
    }

    /// Formats the resource name of a location.
    pub fn location_path(project: &str, location: &str) -> String {
        format!("projects/{project}/locations/{location}")
    }

    /// Lists Instances in a given location.
    pub fn list_instances(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::cloud_memcache::ListInstances {
        super::builder::cloud_memcache::ListInstances::new(self.inner.clone()).set_parent(parent)
    }

    /// Gets details of a single Instance.
    pub fn get_instance(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::GetInstance {
        super::builder::cloud_memcache::GetInstance::new(self.inner.clone()).set_name(name)
    }

    /// Creates a new Instance in a given location.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The builder returned by this method provides [start()] to obtain an
    /// [OperationHandle], and [until_done()] to wait for the final result.
    ///
    /// [long-running Operation]: https://google.aip.dev/151
    /// [start()]: super::builder::cloud_memcache::CreateInstance::start
    /// [until_done()]: super::builder::cloud_memcache::CreateInstance::until_done
    /// [OperationHandle]: lro::OperationHandle
    pub fn create_instance(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::cloud_memcache::CreateInstance {
        super::builder::cloud_memcache::CreateInstance::new(self.inner.clone()).set_parent(parent)
    }

    /// Updates an existing Instance in a given project and location.
    ///
    /// The instance name is taken from the `instance` field of the request.
    pub fn update_instance(&self) -> super::builder::cloud_memcache::UpdateInstance {
        super::builder::cloud_memcache::UpdateInstance::new(self.inner.clone())
    }

    /// Updates the defined Memcached Parameters for an existing Instance.
    /// This method only stages the parameters, it must be followed by
    /// ApplyParameters to apply the parameters to nodes of the Memcached Instance.
    pub fn update_parameters(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::UpdateParameters {
        super::builder::cloud_memcache::UpdateParameters::new(self.inner.clone()).set_name(name)
    }

    /// Deletes a single Instance.
    pub fn delete_instance(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::DeleteInstance {
        super::builder::cloud_memcache::DeleteInstance::new(self.inner.clone()).set_name(name)
    }

    /// ApplyParameters will restart the set of specified nodes in order to update
    /// them to the current set of parameters for the Memcached Instance.
    pub fn apply_parameters(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::ApplyParameters {
        super::builder::cloud_memcache::ApplyParameters::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service
    /// functionality in this service.
    pub fn list_operations(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::ListOperations {
        super::builder::cloud_memcache::ListOperations::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service
    /// functionality in this service.
    pub fn get_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::GetOperation {
        super::builder::cloud_memcache::GetOperation::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service
    /// functionality in this service.
    pub fn delete_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::DeleteOperation {
        super::builder::cloud_memcache::DeleteOperation::new(self.inner.clone()).set_name(name)
    }

    /// Provides the [Operations][longrunning::model::Operation] service
    /// functionality in this service.
    pub fn cancel_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cloud_memcache::CancelOperation {
        super::builder::cloud_memcache::CancelOperation::new(self.inner.clone()).set_name(name)
    }
}
