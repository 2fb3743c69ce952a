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

pub mod cloud_memcache {
    use crate::Result;
    use std::sync::Arc;

    /// A builder for [CloudMemcache][crate::client::CloudMemcache].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_memcache_v1beta2::*;
    /// # use builder::cloud_memcache::ClientBuilder;
    /// # use client::CloudMemcache;
    /// let builder : ClientBuilder = CloudMemcache::builder();
    /// let client = builder
    ///     .with_endpoint("https://memcache.googleapis.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory>;

    pub(crate) mod client {
        use super::super::super::client::CloudMemcache;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CloudMemcache;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::CloudMemcache] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// Queries the status of a long-running operation on behalf of an
    /// [OperationHandle][lro::OperationHandle].
    ///
    /// Each poll is a `GetOperation` RPC using the options of the request
    /// that started the operation.
    fn operation_handle<R, M>(
        stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>,
        options: gax::options::RequestOptions,
        op: longrunning::model::Operation,
    ) -> lro::OperationHandle<R, M>
    where
        R: wkt::message::Message,
        M: wkt::message::Message,
    {
        let polling_backoff_policy = stub.get_polling_backoff_policy(&options);
        let poll = move |name: String| {
            let stub = stub.clone();
            let options = options.clone();
            async move {
                GetOperation::new(stub)
                    .set_name(name)
                    .with_options(options)
                    .send()
                    .await
            }
        };
        lro::OperationHandle::new(op, poll).with_polling_backoff_policy(polling_backoff_policy)
    }

    /// The request builder for [CloudMemcache::list_instances][crate::client::CloudMemcache::list_instances] calls.
    #[derive(Clone, Debug)]
    pub struct ListInstances(RequestBuilder<crate::model::ListInstancesRequest>);

    impl ListInstances {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListInstancesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListInstancesResponse> {
            (*self.0.stub)
                .list_instances(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// No RPC is made until the first page is requested. If the request
        /// has a page token the stream starts from that page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListInstancesResponse, gax::error::Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ListInstancesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListInstancesRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][crate::model::ListInstancesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][crate::model::ListInstancesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [filter][crate::model::ListInstancesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][crate::model::ListInstancesRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListInstances {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::get_instance][crate::client::CloudMemcache::get_instance] calls.
    #[derive(Clone, Debug)]
    pub struct GetInstance(RequestBuilder<crate::model::GetInstanceRequest>);

    impl GetInstance {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetInstanceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Instance> {
            (*self.0.stub)
                .get_instance(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][crate::model::GetInstanceRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::create_instance][crate::client::CloudMemcache::create_instance] calls.
    #[derive(Clone, Debug)]
    pub struct CreateInstance(RequestBuilder<crate::model::CreateInstanceRequest>);

    impl CreateInstance {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateInstanceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [create_instance][crate::client::CloudMemcache::create_instance].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .create_instance(self.0.request, self.0.options)
                .await
        }

        /// Starts the operation and returns a handle to poll it.
        pub async fn start(
            self,
        ) -> Result<lro::OperationHandle<crate::model::Instance, crate::model::OperationMetadata>> {
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(operation_handle(stub, options, op))
        }

        /// Starts the operation and waits for its result.
        ///
        /// See [OperationHandle::result][lro::OperationHandle::result] for
        /// the default timeout.
        pub async fn until_done(self) -> Result<crate::model::Instance> {
            self.start().await?.result().await
        }

        /// Sets the value of [parent][crate::model::CreateInstanceRequest::parent].
        ///
        /// This is a **required** field for requests.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [instance_id][crate::model::CreateInstanceRequest::instance_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance_id = v.into();
            self
        }

        /// Sets the value of [resource][crate::model::CreateInstanceRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: Into<crate::model::Instance>>(mut self, v: T) -> Self {
            self.0.request.resource = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource][crate::model::CreateInstanceRequest::resource].
        pub fn set_or_clear_resource<T: Into<crate::model::Instance>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.resource = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::update_instance][crate::client::CloudMemcache::update_instance] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateInstance(RequestBuilder<crate::model::UpdateInstanceRequest>);

    impl UpdateInstance {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateInstanceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [update_instance][crate::client::CloudMemcache::update_instance].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .update_instance(self.0.request, self.0.options)
                .await
        }

        /// Starts the operation and returns a handle to poll it.
        pub async fn start(
            self,
        ) -> Result<lro::OperationHandle<crate::model::Instance, crate::model::OperationMetadata>> {
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(operation_handle(stub, options, op))
        }

        /// Starts the operation and waits for its result.
        ///
        /// See [OperationHandle::result][lro::OperationHandle::result] for
        /// the default timeout.
        pub async fn until_done(self) -> Result<crate::model::Instance> {
            self.start().await?.result().await
        }

        /// Sets the value of [update_mask][crate::model::UpdateInstanceRequest::update_mask].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateInstanceRequest::update_mask].
        pub fn set_or_clear_update_mask<T: Into<wkt::FieldMask>>(mut self, v: Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }

        /// Sets the value of [resource][crate::model::UpdateInstanceRequest::resource].
        ///
        /// This is a **required** field for requests.
        pub fn set_resource<T: Into<crate::model::Instance>>(mut self, v: T) -> Self {
            self.0.request.resource = Some(v.into());
            self
        }

        /// Sets or clears the value of [resource][crate::model::UpdateInstanceRequest::resource].
        pub fn set_or_clear_resource<T: Into<crate::model::Instance>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.resource = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::update_parameters][crate::client::CloudMemcache::update_parameters] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateParameters(RequestBuilder<crate::model::UpdateParametersRequest>);

    impl UpdateParameters {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateParametersRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [update_parameters][crate::client::CloudMemcache::update_parameters].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .update_parameters(self.0.request, self.0.options)
                .await
        }

        /// Starts the operation and returns a handle to poll it.
        pub async fn start(
            self,
        ) -> Result<lro::OperationHandle<crate::model::Instance, crate::model::OperationMetadata>> {
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(operation_handle(stub, options, op))
        }

        /// Starts the operation and waits for its result.
        ///
        /// See [OperationHandle::result][lro::OperationHandle::result] for
        /// the default timeout.
        pub async fn until_done(self) -> Result<crate::model::Instance> {
            self.start().await?.result().await
        }

        /// Sets the value of [name][crate::model::UpdateParametersRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [update_mask][crate::model::UpdateParametersRequest::update_mask].
        ///
        /// This is a **required** field for requests.
        pub fn set_update_mask<T: Into<wkt::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sets or clears the value of [update_mask][crate::model::UpdateParametersRequest::update_mask].
        pub fn set_or_clear_update_mask<T: Into<wkt::FieldMask>>(mut self, v: Option<T>) -> Self {
            self.0.request.update_mask = v.map(|x| x.into());
            self
        }

        /// Sets the value of [parameters][crate::model::UpdateParametersRequest::parameters].
        pub fn set_parameters<T: Into<crate::model::MemcacheParameters>>(mut self, v: T) -> Self {
            self.0.request.parameters = Some(v.into());
            self
        }

        /// Sets or clears the value of [parameters][crate::model::UpdateParametersRequest::parameters].
        pub fn set_or_clear_parameters<T: Into<crate::model::MemcacheParameters>>(
            mut self,
            v: Option<T>,
        ) -> Self {
            self.0.request.parameters = v.map(|x| x.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateParameters {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::delete_instance][crate::client::CloudMemcache::delete_instance] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteInstance(RequestBuilder<crate::model::DeleteInstanceRequest>);

    impl DeleteInstance {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteInstanceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [delete_instance][crate::client::CloudMemcache::delete_instance].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .delete_instance(self.0.request, self.0.options)
                .await
        }

        /// Starts the operation and returns a handle to poll it.
        pub async fn start(
            self,
        ) -> Result<lro::OperationHandle<wkt::Empty, crate::model::OperationMetadata>> {
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(operation_handle(stub, options, op))
        }

        /// Starts the operation and waits for its result.
        ///
        /// See [OperationHandle::result][lro::OperationHandle::result] for
        /// the default timeout.
        pub async fn until_done(self) -> Result<wkt::Empty> {
            self.start().await?.result().await
        }

        /// Sets the value of [name][crate::model::DeleteInstanceRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteInstance {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::apply_parameters][crate::client::CloudMemcache::apply_parameters] calls.
    #[derive(Clone, Debug)]
    pub struct ApplyParameters(RequestBuilder<crate::model::ApplyParametersRequest>);

    impl ApplyParameters {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ApplyParametersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [apply_parameters][crate::client::CloudMemcache::apply_parameters].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .apply_parameters(self.0.request, self.0.options)
                .await
        }

        /// Starts the operation and returns a handle to poll it.
        pub async fn start(
            self,
        ) -> Result<lro::OperationHandle<crate::model::Instance, crate::model::OperationMetadata>> {
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(operation_handle(stub, options, op))
        }

        /// Starts the operation and waits for its result.
        ///
        /// See [OperationHandle::result][lro::OperationHandle::result] for
        /// the default timeout.
        pub async fn until_done(self) -> Result<crate::model::Instance> {
            self.start().await?.result().await
        }

        /// Sets the value of [name][crate::model::ApplyParametersRequest::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [node_ids][crate::model::ApplyParametersRequest::node_ids].
        pub fn set_node_ids<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.node_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [apply_all][crate::model::ApplyParametersRequest::apply_all].
        pub fn set_apply_all(mut self, v: bool) -> Self {
            self.0.request.apply_all = v;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ApplyParameters {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::apply_software_update][crate::client::CloudMemcache::apply_software_update] calls.
    #[derive(Clone, Debug)]
    pub struct ApplySoftwareUpdate(RequestBuilder<crate::model::ApplySoftwareUpdateRequest>);

    impl ApplySoftwareUpdate {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ApplySoftwareUpdateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a longrunning operation. More information
        /// on [apply_software_update][crate::client::CloudMemcache::apply_software_update].
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .apply_software_update(self.0.request, self.0.options)
                .await
        }

        /// Starts the operation and returns a handle to poll it.
        pub async fn start(
            self,
        ) -> Result<lro::OperationHandle<crate::model::Instance, crate::model::OperationMetadata>> {
            let stub = self.0.stub.clone();
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(operation_handle(stub, options, op))
        }

        /// Starts the operation and waits for its result.
        ///
        /// See [OperationHandle::result][lro::OperationHandle::result] for
        /// the default timeout.
        pub async fn until_done(self) -> Result<crate::model::Instance> {
            self.start().await?.result().await
        }

        /// Sets the value of [instance][crate::model::ApplySoftwareUpdateRequest::instance].
        ///
        /// This is a **required** field for requests.
        pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.instance = v.into();
            self
        }

        /// Sets the value of [node_ids][crate::model::ApplySoftwareUpdateRequest::node_ids].
        pub fn set_node_ids<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request.node_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [apply_all][crate::model::ApplySoftwareUpdateRequest::apply_all].
        pub fn set_apply_all(mut self, v: bool) -> Self {
            self.0.request.apply_all = v;
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ApplySoftwareUpdate {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::list_operations][crate::client::CloudMemcache::list_operations] calls.
    #[derive(Clone, Debug)]
    pub struct ListOperations(RequestBuilder<longrunning::model::ListOperationsRequest>);

    impl ListOperations {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::ListOperationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::ListOperationsResponse> {
            (*self.0.stub)
                .list_operations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        ///
        /// No RPC is made until the first page is requested. If the request
        /// has a page token the stream starts from that page.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            longrunning::model::ListOperationsResponse,
            gax::error::Error,
        > {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request = builder.0.request.set_page_token(token);
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            longrunning::model::ListOperationsResponse,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [name][longrunning::model::ListOperationsRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [filter][longrunning::model::ListOperationsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][longrunning::model::ListOperationsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][longrunning::model::ListOperationsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOperations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::get_operation][crate::client::CloudMemcache::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<longrunning::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::GetOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .get_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::delete_operation][crate::client::CloudMemcache::delete_operation] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteOperation(RequestBuilder<longrunning::model::DeleteOperationRequest>);

    impl DeleteOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::DeleteOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .delete_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::DeleteOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudMemcache::cancel_operation][crate::client::CloudMemcache::cancel_operation] calls.
    #[derive(Clone, Debug)]
    pub struct CancelOperation(RequestBuilder<longrunning::model::CancelOperationRequest>);

    impl CancelOperation {
        pub(crate) fn new(stub: Arc<dyn super::super::stub::dynamic::CloudMemcache>) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<longrunning::model::CancelOperationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            (*self.0.stub)
                .cancel_operation(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [name][longrunning::model::CancelOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
