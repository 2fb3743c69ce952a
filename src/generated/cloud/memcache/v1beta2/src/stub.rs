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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use gax::polling_backoff_policy::PollingBackoffPolicy;
use std::sync::Arc;

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::CloudMemcache].
///
/// Application developers may need to implement this trait to mock
/// `client::CloudMemcache`. In other use-cases, application developers only
/// use `client::CloudMemcache` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations return an error.
pub trait CloudMemcache: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::CloudMemcache::list_instances].
    fn list_instances(
        &self,
        _req: crate::model::ListInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<crate::model::ListInstancesResponse>,
    > + Send {
        unimplemented_stub::<crate::model::ListInstancesResponse>("list_instances")
    }

    /// Implements [super::client::CloudMemcache::get_instance].
    fn get_instance(
        &self,
        _req: crate::model::GetInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<crate::model::Instance>> + Send {
        unimplemented_stub::<crate::model::Instance>("get_instance")
    }

    /// Implements [super::client::CloudMemcache::create_instance].
    fn create_instance(
        &self,
        _req: crate::model::CreateInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("create_instance")
    }

    /// Implements [super::client::CloudMemcache::update_instance].
    fn update_instance(
        &self,
        _req: crate::model::UpdateInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("update_instance")
    }

    /// Implements [super::client::CloudMemcache::update_parameters].
    fn update_parameters(
        &self,
        _req: crate::model::UpdateParametersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("update_parameters")
    }

    /// Implements [super::client::CloudMemcache::delete_instance].
    fn delete_instance(
        &self,
        _req: crate::model::DeleteInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("delete_instance")
    }

    /// Implements [super::client::CloudMemcache::apply_parameters].
    fn apply_parameters(
        &self,
        _req: crate::model::ApplyParametersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("apply_parameters")
    }

    /// Implements [super::client::CloudMemcache::apply_software_update].
    fn apply_software_update(
        &self,
        _req: crate::model::ApplySoftwareUpdateRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("apply_software_update")
    }

    /// Implements [super::client::CloudMemcache::list_operations].
    fn list_operations(
        &self,
        _req: longrunning::model::ListOperationsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<longrunning::model::ListOperationsResponse>,
    > + Send {
        unimplemented_stub::<longrunning::model::ListOperationsResponse>("list_operations")
    }

    /// Implements [super::client::CloudMemcache::get_operation].
    fn get_operation(
        &self,
        _req: longrunning::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<longrunning::model::Operation>> + Send {
        unimplemented_stub::<longrunning::model::Operation>("get_operation")
    }

    /// Implements [super::client::CloudMemcache::delete_operation].
    fn delete_operation(
        &self,
        _req: longrunning::model::DeleteOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub::<()>("delete_operation")
    }

    /// Implements [super::client::CloudMemcache::cancel_operation].
    fn cancel_operation(
        &self,
        _req: longrunning::model::CancelOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<()>> + Send {
        unimplemented_stub::<()>("cancel_operation")
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        Arc::new(gax::exponential_backoff::ExponentialBackoff::default())
    }
}

async fn unimplemented_stub<T: Send>(rpc: &'static str) -> crate::Result<T> {
    Err(gax::error::Error::invalid_usage(format!(
        "{rpc} is not implemented by this stub. The clients in this library \
         implement all the methods, mocks used in tests may not."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Empty;
    impl CloudMemcache for Empty {}

    #[tokio::test]
    async fn defaults() {
        let stub = Empty;
        let err = stub
            .get_instance(
                crate::model::GetInstanceRequest::new(),
                gax::options::RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_usage(), "{err:?}");
        assert!(err.to_string().contains("get_instance"), "{err}");

        let policy = stub.get_polling_backoff_policy(&gax::options::RequestOptions::default());
        let delay = policy.wait_period(std::time::Instant::now(), 1);
        assert_eq!(delay, std::time::Duration::from_secs(1));
    }
}
