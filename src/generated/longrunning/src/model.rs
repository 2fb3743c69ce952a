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

use gax::error::rpc::Status;
use gax::paginator::PageableResponse;

/// A long-running operation, the result of a network API call.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, unique within the service that returns it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Service-specific metadata, such as the progress of the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<wkt::Any>,

    /// If `false`, the operation is still in progress. If `true`, the
    /// operation is completed, and either `error` or `response` is available.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,

    /// The operation result, either an error or a valid response.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub result: Option<operation::Result>,
}

impl Operation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][Operation::metadata].
    pub fn set_or_clear_metadata<T: Into<wkt::Any>>(mut self, v: Option<T>) -> Self {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done(mut self, v: bool) -> Self {
        self.done = v;
        self
    }

    /// Sets the value of [result][Operation::result].
    pub fn set_result<T: Into<Option<operation::Result>>>(mut self, v: T) -> Self {
        self.result = v.into();
        self
    }

    /// The value of [result][Operation::result] if it holds an `Error`.
    pub fn error(&self) -> Option<&Status> {
        match &self.result {
            Some(operation::Result::Error(e)) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Sets [result][Operation::result] to hold an `Error`.
    pub fn set_error<T: Into<Status>>(mut self, v: T) -> Self {
        self.result = Some(operation::Result::Error(Box::new(v.into())));
        self
    }

    /// The value of [result][Operation::result] if it holds a `Response`.
    pub fn response(&self) -> Option<&wkt::Any> {
        match &self.result {
            Some(operation::Result::Response(r)) => Some(r.as_ref()),
            _ => None,
        }
    }

    /// Sets [result][Operation::result] to hold a `Response`.
    pub fn set_response<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.result = Some(operation::Result::Response(Box::new(v.into())));
        self
    }
}

impl wkt::message::Message for Operation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.longrunning.Operation"
    }
}

/// Defines types nested in [Operation].
pub mod operation {
    use gax::error::rpc::Status;

    /// The operation result.
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Result {
        /// The error result of the operation in case of failure or cancellation.
        Error(Box<Status>),
        /// The normal, successful response of the operation.
        Response(Box<wkt::Any>),
    }
}

/// The request message for `Operations.GetOperation`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl GetOperationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `Operations.ListOperations`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsRequest {
    /// The name of the operation's parent resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// The standard list filter.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub filter: String,

    /// The standard list page size.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The standard list page token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListOperationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ListOperationsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][ListOperationsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][ListOperationsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListOperationsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// The response message for `Operations.ListOperations`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    /// A list of operations that matches the filter in the request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<Operation>,

    /// The standard list next-page token.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListOperationsResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [operations][ListOperationsResponse::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Operation>,
    {
        self.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListOperationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl PageableResponse for ListOperationsResponse {
    type PageItem = Operation;

    fn items(self) -> Vec<Self::PageItem> {
        self.operations
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// The request message for `Operations.DeleteOperation`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOperationRequest {
    /// The name of the operation resource to be deleted.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl DeleteOperationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `Operations.CancelOperation`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    /// The name of the operation resource to be cancelled.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

impl CancelOperationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use serde_json::json;

    #[test]
    fn pending() -> anyhow::Result<()> {
        let input = json!({
            "name": "projects/p/locations/l/operations/op-1",
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.memcache.v1beta2.OperationMetadata",
                "verb": "create",
            },
        });
        let op = serde_json::from_value::<Operation>(input.clone())?;
        assert_eq!(op.name, "projects/p/locations/l/operations/op-1");
        assert!(!op.done);
        assert!(op.result.is_none(), "{op:?}");
        assert_eq!(
            op.metadata.as_ref().and_then(|m| m.type_url()),
            Some("type.googleapis.com/google.cloud.memcache.v1beta2.OperationMetadata")
        );
        assert_eq!(serde_json::to_value(&op)?, input);
        Ok(())
    }

    #[test]
    fn done_with_error() -> anyhow::Result<()> {
        let input = json!({
            "name": "op-2",
            "done": true,
            "error": {"code": 7, "message": "denied"},
        });
        let op = serde_json::from_value::<Operation>(input.clone())?;
        assert!(op.done);
        let status = op.error().cloned();
        assert_eq!(status.as_ref().map(|s| s.code), Some(Code::PermissionDenied));
        assert_eq!(status.as_ref().map(|s| s.message.as_str()), Some("denied"));
        assert!(op.response().is_none(), "{op:?}");
        assert_eq!(serde_json::to_value(&op)?, input);
        Ok(())
    }

    #[test]
    fn done_with_response() -> anyhow::Result<()> {
        let input = json!({
            "name": "op-3",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.protobuf.Empty",
            },
        });
        let op = serde_json::from_value::<Operation>(input.clone())?;
        assert!(op.error().is_none(), "{op:?}");
        let response = op.response().and_then(|r| r.to_msg::<wkt::Empty>().ok());
        assert_eq!(response, Some(wkt::Empty::default()));
        assert_eq!(serde_json::to_value(&op)?, input);
        Ok(())
    }

    #[test]
    fn setters() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Empty::default())?;
        let op = Operation::new()
            .set_name("op-4")
            .set_done(true)
            .set_metadata(any.clone())
            .set_response(any.clone());
        assert_eq!(op.response(), Some(&any));
        let op = op.set_error(Status::default().set_code(Code::Aborted));
        assert!(op.response().is_none(), "{op:?}");
        assert_eq!(op.error().map(|s| s.code), Some(Code::Aborted));
        let op = op.set_or_clear_metadata(None::<wkt::Any>).set_result(None);
        assert!(op.metadata.is_none() && op.result.is_none(), "{op:?}");
        Ok(())
    }

    #[test]
    fn list_operations() -> anyhow::Result<()> {
        let request = ListOperationsRequest::new()
            .set_name("projects/p/locations/l")
            .set_page_size(10)
            .set_page_token("abc");
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"name": "projects/p/locations/l", "pageSize": 10, "pageToken": "abc"})
        );

        let response = serde_json::from_value::<ListOperationsResponse>(json!({
            "operations": [{"name": "op-1"}, {"name": "op-2", "done": true}],
            "nextPageToken": "next",
        }))?;
        assert_eq!(response.next_page_token(), "next");
        let names: Vec<_> = response.items().into_iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["op-1", "op-2"]);
        Ok(())
    }
}
