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

use crate::Result;
use gax::error::Error;
use gax::http_client::{NoBody, ReqwestClient};
use gax::options::RequestOptions;
use gax::options::internal::set_default_idempotency;
use percent_encoding::{AsciiSet, utf8_percent_encode};
use std::time::Duration;

/// The default attempt timeout for RPCs that read instances.
const READ_TIMEOUT: Duration = Duration::from_secs(60);
/// The default attempt timeout for RPCs that start long-running operations.
const MUTATION_TIMEOUT: Duration = Duration::from_secs(1200);

/// Implements [CloudMemcache](super::stub::CloudMemcache) using a [ReqwestClient].
#[derive(Clone)]
pub struct CloudMemcache {
    inner: ReqwestClient,
}

impl std::fmt::Debug for CloudMemcache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("CloudMemcache")
            .field("inner", &self.inner)
            .finish()
    }
}

impl CloudMemcache {
    pub async fn new(
        config: gax::client_builder::internal::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }

    fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .builder(method, path)
            .query(&[("$alt", "json")])
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            )
    }
}

impl super::stub::CloudMemcache for CloudMemcache {
    async fn list_instances(
        &self,
        req: crate::model::ListInstancesRequest,
        options: RequestOptions,
    ) -> Result<crate::model::ListInstancesResponse> {
        let options = read_options(options);
        let parent = required("parent", &req.parent)?;
        let builder = self.builder(reqwest::Method::GET, format!("/v1/{parent}/instances"));
        let builder = add_query(builder, "pageSize", non_default(req.page_size));
        let builder = add_query(builder, "pageToken", non_empty(&req.page_token));
        let builder = add_query(builder, "filter", non_empty(&req.filter));
        let builder = add_query(builder, "orderBy", non_empty(&req.order_by));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: RequestOptions,
    ) -> Result<crate::model::Instance> {
        let options = read_options(options);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::GET, format!("/v1/{name}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn create_instance(
        &self,
        req: crate::model::CreateInstanceRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let options = mutation_options(options, false);
        let parent = required("parent", &req.parent)?;
        let builder = self.builder(reqwest::Method::POST, format!("/v1/{parent}/instances"));
        let builder = add_query(builder, "instanceId", non_empty(&req.instance_id));
        self.inner.execute(builder, req.instance, options).await
    }

    async fn update_instance(
        &self,
        req: crate::model::UpdateInstanceRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let options = mutation_options(options, false);
        let name = required(
            "instance.name",
            req.instance
                .as_ref()
                .map(|r| r.name.as_str())
                .unwrap_or_default(),
        )?;
        let builder = self.builder(reqwest::Method::PATCH, format!("/v1/{name}"));
        let builder = add_query(builder, "updateMask", field_mask(&req.update_mask));
        self.inner.execute(builder, req.instance, options).await
    }

    async fn update_parameters(
        &self,
        req: crate::model::UpdateParametersRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let options = mutation_options(options, false);
        let name = required("name", &req.name)?;
        let builder = self.builder(
            reqwest::Method::PATCH,
            format!("/v1/{name}:updateParameters"),
        );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_instance(
        &self,
        req: crate::model::DeleteInstanceRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let options = mutation_options(options, true);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::DELETE, format!("/v1/{name}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn apply_parameters(
        &self,
        req: crate::model::ApplyParametersRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let options = mutation_options(options, false);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::POST, format!("/v1/{name}:applyParameters"));
        self.inner.execute(builder, Some(req), options).await
    }

    async fn list_operations(
        &self,
        req: longrunning::model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::ListOperationsResponse> {
        let options = read_options(options);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::GET, format!("/v1/{name}/operations"));
        let builder = add_query(builder, "filter", non_empty(&req.filter));
        let builder = add_query(builder, "pageSize", non_default(req.page_size));
        let builder = add_query(builder, "pageToken", non_empty(&req.page_token));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<longrunning::model::Operation> {
        let options = read_options(options);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::GET, format!("/v1/{name}"));
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let options = read_options(options);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::DELETE, format!("/v1/{name}"));
        self.inner
            .execute::<NoBody, wkt::Empty>(builder, None, options)
            .await
            .map(|_| ())
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        let options = mutation_options(options, false);
        let name = required("name", &req.name)?;
        let builder = self.builder(reqwest::Method::POST, format!("/v1/{name}:cancel"));
        self.inner
            .execute::<_, wkt::Empty>(builder, Some(req), options)
            .await
            .map(|_| ())
    }

    fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

fn read_options(options: RequestOptions) -> RequestOptions {
    with_default_timeout(set_default_idempotency(options, true), READ_TIMEOUT)
}

fn mutation_options(options: RequestOptions, idempotent: bool) -> RequestOptions {
    with_default_timeout(set_default_idempotency(options, idempotent), MUTATION_TIMEOUT)
}

fn with_default_timeout(mut options: RequestOptions, timeout: Duration) -> RequestOptions {
    if options.attempt_timeout().is_none() {
        options.set_attempt_timeout(timeout);
    }
    options
}

/// Characters escaped in path parameters.
///
/// Resource names keep their `/` separators. Everything that could end the
/// path, start a query or fragment, or introduce a custom verb is escaped.
const PATH_ENCODE_SET: AsciiSet = percent_encoding::CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Validates and escapes a path parameter before making any request.
///
/// Empty values and names with `.` or `..` segments are rejected.
fn required(field: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(Error::binding(format!(
            "missing required path parameter `{field}`"
        )));
    }
    if value.split('/').any(|s| s == "." || s == "..") {
        return Err(Error::binding(format!(
            "invalid path parameter `{field}`: {value}"
        )));
    }
    Ok(utf8_percent_encode(value, &PATH_ENCODE_SET).to_string())
}

fn add_query<V: serde::Serialize>(
    builder: reqwest::RequestBuilder,
    key: &str,
    value: Option<V>,
) -> reqwest::RequestBuilder {
    match value {
        Some(v) => builder.query(&[(key, v)]),
        None => builder,
    }
}

fn non_empty(v: &str) -> Option<&str> {
    (!v.is_empty()).then_some(v)
}

fn non_default(v: i32) -> Option<i32> {
    (v != 0).then_some(v)
}

/// Field masks use a comma-separated list of paths in query parameters.
fn field_mask(mask: &Option<wkt::FieldMask>) -> Option<String> {
    mask.as_ref().map(|m| m.paths.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn required_path_parameter() {
        assert_eq!(required("name", "a/b").ok().as_deref(), Some("a/b"));
        let err = required("name", "").unwrap_err();
        assert!(err.is_invalid_usage(), "{err:?}");
        assert!(err.to_string().contains("`name`"), "{err}");
    }

    #[test_case("projects/p/instances/c", "projects/p/instances/c"; "plain")]
    #[test_case("instances/c?evil=1", "instances/c%3Fevil%3D1"; "query")]
    #[test_case("instances/c#frag", "instances/c%23frag"; "fragment")]
    #[test_case("instances/c:applyParameters", "instances/c%3AapplyParameters"; "custom verb")]
    #[test_case("instances/a b", "instances/a%20b"; "space")]
    #[test_case("instances/100%", "instances/100%25"; "percent")]
    #[test_case("instances/caché", "instances/cach%C3%A9"; "non-ascii")]
    fn path_parameter_escaping(input: &str, want: &str) {
        assert_eq!(required("name", input).ok().as_deref(), Some(want));
    }

    #[test_case("projects/p/../q"; "parent")]
    #[test_case("./instances/c"; "current")]
    #[test_case("instances/.."; "trailing")]
    fn path_parameter_dot_segments(input: &str) {
        let err = required("name", input).unwrap_err();
        assert!(err.is_invalid_usage(), "{err:?}");
        assert!(err.to_string().contains(input), "{err}");
    }

    #[test_case(None, READ_TIMEOUT)]
    #[test_case(Some(Duration::from_secs(5)), Duration::from_secs(5))]
    fn read_timeout(input: Option<Duration>, want: Duration) {
        let mut options = RequestOptions::default();
        if let Some(t) = input {
            options.set_attempt_timeout(t);
        }
        let got = read_options(options);
        assert_eq!(got.attempt_timeout(), &Some(want));
        assert_eq!(got.idempotent(), Some(true));
    }

    #[test]
    fn mutation_defaults() {
        let got = mutation_options(RequestOptions::default(), false);
        assert_eq!(got.attempt_timeout(), &Some(MUTATION_TIMEOUT));
        assert_eq!(got.idempotent(), Some(false));

        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        let got = mutation_options(options, false);
        assert_eq!(got.idempotent(), Some(true));
    }

    #[test]
    fn query_helpers() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("abc"), Some("abc"));
        assert_eq!(non_default(0), None);
        assert_eq!(non_default(10), Some(10));
        let mask = Some(wkt::FieldMask::default().set_paths(["displayName", "labels"]));
        assert_eq!(field_mask(&mask).as_deref(), Some("displayName,labels"));
        assert_eq!(field_mask(&None), None);
    }
}
