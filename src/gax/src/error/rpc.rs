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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The logical error model used by Google Cloud services.
///
/// Each [Status] contains an error code, a developer-facing message, and a
/// list of details. Services use `Status` to report RPC failures, and
/// long-running operations use it to report why the operation failed.
///
/// See [AIP-193](https://google.aip.dev/193) for background.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, in English.
    pub message: String,

    /// A list of messages that carry the error details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<wkt::Any>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<wkt::Any>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl wkt::message::Message for Status {
    fn typename() -> &'static str {
        "type.googleapis.com/google.rpc.Status"
    }
}

/// The canonical error codes for Google Cloud APIs.
///
/// The comments list the HTTP status code typically associated with each
/// value. Codes outside the canonical range are preserved as
/// [UnknownValue][Code::UnknownValue].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Code {
    /// Not an error. HTTP 200.
    Ok,
    /// The operation was cancelled, typically by the caller. HTTP 499.
    Cancelled,
    /// Unknown error. HTTP 500.
    #[default]
    Unknown,
    /// The client specified an invalid argument. HTTP 400.
    InvalidArgument,
    /// The deadline expired before the operation could complete. HTTP 504.
    DeadlineExceeded,
    /// Some requested entity was not found. HTTP 404.
    NotFound,
    /// The entity that the client attempted to create already exists. HTTP 409.
    AlreadyExists,
    /// The caller does not have permission to execute the operation. HTTP 403.
    PermissionDenied,
    /// Some resource, such as a quota, has been exhausted. HTTP 429.
    ResourceExhausted,
    /// The system is not in a state required for the operation. HTTP 400.
    FailedPrecondition,
    /// The operation was aborted, typically due to a concurrency issue. HTTP 409.
    Aborted,
    /// The operation was attempted past the valid range. HTTP 400.
    OutOfRange,
    /// The operation is not implemented or not supported. HTTP 501.
    Unimplemented,
    /// Internal errors. HTTP 500.
    Internal,
    /// The service is currently unavailable. HTTP 503.
    Unavailable,
    /// Unrecoverable data loss or corruption. HTTP 500.
    DataLoss,
    /// The request does not have valid authentication credentials. HTTP 401.
    Unauthenticated,
    /// A numeric code not known to this library.
    UnknownValue(i32),
}

impl Code {
    /// The numeric value of the code.
    pub fn value(&self) -> i32 {
        match self {
            Code::Ok => 0,
            Code::Cancelled => 1,
            Code::Unknown => 2,
            Code::InvalidArgument => 3,
            Code::DeadlineExceeded => 4,
            Code::NotFound => 5,
            Code::AlreadyExists => 6,
            Code::PermissionDenied => 7,
            Code::ResourceExhausted => 8,
            Code::FailedPrecondition => 9,
            Code::Aborted => 10,
            Code::OutOfRange => 11,
            Code::Unimplemented => 12,
            Code::Internal => 13,
            Code::Unavailable => 14,
            Code::DataLoss => 15,
            Code::Unauthenticated => 16,
            Code::UnknownValue(v) => *v,
        }
    }

    /// The canonical name of the code, e.g. `NOT_FOUND`.
    ///
    /// Unrecognized numeric codes are named `UNKNOWN`.
    pub fn name(&self) -> &'static str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
            Code::UnknownValue(_) => "UNKNOWN",
        }
    }

    const ALL: [Code; 17] = [
        Code::Ok,
        Code::Cancelled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        usize::try_from(value)
            .ok()
            .and_then(|i| Code::ALL.get(i).copied())
            .unwrap_or(Code::UnknownValue(value))
    }
}

impl TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        Code::ALL
            .into_iter()
            .find(|c| c.name() == value)
            .ok_or_else(|| format!("unknown status code value {value}"))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.value())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

// HTTP error payloads wrap the status and use the HTTP status code in the
// `code` field. The canonical code is in the `status` field.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    message: String,
    status: Option<String>,
    details: Vec<wkt::Any>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = wrapper
            .status
            .as_deref()
            .and_then(|s| Code::try_from(s).ok())
            .unwrap_or(Code::Unknown);
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn code_roundtrip() {
        for (i, code) in Code::ALL.iter().enumerate() {
            assert_eq!(Code::from(i as i32), *code);
            assert_eq!(code.value(), i as i32);
            assert_eq!(Code::try_from(code.name()), Ok(*code));
            assert_eq!(code.to_string(), code.name());
        }
    }

    #[test_case(-1)]
    #[test_case(17)]
    #[test_case(i32::MAX)]
    fn code_unknown_value(value: i32) {
        let code = Code::from(value);
        assert_eq!(code, Code::UnknownValue(value));
        assert_eq!(code.value(), value);
        assert_eq!(code.name(), "UNKNOWN");
    }

    #[test]
    fn status_json_unknown_code() -> anyhow::Result<()> {
        let input = json!({"code": 42, "message": "from the future"});
        let got = serde_json::from_value::<Status>(input.clone())?;
        assert_eq!(got.code, Code::UnknownValue(42));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn code_bad_name() {
        let got = Code::try_from("NOT-A-CODE");
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn status_json() -> anyhow::Result<()> {
        let input = json!({"code": 7, "message": "denied"});
        let got = serde_json::from_value::<Status>(input.clone())?;
        let want = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("denied");
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn status_from_http_payload() -> anyhow::Result<()> {
        let body = json!({"error": {
            "code": 404,
            "message": "instance not found",
            "status": "NOT_FOUND",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.LocalizedMessage",
                "locale": "en-US",
                "message": "we searched everywhere",
            }],
        }});
        let bytes = bytes::Bytes::from(body.to_string());
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(got.message, "instance not found");
        assert_eq!(got.details.len(), 1);
        assert_eq!(
            got.details[0].type_url(),
            Some("type.googleapis.com/google.rpc.LocalizedMessage")
        );
        Ok(())
    }

    #[test]
    fn status_from_http_payload_unknown_status() -> anyhow::Result<()> {
        let body = json!({"error": {"code": 500, "message": "uh-oh", "status": "SOMETHING_NEW"}});
        let got = Status::try_from(&bytes::Bytes::from(body.to_string()))?;
        assert_eq!(got.code, Code::Unknown);
        Ok(())
    }

    #[test]
    fn status_from_http_payload_bad() {
        let got = Status::try_from(&bytes::Bytes::from_static(b"<html>bad gateway</html>"));
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }
}
