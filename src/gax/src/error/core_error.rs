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

use super::CredentialsError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;
use std::time::Duration;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources:
/// - the service may return an error,
/// - the transport may be unable to reach the service,
/// - a request attempt may time out, or the retry policy may be exhausted,
/// - a long-running operation may complete with an error,
/// - a wait for a long-running operation may reach its deadline, or be
///   cancelled by the application,
/// - the application may misuse the library, e.g. omit required fields.
///
/// This type offers a series of predicates to tell these cases apart. In
/// particular, a failure to poll an operation ([is_transport_failure]) is
/// never confused with an operation that failed ([is_operation_failed]), or
/// with a wait that ran out of time ([is_deadline_exceeded]).
///
/// [is_transport_failure]: Error::is_transport_failure
/// [is_operation_failed]: Error::is_operation_failed
/// [is_deadline_exceeded]: Error::is_deadline_exceeded
///
/// # Example
/// ```
/// use memcache_gax::error::Error;
/// match example_function() {
///     Err(e) if e.is_operation_failed() => {
///         println!("the operation failed {e}, details in {:?}", e.status());
///     },
///     Err(e) if e.is_deadline_exceeded() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # use memcache_gax::error::rpc::{Code, Status};
///     # Err(Error::operation_failed(Status::default().set_code(Code::PermissionDenied).set_message("denied")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by Google Cloud services.
    ///
    /// # Example
    /// ```
    /// use memcache_gax::error::Error;
    /// use memcache_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// assert!(error.is_transport_failure());
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates service errors including transport metadata.
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The service rejected the request.
    ///
    /// The request reached the service, and the service returned an error
    /// status. Use [status][Error::status] to examine the details.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// Creates an error representing a long-running operation that failed.
    ///
    /// # Example
    /// ```
    /// use memcache_gax::error::Error;
    /// use memcache_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::PermissionDenied).set_message("denied");
    /// let error = Error::operation_failed(status.clone());
    /// assert!(error.is_operation_failed());
    /// assert!(!error.is_transport_failure());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn operation_failed(status: Status) -> Self {
        Self {
            kind: ErrorKind::OperationFailed(Box::new(status)),
            source: None,
        }
    }

    /// The long-running operation completed with an error.
    ///
    /// The operation reached a terminal state, and the service reported why
    /// it failed. Polling the operation again returns the same result. Use
    /// [status][Error::status] to examine the code, message and details.
    pub fn is_operation_failed(&self) -> bool {
        matches!(self.kind, ErrorKind::OperationFailed(_))
    }

    /// Creates an error representing a wait that reached its deadline.
    pub fn deadline_exceeded(timeout: Duration) -> Self {
        Self {
            kind: ErrorKind::DeadlineExceeded(timeout),
            source: None,
        }
    }

    /// The application stopped waiting for a long-running operation.
    ///
    /// This is always a client-side error, distinct from any deadline
    /// reported by the service. The operation may still complete in the
    /// service, and the handle used to wait remains usable.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self.kind, ErrorKind::DeadlineExceeded(_))
    }

    /// Creates an error representing a cancelled wait.
    pub fn cancelled() -> Self {
        Self {
            kind: ErrorKind::Cancelled,
            source: None,
        }
    }

    /// The application cancelled the wait for a long-running operation.
    ///
    /// Cancelling a wait does not cancel the operation in the service.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Creates an error representing a misuse of the library.
    ///
    /// # Example
    /// ```
    /// use memcache_gax::error::Error;
    /// let error = Error::invalid_usage("page tokens cannot contain control characters");
    /// assert!(error.is_invalid_usage());
    /// ```
    pub fn invalid_usage<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::InvalidUsage,
            source: Some(source.into()),
        }
    }

    /// Creates an error for requests missing required path parameters.
    ///
    /// This is a kind of [invalid usage][Error::is_invalid_usage].
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::invalid_usage(source)
    }

    /// The application used the library incorrectly.
    ///
    /// # Troubleshooting
    ///
    /// Typically a required field in the request was not set, or has the
    /// wrong format. The error source describes the problem.
    pub fn is_invalid_usage(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidUsage)
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// A request attempt could not be completed before its deadline.
    ///
    /// The request may or may not have started, and it may or may not complete
    /// in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This includes long-running operations whose result does not contain
    /// the expected type.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Cannot create the authentication headers.
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// A problem reported by the transport layer, with a full HTTP response.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include a broken connection after the request is sent.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer after the response headers arrived.
    ///
    /// Examples include a connection reset while reading the body.
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: Some(headers),
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Transport(d) if d.status_code.is_none() && d.headers.is_none()
        )
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The RPC itself failed.
    ///
    /// This groups all the errors where a request could not be completed:
    /// service errors, transport errors, attempt timeouts, exhausted retry
    /// policies, and authentication failures. When waiting for a
    /// long-running operation, these errors mean "the poll failed", and say
    /// nothing about the operation itself.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Service(_)
                | ErrorKind::Transport(_)
                | ErrorKind::Timeout
                | ErrorKind::Exhausted
                | ErrorKind::Authentication
        )
    }

    /// The [Status] payload associated with this error.
    ///
    /// Both service errors and failed long-running operations include a
    /// `Status`. Use [is_service][Error::is_service] and
    /// [is_operation_failed][Error::is_operation_failed] to tell them apart.
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            ErrorKind::OperationFailed(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The error was generated before the RPC started and is transient.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .is_some_and(|e| e.is_transient())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::InvalidUsage, Some(e)) => {
                write!(f, "invalid use of the client library: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Transport(d), _) => d.display(self.source(), f),
            (ErrorKind::Service(d), _) => write!(
                f,
                "the service reports an error with code {} described as: {}",
                d.status.code, d.status.message
            ),
            (ErrorKind::OperationFailed(s), _) => write!(
                f,
                "the long-running operation failed with code {} described as: {}",
                s.code, s.message
            ),
            (ErrorKind::DeadlineExceeded(t), _) => write!(
                f,
                "the operation did not complete within the {t:?} wait deadline"
            ),
            (ErrorKind::Cancelled, _) => write!(f, "the wait for the operation was cancelled"),
            (_, None) => write!(f, "an unclassified problem making a request"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    InvalidUsage,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    OperationFailed(Box<Status>),
    DeadlineExceeded(Duration),
    Cancelled,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self.status_code, self.payload.as_ref()) {
            (_, Some(code), Some(p)) => match std::str::from_utf8(p.as_ref()) {
                Ok(message) => write!(f, "the HTTP transport reports a [{code}] error: {message}"),
                Err(_) => write!(f, "the HTTP transport reports a [{code}] error: {p:?}"),
            },
            (Some(source), _, _) => write!(f, "the transport reports an error: {source}"),
            (None, _, _) => write!(f, "the transport reports an unknown error"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}
