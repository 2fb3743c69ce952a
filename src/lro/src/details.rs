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

//! Decodes the typed results of an operation.

use gax::Result;
use gax::error::Error;
use longrunning::model::Operation;

pub(crate) fn as_result<R>(op: &Operation) -> Result<R>
where
    R: wkt::message::Message,
{
    // A completed operation must set either the response *or* the error.
    // Setting neither is a deserialization error, the incoming data does not
    // satisfy the invariants required by the receiving type.
    match (op.response(), op.error()) {
        (Some(any), None) => any.to_msg::<R>().map_err(Error::deser),
        (None, Some(status)) => Err(Error::operation_failed(status.clone())),
        _ => Err(Error::deser(format!(
            "operation {} is done but has neither a response nor an error",
            op.name
        ))),
    }
}

pub(crate) fn as_metadata<M>(op: &Operation) -> Option<M>
where
    M: wkt::message::Message,
{
    op.metadata.as_ref().and_then(|a| a.to_msg::<M>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};

    #[test]
    fn response() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(23, 0))?;
        let op = Operation::new().set_done(true).set_response(any);
        let got = as_result::<wkt::Timestamp>(&op)?;
        assert_eq!(got, wkt::Timestamp::clamp(23, 0));
        Ok(())
    }

    #[test]
    fn response_with_wrong_type() -> anyhow::Result<()> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(23, 0))?;
        let op = Operation::new().set_done(true).set_response(any);
        let err = as_result::<wkt::Empty>(&op).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test]
    fn error() {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("denied");
        let op = Operation::new().set_done(true).set_error(status.clone());
        let err = as_result::<wkt::Empty>(&op).unwrap_err();
        assert!(err.is_operation_failed(), "{err:?}");
        assert!(!err.is_service(), "{err:?}");
        assert_eq!(err.status(), Some(&status));
    }

    #[test]
    fn neither() {
        let op = Operation::new().set_name("op-1").set_done(true);
        let err = as_result::<wkt::Empty>(&op).unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(err.to_string().contains("op-1"), "{err}");
    }

    #[test]
    fn metadata() -> anyhow::Result<()> {
        let op = Operation::new();
        assert_eq!(as_metadata::<wkt::Timestamp>(&op), None);

        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(123, 0))?;
        let op = op.set_metadata(any);
        assert_eq!(
            as_metadata::<wkt::Timestamp>(&op),
            Some(wkt::Timestamp::clamp(123, 0))
        );
        assert_eq!(as_metadata::<wkt::Empty>(&op), None);
        Ok(())
    }
}
