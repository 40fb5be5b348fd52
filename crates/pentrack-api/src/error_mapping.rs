// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[must_use]
pub fn map_error(error: &ApiError) -> u16 {
    match error.code {
        ApiErrorCode::MalformedRequestBody | ApiErrorCode::ValidationFailed => 400,
        ApiErrorCode::Internal => 500,
    }
}
