// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merges partial handler results into one response.

use bizhelper_core::protocol::UpdateResponse;
use bizhelper_core::BizError;

/// Combines partial responses and handler errors, preserving order.
///
/// `success` is false if any partial failed or any error is present.
/// Messages are concatenated in partial order. Errors are rendered into a
/// single string as `errors: [first; second]`. Calling this with nothing to
/// merge is a routing bug and yields [`BizError::Internal`].
pub fn aggregate(
    partials: Vec<UpdateResponse>,
    errors: Vec<BizError>,
) -> Result<UpdateResponse, BizError> {
    if partials.is_empty() && errors.is_empty() {
        return Err(BizError::Internal(
            "aggregate called with no partial responses".into(),
        ));
    }

    let mut merged = UpdateResponse::ok(Vec::new());
    for partial in partials {
        merged.success &= partial.success;
        merged.messages.extend(partial.messages);
    }

    if !errors.is_empty() {
        merged.success = false;
        let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
        merged.error = Some(format!("errors: [{}]", rendered.join("; ")));
    }

    Ok(merged)
}
