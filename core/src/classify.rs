//! Classification of transport completions into the uniform fetch result.

use crate::error::FetchError;
use crate::transport::{Download, TransportCompletion};

/// Classify one completion, in order of precedence: transport error,
/// missing response, non-2xx status, successful download.
pub fn classify(completion: TransportCompletion) -> Result<Download, FetchError> {
    if let Some(error) = completion.error {
        return Err(FetchError::Transport(error));
    }

    let Some(response) = completion.response else {
        return Err(FetchError::NoResponse);
    };

    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status {
            code: response.status,
            response,
        });
    }

    // A 2xx completion without a body location is folded into the
    // no-response case.
    match completion.location {
        Some(location) => Ok(Download { location, response }),
        None => Err(FetchError::NoResponse),
    }
}
