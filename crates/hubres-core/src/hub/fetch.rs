//! Single blocking GET against the hub.
//!
//! Uses the curl crate (libcurl). Sends no custom headers, follows redirects,
//! never retries. Runs in the current thread; call from `spawn_blocking` if
//! used from async code.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ResolveError;

/// Host-supplied limits for one fetch. Both default to "none".
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Total time allowed for the transfer.
    pub deadline: Option<Duration>,
    /// When set to true the transfer is aborted from the progress callback.
    pub abort: Option<Arc<AtomicBool>>,
}

/// Performs the GET and returns the fully drained body.
///
/// Any status other than 200 fails with `NotFound`; the body is discarded
/// unread in that case. The curl handle is dropped on every return path,
/// releasing the connection.
pub fn fetch_document(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, ResolveError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(deadline) = opts.deadline {
        easy.timeout(deadline)?;
    }
    if opts.abort.is_some() {
        easy.progress(true)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        if let Some(abort) = opts.abort.as_ref() {
            // Returning false makes libcurl stop with CURLE_ABORTED_BY_CALLBACK.
            transfer.progress_function(move |_, _, _, _| !abort.load(Ordering::Relaxed))?;
        }
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "hub responded");
    if status != 200 {
        return Err(ResolveError::NotFound {
            url: url.to_string(),
            status,
        });
    }
    Ok(body)
}
