// src/core/net.rs
// Single-document HTTP(S) GET, plus a local-file source for offline runs.

use std::error::Error;
use std::fs;
use std::io::Read;

use crate::config::consts::MAX_BODY_BYTES;
use crate::config::options::{FetchOptions, Source};

/// GET `url` with the configured user agent and timeout; returns the body.
/// Non-2xx statuses, transport failures and bodies over `MAX_BODY_BYTES` are errors.
pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, Box<dyn Error>> {
    let agent = ureq::AgentBuilder::new()
        .timeout(opts.timeout)
        .user_agent(&opts.user_agent)
        .build();

    let resp = match agent.get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, resp)) => {
            return Err(format!("HTTP error: {} {} {}", code, resp.status_text(), url).into());
        }
        Err(e) => return Err(e.into()),
    };

    logd!("GET {} -> {} ({:?})", url, resp.status(), resp.header("Content-Type"));
    read_body(resp.into_reader(), MAX_BODY_BYTES)
        .map_err(|e| format!("{e} ({url})").into())
}

/// Read at most `limit` bytes as (lossy) UTF-8; anything longer is an error.
pub fn read_body<R: Read>(reader: R, limit: u64) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    reader.take(limit + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(format!("Response body exceeds the {limit}-byte limit").into());
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Fetch the document named by `opts.source`.
pub fn load_document(opts: &FetchOptions) -> Result<String, Box<dyn Error>> {
    match &opts.source {
        Source::Url(url) => http_get(url, opts),
        Source::File(path) => {
            logd!("Reading document from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}
