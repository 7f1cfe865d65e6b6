use std::io::Read;

const USER_AGENT: &str = concat!("gh-activity/", env!("CARGO_PKG_VERSION"));

/// Cap on the bytes read from the feed; one page of events is far smaller.
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Fetch the events feed at `url` and return the full response body.
///
/// Transport failures are reported on stderr and return `None`; callers
/// treat absence as "no data." The HTTP status code is not inspected, so
/// a non-2xx body is still read and returned. The response reader is
/// scoped to this function, releasing the connection on every exit path.
pub fn fetch_activity(url: &str) -> Option<Vec<u8>> {
    let response = match ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .set("Accept", "application/vnd.github+json")
        .call()
    {
        Ok(response) => response,
        // Status errors still carry a readable body
        Err(ureq::Error::Status(_, response)) => response,
        Err(err) => {
            eprintln!("Error calling github api: {}", err);
            return None;
        }
    };

    let mut body = Vec::new();
    match response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_end(&mut body)
    {
        Ok(_) => Some(body),
        Err(err) => {
            eprintln!("Error reading github api response: {}", err);
            None
        }
    }
}
