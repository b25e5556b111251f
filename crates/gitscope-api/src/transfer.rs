//! Blocking HTTP transfers with a cancellable progress callback

use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::io::{self, Read};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Size of each body read; the progress callback runs once per chunk
pub const CHUNK_SIZE: usize = 8192;

/// Transfer state handed to the progress callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Body bytes received so far
    pub received: u64,
    /// Content length advertised by the server, once headers arrived
    pub total: Option<u64>,
}

/// What the progress callback wants the transfer to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Continue,
    Abort,
}

/// A completed transfer
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub body: String,
}

/// Outcome of [`execute`]
#[derive(Debug)]
pub enum Transfer {
    Completed(Response),
    /// The progress callback asked to stop; no body is available
    Aborted,
}

/// Builds HTTP client with the given user agent
///
/// # Arguments
///
/// * `user_agent` - Value of the `User-Agent` header on every request
/// * `timeout` - Request timeout; `None` keeps reqwest's default
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(user_agent: &str, timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Interval at which the progress callback runs while the transfer waits
pub const TICK: Duration = Duration::from_millis(50);

/// What the transfer worker reports back
enum Event {
    Headers { status: StatusCode, total: Option<u64> },
    Chunk(Vec<u8>),
    Finished,
    Failed(TransferError),
}

/// Issues one GET and streams the body, consulting `progress` on every tick
///
/// The request runs on a worker thread. `progress` runs on the calling
/// thread: before the request is sent, every [`TICK`] while waiting, once the
/// response headers are in, and after every chunk. Returning [`Next::Abort`]
/// from any tick yields [`Transfer::Aborted`] right away; the worker is left
/// to finish or time out on its own and its output is discarded.
///
/// The response status is not checked here.
///
/// # Errors
///
/// Returns error if the request cannot be sent or the body cannot be read
pub fn execute<F>(client: &Client, url: &Url, mut progress: F) -> Result<Transfer, TransferError>
where
    F: FnMut(&Progress) -> Next,
{
    let mut state = Progress {
        received: 0,
        total: None,
    };

    if progress(&state) == Next::Abort {
        return Ok(Transfer::Aborted);
    }

    let (tx, rx) = mpsc::channel();
    let worker_client = client.clone();
    let worker_url = url.clone();
    thread::Builder::new()
        .name("gitscope-transfer".to_string())
        .spawn(move || fetch(&worker_client, worker_url, &tx))?;

    let mut status = None;
    let mut body = Vec::new();

    loop {
        match rx.recv_timeout(TICK) {
            Ok(Event::Headers { status: s, total }) => {
                status = Some(s);
                state.total = total;
            }
            Ok(Event::Chunk(bytes)) => {
                state.received += bytes.len() as u64;
                body.extend_from_slice(&bytes);
            }
            Ok(Event::Finished) => break,
            Ok(Event::Failed(err)) => return Err(err),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(TransferError::Io(io::Error::other(
                    "transfer worker stopped without a result",
                )));
            }
        }

        if progress(&state) == Next::Abort {
            return Ok(Transfer::Aborted);
        }
    }

    let status = status.ok_or_else(|| {
        TransferError::Io(io::Error::other("response ended before its headers"))
    })?;

    Ok(Transfer::Completed(Response {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    }))
}

/// Worker side of [`execute`]: sends, then streams the body in chunks
///
/// A failed send on `tx` means the caller aborted, so the worker stops.
fn fetch(client: &Client, url: Url, tx: &Sender<Event>) {
    let mut response = match client.get(url).send() {
        Ok(response) => response,
        Err(err) => {
            tx.send(Event::Failed(err.into())).ok();
            return;
        }
    };

    let headers = Event::Headers {
        status: response.status(),
        total: response.content_length(),
    };
    if tx.send(headers).is_err() {
        return;
    }

    let mut chunk = [0; CHUNK_SIZE];
    loop {
        let event = match response.read(&mut chunk) {
            Ok(0) => Event::Finished,
            Ok(bytes_read) => Event::Chunk(chunk[..bytes_read].to_vec()),
            Err(err) => Event::Failed(err.into()),
        };
        let last = !matches!(event, Event::Chunk(_));
        if tx.send(event).is_err() || last {
            return;
        }
    }
}

/// Transport-level failures
#[derive(Debug, Error)]
pub enum TransferError {
    /// Request could not be sent or the connection broke
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// I/O error while reading the body
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
