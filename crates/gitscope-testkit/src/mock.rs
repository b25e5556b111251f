//! Hand-rolled HTTP endpoints for behavior mockito cannot express

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

/// Body served by [`stalled_server`] once it stops stalling
pub const STALLED_BODY: &str = r#"{"total_count": 1, "items": [{"login": "late"}]}"#;

/// Starts a one-shot server that holds the response headers back for `delay`
///
/// Returns its base URL, usable as an API root. After the delay it answers
/// any path with 200 and [`STALLED_BODY`].
///
/// # Panics
///
/// Panics if no local port can be bound.
pub fn stalled_server(delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind local port");
    let addr = listener.local_addr().expect("Failed to read local address");

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = [0; 4096];
        stream.read(&mut request).ok();

        thread::sleep(delay);

        // The client has usually hung up by now
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            STALLED_BODY.len(),
            STALLED_BODY
        )
        .ok();
    });

    format!("http://{addr}")
}
