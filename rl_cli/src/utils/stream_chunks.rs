use bytes::Bytes;
use futures_util::{Stream, StreamExt};

/// Forwards response body chunks as they arrive, preserving order.
/// A chunk may end mid code point; the tail carries over to the next read.
pub fn stream_chunks(
    stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
) -> tokio::sync::mpsc::Receiver<String> {
    let mut stream = Box::pin(stream);
    let (tx, rx) = tokio::sync::mpsc::channel::<String>(32);
    tokio::spawn(async move {
        let mut pending: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("Error receiving chunk: {}", e);
                    break;
                }
            };

            pending.extend_from_slice(&chunk);
            let valid_len = match std::str::from_utf8(&pending) {
                Ok(_) => pending.len(),
                Err(e) => e.valid_up_to(),
            };
            if valid_len == 0 {
                continue;
            }
            let text = String::from_utf8_lossy(&pending[..valid_len]).into_owned();
            pending.drain(..valid_len);
            if tx.send(text).await.is_err() {
                break;
            }
        }
    });
    rx
}

#[tokio::test]
async fn test_stream_chunks() {
    use futures_util::stream;

    // "é" is 0xc3 0xa9; split it across two chunks
    let data_chunks = vec![
        Ok(Bytes::from("Hel")),
        Ok(Bytes::from_static(&[b'l', b'o', b' ', 0xc3])),
        Ok(Bytes::from_static(&[0xa9, b'!'])),
    ];

    let mock_stream = stream::iter(data_chunks);

    let mut rx = stream_chunks(mock_stream);

    let mut output = String::new();
    while let Some(chunk) = rx.recv().await {
        output.push_str(&chunk);
    }

    assert_eq!(output, "Hello é!");
}

#[tokio::test]
async fn test_stream_chunks_preserves_order() {
    use futures_util::stream;

    let data_chunks = vec![
        Ok(Bytes::from("one ")),
        Ok(Bytes::from("two ")),
        Ok(Bytes::from("three")),
    ];

    let mut rx = stream_chunks(stream::iter(data_chunks));

    let mut output = vec![];
    while let Some(chunk) = rx.recv().await {
        output.push(chunk);
    }

    assert_eq!(output, vec!["one ", "two ", "three"]);
}
