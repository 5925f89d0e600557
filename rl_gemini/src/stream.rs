use crate::error::Error;
use crate::response::GenerateContentResponse;
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc::Receiver;
use tracing::{debug, error};

/// Decodes an `alt=sse` response body into text fragments.
///
/// Bytes are buffered until a line completes; `data: <json>` lines are
/// parsed as [`GenerateContentResponse`] and their candidate text is
/// forwarded the moment the line completes, never after the stream ends.
/// Blank lines and non-data lines are skipped.
pub fn sse_text_fragments(
    stream: impl Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
) -> Receiver<Result<String, Error>> {
    let mut stream = Box::pin(stream);
    let (tx, rx) = tokio::sync::mpsc::channel::<Result<String, Error>>(32);
    tokio::spawn(async move {
        let mut buffer = String::new();
        let mut pending: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(data) => data,
                Err(e) => {
                    error!("Error receiving chunk: {}", e);
                    let _ = tx.send(Err(Error::Http(e))).await;
                    break;
                }
            };

            pending.extend_from_slice(&chunk);
            let valid_len = match std::str::from_utf8(&pending) {
                Ok(_) => pending.len(),
                // A chunk may end mid code point; keep the tail for the
                // next read. Anything else is a corrupt stream.
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(e) => {
                    error!("Error converting chunk to string: {}", e);
                    let _ = tx.send(Err(Error::StreamDecode(e.to_string()))).await;
                    break;
                }
            };
            buffer.push_str(&String::from_utf8_lossy(&pending[..valid_len]));
            pending.drain(..valid_len);

            while let Some(pos) = buffer.find('\n') {
                let line = buffer[..pos].trim().to_string();
                // prepare next buffer
                buffer = buffer[pos + 1..].to_string();

                let Some(data) = line.strip_prefix("data:") else {
                    continue;
                };
                let data = data.trim();
                if data.is_empty() || data == "[DONE]" {
                    continue;
                }
                match serde_json::from_str::<GenerateContentResponse>(data) {
                    Ok(response) => {
                        let text = response.text();
                        if text.is_empty() {
                            continue;
                        }
                        if tx.send(Ok(text)).await.is_err() {
                            // receiver gone, caller disconnected
                            return;
                        }
                    }
                    Err(e) => {
                        debug!("Skipping undecodable stream event: {}", e);
                    }
                }
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn data_line(text: &str) -> Bytes {
        Bytes::from(format!(
            "data: {{\"candidates\":[{{\"content\":{{\"role\":\"model\",\"parts\":[{{\"text\":\"{text}\"}}]}}}}]}}\n\n"
        ))
    }

    async fn collect(rx: &mut Receiver<Result<String, Error>>) -> Vec<String> {
        let mut output = vec![];
        while let Some(fragment) = rx.recv().await {
            output.push(fragment.unwrap());
        }
        output
    }

    #[tokio::test]
    async fn fragments_come_out_in_emission_order() {
        let chunks = vec![
            Ok(data_line("Hello")),
            Ok(data_line(" there")),
            Ok(data_line("!")),
        ];
        let mut rx = sse_text_fragments(stream::iter(chunks));
        assert_eq!(collect(&mut rx).await, vec!["Hello", " there", "!"]);
    }

    #[tokio::test]
    async fn reassembles_events_split_across_chunks() {
        let event = data_line("split");
        let (left, right) = event.split_at(17);
        let chunks = vec![
            Ok(Bytes::copy_from_slice(left)),
            Ok(Bytes::copy_from_slice(right)),
        ];
        let mut rx = sse_text_fragments(stream::iter(chunks));
        assert_eq!(collect(&mut rx).await, vec!["split"]);
    }

    #[tokio::test]
    async fn skips_blank_and_non_data_lines() {
        let chunks = vec![
            Ok(Bytes::from(": keep-alive\n\n")),
            Ok(data_line("ok")),
            Ok(Bytes::from("data: [DONE]\n")),
        ];
        let mut rx = sse_text_fragments(stream::iter(chunks));
        assert_eq!(collect(&mut rx).await, vec!["ok"]);
    }

    #[tokio::test]
    async fn first_fragment_arrives_before_the_stream_ends() {
        // The tail of the stream never resolves, so receiving the first
        // fragment proves decoding is incremental.
        let head = stream::iter(vec![Ok(data_line("first"))]);
        let chunks = head.chain(stream::pending());
        let mut rx = sse_text_fragments(chunks);
        let first = rx.recv().await.unwrap().unwrap();
        assert_eq!(first, "first");
    }

    #[tokio::test]
    async fn corrupt_bytes_terminate_the_stream() {
        let chunks = vec![
            Ok(data_line("partial")),
            Ok(Bytes::from_static(&[0xff, 0xfe, 0xfd])),
            Ok(data_line("never")),
        ];
        let mut rx = sse_text_fragments(stream::iter(chunks));
        assert_eq!(rx.recv().await.unwrap().unwrap(), "partial");
        assert!(rx.recv().await.unwrap().is_err());
        assert!(rx.recv().await.is_none());
    }
}
