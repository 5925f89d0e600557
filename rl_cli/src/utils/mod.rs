pub mod stream_chunks;
