pub mod generate_text_request;
