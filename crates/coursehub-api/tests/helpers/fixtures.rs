//! Test fixtures: file blobs and multipart forms.

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;

pub const PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PPTX: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// PDF-looking payload of exactly `len` bytes.
pub fn create_test_pdf(len: usize) -> Vec<u8> {
    let header = b"%PDF-1.4\n";
    let mut data = Vec::with_capacity(len.max(header.len()));
    data.extend_from_slice(header);
    data.resize(len.max(header.len()), b'0');
    data.truncate(len);
    data
}

pub fn file_part(data: Vec<u8>, file_name: &str, mime_type: &str) -> Part {
    Part::bytes(Bytes::from(data))
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string())
}

/// Form with a single part under `field`.
pub fn single_file_form(
    field: &str,
    data: Vec<u8>,
    file_name: &str,
    mime_type: &str,
) -> MultipartForm {
    MultipartForm::new().add_part(field.to_string(), file_part(data, file_name, mime_type))
}

/// Form with one `files` part per entry.
pub fn batch_form(files: &[(&str, &str, Vec<u8>)]) -> MultipartForm {
    files
        .iter()
        .fold(MultipartForm::new(), |form, (name, mime, data)| {
            form.add_part("files", file_part(data.clone(), name, mime))
        })
}
