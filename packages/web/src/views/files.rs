//! Reading a picked file out of a form event, for the multipart uploads
//! (assignment submissions, transfer receipts, profile photos).

use dioxus::prelude::*;

/// The first file attached to the event: `(filename, content type, bytes)`.
pub(crate) async fn first_file(evt: &FormEvent) -> Option<(String, String, Vec<u8>)> {
    let engine = evt.files()?;
    let name = engine.files().into_iter().next()?;
    let bytes = engine.read_file(&name).await?;
    let mime = mime_for(&name).to_string();
    Some((name, mime, bytes))
}

/// Content type from the filename extension. The backend only stores the
/// upload, so an imprecise type degrades to `application/octet-stream`.
pub(crate) fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Receipts must be an image or a PDF; anything else is rejected before any
/// network traffic.
pub(crate) fn receipt_type_allowed(content_type: &str) -> bool {
    content_type.starts_with("image/") || content_type == "application/pdf"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_follows_extension_case_insensitively() {
        assert_eq!(mime_for("receipt.PDF"), "application/pdf");
        assert_eq!(mime_for("photo.jpeg"), "image/jpeg");
        assert_eq!(mime_for("notes"), "application/octet-stream");
    }

    #[test]
    fn receipts_accept_images_and_pdf_only() {
        assert!(receipt_type_allowed("image/png"));
        assert!(receipt_type_allowed("application/pdf"));
        assert!(!receipt_type_allowed("application/zip"));
        assert!(!receipt_type_allowed("text/plain"));
    }
}
