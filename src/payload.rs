//! Multipart request body assembly.
//!
//! The body is assembled by hand with a fixed boundary token so that the
//! declared Content-Length and the boundary named in the Content-Type header
//! can be checked against the wire bytes exactly.

/// Boundary token used both in the Content-Type header and the body delimiters.
pub const BOUNDARY: &str = "----WebKitFormBoundary7MA4YWxkTrZu0gW";

/// Synthetic MP4 header bytes (`ftyp` and `moov` box prefixes). Enough to
/// look like an MP4 to a server that sniffs the container type; not a
/// playable file.
pub const FAKE_MP4: &[u8] =
    b"\x00\x00\x00\x20ftypmp41\x00\x00\x00\x00mp41isom\x00\x00\x00\x28moov";

/// A `multipart/form-data` body carrying a single file field.
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Assemble the body for one file field. The boundary must not occur
    /// inside `content`.
    pub fn file_field(
        boundary: &str,
        name: &str,
        filename: &str,
        mime: &str,
        content: &[u8],
    ) -> Self {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        bytes.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        bytes.extend_from_slice(format!("Content-Type: {mime}\r\n\r\n").as_bytes());
        bytes.extend_from_slice(content);
        bytes.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Self {
            boundary: boundary.to_string(),
            bytes,
        }
    }

    /// Exact byte length of the assembled body, computed after assembly.
    /// This is the value the Content-Length header must carry.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Content-Type header value carrying the same boundary token embedded in
    /// the body's delimiter lines.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// The fixed upload body: field `video`, filename `test-video.mp4`.
pub fn video_body() -> MultipartBody {
    MultipartBody::file_field(BOUNDARY, "video", "test-video.mp4", "video/mp4", FAKE_MP4)
}
