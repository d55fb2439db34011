//! Response rendering: status line, header block, body.

use std::io::Write;

use anyhow::Result;

/// Everything collected from one request/response exchange.
#[derive(Debug)]
pub struct UploadReport {
    pub status: u16,
    /// Canonical reason phrase; empty when the status code has none.
    pub reason: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl UploadReport {
    /// Write the status line, headers, and body to `out`. A body that parses
    /// as JSON is pretty-printed; anything else is written verbatim.
    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        if self.reason.is_empty() {
            writeln!(out, "Status: {}", self.status)?;
        } else {
            writeln!(out, "Status: {} {}", self.status, self.reason)?;
        }
        writeln!(out, "Headers:")?;
        for (name, value) in &self.headers {
            writeln!(out, "  {}: {}", name, value)?;
        }
        writeln!(out)?;
        writeln!(out, "Body:")?;
        writeln!(out, "{}", pretty_or_raw(&self.body))?;
        Ok(())
    }
}

/// Pretty-print `body` when it is valid JSON, otherwise return it unchanged.
pub fn pretty_or_raw(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(body: &str) -> UploadReport {
        UploadReport {
            status: 200,
            reason: "OK".to_string(),
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn json_body_is_pretty_printed() {
        assert_eq!(
            pretty_or_raw(r#"{"id":"abc123"}"#),
            "{\n  \"id\": \"abc123\"\n}"
        );
    }

    #[test]
    fn invalid_json_falls_back_to_raw_text() {
        assert_eq!(pretty_or_raw("invalid file"), "invalid file");
        assert_eq!(pretty_or_raw(""), "");
    }

    #[test]
    fn render_writes_status_headers_and_body() {
        let mut out = Vec::new();
        report("hello").render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Status: 200 OK\nHeaders:\n  content-type: text/plain\n\nBody:\nhello\n"
        );
    }

    #[test]
    fn status_without_reason_renders_bare_code() {
        let mut r = report("x");
        r.status = 599;
        r.reason.clear();

        let mut out = Vec::new();
        r.render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Status: 599\n"));
    }
}
