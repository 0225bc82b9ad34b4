//! Text extraction for uploaded résumé files (PDF, DOCX, plain text).
//!
//! This sits in front of the analysis engine: it only turns bytes into a
//! string. All of it is blocking and should run off the async runtime.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Serialize;
use thiserror::Error;
use zip::ZipArchive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
    Unknown,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl DocumentKind {
    /// Picks the kind from the declared content type, falling back to the
    /// file extension.
    pub fn detect(file_name: Option<&str>, content_type: Option<&str>) -> Self {
        let by_mime = match content_type.map(|c| c.split(';').next().unwrap_or("").trim()) {
            Some("application/pdf") => Some(DocumentKind::Pdf),
            Some(DOCX_MIME) => Some(DocumentKind::Docx),
            Some("text/plain") => Some(DocumentKind::Text),
            _ => None,
        };
        if let Some(kind) = by_mime {
            return kind;
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") => DocumentKind::Docx,
            Some("txt") => DocumentKind::Text,
            _ => DocumentKind::Unknown,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("could not read DOCX: {0}")]
    Docx(String),

    #[error("unsupported file format; upload a PDF, DOCX, or TXT file")]
    UnsupportedFormat,
}

/// Extracts trimmed plain text from `bytes`.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
        DocumentKind::Docx => extract_docx(bytes)?,
        DocumentKind::Text => String::from_utf8_lossy(bytes).into_owned(),
        // Best effort for legacy or unlabeled files: accept anything that is valid UTF-8.
        DocumentKind::Unknown => std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| ExtractionError::UnsupportedFormat)?,
    };
    Ok(text.trim().to_string())
}

/// Reads `word/document.xml` and flattens its runs: one line per paragraph,
/// tabs and explicit breaks preserved.
fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::Docx(e.to_string()))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut reader = Reader::from_str(&xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::Text(e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                text.push_str(&run);
            }
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractionError::Docx(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn make_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Skills:</w:t><w:tab/><w:t xml:space="preserve">Rust &amp; Python</w:t></w:r></w:p>
    <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>Line two</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect(Some("resume"), Some("application/pdf")),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(None, Some("text/plain; charset=utf-8")),
            DocumentKind::Text
        );
        assert_eq!(
            DocumentKind::detect(None, Some(DOCX_MIME)),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect(Some("cv.DOCX"), Some("application/octet-stream")),
            DocumentKind::Docx
        );
        assert_eq!(DocumentKind::detect(Some("cv.pdf"), None), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect(Some("cv.txt"), None), DocumentKind::Text);
        assert_eq!(DocumentKind::detect(Some("cv.doc"), None), DocumentKind::Unknown);
        assert_eq!(DocumentKind::detect(None, None), DocumentKind::Unknown);
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = extract_text(DocumentKind::Text, b"  \nJane Doe\nEngineer\n\n").unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_unknown_accepts_utf8_only() {
        assert_eq!(
            extract_text(DocumentKind::Unknown, "résumé".as_bytes()).unwrap(),
            "résumé"
        );
        assert!(matches!(
            extract_text(DocumentKind::Unknown, &[0xff, 0xfe, 0x00]),
            Err(ExtractionError::UnsupportedFormat)
        ));
    }

    #[test]
    fn test_docx_paragraphs_tabs_and_breaks() {
        let bytes = make_docx(DOCUMENT_XML);
        let text = extract_text(DocumentKind::Docx, &bytes).unwrap();
        assert_eq!(text, "Jane Doe\nSkills:\tRust & Python\nLine one\nLine two");
    }

    #[test]
    fn test_docx_without_document_part_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        assert!(matches!(
            extract_text(DocumentKind::Docx, &bytes),
            Err(ExtractionError::Docx(_))
        ));
    }

    #[test]
    fn test_garbage_pdf_is_an_error() {
        assert!(matches!(
            extract_text(DocumentKind::Pdf, b"definitely not a pdf"),
            Err(ExtractionError::Pdf(_))
        ));
    }
}
