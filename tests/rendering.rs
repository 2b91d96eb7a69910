use app_summary_pdf::{fonts, ContentBlock, ReportBuilder};
use sha2::{Digest, Sha256};

const SKIP_NOTE: &str =
    "bundled fonts missing. Set APP_SUMMARY_FONTS_DIR or install the DejaVu system fonts.";

fn render_summary_pdf() -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let bytes = ReportBuilder::app_summary()
        .render_to_bytes()
        .expect("render summary pdf");
    Some(bytes)
}

fn scrub_pdf(bytes: &[u8]) -> Vec<u8> {
    fn scrub_segment(data: &mut [u8], tag: &[u8], terminator: u8) {
        let mut index = 0;
        while index + tag.len() < data.len() {
            if data[index..].starts_with(tag) {
                let mut cursor = index + tag.len();
                while cursor < data.len() {
                    let byte = data[cursor];
                    if byte == terminator {
                        break;
                    }
                    if terminator == b')' {
                        data[cursor] = b'0';
                    } else if !matches!(byte, b'<' | b'>' | b' ' | b'\n' | b'\r' | b'\t') {
                        data[cursor] = b'0';
                    }
                    cursor += 1;
                }
                index = cursor;
            } else {
                index += 1;
            }
        }
    }

    fn scrub_xml(data: &mut [u8], start: &[u8], end: &[u8]) {
        let mut offset = 0;
        while offset + start.len() < data.len() {
            if let Some(start_pos) = data[offset..]
                .windows(start.len())
                .position(|window| window == start)
            {
                let start_index = offset + start_pos + start.len();
                if let Some(end_pos) = data[start_index..]
                    .windows(end.len())
                    .position(|window| window == end)
                {
                    for byte in &mut data[start_index..start_index + end_pos] {
                        if !matches!(*byte, b'<' | b'>' | b'/' | b' ' | b'\n' | b'\r' | b'\t') {
                            *byte = b'0';
                        }
                    }
                    offset = start_index + end_pos + end.len();
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    scrub_xml(&mut normalized, b"<xmp:CreateDate>", b"</xmp:CreateDate>");
    scrub_xml(&mut normalized, b"<xmp:ModifyDate>", b"</xmp:ModifyDate>");
    scrub_xml(
        &mut normalized,
        b"<xmp:MetadataDate>",
        b"</xmp:MetadataDate>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:DocumentID>",
        b"</xmpMM:DocumentID>",
    );
    scrub_xml(
        &mut normalized,
        b"<xmpMM:InstanceID>",
        b"</xmpMM:InstanceID>",
    );
    scrub_xml(&mut normalized, b"<xmpMM:VersionID>", b"</xmpMM:VersionID>");
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn renders_valid_pdf_signature() {
    let Some(bytes) = render_summary_pdf() else {
        eprintln!("Skipping renders_valid_pdf_signature: {SKIP_NOTE}");
        return;
    };
    assert!(!bytes.is_empty(), "rendered PDF should not be empty");
    assert!(
        bytes.starts_with(b"%PDF-"),
        "rendered bytes should carry the PDF signature"
    );
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_summary_pdf() else {
        eprintln!("Skipping rendering_is_deterministic: {SKIP_NOTE}");
        return;
    };
    let Some(bytes_b) = render_summary_pdf() else {
        eprintln!("Skipping rendering_is_deterministic: {SKIP_NOTE}");
        return;
    };

    let size_delta = bytes_a.len().abs_diff(bytes_b.len());
    assert!(
        size_delta <= 64,
        "PDF sizes should match within timestamp tolerance, differed by {size_delta} bytes"
    );

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);
    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}

#[test]
fn renders_every_block_variant() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping renders_every_block_variant: {SKIP_NOTE}");
        return;
    }

    let bytes = ReportBuilder::new()
        .with_blocks([
            ContentBlock::heading("Heading"),
            ContentBlock::body("Prose"),
            ContentBlock::bullets(["one", "two"]),
            ContentBlock::table([("key", "value"), ("other", "value")]),
            ContentBlock::Spacer(1.5),
        ])
        .render_to_bytes()
        .expect("render mixed-block document");

    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn writes_file_and_creates_parent_directories() {
    if !fonts::default_fonts_available() {
        eprintln!("Skipping writes_file_and_creates_parent_directories: {SKIP_NOTE}");
        return;
    }

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested/report/summary.pdf");

    ReportBuilder::app_summary()
        .write_to(&path)
        .expect("write summary pdf");

    let written = std::fs::read(&path).expect("read written pdf");
    assert!(written.starts_with(b"%PDF-"));
}

#[test]
fn fails_without_writing_when_parent_cannot_be_created() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("create blocking file");

    // The parent of the target path is a regular file, so directory creation
    // must fail before any rendering happens.
    let target = blocker.join("summary.pdf");
    let result = ReportBuilder::app_summary().write_to(&target);

    assert!(result.is_err(), "expected an I/O error");
    assert!(!target.exists(), "no file may be left behind on failure");
}
