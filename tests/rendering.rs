use serde_json::json;
use sha2::{Digest, Sha256};
use tracking_report::compose::{build_document, Institution};
use tracking_report::{fonts, render_pdf, ReportKind, ReportPayload};

fn render_sample_pdf() -> Option<Vec<u8>> {
    if !fonts::default_fonts_available() {
        return None;
    }

    let payload = ReportPayload::from_value(json!({
        "id": "SM-2024-014",
        "title": "DISPOSITION SHEET",
        "refNumber": "005/U/2024",
        "sent": "2024-01-30",
        "sender": "Finance Dept",
        "subject": "Budget revision",
        "received": "2024-02-01",
        "deadline": "2024-02-10",
        "archive": true,
        "agenda": "A-17",
        "filename": "scan.pdf",
        "archiveCode": "K3",
        "expeditions": [
            { "date": "2024-02-01", "name": "Registry", "type": 2, "read": true },
            { "date": "2024-02-02", "name": "Partner Co", "type": 1, "read": "2024-02-03" }
        ]
    }))
    .expect("parse sample payload");

    let institution = Institution::new(
        "LAMONGAN GENERAL HOSPITAL",
        "76 Jaksa Agung Suprapto St, Lamongan",
        "Phone 0322-322834",
    );
    let tree = build_document(payload, ReportKind::IncomingMail, &institution)
        .expect("build sample document tree");
    let bytes = render_pdf(&tree).expect("render sample pdf");

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

    let mut normalized = bytes.to_vec();
    scrub_segment(&mut normalized, b"/CreationDate(", b')');
    scrub_segment(&mut normalized, b"/ModDate(", b')');
    scrub_segment(&mut normalized, b"/ID[", b']');
    scrub_segment(&mut normalized, b"/Producer(", b')');
    normalized
}

fn normalized_hash(bytes: &[u8]) -> [u8; 32] {
    let normalized = scrub_pdf(bytes);
    let digest = Sha256::digest(&normalized);
    digest.into()
}

#[test]
fn renders_non_empty_output() {
    let Some(bytes) = render_sample_pdf() else {
        eprintln!(
            "Skipping renders_non_empty_output: fonts missing. Set {} or copy fonts into assets/fonts.",
            fonts::FONTS_DIR_ENV
        );
        return;
    };
    assert!(
        !bytes.is_empty(),
        "rendered PDF should contain at least a header"
    );
}

#[test]
fn rendering_is_deterministic() {
    let Some(bytes_a) = render_sample_pdf() else {
        eprintln!(
            "Skipping rendering_is_deterministic: fonts missing. Set {} or copy fonts into assets/fonts.",
            fonts::FONTS_DIR_ENV
        );
        return;
    };
    let Some(bytes_b) = render_sample_pdf() else {
        eprintln!(
            "Skipping rendering_is_deterministic: fonts missing. Set {} or copy fonts into assets/fonts.",
            fonts::FONTS_DIR_ENV
        );
        return;
    };

    assert_eq!(bytes_a.len(), bytes_b.len(), "PDF sizes should match");

    let hash_a = normalized_hash(&bytes_a);
    let hash_b = normalized_hash(&bytes_b);

    assert_eq!(
        hash_a, hash_b,
        "PDF renders must be deterministic after metadata normalization"
    );
}
