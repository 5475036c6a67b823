//! End-to-end tests for the generated guide document.

use guide_doc::guide;
use std::io::Read;

fn document_xml(bytes: Vec<u8>) -> String {
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();
    xml
}

#[test]
fn save_creates_readable_docx() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(guide::OUTPUT_FILE_NAME);

    let package = guide::build().unwrap();
    package.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // ZIP local file header signature
    assert_eq!(&bytes[..4], b"PK\x03\x04");

    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut names: Vec<_> = archive.file_names().map(String::from).collect();
    names.sort();
    assert_eq!(
        names,
        [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/document.xml",
            "word/numbering.xml",
            "word/styles.xml",
        ]
    );
}

#[test]
fn document_has_expected_outline() {
    let bytes = guide::build().unwrap().to_bytes().unwrap();
    let xml = document_xml(bytes);

    assert_eq!(xml.matches("<w:pStyle w:val=\"Title\"/>").count(), 1);
    assert_eq!(xml.matches("<w:pStyle w:val=\"Heading1\"/>").count(), 9);
    assert_eq!(xml.matches("<w:pStyle w:val=\"Heading2\"/>").count(), 5);

    // Section headings appear in document order.
    let headings = [
        "대규모 프로젝트 개발 가이드",
        "1. 현재 겪고 계신 문제점",
        "2. 핵심 해결책: 레고 블록처럼 나누어 개발하기",
        "3. 따라하기 쉬운 실전 가이드",
        "4. 안전한 백업 전략",
        "5. 추천하는 작업 순서",
        "6. 자주 발생하는 문제와 해결법",
        "7. Claude에게 복사-붙여넣기할 템플릿",
        "8. 성공적인 개발을 위한 황금 규칙",
        "마치며",
    ];
    let mut last = 0;
    for heading in headings {
        let pos = xml.find(heading).unwrap_or_else(|| panic!("missing heading: {}", heading));
        assert!(pos >= last, "heading out of order: {}", heading);
        last = pos;
    }
}

#[test]
fn tables_have_header_and_body_rows() {
    let bytes = guide::build().unwrap().to_bytes().unwrap();
    let xml = document_xml(bytes);

    assert_eq!(xml.matches("<w:tbl>").count(), 2);

    let first = xml.find("<w:tbl>").unwrap();
    let second = xml[first + 1..].find("<w:tbl>").unwrap() + first + 1;

    let folder_table = &xml[first..second];
    assert!(folder_table.contains("<w:tblStyle w:val=\"LightGridAccent1\"/>"));
    assert_eq!(folder_table.matches("<w:tr>").count(), 7);
    assert!(folder_table.contains("폴더 이름"));
    assert!(folder_table.contains("📁 핵심기능"));
    assert!(folder_table.contains("📁 백업폴더"));

    let trouble_table = &xml[second..];
    assert!(trouble_table.contains("<w:tblStyle w:val=\"LightListAccent1\"/>"));
    assert_eq!(trouble_table.matches("<w:tr>").count(), 6);
    assert!(trouble_table.contains("문제 상황"));
    assert!(trouble_table.contains("대화가 너무 길어졌어요"));
}

#[test]
fn bullet_lists_use_numbering() {
    let bytes = guide::build().unwrap().to_bytes().unwrap();
    let xml = document_xml(bytes);

    // Four problem bullets plus five checklist bullets.
    assert_eq!(xml.matches("<w:numPr>").count(), 9);
    assert_eq!(xml.matches("<w:numId w:val=\"1\"/>").count(), 9);
    assert!(xml.contains("□ 로그인이 여전히 잘 되나요?"));
}

#[test]
fn output_is_deterministic() {
    let first = guide::build().unwrap().to_bytes().unwrap();
    let second = guide::build().unwrap().to_bytes().unwrap();
    // Identical as long as both builds observe the same local date.
    assert_eq!(first, second);
}

#[test]
fn quote_blocks_preserve_line_structure() {
    let bytes = guide::build().unwrap().to_bytes().unwrap();
    let xml = document_xml(bytes);

    assert_eq!(xml.matches("<w:pStyle w:val=\"Quote\"/>").count(), 4);
    assert!(xml.contains("==== 우리 LMS 프로젝트 현황 ===="));
    assert!(xml.contains("대화 시작 예시:"));
    assert!(xml.contains("백업 폴더 예시:"));
    assert!(xml.contains("=== 새 기능 개발 요청 템플릿 ==="));
    // Multi-line examples stay in one paragraph, broken with <w:br/>.
    assert!(xml.matches("<w:br/>").count() > 30);
}
