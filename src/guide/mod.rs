//! Assembly of the LMS development guide document.
//!
//! [`build`] produces the finished [`Package`]: title page, eight numbered
//! sections and a closing section, in a fixed order. Apart from the date
//! line on the title page the output is the same on every run.

mod content;

use crate::docx::error::Result;
use crate::docx::package::Package;
use crate::docx::paragraph::ParagraphAlignment;
use chrono::Local;

/// File name the guide is saved under.
pub const OUTPUT_FILE_NAME: &str = "LMS_개발_가이드.docx";

/// Build the complete guide document.
pub fn build() -> Result<Package> {
    let mut package = Package::new();
    package.properties_mut().title = "대규모 프로젝트 개발 가이드".to_string();
    package.properties_mut().creator = "guide-doc".to_string();
    package.document_mut().section_mut().set_margins(1440);

    front_matter(&mut package)?;
    problems_section(&mut package)?;
    solution_section(&mut package)?;
    practical_guide_section(&mut package)?;
    backup_section(&mut package)?;
    work_order_section(&mut package)?;
    troubleshooting_section(&mut package)?;
    template_section(&mut package)?;
    golden_rules_section(&mut package)?;
    closing_section(&mut package)?;

    Ok(package)
}

/// Title, subtitle and the date line.
fn front_matter(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    let title = doc.add_heading("대규모 프로젝트 개발 가이드", 0)?;
    title.set_alignment(ParagraphAlignment::Center);

    let subtitle = doc.add_paragraph();
    subtitle
        .add_run_with_text("비개발자를 위한 체계적인 LMS 개발 관리 방법")
        .bold(true);
    subtitle.set_alignment(ParagraphAlignment::Center);
    doc.add_paragraph();

    let date_line = doc.add_paragraph();
    date_line.add_run_with_text(&format!(
        "작성일: {}",
        Local::now().format("%Y년 %m월 %d일")
    ));
    date_line.set_alignment(ParagraphAlignment::Right);
    doc.add_paragraph();

    Ok(())
}

fn problems_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("1. 현재 겪고 계신 문제점", 1)?;
    doc.add_paragraph_with_text("대규모 프로젝트를 진행하시면서 이런 어려움을 겪고 계시죠?");
    doc.add_paragraph();

    for problem in content::PROBLEMS {
        let item = doc.add_paragraph();
        item.set_bullet(0);
        item.add_run_with_text(problem);
    }

    doc.add_paragraph();
    doc.add_paragraph_with_text("이 문제들을 해결하기 위한 실용적인 방법을 알려드리겠습니다.");
    Ok(())
}

fn solution_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("2. 핵심 해결책: 레고 블록처럼 나누어 개발하기", 1)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text(
        "큰 건물을 한 번에 짓는 것보다 레고 블록을 하나씩 조립하는 것이 쉬운 것처럼, ",
    );
    doc.add_paragraph_with_text("LMS도 작은 부분으로 나누어 개발하면 훨씬 관리하기 쉬워집니다.");
    doc.add_paragraph();

    doc.add_heading("2-1. 폴더 정리하기 (서랍장 정리하듯이)", 2)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text("프로젝트 폴더를 이렇게 정리해보세요:");
    doc.add_paragraph();

    two_column_table(
        package,
        "LightGridAccent1",
        ("폴더 이름", "무엇을 넣을까요?"),
        &content::FOLDER_STRUCTURE,
    );

    package.document_mut().add_paragraph();
    Ok(())
}

fn practical_guide_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("3. 따라하기 쉬운 실전 가이드", 1)?;
    doc.add_paragraph();

    doc.add_heading("STEP 1: 프로젝트 상태 기록장 만들기", 2)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text(
        "메모장을 열고 \"프로젝트_현황.txt\" 파일을 만들어 이렇게 작성하세요:",
    );
    doc.add_paragraph();
    quote_block(
        package,
        "==== 우리 LMS 프로젝트 현황 ====\n",
        &content::STATUS_FILE_LINES,
    );
    package.document_mut().add_paragraph();

    let doc = package.document_mut();
    doc.add_heading("STEP 2: Claude와 효율적으로 대화하기", 2)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text("새로운 기능을 만들 때마다 이렇게 시작하세요:");
    doc.add_paragraph();
    quote_block(package, "대화 시작 예시:\n", &content::CONVERSATION_LINES);
    package.document_mut().add_paragraph();

    let doc = package.document_mut();
    doc.add_heading("STEP 3: 체크리스트로 검증하기", 2)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text("새 기능을 추가한 후에는 반드시 이것들을 확인하세요:");
    doc.add_paragraph();

    for item in content::CHECKLIST {
        let bullet = doc.add_paragraph();
        bullet.set_bullet(0);
        bullet.add_run_with_text(&format!("□ {}", item));
    }

    doc.add_paragraph();
    Ok(())
}

fn backup_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("4. 안전한 백업 전략", 1)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text("중요한 작업 전에는 반드시 백업하세요!");
    doc.add_paragraph();

    doc.add_heading("백업 폴더 만들기", 2)?;
    quote_block(package, "백업 폴더 예시:\n", &content::BACKUP_LINES);

    let doc = package.document_mut();
    doc.add_paragraph();
    doc.add_paragraph_with_text(
        "이렇게 하면 문제가 생겼을 때 언제든 이전 버전으로 돌아갈 수 있습니다.",
    );
    Ok(())
}

fn work_order_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("5. 추천하는 작업 순서", 1)?;
    doc.add_paragraph();

    for (i, (step, description)) in content::WORK_ORDER.iter().enumerate() {
        let para = doc.add_paragraph();
        para.add_run_with_text(&format!("{}단계. {}: ", i + 1, step))
            .bold(true);
        para.add_run_with_text(description);
    }

    doc.add_paragraph();
    Ok(())
}

fn troubleshooting_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("6. 자주 발생하는 문제와 해결법", 1)?;
    doc.add_paragraph();

    two_column_table(
        package,
        "LightListAccent1",
        ("문제 상황", "해결 방법"),
        &content::PROBLEMS_SOLUTIONS,
    );

    package.document_mut().add_paragraph();
    Ok(())
}

fn template_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("7. Claude에게 복사-붙여넣기할 템플릿", 1)?;
    doc.add_paragraph();
    doc.add_paragraph_with_text("아래 템플릿을 복사해서 사용하세요:");
    doc.add_paragraph();

    quote_block(
        package,
        "=== 새 기능 개발 요청 템플릿 ===\n\n",
        &content::REQUEST_TEMPLATE_LINES,
    );

    package.document_mut().add_paragraph();
    Ok(())
}

fn golden_rules_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("8. 성공적인 개발을 위한 황금 규칙", 1)?;
    doc.add_paragraph();

    for (i, rule) in content::GOLDEN_RULES.iter().enumerate() {
        let para = doc.add_paragraph();
        para.add_run_with_text(&format!("규칙 {}. ", i + 1)).bold(true);
        para.add_run_with_text(rule);
    }

    doc.add_paragraph();
    Ok(())
}

fn closing_section(package: &mut Package) -> Result<()> {
    let doc = package.document_mut();

    doc.add_heading("마치며", 1)?;
    doc.add_paragraph();
    for line in content::CLOSING {
        doc.add_paragraph_with_text(line);
    }
    doc.add_paragraph();
    doc.add_paragraph_with_text("프로젝트 진행하시면서 궁금한 점이 있으면 언제든 물어보세요!");
    doc.add_paragraph();
    doc.add_paragraph_with_text("화이팅! 🎯");
    Ok(())
}

/// Add a two-column table: a header row followed by one row per entry.
fn two_column_table(
    package: &mut Package,
    style_id: &str,
    header: (&str, &str),
    rows: &[(&str, &str)],
) {
    let doc = package.document_mut();
    let table = doc.add_table(1, 2);
    table.set_style(style_id);
    if let Some(cell) = table.cell(0, 0) {
        cell.set_text(header.0);
    }
    if let Some(cell) = table.cell(0, 1) {
        cell.set_text(header.1);
    }

    for (left, right) in rows {
        let row = table.add_row(2);
        if let Some(cell) = row.cell(0) {
            cell.set_text(left);
        }
        if let Some(cell) = row.cell(1) {
            cell.set_text(right);
        }
    }
}

/// Add a Quote-styled paragraph: a bold lead run followed by plain runs.
///
/// Line breaks inside the runs become `<w:br/>` elements, keeping the whole
/// example inside a single paragraph the way Word renders pasted snippets.
fn quote_block(package: &mut Package, lead: &str, lines: &[&str]) {
    let doc = package.document_mut();
    let para = doc.add_paragraph();
    para.set_style("Quote");
    para.add_run_with_text(lead).bold(true);
    for line in lines {
        para.add_run_with_text(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_succeeds() {
        let package = build().unwrap();
        assert!(package.document().paragraph_count() > 50);
        assert_eq!(package.document().table_count(), 2);
    }

    #[test]
    fn test_heading_counts() {
        let package = build().unwrap();
        let xml = package.document().to_xml().unwrap();
        assert_eq!(xml.matches("<w:pStyle w:val=\"Title\"/>").count(), 1);
        assert_eq!(xml.matches("<w:pStyle w:val=\"Heading1\"/>").count(), 9);
        assert_eq!(xml.matches("<w:pStyle w:val=\"Heading2\"/>").count(), 5);
    }

    #[test]
    fn test_table_row_counts() {
        let package = build().unwrap();
        let xml = package.document().to_xml().unwrap();

        let first = xml.find("<w:tbl>").unwrap();
        let second = xml[first + 1..].find("<w:tbl>").unwrap() + first + 1;
        let first_table = &xml[first..second];
        let second_table = &xml[second..];

        // header row plus six folder rows
        assert_eq!(first_table.matches("<w:tr>").count(), 7);
        // header row plus five troubleshooting rows
        assert_eq!(second_table.matches("<w:tr>").count(), 6);
    }

    #[test]
    fn test_bullet_items_in_order() {
        let package = build().unwrap();
        let xml = package.document().to_xml().unwrap();

        assert_eq!(xml.matches("<w:numPr>").count(), 9);

        let mut last = 0;
        for problem in content::PROBLEMS {
            let pos = xml.find(problem).unwrap();
            assert!(pos > last, "bullet out of order: {}", problem);
            last = pos;
        }
        for item in content::CHECKLIST {
            let needle = format!("□ {}", item);
            let pos = xml.find(&needle).unwrap();
            assert!(pos > last, "checklist item out of order: {}", item);
            last = pos;
        }
    }

    #[test]
    fn test_quote_blocks_are_styled() {
        let package = build().unwrap();
        let xml = package.document().to_xml().unwrap();
        assert_eq!(xml.matches("<w:pStyle w:val=\"Quote\"/>").count(), 4);
        assert!(xml.contains("==== 우리 LMS 프로젝트 현황 ===="));
        assert!(xml.contains("=== 새 기능 개발 요청 템플릿 ==="));
    }

    #[test]
    fn test_date_line_present() {
        let package = build().unwrap();
        let xml = package.document().to_xml().unwrap();
        let expected = format!("작성일: {}", Local::now().format("%Y년 %m월 %d일"));
        assert!(xml.contains(&expected));
    }
}
