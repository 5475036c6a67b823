use guide_doc::guide;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let package = guide::build()?;

    let output_path = std::env::current_dir()?.join(guide::OUTPUT_FILE_NAME);
    package.save(&output_path)?;

    println!("문서가 성공적으로 생성되었습니다: {}", output_path.display());
    Ok(())
}
