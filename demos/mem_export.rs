//! `.mem` / 바이너리 컨테이너 내보내기 데모
//!
//! 임시 디렉토리에 두 형식을 저장한 뒤 다시 읽어 워드가 보존되는지 확인한다

use actlut::core::emit::memfile::{deserialize_binary, parse_memh, serialize_binary, write_memh};
use actlut::core::table::LutGenerator;
use std::fs;

fn main() -> anyhow::Result<()> {
    println!("=== 메모리 파일 내보내기 데모 ===\n");

    let generator = LutGenerator::reference();
    let expected: Vec<u64> = generator.entries().map(|e| e.encoded_output).collect();
    let dir = tempfile::tempdir()?;

    // 1. $readmemh용 .mem 텍스트
    println!("1. .mem 텍스트 내보내기");
    let mem_path = dir.path().join("tanh_lut.mem");
    let mut mem_buf: Vec<u8> = Vec::new();
    write_memh(&generator, &mut mem_buf)?;
    fs::write(&mem_path, &mem_buf)?;
    println!("  📄 저장: {:?} ({}바이트)", mem_path, mem_buf.len());

    let words = parse_memh(&fs::read_to_string(&mem_path)?).map_err(anyhow::Error::msg)?;
    if words != expected {
        return Err(anyhow::anyhow!(".mem 왕복에서 워드가 달라졌습니다"));
    }
    println!("  ✅ 재파싱 일치: {}워드", words.len());

    // 2. 바이너리 컨테이너
    println!("\n2. 바이너리 컨테이너 내보내기");
    let bin_path = dir.path().join("tanh_lut.bin");
    let data = serialize_binary(&generator).map_err(anyhow::Error::msg)?;
    fs::write(&bin_path, &data)?;
    println!("  📦 저장: {:?} ({}바이트)", bin_path, data.len());

    let (format, decoded) = deserialize_binary(&fs::read(&bin_path)?).map_err(anyhow::Error::msg)?;
    if format != generator.params.format {
        return Err(anyhow::anyhow!("컨테이너 헤더의 포맷이 달라졌습니다"));
    }
    if decoded != expected {
        return Err(anyhow::anyhow!("컨테이너 왕복에서 워드가 달라졌습니다"));
    }
    println!("  ✅ 역직렬화 일치: {} / {}워드", format.notation(), decoded.len());

    Ok(())
}
