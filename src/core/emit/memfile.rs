//! 메모리 초기화 파일 및 바이너리 컨테이너 출력
//!
//! - `.mem`: `$readmemh`가 읽는 1워드/1줄 16진수 텍스트
//! - `.bin`: 매직 바이트 헤더 + 리틀엔디언 워드 시퀀스

use crate::core::emit::verilog::banner;
use crate::core::fixed::FixedPointFormat;
use crate::core::table::LutGenerator;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Write};

/// 바이너리 테이블 컨테이너 매직 바이트
pub const TABLE_MAGIC: u8 = 0xAC;

/// `$readmemh` 호환 텍스트 기록
///
/// 배너 주석 1줄 뒤에 인덱스 오름차순으로 1워드/1줄.
/// `$readmemh`는 `//` 주석을 허용한다.
pub fn write_memh<W: Write>(generator: &LutGenerator, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", banner(&generator.params))?;
    let digits = generator.params.format.hex_digits();
    for entry in generator.entries() {
        writeln!(writer, "{:0digits$X}", entry.encoded_output, digits = digits)?;
    }
    Ok(())
}

/// `.mem` 텍스트 파싱 (빈 줄과 `//` 주석 허용)
pub fn parse_memh(text: &str) -> Result<Vec<u64>, String> {
    let mut words = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let body = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        let body = body.trim();
        if body.is_empty() {
            continue;
        }
        let word = u64::from_str_radix(body, 16)
            .map_err(|e| format!("{}번째 줄 파싱 실패: {}", line_no + 1, e))?;
        words.push(word);
    }
    Ok(words)
}

/// 바이너리 컨테이너 직렬화
///
/// 헤더: magic(u8) | width(u8) | frac_bits(u8) | entry_count(u32 LE)
/// 본문: entry_count개의 워드, 각 (width+7)/8 바이트 리틀엔디언
pub fn serialize_binary(generator: &LutGenerator) -> Result<Vec<u8>, String> {
    let format = generator.params.format;
    let entry_count = generator.params.entry_count;
    if entry_count > u32::MAX as usize {
        return Err(format!("엔트리 수가 u32 범위를 초과: {}", entry_count));
    }
    let bytes_per_word = ((format.width() + 7) / 8) as usize;

    let mut buf = Vec::with_capacity(7 + entry_count * bytes_per_word);
    buf.write_u8(TABLE_MAGIC).map_err(|e| e.to_string())?;
    buf.write_u8(format.width() as u8).map_err(|e| e.to_string())?;
    buf.write_u8(format.frac_bits as u8).map_err(|e| e.to_string())?;
    buf.write_u32::<LittleEndian>(entry_count as u32)
        .map_err(|e| e.to_string())?;
    for entry in generator.entries() {
        buf.write_uint::<LittleEndian>(entry.encoded_output, bytes_per_word)
            .map_err(|e| e.to_string())?;
    }
    Ok(buf)
}

/// 바이너리 컨테이너 역직렬화: (포맷, 워드 목록)
pub fn deserialize_binary(data: &[u8]) -> Result<(FixedPointFormat, Vec<u64>), String> {
    let mut cursor = Cursor::new(data);

    let magic = cursor.read_u8().map_err(|e| e.to_string())?;
    if magic != TABLE_MAGIC {
        return Err(format!(
            "잘못된 매직 바이트: 0x{:02X} (기대값 0x{:02X})",
            magic, TABLE_MAGIC
        ));
    }
    let width = cursor.read_u8().map_err(|e| e.to_string())? as u32;
    let frac_bits = cursor.read_u8().map_err(|e| e.to_string())? as u32;
    if width == 0 || width > 64 || frac_bits + 1 > width {
        return Err(format!("잘못된 포맷 필드: width={}, frac={}", width, frac_bits));
    }
    let format = FixedPointFormat::from_width(width, frac_bits);

    let entry_count = cursor.read_u32::<LittleEndian>().map_err(|e| e.to_string())? as usize;
    let bytes_per_word = ((width + 7) / 8) as usize;

    // 선할당 상한은 헤더 선언이 아니라 실제 남은 본문 크기
    let remaining = data.len() - cursor.position() as usize;
    let mut words = Vec::with_capacity(entry_count.min(remaining / bytes_per_word));
    for _ in 0..entry_count {
        let word = cursor
            .read_uint::<LittleEndian>(bytes_per_word)
            .map_err(|e| e.to_string())?;
        words.push(word);
    }
    Ok((format, words))
}
