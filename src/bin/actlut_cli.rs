use actlut::core::emit::{memfile, verilog};
use actlut::core::table::{LutGenerator, TableParams};
use actlut::core::verify::verify_text;
use actlut::FixedPointFormat;
use clap::{Arg, ArgAction, Command};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{BufWriter, Write};
use std::process;

/// 이 개수 이상이면 파일 출력 시 진행 바를 띄움
const PROGRESS_THRESHOLD: usize = 10_000;

fn main() {
    env_logger::init();

    let matches = Command::new("Activation LUT CLI")
        .version("0.1.0")
        .about("하드웨어용 활성화 함수 고정소수점 LUT 생성/검증 CLI 도구")
        .subcommand(
            Command::new("generate")
                .about("tanh LUT 생성")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("출력 파일 (생략하면 표준 출력으로 테이블만 방출)")
                )
                .arg(
                    Arg::new("emit")
                        .long("emit")
                        .value_name("FORMAT")
                        .help("출력 형식 (verilog | memh | bin)")
                        .default_value("verilog")
                )
                .arg(
                    Arg::new("parallel")
                        .long("parallel")
                        .action(ArgAction::SetTrue)
                        .help("rayon으로 엔트리를 병렬 생성 (verilog 형식에만 적용)")
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_name("FILE")
                        .help("파라미터 JSON 파일 (지정 시 개별 플래그 무시)")
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .value_name("N")
                        .help("엔트리 수")
                        .default_value("276")
                )
                .arg(
                    Arg::new("start")
                        .long("start")
                        .value_name("X0")
                        .help("도메인 시작값")
                        .default_value("0.25")
                )
                .arg(
                    Arg::new("step")
                        .long("step")
                        .value_name("DX")
                        .help("입력 간격")
                        .default_value("0.01")
                )
                .arg(
                    Arg::new("int-bits")
                        .long("int-bits")
                        .value_name("BITS")
                        .help("정수부 비트 수")
                        .default_value("7")
                )
                .arg(
                    Arg::new("frac-bits")
                        .long("frac-bits")
                        .value_name("BITS")
                        .help("소수부 비트 수")
                        .default_value("8")
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .value_name("NAME")
                        .help("테이블 배열 이름")
                        .default_value("tanh_lut")
                )
                .arg(
                    Arg::new("index-pad")
                        .long("index-pad")
                        .value_name("WIDTH")
                        .help("인덱스 자리 맞춤 폭 (생략하면 엔트리 수에서 자동 결정)")
                )
        )
        .subcommand(
            Command::new("verify")
                .about("생성된 테이블 텍스트 검증")
                .arg(
                    Arg::new("table-file")
                        .required(true)
                        .help("검증할 테이블 파일 경로")
                )
                .arg(
                    Arg::new("save-report")
                        .long("save")
                        .short('s')
                        .value_name("FILE")
                        .help("검증 리포트를 JSON 파일로 저장")
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_name("FILE")
                        .help("파라미터 JSON 파일 (지정 시 개별 플래그 무시)")
                )
                .arg(Arg::new("count").long("count").value_name("N").default_value("276"))
                .arg(Arg::new("start").long("start").value_name("X0").default_value("0.25"))
                .arg(Arg::new("step").long("step").value_name("DX").default_value("0.01"))
                .arg(Arg::new("int-bits").long("int-bits").value_name("BITS").default_value("7"))
                .arg(Arg::new("frac-bits").long("frac-bits").value_name("BITS").default_value("8"))
                .arg(Arg::new("name").long("name").value_name("NAME").default_value("tanh_lut"))
                .arg(Arg::new("index-pad").long("index-pad").value_name("WIDTH"))
        )
        .subcommand(
            Command::new("info")
                .about("포맷과 도메인 구성 정보 확인")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_name("FILE")
                        .help("파라미터 JSON 파일 (지정 시 개별 플래그 무시)")
                )
                .arg(Arg::new("count").long("count").value_name("N").default_value("276"))
                .arg(Arg::new("start").long("start").value_name("X0").default_value("0.25"))
                .arg(Arg::new("step").long("step").value_name("DX").default_value("0.01"))
                .arg(Arg::new("int-bits").long("int-bits").value_name("BITS").default_value("7"))
                .arg(Arg::new("frac-bits").long("frac-bits").value_name("BITS").default_value("8"))
                .arg(Arg::new("name").long("name").value_name("NAME").default_value("tanh_lut"))
                .arg(Arg::new("index-pad").long("index-pad").value_name("WIDTH"))
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("generate", sub_matches)) => handle_generate(sub_matches),
        Some(("verify", sub_matches)) => handle_verify(sub_matches),
        Some(("info", sub_matches)) => handle_info(sub_matches),
        _ => {
            println!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ 오류: {}", e);
        process::exit(1);
    }
}

/// 설정 파일이 있으면 그것을, 없으면 개별 플래그를 파라미터로 변환
fn params_from_matches(matches: &clap::ArgMatches) -> Result<TableParams, Box<dyn std::error::Error>> {
    if let Some(config_path) = matches.get_one::<String>("config") {
        return Ok(TableParams::load(config_path)?);
    }

    let entry_count: usize = matches.get_one::<String>("count").unwrap().parse()?;
    let start_value: f64 = matches.get_one::<String>("start").unwrap().parse()?;
    let step_value: f64 = matches.get_one::<String>("step").unwrap().parse()?;
    let int_bits: u32 = matches.get_one::<String>("int-bits").unwrap().parse()?;
    let frac_bits: u32 = matches.get_one::<String>("frac-bits").unwrap().parse()?;
    let table_name = matches.get_one::<String>("name").unwrap().clone();
    let index_pad = match matches.get_one::<String>("index-pad") {
        Some(raw) => raw.parse()?,
        None => decimal_digits(entry_count.saturating_sub(1)).max(3),
    };

    let params = TableParams {
        entry_count,
        start_value,
        step_value,
        format: FixedPointFormat::new(int_bits, frac_bits),
        table_name,
        index_pad,
    };
    params.validate()?;
    Ok(params)
}

fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

fn handle_generate(matches: &clap::ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let params = params_from_matches(matches)?;
    let emit_format = matches.get_one::<String>("emit").unwrap().as_str();
    let output = matches.get_one::<String>("output");
    // 병렬 생성 경로는 verilog 방출에만 있음
    let parallel = matches.get_flag("parallel") && emit_format == "verilog";

    let generator = LutGenerator::new(params)?;

    match output {
        // 표준 출력 모드: 테이블 이외의 바이트는 내보내지 않음
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            match emit_format {
                "verilog" => write_verilog(&generator, parallel, false, &mut handle)?,
                "memh" => memfile::write_memh(&generator, &mut handle)?,
                "bin" => return Err("bin 형식은 --output <FILE>이 필요합니다".into()),
                other => return Err(format!("지원하지 않는 출력 형식: {}", other).into()),
            }
            handle.flush()?;
        }
        Some(path) => {
            println!("📝 LUT 생성 시작: {} ({} 형식)", path, emit_format);
            println!("   - 포맷: {}", generator.params.format.notation());
            println!(
                "   - 도메인: [{}, {}] (스텝 {})",
                generator.params.start_value,
                generator.params.end_value(),
                generator.params.step_value
            );
            println!("   - 엔트리: {}개", generator.params.entry_count);
            if parallel {
                println!("   - 병렬 생성: {}스레드", num_cpus::get());
            }

            match emit_format {
                "verilog" => {
                    let file = fs::File::create(path)?;
                    let mut writer = BufWriter::new(file);
                    let show_progress = generator.params.entry_count >= PROGRESS_THRESHOLD;
                    write_verilog(&generator, parallel, show_progress, &mut writer)?;
                    writer.flush()?;
                }
                "memh" => {
                    let file = fs::File::create(path)?;
                    let mut writer = BufWriter::new(file);
                    memfile::write_memh(&generator, &mut writer)?;
                    writer.flush()?;
                }
                "bin" => {
                    let data = memfile::serialize_binary(&generator)?;
                    fs::write(path, &data)?;
                }
                other => return Err(format!("지원하지 않는 출력 형식: {}", other).into()),
            }
            println!("✅ 생성 완료: {}", path);
        }
    }
    Ok(())
}

/// Verilog 테이블 기록: 병렬이면 엔트리를 미리 계산하고, 큰 테이블이면 진행 바 표시
fn write_verilog<W: Write>(
    generator: &LutGenerator,
    parallel: bool,
    show_progress: bool,
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "{}", verilog::banner(&generator.params))?;

    if parallel {
        for entry in generator.entries_parallel() {
            writeln!(writer, "{}", verilog::entry_line(&generator.params, &entry))?;
        }
        return Ok(());
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(generator.params.entry_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40}] {percent}% 엔트리 {pos}/{len} 생성 중")
                .unwrap(),
        );
        Some(pb)
    } else {
        None
    };

    for entry in generator.entries() {
        writeln!(writer, "{}", verilog::entry_line(&generator.params, &entry))?;
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = &pb {
        pb.finish();
    }
    Ok(())
}

fn handle_verify(matches: &clap::ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let table_path = matches.get_one::<String>("table-file").unwrap();
    let save_path = matches.get_one::<String>("save-report");
    let params = params_from_matches(matches)?;

    println!("🔍 테이블 검증: {}", table_path);

    let text = fs::read_to_string(table_path)?;
    let report = verify_text(&params, &text)?;
    report.print_summary();

    if let Some(path) = save_path {
        report.save(path)?;
        println!("💾 리포트 저장: {}", path);
    }

    if !report.passed {
        return Err("테이블이 반-ULP 정확도 한계를 위반했습니다".into());
    }
    Ok(())
}

fn handle_info(matches: &clap::ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let params = params_from_matches(matches)?;
    let format = params.format;
    let scale = format.scale();
    let bytes_per_word = ((format.width() + 7) / 8) as usize;

    println!("📋 === LUT 구성 정보 ===");
    println!("테이블 이름: {}", params.table_name);
    println!(
        "포맷: {} (전체 {}비트 = 부호 1 + 정수 {} + 소수 {})",
        format.notation(),
        format.width(),
        format.int_bits,
        format.frac_bits
    );
    println!(
        "표현 범위: [{}, {}]",
        format.min_scaled() as f64 / scale,
        format.max_scaled() as f64 / scale
    );
    println!("양자화 스텝: {:.8} (반-ULP 한계 {:.8})", format.ulp(), format.half_ulp());
    println!(
        "도메인: [{}, {}] (스텝 {}, {}개 엔트리)",
        params.start_value,
        params.end_value(),
        params.step_value,
        params.entry_count
    );
    println!("테이블 크기: {}바이트", params.entry_count * bytes_per_word);
    Ok(())
}
