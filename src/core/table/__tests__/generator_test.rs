use crate::core::table::generator::LutGenerator;
use crate::core::table::params::TableParams;
use approx::assert_abs_diff_eq;

#[test]
fn 기준_엔트리_테스트() {
    let generator = LutGenerator::reference();

    // 첫 엔트리: tanh(0.25) ≈ 0.244919 → 63
    let first = generator.entry(0);
    assert_eq!(first.input_value, 0.25);
    assert_abs_diff_eq!(first.real_output, 0.244919, epsilon = 1e-6);
    assert_eq!(first.encoded_output, 0x003F);

    // 마지막 엔트리: tanh(3.00) ≈ 0.995055 → 255
    let last = generator.entry(275);
    assert_eq!(last.input_value, 3.0);
    assert_abs_diff_eq!(last.real_output, 0.995055, epsilon = 1e-6);
    assert_eq!(last.encoded_output, 0x00FF);
}

#[test]
fn 잘못된_파라미터_테스트() {
    let mut params = TableParams::reference();
    params.entry_count = 0;
    assert!(LutGenerator::new(params).is_err(), "잘못된 파라미터로는 생성기를 만들 수 없음");
}

#[test]
fn 반복자_재시작_테스트() {
    let generator = LutGenerator::reference();

    // entries()는 호출할 때마다 처음부터 다시 순회 가능해야 함
    let first_pass: Vec<_> = generator.entries().collect();
    let second_pass: Vec<_> = generator.entries().collect();

    assert_eq!(first_pass.len(), 276);
    assert_eq!(first_pass, second_pass, "재시작한 순회는 같은 결과를 내야 함");
}

#[test]
fn 게으른_평가_테스트() {
    let generator = LutGenerator::reference();

    // 앞부분만 소비해도 동작해야 함
    let head: Vec<_> = generator.entries().take(3).collect();
    assert_eq!(head.len(), 3);
    assert_eq!(head[2].index, 2);
    assert_eq!(head[2].input_value, 0.25 + 2.0 * 0.01);
}

#[test]
fn 병렬_순서_보존_테스트() {
    let generator = LutGenerator::reference();

    let serial: Vec<_> = generator.entries().collect();
    let parallel = generator.entries_parallel();

    assert_eq!(serial, parallel, "병렬 생성도 인덱스 오름차순을 보존해야 함");
}

#[test]
fn 무작위_인덱스_순수성_테스트() {
    use rand::Rng;

    let generator = LutGenerator::reference();
    let mut rng = rand::thread_rng();

    // entry()는 순수 함수: 같은 인덱스는 언제나 같은 결과
    for _ in 0..32 {
        let index = rng.gen_range(0..276);
        assert_eq!(generator.entry(index), generator.entry(index));
        assert_eq!(generator.entry(index).input_value, 0.25 + index as f64 * 0.01);
    }
}
