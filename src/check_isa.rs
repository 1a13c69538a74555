#[test]
fn check_isa_level() {
    use crate::dispatch::{tier_of, IsaLevel, Op, Tier};
    use crate::runtime_detection::detect_host_isa;
    let isa = IsaLevel::compiled();
    println!("Compiled ISA Level: {:?}, host: {:?}", isa, detect_host_isa());
    match tier_of::<f32, 8>(Op::Add) {
        Tier::Native => assert!(isa >= IsaLevel::Avx),
        _ => println!("WARNING: f32x8 add is not native. Benchmark results will be split or scalar."),
    }
}
