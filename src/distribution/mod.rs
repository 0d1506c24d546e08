use rand::Rng;
use rand::distributions::Standard;


/// 用 Box-Muller 变换从标准正态分布 N(0, 1) 中抽取一个样本
///
/// 随机数生成器由调用方传入，整条初始化调用链共用同一个（可设种子的）生成器
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // u1 取 (0, 1]，避免 ln(0)
    let u1: f64 = 1.0 - rng.sample::<f64, _>(Standard);
    let u2: f64 = rng.sample(Standard);
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
