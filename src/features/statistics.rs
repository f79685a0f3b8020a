//! # 统计量计算
//!
//! 对一组数值计算均值、最大值、最小值和总体标准差（分母 N）。
//!
//! ## 依赖关系
//! - 被 `features/aggregator.rs` 使用
//! - 无外部模块依赖

/// 汇总统计量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    /// 总体标准差
    pub std_dev: f64,
}

impl Summary {
    /// 计算汇总统计量；空输入返回 None
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Summary {
            mean,
            max,
            min,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(Summary::compute(&[]).is_none());
    }

    #[test]
    fn test_two_values() {
        let s = Summary::compute(&[1.0, 2.0]).unwrap();
        assert!((s.mean - 1.5).abs() < 1e-12);
        assert!((s.max - 2.0).abs() < 1e-12);
        assert!((s.min - 1.0).abs() < 1e-12);
        assert!((s.std_dev - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_value() {
        let s = Summary::compute(&[3.25]).unwrap();
        assert_eq!(s.mean, 3.25);
        assert_eq!(s.max, 3.25);
        assert_eq!(s.min, 3.25);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        // 2, 4, 4, 4, 5, 5, 7, 9 -> 均值 5，总体标准差 2
        let s = Summary::compute(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_values() {
        let s = Summary::compute(&[-1.0, -3.0, 2.0]).unwrap();
        assert_eq!(s.max, 2.0);
        assert_eq!(s.min, -3.0);
    }
}
