use thiserror::Error;

/// 順列の復元と順序統計クエリで起きるエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `inversions[index]`が`index`を超えていた
    #[error("invalid inversion sequence: inversions[{index}] = {value} exceeds {index}")]
    InvalidInversion { index: usize, value: usize },

    /// `k`番目の要素を求めるクエリで`k`が`1..=available`に含まれなかった
    #[error("k-th query out of range: k = {k}, but only {available} values are available")]
    KthOutOfRange { k: usize, available: usize },

    /// 値が`1..=len`に含まれなかった
    #[error("value {value} out of range 1..={len}")]
    ValueOutOfRange { value: usize, len: usize },

    /// `permutation[index]`が範囲外か, 既に出現した値だった
    #[error("not a permutation: permutation[{index}] = {value}")]
    NotAPermutation { index: usize, value: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
