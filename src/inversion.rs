use crate::error::{Error, Result};
use crate::rankindex::RankIndex;
use tracing::{debug, trace, warn};

/// 各位置について「それより前にあるより大きい値の個数」の列`inversions`から, `1..=n`の順列を復元する.
///
/// 後ろから順に, 残っている値のうち`i - inversions[i] + 1`番目に小さいものを位置`i`に置く.
/// 位置`i`を決める時点で残っている値は`i + 1`個で, そのうち`inversions[i]`個はより前に置かれる大きい値になる.
///
/// # Errors
///
/// ある`i`で`inversions[i] > i`だった場合, 最初のそのような`i`について[`Error::InvalidInversion`]を返す.
///
/// # Time complexity
///
/// - *O*(*n* log *n*)
pub fn reconstruct(inversions: &[usize]) -> Result<Vec<usize>> {
    let n = inversions.len();
    debug!(len = n, "reconstructing permutation");
    if let Some((index, &value)) = inversions.iter().enumerate().find(|&(i, &c)| c > i) {
        warn!(index, value, "rejecting inversion sequence");
        return Err(Error::InvalidInversion { index, value });
    }

    let mut tree = RankIndex::new(n);
    let mut result = vec![0; n];
    for (position, &count) in inversions.iter().enumerate().rev() {
        let k = position - count + 1;
        let value = tree.kth(k)?;
        trace!(position, k, value, "placed");
        result[position] = value;
        tree.remove(value);
    }
    debug_assert_eq!(tree.count(), 0);
    debug!(len = n, "reconstructed permutation");
    Ok(result)
}

/// `1..=n`の順列`permutation`について, 各位置より前にあるより大きい値の個数を求める.
///
/// [`reconstruct`]の逆変換になっている.
///
/// # Errors
///
/// `permutation`が`1..=n`の順列でない場合, 範囲外または重複した最初の値について[`Error::NotAPermutation`]を返す.
///
/// # Time complexity
///
/// - *O*(*n* log *n*)
pub fn inversion_counts(permutation: &[usize]) -> Result<Vec<usize>> {
    let n = permutation.len();
    debug!(len = n, "counting inversions");
    let mut tree = RankIndex::new(n);
    let mut counts = Vec::with_capacity(n);
    for (index, &value) in permutation.iter().enumerate() {
        if value == 0 || value > n || !tree.is_available(value) {
            warn!(index, value, "rejecting permutation");
            return Err(Error::NotAPermutation { index, value });
        }
        // 残っている値のうち`value`より大きいもの
        let above = tree.count() - tree.rank(value) - 1;
        counts.push(n - value - above);
        tree.remove(value);
    }
    Ok(counts)
}
