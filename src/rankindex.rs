use crate::error::{Error, Result};

/// `1..=n`の整数のうち「まだ使われていない」ものの集合を管理し, 順序統計クエリを処理するデータ構造
///
/// 葉の数を2冪に揃えた完全二分木を配列で持つ. 節点`i`の子は`2i`と`2i+1`で,
/// 値`v`は葉`size + v - 1`に対応する. 各節点は部分木内の残っている値の個数を持つ.
/// 値は一度削除すると戻らない.
#[derive(Clone)]
pub struct RankIndex(Box<[usize]>, usize, usize);

impl RankIndex {
    /// `1..=n`の全ての値が残っているRankIndexを構築する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    #[must_use]
    pub fn new(n: usize) -> Self {
        let size = n.next_power_of_two();
        let mut tree = vec![0; size * 2];
        tree[size..size + n].fill(1);
        for i in (1..size).rev() {
            tree[i] = tree[i * 2] + tree[i * 2 + 1];
        }
        Self(tree.into_boxed_slice(), size, n)
    }

    /// 値の範囲の大きさ`n`を返す. 残っている値の個数は[`RankIndex::count`]で得る.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.2
    }

    /// 値の範囲が空かどうか判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.2 == 0
    }

    /// 残っている値の個数を返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self) -> usize {
        self.0[1]
    }

    /// 値`value`が残っているか判定する.
    ///
    /// # Constraints
    ///
    /// - `1 <= value <= self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_available(&self, value: usize) -> bool {
        debug_assert!(1 <= value && value <= self.len());
        self.0[self.1 + value - 1] == 1
    }

    /// 残っている値のうち`k`番目(1-indexed)に小さいものを返す.
    ///
    /// `k`が`1..=self.count()`に含まれない場合はエラーを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn kth(&self, mut k: usize) -> Result<usize> {
        if k == 0 || k > self.count() {
            return Err(Error::KthOutOfRange {
                k,
                available: self.count(),
            });
        }
        let mut node = 1;
        while node < self.1 {
            let left = self.0[node * 2];
            if left >= k {
                node *= 2;
            } else {
                k -= left;
                node = node * 2 + 1;
            }
        }
        Ok(node - self.1 + 1)
    }

    /// 残っている値のうち`value`未満のものの個数を返す.
    ///
    /// # Constraints
    ///
    /// - `1 <= value <= self.len() + 1`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    #[must_use]
    pub fn rank(&self, value: usize) -> usize {
        debug_assert!(1 <= value && value <= self.len() + 1);
        if value > self.len() {
            return self.count();
        }
        let mut node = self.1 + value - 1;
        let mut res = 0;
        while node > 1 {
            if node & 1 == 1 {
                res += self.0[node - 1];
            }
            node >>= 1;
        }
        res
    }

    /// 値`value`を削除する. 既に削除されていた場合は何もしない.
    ///
    /// # Constraints
    ///
    /// - `1 <= value <= self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn remove(&mut self, value: usize) {
        assert!(1 <= value && value <= self.len());
        let mut node = self.1 + value - 1;
        self.0[node] = 0;
        while node > 1 {
            node >>= 1;
            self.0[node] = self.0[node * 2] + self.0[node * 2 + 1];
        }
    }

    /// [`RankIndex::remove`]と同じだが, `value`が範囲外ならエラーを返す.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *n*)
    pub fn try_remove(&mut self, value: usize) -> Result<()> {
        if value == 0 || value > self.len() {
            return Err(Error::ValueOutOfRange {
                value,
                len: self.len(),
            });
        }
        self.remove(value);
        Ok(())
    }

    /// 残っている値を昇順に列挙する.
    ///
    /// # Time complexity
    ///
    /// - *O*(*n*)
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (1..=self.len()).filter(|&v| self.is_available(v))
    }
}

impl std::fmt::Debug for RankIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Default for RankIndex {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() {
        let t = RankIndex::new(5);
        assert_eq!(t.len(), 5);
        assert_eq!(t.count(), 5);
        assert_eq!(t.0.len(), 16);
        // 6..=8は詰め物の葉
        assert_eq!(&t.0[8..], &[1, 1, 1, 1, 1, 0, 0, 0]);
        for i in 1..8 {
            assert_eq!(t.0[i], t.0[i * 2] + t.0[i * 2 + 1]);
        }
        assert_eq!((1..=5).map(|k| t.kth(k).unwrap()).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty() {
        let t = RankIndex::new(0);
        assert!(t.is_empty());
        assert_eq!(t.count(), 0);
        assert_eq!(t.kth(1), Err(Error::KthOutOfRange { k: 1, available: 0 }));
        assert_eq!(t.iter().count(), 0);
        assert_eq!(format!("{t:?}"), "{}");
    }

    #[test]
    fn single() {
        let mut t = RankIndex::new(1);
        assert_eq!(t.kth(1), Ok(1));
        assert_eq!(t.rank(1), 0);
        assert_eq!(t.rank(2), 1);
        t.remove(1);
        assert_eq!(t.count(), 0);
        assert!(!t.is_available(1));
    }

    #[test]
    fn remove_and_kth() {
        let mut t = RankIndex::new(8);
        t.remove(4);
        assert_eq!(t.count(), 7);
        assert_eq!(t.kth(3), Ok(3));
        assert_eq!(t.kth(4), Ok(5));
        t.remove(1);
        t.remove(8);
        assert_eq!(t.iter().collect::<Vec<_>>(), [2, 3, 5, 6, 7]);
        assert_eq!(t.kth(1), Ok(2));
        assert_eq!(t.kth(5), Ok(7));
        assert_eq!(t.kth(6), Err(Error::KthOutOfRange { k: 6, available: 5 }));
        assert_eq!(t.kth(0), Err(Error::KthOutOfRange { k: 0, available: 5 }));
        assert_eq!(format!("{t:?}"), "{2, 3, 5, 6, 7}");
    }

    #[test]
    fn remove_twice() {
        let mut t = RankIndex::new(6);
        t.remove(3);
        let before = t.clone();
        t.remove(3);
        assert_eq!(t.0, before.0);
        assert_eq!(t.count(), 5);
    }

    #[test]
    fn try_remove() {
        let mut t = RankIndex::new(3);
        assert_eq!(t.try_remove(0), Err(Error::ValueOutOfRange { value: 0, len: 3 }));
        assert_eq!(t.try_remove(4), Err(Error::ValueOutOfRange { value: 4, len: 3 }));
        assert_eq!(t.count(), 3);
        assert_eq!(t.try_remove(2), Ok(()));
        assert_eq!(t.iter().collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn rank() {
        let mut t = RankIndex::new(10);
        for v in [2, 5, 6, 9] {
            t.remove(v);
        }
        let avail: Vec<_> = t.iter().collect();
        assert_eq!(avail, [1, 3, 4, 7, 8, 10]);
        for v in 1..=11 {
            assert_eq!(t.rank(v), avail.iter().filter(|&&a| a < v).count());
        }
        for &v in &avail {
            assert_eq!(t.kth(t.rank(v) + 1), Ok(v));
        }
    }

    #[test]
    fn drain() {
        let n = 13;
        let mut t = RankIndex::new(n);
        for v in (1..=n).rev() {
            assert_eq!(t.kth(t.count()), Ok(v));
            t.remove(v);
        }
        assert_eq!(t.count(), 0);
        assert!(t.0.iter().all(|&c| c == 0));
    }
}
