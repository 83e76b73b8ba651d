//! 転倒数列から順列を復元する.
//!
//! 順序統計クエリ(残っている値の個数, `k`番目に小さい値, 削除)を処理する[`RankIndex`]と,
//! それを使って *O*(*n* log *n*) で順列を復元する[`reconstruct`]からなる.
//!
//! ```
//! assert_eq!(invperm::reconstruct(&[0, 1, 1, 0, 3]), Ok(vec![4, 1, 3, 5, 2]));
//! ```

pub mod error;
pub mod inversion;
pub mod rankindex;

pub use error::{Error, Result};
pub use inversion::{inversion_counts, reconstruct};
pub use rankindex::RankIndex;
