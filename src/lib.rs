//! 暗黙キーTreap
//!
//! 部分木の大きさを暗黙のキーとして持つTreapで, 任意の位置への挿入/削除,
//! 列の分割/結合, 位置による値の取得を期待計算量 *O*(log *N*) で行える.
//! 平衡は各節点に割り当てた乱数の優先度によるヒープ条件だけで保たれる.
//!
//! 範囲外の位置を指定した操作はpanicせず何もしない. `find`は0に相当する値を返す.
//!
//! ```
//! use implicit_treap::Treap;
//!
//! let mut t = Treap::from_values(&[10, 20, 30]);
//! t.insert(1, 99);
//! assert_eq!(t.export(), [10, 99, 20, 30]);
//! t.cut(0, 1);
//! assert_eq!(t.export(), [20, 30]);
//! assert_eq!(t.find(5), 0);
//! ```

mod node;
pub mod treap;
pub mod util;

pub use treap::{Iter, Treap};
pub use util::HasZero;
