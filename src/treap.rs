use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::node::{self, Link, Node};
use crate::util::HasZero;

/// 暗黙キーTreap. 任意の位置への挿入/削除, 分割/結合が高速な列
///
/// 位置は符号付き整数で受け取り, 範囲外の位置に対する操作は何もしない
/// (`find`は0を返す).
pub struct Treap<T, R = SmallRng> {
    root: Link<T>,
    rng: R,
}

impl<T> Treap<T> {
    /// 空のTreapを作る. 優先度はOSの乱数で初期化した`SmallRng`から生成する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// 空のTreapを作る. 優先度はシード`seed`の`SmallRng`から生成する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    /// `values`をこの順で並べたTreapを作る
    ///
    /// # Time complexity
    ///
    /// - *O*(*N* log *N*) (期待値)
    #[must_use]
    pub fn from_values(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut t = Self::new();
        t.push_back(values.iter().cloned());
        t
    }
}

impl<T, R: Rng + SeedableRng> Treap<T, R> {
    /// 優先度の生成に`rng`を使う空のTreapを作る
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { root: None, rng }
    }

    fn leaf(&mut self, value: T) -> Box<Node<T>> {
        Node::leaf(value, self.rng.random())
    }

    /// 値の列から, その順に並んだ部分木を作る
    fn chain(&mut self, values: impl IntoIterator<Item = T>) -> Link<T> {
        let mut chain = None;
        for value in values {
            let leaf = self.leaf(value);
            chain = node::merge(chain, Some(leaf));
        }
        chain
    }

    /// `self`の後ろに`rhs`を繋げた列を作る
    ///
    /// 結果は`self`の乱数生成器を引き継ぐ.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    #[must_use]
    pub fn merge(self, rhs: Self) -> Self {
        Self {
            root: node::merge(self.root, rhs.root),
            rng: self.rng,
        }
    }

    /// 列を`0..=index`番目とそれ以降の2つに分ける
    ///
    /// - `index < 0`なら左側が空になる
    /// - `index >= self.size()`なら右側が空になる
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    #[must_use]
    pub fn split(self, index: isize) -> (Self, Self) {
        let Self { root, mut rng } = self;
        let (l, r) = node::split(root, index);
        let right_rng = R::from_rng(&mut rng);
        (
            Self { root: l, rng },
            Self {
                root: r,
                rng: right_rng,
            },
        )
    }

    /// 値を順番を保ったまま先頭に追加する
    ///
    /// # Time complexity
    ///
    /// - *O*(*K* log *K* + log *N*) (期待値, *K*は追加する値の数)
    pub fn push_front(&mut self, values: impl IntoIterator<Item = T>) {
        let chain = self.chain(values);
        self.root = node::merge(chain, self.root.take());
    }

    /// 値を順番を保ったまま末尾に追加する
    ///
    /// # Time complexity
    ///
    /// - *O*(*K* log *K* + log *N*) (期待値, *K*は追加する値の数)
    pub fn push_back(&mut self, values: impl IntoIterator<Item = T>) {
        let chain = self.chain(values);
        self.root = node::merge(self.root.take(), chain);
    }

    /// `index`番目に値を挿入する
    ///
    /// - `index <= 0`なら先頭に追加する
    /// - `index >= self.size() - 1`なら末尾に追加する
    ///
    /// 後者のため, 最後の要素の直前には挿入できない.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    pub fn insert(&mut self, index: isize, value: T) {
        let leaf = self.leaf(value);
        if self.root.is_none() {
            self.root = Some(leaf);
            return;
        }
        if index <= 0 {
            self.root = node::merge(Some(leaf), self.root.take());
        } else if index >= self.size() as isize - 1 {
            self.root = node::merge(self.root.take(), Some(leaf));
        } else {
            let (l, r) = node::split(self.root.take(), index - 1);
            self.root = node::merge(node::merge(l, Some(leaf)), r);
        }
    }

    /// `left..=right`番目の値を全て削除する
    ///
    /// 区間が空, または列と重ならない場合は何もしない.
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    pub fn cut(&mut self, left: isize, right: isize) {
        if self.root.is_none() || left > right || right < 0 || left >= self.size() as isize {
            log::trace!(
                "cut {left}..={right} ignored on a sequence of length {}",
                self.size()
            );
            return;
        }
        let left = left.max(0);
        let (l, rest) = node::split(self.root.take(), left - 1);
        let (_, r) = node::split(rest, right - left);
        self.root = node::merge(l, r);
    }

    /// `index`番目の値を削除する. 範囲外なら何もしない
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    pub fn delete(&mut self, index: isize) {
        if index < 0 || index >= self.size() as isize {
            log::trace!(
                "delete {index} ignored on a sequence of length {}",
                self.size()
            );
            return;
        }
        self.cut(index, index);
    }
}

impl<T, R> Treap<T, R> {
    /// 列の長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn size(&self) -> usize {
        node::size(&self.root)
    }

    /// 列が空かどうか判定する
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// `index`番目の値への参照を返す. 範囲外なら`None`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    #[must_use]
    pub fn get(&self, mut index: usize) -> Option<&T> {
        use std::cmp::Ordering::*;
        let mut node = self.root.as_deref()?;
        if index >= node.size {
            return None;
        }
        loop {
            let lsize = node::size(&node.left);
            match index.cmp(&lsize) {
                Less => node = node.left.as_deref()?,
                Equal => return Some(&node.value),
                Greater => {
                    index -= lsize + 1;
                    node = node.right.as_deref()?;
                }
            }
        }
    }

    /// `index`番目の値を返す. 範囲外なら0に相当する値を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*) (期待値)
    #[must_use]
    pub fn find(&self, index: isize) -> T
    where
        T: Clone + HasZero,
    {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.get(index))
            .cloned()
            .unwrap_or_else(T::zero)
    }

    /// 列の値を全て並べた`Vec`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*N*)
    #[must_use]
    pub fn export(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.size());
        node::export(&self.root, &mut values);
        values
    }

    /// 先頭から順に値を返すイテレータを返す
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: vec![],
            len: self.size(),
        };
        iter.descend(&self.root);
        iter
    }
}

/// [`Treap::iter`]が返すイテレータ
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    fn descend(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.len -= 1;
        self.descend(&node.right);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T, R> IntoIterator for &'a Treap<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Default for Treap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, R: Clone> Clone for Treap<T, R> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T> FromIterator<T> for Treap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::new();
        t.push_back(iter);
        t
    }
}

impl<T, R: Rng + SeedableRng> Extend<T> for Treap<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.push_back(iter);
    }
}

impl<T: std::fmt::Debug, R> std::fmt::Debug for Treap<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
