//! Treapの節点と, それを操作する`merge`/`split`

/// 部分木. `None`は空の部分木を表す
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) priority: u64,
    pub(crate) size: usize,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// 子を持たない節点を作る
    pub(crate) fn leaf(value: T, priority: u64) -> Box<Self> {
        Box::new(Self {
            value,
            priority,
            size: 1,
            left: None,
            right: None,
        })
    }

    /// 子の大きさからsizeを計算し直す
    ///
    /// 子を付け替えたら, その節点を返す前に必ず呼ぶ.
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub(crate) fn sync(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

/// 部分木の大きさを返す. 空なら0
#[inline]
pub(crate) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// `lhs`, `rhs`をこの順で繋げた部分木を作る
///
/// 優先度の大きい方の根が新しい根になる. 優先度が等しければ`rhs`の根が選ばれる.
///
/// # Time complexity
///
/// - *O*(log *N*) (期待値)
pub(crate) fn merge<T>(lhs: Link<T>, rhs: Link<T>) -> Link<T> {
    let (mut lhs, mut rhs) = match (lhs, rhs) {
        (None, v) | (v, None) => return v,
        (Some(l), Some(r)) => (l, r),
    };
    if lhs.priority > rhs.priority {
        lhs.right = merge(lhs.right.take(), Some(rhs));
        lhs.sync();
        Some(lhs)
    } else {
        rhs.left = merge(Some(lhs), rhs.left.take());
        rhs.sync();
        Some(rhs)
    }
}

/// 部分木を`0..=index`番目と残りの2つに分ける
///
/// - `index < 0`なら全て右側に入る
/// - `index >= size`なら全て左側に入る
///
/// # Time complexity
///
/// - *O*(log *N*) (期待値)
pub(crate) fn split<T>(link: Link<T>, index: isize) -> (Link<T>, Link<T>) {
    use std::cmp::Ordering::*;
    let Some(mut node) = link else {
        return (None, None);
    };
    if index < 0 {
        return (None, Some(node));
    }
    if index as usize >= node.size {
        return (Some(node), None);
    }
    let position = index - size(&node.left) as isize;
    match position.cmp(&0) {
        Less => {
            let (l, r) = split(node.left.take(), index);
            node.left = r;
            node.sync();
            (l, Some(node))
        }
        Greater => {
            let (l, r) = split(node.right.take(), position - 1);
            node.right = l;
            node.sync();
            (Some(node), r)
        }
        Equal => {
            let r = node.right.take();
            node.sync();
            (Some(node), r)
        }
    }
}

/// 部分木の値を通りがけ順に`out`の末尾へ追加する
pub(crate) fn export<T: Clone>(link: &Link<T>, out: &mut Vec<T>) {
    let Some(node) = link else {
        return;
    };
    export(&node.left, out);
    out.push(node.value.clone());
    export(&node.right, out);
}

/// 全ての節点でsizeとヒープ条件が成り立っているか検査し, 部分木の大きさを返す
#[cfg(test)]
pub(crate) fn validate<T>(link: &Link<T>) -> usize {
    let Some(node) = link else {
        return 0;
    };
    for child in [&node.left, &node.right].into_iter().flatten() {
        assert!(node.priority >= child.priority, "heap order is broken");
    }
    let size = 1 + validate(&node.left) + validate(&node.right);
    assert_eq!(node.size, size, "cached size is stale");
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(values: &[(i32, u64)]) -> Link<i32> {
        values
            .iter()
            .fold(None, |acc, &(v, p)| merge(acc, Some(Node::leaf(v, p))))
    }

    fn values(link: &Link<i32>) -> Vec<i32> {
        let mut out = vec![];
        export(link, &mut out);
        out
    }

    #[test]
    fn merge_keeps_order_and_heap() {
        let t = chain(&[(1, 5), (2, 9), (3, 1), (4, 7), (5, 3)]);
        assert_eq!(values(&t), [1, 2, 3, 4, 5]);
        assert_eq!(validate(&t), 5);
        // 優先度最大の節点が根になる
        assert_eq!(t.as_ref().map(|n| n.value), Some(2));
    }

    #[test]
    fn merge_tie_prefers_right() {
        let t = merge(Some(Node::leaf(1, 4)), Some(Node::leaf(2, 4)));
        assert_eq!(t.as_ref().map(|n| n.value), Some(2));
        assert_eq!(values(&t), [1, 2]);
    }

    #[test]
    fn merge_with_empty() {
        let t = merge(chain(&[(1, 1), (2, 2)]), None);
        assert_eq!(values(&t), [1, 2]);
        let t = merge(None, t);
        assert_eq!(values(&t), [1, 2]);
        assert!(merge::<i32>(None, None).is_none());
    }

    #[test]
    fn split_at_every_position() {
        let data = [(10, 3), (20, 8), (30, 1), (40, 6), (50, 2), (60, 9)];
        for index in -2..8 {
            let (l, r) = split(chain(&data), index);
            validate(&l);
            validate(&r);
            let cut = index.clamp(-1, 5) + 1;
            let expected: Vec<i32> = data.iter().map(|&(v, _)| v).collect();
            assert_eq!(values(&l), &expected[..cut as usize]);
            assert_eq!(values(&r), &expected[cut as usize..]);
        }
    }

    #[test]
    fn split_empty() {
        let (l, r) = split::<i32>(None, 0);
        assert!(l.is_none());
        assert!(r.is_none());
    }

    #[test]
    fn sync_counts_children() {
        let mut node = Node::leaf(0, 0);
        node.left = Some(Node::leaf(1, 0));
        node.right = chain(&[(2, 0), (3, 0)]);
        node.sync();
        assert_eq!(node.size, 4);
    }
}
