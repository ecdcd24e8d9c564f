/// 「0」に相当する値が存在することを表すトレイト
///
/// `Treap::find`が範囲外の位置に対して返す値として使う.
pub trait HasZero {
    /// 0の値を返す
    fn zero() -> Self;
}

/// 数値型にHasZeroを実装するマクロ
macro_rules! impl_zero {
    ($($t: ty),*) => {$(
        impl HasZero for $t {
            fn zero() -> $t { 0 as $t }
        }
    )*};
}

impl_zero! { u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64 }

impl HasZero for bool {
    fn zero() -> bool {
        false
    }
}

impl HasZero for char {
    fn zero() -> char {
        '\0'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        assert_eq!(i32::zero(), 0);
        assert_eq!(u64::zero(), 0);
        assert_eq!(f64::zero(), 0.0);
        assert!(!bool::zero());
        assert_eq!(char::zero(), '\0');
    }
}
