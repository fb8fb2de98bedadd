/// Fixed-length run of integers. The length is set by [`Sequence::generate`]
/// and there is no way to grow or shrink it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Box<[i32]>,
}

impl Sequence {
    /// Element `k` of a sequence of length `len` is `10 - (k + len)`.
    ///
    /// Returns `None` when `k + len` would not fit in an `i32` for the last
    /// element, i.e. when `2 * len - 1 > i32::MAX`.
    pub fn generate(len: usize) -> Option<Self> {
        let base = i32::try_from(len.checked_mul(2)?).ok()?;
        let len_i32 = base / 2;
        let values = (0..len_i32).map(|k| 10 - (k + len_i32)).collect();
        Some(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn generate(len: usize) -> Sequence {
        Sequence::generate(len).unwrap()
    }

    #[test]
    fn five_values() {
        let seq = generate(5);
        assert_eq!(seq.as_slice(), [5, 4, 3, 2, 1]);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn empty() {
        let seq = generate(0);
        assert!(seq.is_empty());
    }

    #[test]
    fn single_value() {
        assert_eq!(generate(1).as_slice(), [9]);
    }

    #[test]
    fn longer_run_goes_negative() {
        let seq = generate(8);
        assert_eq!(seq.as_slice(), [2, 1, 0, -1, -2, -3, -4, -5]);
    }

    #[test]
    fn mutation_keeps_length() {
        let mut seq = generate(5);
        seq.as_mut_slice().swap(0, 4);
        assert_eq!(seq.as_slice(), [1, 4, 3, 2, 5]);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn len_past_i32_range() {
        assert_eq!(Sequence::generate(i32::MAX as usize), None);
        assert_eq!(Sequence::generate(usize::MAX), None);
    }
}
