/// Sorts `arr` ascending in place and returns how many swaps were made.
///
/// Each pass picks the first occurrence of the smallest remaining value and
/// swaps it into position, so at most `n - 1` swaps happen. Equal elements
/// may change their relative order.
pub fn selection_sort<T>(arr: &mut [T]) -> usize
where
    T: Ord,
{
    let n = arr.len();
    if n < 2 {
        return 0;
    }
    let mut swaps = 0;
    for i in 0..(n - 1) {
        let mut min_index = i;
        for j in (i + 1)..n {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            log::trace!("swap {} <-> {}", i, min_index);
            arr.swap(min_index, i);
            swaps += 1;
        }
    }
    swaps
}
