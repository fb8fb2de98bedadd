mod selection;

pub use selection::selection_sort;
