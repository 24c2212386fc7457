pub mod bubble_sort;
pub mod bucket_sort;
pub mod comb_sort;
mod common;
pub mod counting_sort;
pub mod gnome_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;
pub mod shell_sort;
