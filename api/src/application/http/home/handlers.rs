pub mod get_index;
