pub mod get_next_step;
