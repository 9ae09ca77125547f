pub mod approve_ingredient;
