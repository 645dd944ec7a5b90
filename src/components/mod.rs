pub mod button_counter;
