pub mod month_picker;
