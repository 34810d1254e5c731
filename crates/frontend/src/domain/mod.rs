pub mod a101_pregnant_women;
