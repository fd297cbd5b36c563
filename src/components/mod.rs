pub mod cpu_view;
pub mod settings;
