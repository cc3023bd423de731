pub mod section_header;
pub mod table;
pub mod ui;
