mod barrel;

pub use barrel::{
    barrel_file_name, dir_export_line, file_export_line, generate_tree, GenerateReport,
};
