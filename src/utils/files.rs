use std::{
    fs::{self, File},
    io::Read,
    path::Path,
};

pub fn read_file(file_name: &str) -> std::io::Result<String> {
    let mut file = File::open(file_name)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/* Create the parent directories of a file path if they are missing */
pub fn create_directories_if_needed(file_path: &str) -> std::io::Result<()> {
    match Path::new(file_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

pub fn write_file(file_path: &str, contents: &str) -> std::io::Result<()> {
    create_directories_if_needed(file_path)?;
    fs::write(file_path, contents)
}
