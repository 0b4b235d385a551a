use flagscope_api::FlagList;
use flagscope_core::flags::make_relative_paths_absolute;
use std::path::PathBuf;

pub fn run(base: PathBuf, flags: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let flags = make_relative_paths_absolute(&FlagList::from(flags), &base);
    for flag in &flags {
        println!("{}", flag);
    }
    Ok(())
}
