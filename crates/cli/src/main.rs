fn main() {
    if let Err(e) = flagscope_cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
