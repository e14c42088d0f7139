fn main() {
    if let Err(e) = memoria::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
