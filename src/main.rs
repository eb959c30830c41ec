fn main() {
    if let Err(err) = spooldraft::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
