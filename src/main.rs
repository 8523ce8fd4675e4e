fn main() {
    if let Err(err) = pitchplot::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
