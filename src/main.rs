fn main() {
    std::process::exit(studio_copy_helper::cli::run());
}
