fn main() {
    modular_quickstart::app::cli::run();
}
