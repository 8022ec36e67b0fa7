fn main() {
    mdweave::app::cli::run();
}
