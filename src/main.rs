fn main() {
    blogwright::app::cli::run();
}
