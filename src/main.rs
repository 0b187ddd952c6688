fn main() {
    kompose_rpmspec::app::cli::run();
}
