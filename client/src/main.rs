fn main() {
    #[cfg(feature = "csr")]
    sketchpad::mount();
}
