//! Generates foreign bindings for `securestore_core`.
//!
//! ```sh
//! cargo run -p uniffi-bindgen -- generate --library target/release/libsecurestore_core.dylib \
//!     --language swift --out-dir swift/Sources/SecureStore
//! ```

fn main() {
    uniffi::uniffi_bindgen_main();
}
