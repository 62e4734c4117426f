#![no_main]

use geo_shape_editor::{parse_shape_store, write_shape_store};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Parser und Writer dürfen bei beliebigem Inhalt nicht panicken
    let store = parse_shape_store(content).recover();
    let written = write_shape_store(&store.regulars, &store.freehands);
    let _ = parse_shape_store(&written);
});
