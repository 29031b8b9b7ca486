#![no_main]

use ironscan_scan_results::{decode_untranslated, encode_translated};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(untranslated) = decode_untranslated(data) else {
        return;
    };
    let kind = untranslated.active_kind();
    let translated = untranslated.translate();
    assert_eq!(translated.as_ref().map(|t| t.kind()), kind);

    if let Some(result) = translated {
        let _ = encode_translated(&result).expect("translated result must encode");
    }
});
