#![no_main]

use ironscan_scan_results::{decode_translated, encode_translated};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // 디코드에 성공한 결과는 다시 인코드/디코드할 수 있어야 한다
    if let Ok(result) = decode_translated(data) {
        let bytes = encode_translated(&result).expect("decoded result must encode");
        let again = decode_translated(&bytes).expect("encoded result must decode");
        assert_eq!(again.kind(), result.kind());
    }
});
