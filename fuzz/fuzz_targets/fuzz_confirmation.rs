#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use pxf_cluster::ConfirmationGate;

fuzz_target!(|data: &[u8]| {
    let mut gate = ConfirmationGate::new(Cursor::new(data), std::io::sink());
    let first = gate.confirm("continue? ");
    assert_eq!(gate.confirm("again? "), first);
});
